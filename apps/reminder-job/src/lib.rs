//! # Reminder Job ライブラリ
//!
//! リマインダー送信ユースケースと設定を公開する。
//! 統合テストから内部モジュールへアクセスするために lib として切り出している。

pub mod config;
pub mod error;
pub mod usecase;
