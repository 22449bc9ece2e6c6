//! # AccessMail インフラ層
//!
//! 外部システムとの接続・通信を担当するインフラストラクチャ層。
//!
//! ## 設計方針
//!
//! リマインダー処理が依存する外部協力者（レコードストア、メール送信、
//! アドレス検証）をトレイトで定義し、その具体的な実装を提供する。
//! すべての呼び出しは同期的な呼び出し・応答で完結する。
//!
//! ## 依存関係
//!
//! ```text
//! reminder-job → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`repository`] - JSON スナップショットからのユーザー・受講登録の読み込み
//! - [`notification`] - メール送信（SMTP / Noop）
//! - [`address`] - メールアドレスの妥当性判定
//! - [`error`] - インフラ層エラー定義
//! - `mock` - テスト用のインメモリ実装（`test-utils` feature）

pub mod address;
pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod notification;
pub mod repository;

pub use address::{AddressChecker, RegexAddressChecker};
pub use error::InfraError;
