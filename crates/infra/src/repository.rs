//! # リポジトリ実装
//!
//! ユーザーと受講登録の読み込みを担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **スナップショット読み込み**: 1 回の呼び出しで全件を返す。順序は呼び出し内で安定
//! - **読み取り専用**: リマインダー処理はレコードを更新しない
//! - **テスタビリティ**: トレイト経由でモック可能な設計

pub mod signup_repository;
mod snapshot;
pub mod user_repository;

pub use signup_repository::{JsonSignupRepository, SignupRepository};
pub use snapshot::SnapshotFile;
pub use user_repository::{JsonUserRepository, UserRepository};
