//! # Reminder Job エラー定義
//!
//! 実行を中断させる外部協力者の失敗を集約する。
//! リトライや部分的な完了の記録は行わず、呼び出し元（`main`）に返す。

use accessmail_domain::notification::NotificationError;
use accessmail_infra::InfraError;
use thiserror::Error;

/// リマインダー実行中に発生するエラー
#[derive(Debug, Error)]
pub enum ReminderError {
    /// レコードストアの読み込みに失敗
    #[error("レコードストアエラー: {0}")]
    Store(#[from] InfraError),

    /// メール送信に失敗
    #[error("通知エラー: {0}")]
    Notification(#[from] NotificationError),
}
