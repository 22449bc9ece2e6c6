//! # 通知送信
//!
//! メール通知の送信を担当するインフラストラクチャモジュール。
//!
//! ## 設計方針
//!
//! - **trait による抽象化**: `NotificationSender` trait でメール送信を抽象化
//! - **2 つの実装**: SMTP（リレー経由の送信）、Noop（ドライラン・検証用）
//! - **環境変数切替**: `NOTIFICATION_BACKEND` でランタイム選択
//! - **同期送信**: 送信はブロッキングで完了を待つ。失敗は呼び出し元にそのまま返す

mod noop;
mod smtp;

use accessmail_domain::notification::{EmailMessage, NotificationError};
pub use noop::NoopNotificationSender;
pub use smtp::SmtpNotificationSender;

/// メール送信トレイト
pub trait NotificationSender: Send + Sync {
    /// メールを送信する
    fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError>;
}
