//! Noop 通知送信実装
//!
//! メールを実際に送信せず、ログ出力のみ行う。
//! ドライランや通知無効化時に使用する。

use accessmail_domain::notification::{EmailMessage, NotificationError};

use super::NotificationSender;

/// Noop 通知送信（ログ出力のみ）
#[derive(Debug, Clone)]
pub struct NoopNotificationSender;

impl NotificationSender for NoopNotificationSender {
    fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError> {
        tracing::info!(
            to = %email.to,
            subject = %email.subject,
            body = %email.body,
            "Noop: メール送信をスキップ"
        );
        Ok(())
    }
}
