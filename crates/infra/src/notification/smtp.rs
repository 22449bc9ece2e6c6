//! SMTP 通知送信実装
//!
//! lettre の `SmtpTransport`（ブロッキング）を使用してメールを送信する。
//! 開発環境では Mailpit（ローカル SMTP サーバー）に接続する。

use accessmail_domain::notification::{EmailMessage, NotificationError};
use lettre::{
    SmtpTransport,
    Transport,
    message::{Message, header::ContentType},
};

use super::NotificationSender;

/// SMTP 通知送信
///
/// `lettre::SmtpTransport` をラップする。
pub struct SmtpNotificationSender {
    transport:    SmtpTransport,
    from_address: String,
}

impl SmtpNotificationSender {
    /// 新しい SMTP 送信インスタンスを作成
    ///
    /// # 引数
    ///
    /// - `host`: SMTP サーバーのホスト名（例: "localhost"）
    /// - `port`: SMTP サーバーのポート番号（例: 1025 for Mailpit）
    /// - `from_address`: 送信元メールアドレス
    pub fn new(host: &str, port: u16, from_address: String) -> Self {
        // builder_dangerous: TLS なしで接続（Mailpit 等のローカル SMTP 向け）
        let transport = SmtpTransport::builder_dangerous(host).port(port).build();

        Self {
            transport,
            from_address,
        }
    }

    fn build_message(&self, email: &EmailMessage) -> Result<Message, NotificationError> {
        Message::builder()
            .from(
                self.from_address
                    .parse()
                    .map_err(|e| NotificationError::SendFailed(format!("送信元アドレス不正: {e}")))?,
            )
            .to(email
                .to
                .parse()
                .map_err(|e| NotificationError::SendFailed(format!("宛先アドレス不正: {e}")))?)
            .subject(email.subject.as_str())
            .header(ContentType::TEXT_PLAIN)
            .body(email.body.clone())
            .map_err(|e| NotificationError::SendFailed(format!("メッセージ構築失敗: {e}")))
    }
}

impl NotificationSender for SmtpNotificationSender {
    fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError> {
        let message = self.build_message(email)?;

        self.transport
            .send(&message)
            .map_err(|e| NotificationError::SendFailed(format!("SMTP 送信失敗: {e}")))?;

        Ok(())
    }
}
