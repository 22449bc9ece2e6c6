//! # 通知
//!
//! メール通知に関するドメインモデルを定義する。
//!
//! - [`EmailMessage`]: 本文生成の出力。`NotificationSender`（infra）に渡される
//! - [`NotificationError`]: 送信の失敗。リマインダー実行はこのエラーで中断する

use thiserror::Error;

/// 通知送信エラー
#[derive(Debug, Error)]
pub enum NotificationError {
    /// メール送信に失敗
    #[error("メール送信に失敗: {0}")]
    SendFailed(String),
}

/// メールメッセージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    /// 送信先メールアドレス
    pub to:      String,
    /// 件名
    pub subject: String,
    /// プレーンテキスト本文
    pub body:    String,
}

impl EmailMessage {
    pub fn new(to: impl Into<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to:      to.into(),
            subject: subject.into(),
            body:    body.into(),
        }
    }
}
