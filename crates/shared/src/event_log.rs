//! # ビジネスイベントログの構造化ヘルパー
//!
//! `jq` で効率的に調査できるよう、ログフィールドの命名規約と
//! ヘルパーマクロを提供する。
//!
//! ## ビジネスイベント
//!
//! [`log_business_event!`] マクロで出力する。`event.kind = "business_event"` マーカーが
//! 自動付与され、`jq 'select(.["event.kind"] == "business_event")'` でフィルタできる。
//!
//! ## フィールド命名規約
//!
//! ドット記法（`event.category`、`error.kind`）を使用。tracing の
//! `$($field:ident).+` パターンでサポートされ、JSON 出力でフラットなキーになる。

/// ビジネスイベントを構造化ログとして出力する。
///
/// `event.kind = "business_event"` マーカーを自動付与し、
/// `tracing::info!` レベルで出力する。
///
/// ## 必須フィールド（慣例）
///
/// - `event.category`: イベントカテゴリ（[`event::category`] の定数を使用）
/// - `event.action`: アクション名（[`event::action`] の定数を使用）
/// - `event.result`: 結果（[`event::result`] の定数を使用）
///
/// 呼び出し側のクレートは `tracing` に依存している必要がある。
#[macro_export]
macro_rules! log_business_event {
    ($($args:tt)*) => {
        ::tracing::info!(
            event.kind = "business_event",
            $($args)*
        )
    };
}

/// イベントフィールドの定数
pub mod event {
    /// イベントカテゴリ
    pub mod category {
        pub const REMINDER: &str = "reminder";
    }

    /// イベントアクション
    pub mod action {
        pub const REMINDER_SENT: &str = "reminder.sent";
        pub const REMINDER_FAILED: &str = "reminder.failed";
        pub const RUN_COMPLETED: &str = "reminder.run_completed";
    }

    /// エンティティ種別
    pub mod entity_type {
        pub const USER: &str = "user";
    }

    /// イベント結果
    pub mod result {
        pub const SUCCESS: &str = "success";
        pub const FAILURE: &str = "failure";
    }
}

/// エラーコンテキストフィールドの定数
pub mod error {
    /// エラーカテゴリ
    pub mod category {
        /// インフラストラクチャ（スナップショットファイル）
        pub const INFRASTRUCTURE: &str = "infrastructure";
        /// 外部サービス呼び出し（SMTP リレー）
        pub const EXTERNAL_SERVICE: &str = "external_service";
    }

    /// エラー種別
    pub mod kind {
        pub const RECORD_STORE: &str = "record_store";
        pub const MAIL_TRANSPORT: &str = "mail_transport";
    }
}

#[cfg(test)]
mod tests {
    use super::event;

    #[test]
    fn test_log_business_eventはドット記法のフィールドを受け付ける() {
        let subscriber = tracing_subscriber::fmt().with_test_writer().finish();

        tracing::subscriber::with_default(subscriber, || {
            crate::log_business_event!(
                event.category = event::category::REMINDER,
                event.action = event::action::REMINDER_SENT,
                event.entity_type = event::entity_type::USER,
                event.result = event::result::SUCCESS,
                reminder.recipient = "Jan@gmail.com",
                "リマインダー送信成功"
            );
        });
    }
}
