//! # Reminder Job 設定
//!
//! 環境変数からリマインダージョブの設定を読み込む。
//! コマンドライン引数による上書きは `main` 側で行う。

use std::{env, path::PathBuf};

use accessmail_shared::observability::LogFormat;
use chrono::NaiveDate;
use thiserror::Error;

const DEFAULT_SNAPSHOT_PATH: &str = "data/snapshot.json";

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// 値の形式が不正
    #[error("{name} の値が不正です: {value:?}（{reason}）")]
    InvalidValue {
        name:   &'static str,
        value:  String,
        reason: String,
    },
}

/// メール送信バックエンド
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum NotificationBackend {
    /// SMTP リレー経由で送信
    Smtp,
    /// 送信しない（ログ出力のみ）
    Noop,
}

/// リマインダージョブの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderConfig {
    /// レコードストア（JSON スナップショット）のパス
    pub snapshot_path: PathBuf,
    /// 固定の「今日」。未設定ならシステム時計を使う
    pub today:         Option<NaiveDate>,
    /// 通知設定
    pub notification:  NotificationConfig,
    /// ログ出力形式
    pub log_format:    LogFormat,
}

/// 通知機能の設定
///
/// `NOTIFICATION_BACKEND` 環境変数で送信バックエンドを切り替える:
/// - `smtp`: Mailpit（開発）/ SMTP サーバー経由で送信
/// - `noop`: 送信しない（ログ出力のみ）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationConfig {
    pub backend:      NotificationBackend,
    /// SMTP ホスト（backend=smtp の場合に使用）
    pub smtp_host:    String,
    /// SMTP ポート（backend=smtp の場合に使用）
    pub smtp_port:    u16,
    /// 送信元メールアドレス
    pub from_address: String,
}

impl ReminderConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の参照関数から設定を読み込む
    ///
    /// `lookup` は変数名を受け取り、未設定なら `None` を返す。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let today = lookup("REMINDER_TODAY")
            .map(|value| parse_date("REMINDER_TODAY", value))
            .transpose()?;
        let log_format = match lookup("LOG_FORMAT") {
            Some(value) => value.parse::<LogFormat>().map_err(|_| ConfigError::InvalidValue {
                name:   "LOG_FORMAT",
                reason: "json または pretty を指定してください".to_string(),
                value,
            })?,
            None => LogFormat::default(),
        };

        Ok(Self {
            snapshot_path: lookup("REMINDER_SNAPSHOT_PATH")
                .unwrap_or_else(|| DEFAULT_SNAPSHOT_PATH.to_string())
                .into(),
            today,
            notification: NotificationConfig::from_lookup(&lookup)?,
            log_format,
        })
    }
}

impl NotificationConfig {
    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let backend = match lookup("NOTIFICATION_BACKEND") {
            Some(value) => value.parse::<NotificationBackend>().map_err(|_| ConfigError::InvalidValue {
                name:   "NOTIFICATION_BACKEND",
                reason: "smtp または noop を指定してください".to_string(),
                value,
            })?,
            None => NotificationBackend::Noop,
        };
        let smtp_port = match lookup("SMTP_PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidValue {
                    name:   "SMTP_PORT",
                    reason: e.to_string(),
                    value,
                })?,
            None => 1025,
        };

        Ok(Self {
            backend,
            smtp_host: lookup("SMTP_HOST").unwrap_or_else(|| "localhost".to_string()),
            smtp_port,
            from_address: lookup("NOTIFICATION_FROM_ADDRESS")
                .unwrap_or_else(|| "noreply@accessmail.example.com".to_string()),
        })
    }
}

/// `YYYY-MM-DD` 形式の日付をパースする
pub fn parse_date(name: &'static str, value: String) -> Result<NaiveDate, ConfigError> {
    NaiveDate::parse_from_str(&value, "%Y-%m-%d").map_err(|e| ConfigError::InvalidValue {
        name,
        reason: e.to_string(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_未設定ならデフォルト値を使う() {
        let config = ReminderConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(
            config,
            ReminderConfig {
                snapshot_path: PathBuf::from("data/snapshot.json"),
                today:         None,
                notification:  NotificationConfig {
                    backend:      NotificationBackend::Noop,
                    smtp_host:    "localhost".to_string(),
                    smtp_port:    1025,
                    from_address: "noreply@accessmail.example.com".to_string(),
                },
                log_format:    LogFormat::Pretty,
            }
        );
    }

    #[test]
    fn test_環境変数の値を読み込む() {
        let config = ReminderConfig::from_lookup(lookup_from(&[
            ("REMINDER_SNAPSHOT_PATH", "/var/lib/accessmail/snapshot.json"),
            ("REMINDER_TODAY", "2017-10-10"),
            ("NOTIFICATION_BACKEND", "smtp"),
            ("SMTP_HOST", "mail.internal"),
            ("SMTP_PORT", "2525"),
            ("NOTIFICATION_FROM_ADDRESS", "kursy@example.pl"),
            ("LOG_FORMAT", "json"),
        ]))
        .unwrap();

        assert_eq!(
            config.snapshot_path,
            PathBuf::from("/var/lib/accessmail/snapshot.json")
        );
        assert_eq!(config.today, NaiveDate::from_ymd_opt(2017, 10, 10));
        assert_eq!(config.notification.backend, NotificationBackend::Smtp);
        assert_eq!(config.notification.smtp_host, "mail.internal");
        assert_eq!(config.notification.smtp_port, 2525);
        assert_eq!(config.notification.from_address, "kursy@example.pl");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[rstest]
    #[case("REMINDER_TODAY", "10.10.2017", "日付形式が不正")]
    #[case("REMINDER_TODAY", "2017-02-30", "存在しない日付")]
    #[case("NOTIFICATION_BACKEND", "ses", "未対応のバックエンド")]
    #[case("SMTP_PORT", "70000", "ポート番号の範囲外")]
    #[case("SMTP_PORT", "abc", "数値ではないポート番号")]
    #[case("LOG_FORMAT", "xml", "未対応のログ形式")]
    fn test_不正な値はconfig_errorになる(
        #[case] name: &str,
        #[case] value: &str,
        #[case] _description: &str,
    ) {
        let result = ReminderConfig::from_lookup(lookup_from(&[(name, value)]));

        assert!(
            matches!(result, Err(ConfigError::InvalidValue { name: n, value: v, .. }) if n == name && v == value)
        );
    }

    #[test]
    fn test_バックエンド名は小文字で表示される() {
        assert_eq!(NotificationBackend::Smtp.to_string(), "smtp");
        assert_eq!(NotificationBackend::Noop.to_string(), "noop");
    }
}
