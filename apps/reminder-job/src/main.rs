//! # AccessMail リマインダージョブ
//!
//! コース受講期限が近いユーザーにリマインダーメールを送るバッチジョブ。
//! 1 回の起動で 1 回分の送信を行い、終了する。定期実行は外部スケジューラ（cron 等）に任せる。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `REMINDER_SNAPSHOT_PATH` | No | JSON スナップショットのパス（デフォルト: `data/snapshot.json`） |
//! | `REMINDER_TODAY` | No | 固定の「今日」（`YYYY-MM-DD`）。未設定ならシステム日付 |
//! | `NOTIFICATION_BACKEND` | No | `smtp` / `noop`（デフォルト: `noop`） |
//! | `SMTP_HOST` / `SMTP_PORT` | No | SMTP リレー（デフォルト: `localhost:1025`） |
//! | `NOTIFICATION_FROM_ADDRESS` | No | 送信元アドレス |
//! | `LOG_FORMAT` | No | `json` / `pretty`（デフォルト: `pretty`） |
//! | `RUST_LOG` | No | ログフィルタ（デフォルト: `info,accessmail=debug`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # ドライラン（送信せずログ出力のみ）
//! cargo run -p accessmail-reminder-job -- --dry-run
//!
//! # 日付を固定して再実行
//! NOTIFICATION_BACKEND=smtp cargo run -p accessmail-reminder-job -- --today 2017-10-10
//! ```

use std::path::PathBuf;

use accessmail_domain::{
    clock::{Clock, FixedClock, SystemClock},
    message::ReminderMessageComposer,
    notification::{EmailMessage, NotificationError},
};
use accessmail_infra::{
    RegexAddressChecker,
    notification::{NoopNotificationSender, NotificationSender, SmtpNotificationSender},
    repository::{JsonSignupRepository, JsonUserRepository, SnapshotFile},
};
use accessmail_reminder_job::{
    config::{NotificationBackend, NotificationConfig, ReminderConfig},
    usecase::ReminderUseCaseImpl,
};
use accessmail_shared::observability::{TracingConfig, init_tracing};
use anyhow::Context as _;
use chrono::NaiveDate;
use clap::Parser;

#[derive(Parser)]
#[command(name = "accessmail-reminder")]
#[command(about = "Sends course access expiry reminders", long_about = None)]
struct Cli {
    /// JSON snapshot path (overrides REMINDER_SNAPSHOT_PATH)
    #[arg(long)]
    snapshot: Option<PathBuf>,
    /// Fixed "today" as YYYY-MM-DD (overrides REMINDER_TODAY)
    #[arg(long)]
    today:    Option<NaiveDate>,
    /// Log messages instead of sending them
    #[arg(long)]
    dry_run:  bool,
}

/// 設定で選ばれた日付プロバイダ
enum JobClock {
    System(SystemClock),
    Fixed(FixedClock),
}

impl Clock for JobClock {
    fn today(&self) -> NaiveDate {
        match self {
            Self::System(clock) => clock.today(),
            Self::Fixed(clock) => clock.today(),
        }
    }
}

/// 設定で選ばれた送信バックエンド
enum JobSender {
    Smtp(SmtpNotificationSender),
    Noop(NoopNotificationSender),
}

impl JobSender {
    fn from_config(config: &NotificationConfig) -> Self {
        match config.backend {
            NotificationBackend::Smtp => Self::Smtp(SmtpNotificationSender::new(
                &config.smtp_host,
                config.smtp_port,
                config.from_address.clone(),
            )),
            NotificationBackend::Noop => Self::Noop(NoopNotificationSender),
        }
    }
}

impl NotificationSender for JobSender {
    fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError> {
        match self {
            Self::Smtp(sender) => sender.send_email(email),
            Self::Noop(sender) => sender.send_email(email),
        }
    }
}

fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = ReminderConfig::from_env().context("設定の読み込みに失敗しました")?;

    let tracing_config = TracingConfig::new("accessmail-reminder", config.log_format);
    let _job = init_tracing(&tracing_config);

    if let Some(snapshot) = cli.snapshot {
        config.snapshot_path = snapshot;
    }
    if let Some(today) = cli.today {
        config.today = Some(today);
    }
    if cli.dry_run {
        config.notification.backend = NotificationBackend::Noop;
    }

    tracing::info!(
        snapshot = %config.snapshot_path.display(),
        today = ?config.today,
        backend = %config.notification.backend,
        "リマインダージョブを開始します"
    );

    let snapshot = SnapshotFile::new(&config.snapshot_path);
    let clock = match config.today {
        Some(today) => JobClock::Fixed(FixedClock::new(today)),
        None => JobClock::System(SystemClock),
    };
    let address_checker =
        RegexAddressChecker::new().context("アドレス検証の初期化に失敗しました")?;

    let usecase = ReminderUseCaseImpl::new(
        JsonUserRepository::new(snapshot.clone()),
        JsonSignupRepository::new(snapshot),
        clock,
        address_checker,
        JobSender::from_config(&config.notification),
        ReminderMessageComposer,
    );

    usecase
        .run_once()
        .context("リマインダー送信に失敗しました")?;

    Ok(())
}
