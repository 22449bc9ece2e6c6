//! # ジョブのトレーシング基盤
//!
//! 1 回の起動で 1 回の実行を行うバッチジョブ向けに、subscriber の登録と
//! 実行全体を包むルートスパンを提供する。
//!
//! ルートスパン `job` は `job.name` と `job.run_id` を持つ。JSON 出力では
//! スパン一覧が各行に含まれるため、同じ実行のログを `job.run_id` で絞り込める:
//!
//! ```bash
//! jq 'select(.spans[0]["job.run_id"] == "…")' reminder.log
//! ```

/// `RUST_LOG` が未設定の場合のフィルタ
pub const DEFAULT_FILTER: &str = "info,accessmail=debug";

/// ログ出力形式
///
/// `LOG_FORMAT` の値（大文字小文字を区別しない）から [`str::parse`] で得る。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, strum::EnumString, strum::Display,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogFormat {
    /// 1 行 1 JSON（ログ基盤への取り込み向け）
    Json,
    /// 人間が読みやすい形式（手動実行向け）
    #[default]
    Pretty,
}

/// トレーシング初期化設定
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// ジョブ名（ルートスパンの `job.name`）
    pub job_name:       String,
    pub log_format:     LogFormat,
    /// `RUST_LOG` 未設定時に使うフィルタ
    pub default_filter: String,
    /// 実行ごとに採番する識別子（ルートスパンの `job.run_id`）
    #[cfg(feature = "observability")]
    pub run_id:         uuid::Uuid,
}

impl TracingConfig {
    pub fn new(job_name: impl Into<String>, log_format: LogFormat) -> Self {
        Self {
            job_name: job_name.into(),
            log_format,
            default_filter: DEFAULT_FILTER.to_string(),
            #[cfg(feature = "observability")]
            run_id: uuid::Uuid::new_v4(),
        }
    }

    pub fn with_default_filter(mut self, filter: impl Into<String>) -> Self {
        self.default_filter = filter.into();
        self
    }
}

/// 実行全体を包むルートスパンを作る
#[cfg(feature = "observability")]
pub fn job_span(config: &TracingConfig) -> tracing::Span {
    tracing::info_span!(
        "job",
        job.name = %config.job_name,
        job.run_id = %config.run_id,
    )
}

/// subscriber を登録し、ルートスパンに入った状態を返す
///
/// 戻り値を保持している間のログはすべて `job` スパンの配下に入る。
/// `tracing_error::ErrorLayer` も登録するため、インフラ層のエラーが保持する
/// `SpanTrace` には `job` からエラー発生箇所までの経路が記録される。
#[cfg(feature = "observability")]
pub fn init_tracing(config: &TracingConfig) -> tracing::span::EnteredSpan {
    use tracing_subscriber::{EnvFilter, Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    let fmt_layer = match config.log_format {
        // 実行単位の絞り込みに使うため、親スパンの一覧も出力する
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(false)
            .with_span_list(true)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .with_target(false)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .with(tracing_error::ErrorLayer::default())
        .init();

    job_span(config).entered()
}
