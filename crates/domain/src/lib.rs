//! # AccessMail ドメイン層
//!
//! コース受講期限リマインダーの中核となるドメインモデルとロジックを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 1 回の実行中は不変のスナップショット（[`User`](user::User),
//!   [`Signup`](signup::Signup)）
//! - **ドメインサービス**: 対象判定・グルーピング・期間表記・本文生成はすべて純粋関数
//! - **データ異常はポリシーで扱う**: 重複した対象登録やユーザーに紐づかない登録はエラーにしない
//!
//! ## 依存関係の方向
//!
//! ```text
//! reminder-job → infra → domain
//!        ↘                 ↑
//!          ────────────────
//! ```
//!
//! ドメイン層はインフラ層（スナップショットファイル、SMTP）には一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`calendar`] - 暦月・暦日の差分計算
//! - [`eligibility`] - リマインダー対象判定と対象インデックス
//! - [`grouping`] - 対象ユーザーの全受講登録のグルーピング
//! - [`duration`] - 残り期間のポーランド語表記
//! - [`message`] - リマインダー本文の生成
//! - [`clock`] - 「今日」の提供
//! - [`notification`] - メールメッセージと送信エラー
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use accessmail_domain::{eligibility::EligibleIndex, grouping::GroupedSignups, signup::Signup};
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2017, 10, 10).ok_or("invalid date")?;
//! let signups = vec![Signup::new(
//!     "Jan",
//!     "Kurs Spring",
//!     NaiveDate::from_ymd_opt(2017, 8, 10).ok_or("invalid date")?,
//!     NaiveDate::from_ymd_opt(2017, 10, 11).ok_or("invalid date")?,
//! )];
//!
//! let index = EligibleIndex::build(today, &signups);
//! let groups = GroupedSignups::build(&signups, &index);
//!
//! assert!(index.contains("Jan"));
//! assert_eq!(groups.group_for("Jan").map(<[_]>::len), Some(1));
//! # Ok(())
//! # }
//! ```

pub mod calendar;
pub mod clock;
pub mod duration;
pub mod eligibility;
pub mod grouping;
pub mod message;
pub mod notification;
pub mod signup;
pub mod user;
