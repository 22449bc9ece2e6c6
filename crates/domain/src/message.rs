//! # リマインダー本文の生成
//!
//! ユーザー・トリガー受講登録・受講登録グループから、ポーランド語のリマインダー本文を生成する。
//!
//! ## 本文の構成
//!
//! ```text
//! Cześć {ユーザー名},
//! za {残り期間} kończy Ci się dostęp do kursu, {コース名}. Wykorzystaj maksymalnie ten czas!
//! Dostęp do Twoich pozostałych kursów:     ← グループが 2 件以上の場合のみ
//! • {コース名} - {残り期間}
//! Pozdrawiamy
//! ```
//!
//! 件名は常に空文字列。

use chrono::NaiveDate;

use crate::{duration::humanize, signup::Signup, user::User};

const BULLET: char = '\u{2022}';
const OTHER_COURSES_HEADER: &str = "Dostęp do Twoich pozostałych kursów: ";
const FOOTER: &str = "Pozdrawiamy";

/// リマインダーの件名と本文を生成するトレイト
///
/// ユースケース層はこのトレイト越しに本文を生成する。
/// テストでは呼び出しを記録するモックに差し替える。
pub trait MessageComposer: Send + Sync {
    /// 件名を生成する
    fn title(&self) -> String;

    /// 本文を生成する
    ///
    /// # 引数
    ///
    /// - `trigger`: リマインダーのきっかけとなった受講登録
    /// - `group`: ユーザーの全受講登録（`trigger` を含む、入力順）
    fn body(&self, user: &User, trigger: &Signup, group: &[&Signup], today: NaiveDate) -> String;
}

/// ポーランド語のリマインダー本文を生成する実装
#[derive(Debug, Clone, Copy, Default)]
pub struct ReminderMessageComposer;

impl ReminderMessageComposer {
    fn header(user: &User) -> String {
        format!("Cześć {},\n", user.name())
    }

    fn expiry_line(trigger: &Signup, today: NaiveDate) -> String {
        format!(
            "za {} kończy Ci się dostęp do kursu, {}. Wykorzystaj maksymalnie ten czas!",
            humanize(today, trigger.access_to()),
            trigger.course()
        )
    }

    fn other_courses(trigger: &Signup, group: &[&Signup], today: NaiveDate) -> String {
        let lines: Vec<String> = group
            .iter()
            .filter(|signup| **signup != trigger)
            .map(|signup| {
                format!(
                    "{BULLET} {} - {}",
                    signup.course(),
                    humanize(today, signup.access_to())
                )
            })
            .collect();

        format!("\n{OTHER_COURSES_HEADER}\n{}", lines.join("\n"))
    }
}

impl MessageComposer for ReminderMessageComposer {
    fn title(&self) -> String {
        String::new()
    }

    fn body(&self, user: &User, trigger: &Signup, group: &[&Signup], today: NaiveDate) -> String {
        let mut body = Self::header(user);
        body.push_str(&Self::expiry_line(trigger, today));

        if group.len() > 1 {
            body.push_str(&Self::other_courses(trigger, group, today));
        }

        body.push('\n');
        body.push_str(FOOTER);
        body
    }
}
