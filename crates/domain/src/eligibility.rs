//! # リマインダー対象判定
//!
//! 「今日」と受講終了日から、その受講登録がリマインダーを送るべき時期にあるかを判定し、
//! ユーザーごとにリマインダーのトリガーとなる受講登録を 1 件選ぶ。
//!
//! ## 判定ルール
//!
//! 1. 完全経過月数が 3 か 1 なら対象
//! 2. そうでなければ、暦日数が 7 か 1 なら対象
//!
//! 暦日数は月差を引いた残りではなく、受講終了日までの全日数で数える。
//! そのため「2 か月と 7 日」のような日付は対象にならない。
//!
//! ## 重複の扱い
//!
//! 同じユーザーに対象の受講登録が複数ある場合は、入力順で最初のものをトリガーとし、
//! 以降は捨てる。

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::{
    calendar::{days_between, months_between},
    signup::Signup,
};

/// 受講終了日がリマインダー送信時期にあるかを判定する
pub fn is_eligible(today: NaiveDate, access_to: NaiveDate) -> bool {
    let months_diff = months_between(today, access_to);
    if months_diff == 3 || months_diff == 1 {
        return true;
    }

    let days_diff = days_between(today, access_to);
    days_diff == 7 || days_diff == 1
}

/// ユーザー名 → トリガー受講登録 の対応表
///
/// 1 回の実行ごとに受講登録のスライスから組み立て、そのスライスを借用する。
#[derive(Debug, Clone, Default)]
pub struct EligibleIndex<'a> {
    triggers: HashMap<&'a str, &'a Signup>,
}

impl<'a> EligibleIndex<'a> {
    /// 受講登録を入力順に走査し、ユーザーごとに最初の対象登録を記録する
    pub fn build(today: NaiveDate, signups: &'a [Signup]) -> Self {
        let mut triggers = HashMap::new();

        for signup in signups {
            if is_eligible(today, signup.access_to()) {
                triggers.entry(signup.user()).or_insert(signup);
            }
        }

        Self { triggers }
    }

    /// ユーザーのトリガー受講登録を返す
    pub fn trigger_for(&self, user: &str) -> Option<&'a Signup> {
        self.triggers.get(user).copied()
    }

    pub fn contains(&self, user: &str) -> bool {
        self.triggers.contains_key(user)
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.triggers.len()
    }
}
