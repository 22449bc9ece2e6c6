//! # 受講登録のグルーピング
//!
//! リマインダー対象ユーザーごとに、そのユーザーの**すべての**受講登録を入力順に集める。
//! 対象判定を満たさない登録も含める。本文の「他のコース」欄はこのグループから作る。
//!
//! 不変条件: キー集合は [`EligibleIndex`] のキー集合と一致し、
//! トリガー受講登録は必ず自身のグループに含まれる。

use std::collections::HashMap;

use crate::{eligibility::EligibleIndex, signup::Signup};

/// ユーザー名 → 受講登録（入力順）の対応表
#[derive(Debug, Clone, Default)]
pub struct GroupedSignups<'a> {
    groups: HashMap<&'a str, Vec<&'a Signup>>,
}

impl<'a> GroupedSignups<'a> {
    pub fn build(signups: &'a [Signup], index: &EligibleIndex<'a>) -> Self {
        let mut groups: HashMap<&'a str, Vec<&'a Signup>> = HashMap::new();

        for signup in signups.iter().filter(|s| index.contains(s.user())) {
            groups.entry(signup.user()).or_default().push(signup);
        }

        Self { groups }
    }

    /// ユーザーの受講登録グループを返す
    pub fn group_for(&self, user: &str) -> Option<&[&'a Signup]> {
        self.groups.get(user).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn signup(user: &str, course: &str, access_to: NaiveDate) -> Signup {
        Signup::new(user, course, date(2017, 8, 10), access_to)
    }

    fn today() -> NaiveDate {
        date(2017, 10, 10)
    }

    #[test]
    fn test_buildは対象外の兄弟登録もグループに含める() {
        let signups = vec![
            signup("Jan", "Kurs Spring", date(2017, 10, 11)),
            signup("Marian", "Java Podstawy", date(2017, 11, 10)),
            signup("Jan", "Android", date(2017, 12, 21)),
            signup("Jan", "Kotlin", date(2018, 6, 30)),
        ];
        let index = EligibleIndex::build(today(), &signups);

        let groups = GroupedSignups::build(&signups, &index);

        let courses: Vec<&str> = groups
            .group_for("Jan")
            .unwrap()
            .iter()
            .map(|s| s.course())
            .collect();
        assert_eq!(courses, vec!["Kurs Spring", "Android", "Kotlin"]);
        assert_eq!(groups.group_for("Marian").unwrap().len(), 1);
    }

    #[test]
    fn test_buildのキー集合はインデックスと一致する() {
        let signups = vec![
            signup("Jan", "Kurs Spring", date(2017, 10, 11)),
            signup("Kamil", "Android", date(2017, 12, 21)),
            signup("Marian", "Java Podstawy", date(2018, 1, 10)),
        ];
        let index = EligibleIndex::build(today(), &signups);

        let groups = GroupedSignups::build(&signups, &index);

        assert_eq!(groups.len(), index.len());
        assert!(groups.group_for("Jan").is_some());
        assert!(groups.group_for("Marian").is_some());
        assert!(groups.group_for("Kamil").is_none());
    }

    #[test]
    fn test_トリガーは自身のグループに含まれる() {
        let signups = vec![
            signup("Jan", "Android", date(2017, 12, 21)),
            signup("Jan", "Kurs Spring", date(2017, 10, 17)),
        ];
        let index = EligibleIndex::build(today(), &signups);

        let groups = GroupedSignups::build(&signups, &index);

        let trigger = index.trigger_for("Jan").unwrap();
        assert!(groups.group_for("Jan").unwrap().contains(&trigger));
    }

    #[test]
    fn test_空のインデックスからは空のグループができる() {
        let signups = vec![signup("Jan", "Android", date(2017, 12, 21))];
        let index = EligibleIndex::build(today(), &signups);

        let groups = GroupedSignups::build(&signups, &index);

        assert!(groups.is_empty());
    }
}
