//! # Clock（日付プロバイダ）
//!
//! ユースケース層での `Local::now()` 直接呼び出しを置き換え、
//! テストや再実行で「今日」を固定できるようにするための抽象化。

use chrono::{Local, NaiveDate};

/// 「今日」の日付を提供するトレイト
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// ローカルタイムゾーンのシステム日付を返す実装
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// 固定日付を返す実装
///
/// テストのほか、`REMINDER_TODAY` を指定した再実行で使用する。
pub struct FixedClock {
    today: NaiveDate,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_はローカルの今日を返す() {
        let clock = SystemClock;
        let before = Local::now().date_naive();
        let result = clock.today();
        let after = Local::now().date_naive();

        assert!(result >= before);
        assert!(result <= after);
    }

    #[test]
    fn test_fixed_clock_は複数回呼んでも同じ日付を返す() {
        let fixed = NaiveDate::from_ymd_opt(2017, 10, 10).unwrap();
        let clock = FixedClock::new(fixed);

        assert_eq!(clock.today(), fixed);
        assert_eq!(clock.today(), fixed);
    }
}
