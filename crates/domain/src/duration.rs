//! # 残り期間の表記
//!
//! 「今日」から受講終了日までの期間を、ポーランド語の「N miesięcy i M dni」形式で表記する。
//!
//! 完全経過月数を先に取り、受講終了日をその月数だけ戻した日付までの残り日数を続ける。
//! 月部分と日部分が両方ある場合のみ接続詞 `i` でつなぐ。両方 0 の場合は空文字列になる。
//!
//! | 数 | 月 | 日 |
//! |----|----|----|
//! | 1 | `miesiąc` | `dzień` |
//! | 2〜4 | `miesiące` | `dni` |
//! | それ以外 | `miesięcy` | `dni` |

use chrono::NaiveDate;

use crate::calendar::{days_between, months_between, shift_months};

const CONNECTOR: &str = "i";

fn month_suffix(months: i64) -> &'static str {
    match months {
        1 => "miesiąc",
        2..=4 => "miesiące",
        _ => "miesięcy",
    }
}

fn day_suffix(days: i64) -> &'static str {
    match days {
        1 => "dzień",
        _ => "dni",
    }
}

/// `today` から `target` までの期間を人が読める形式で返す
pub fn humanize(today: NaiveDate, target: NaiveDate) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut remainder_end = target;

    let months_diff = months_between(today, target);
    if months_diff != 0 {
        parts.push(format!("{months_diff} {}", month_suffix(months_diff)));
        match shift_months(target, -months_diff) {
            Some(shifted) => remainder_end = shifted,
            // 暦の表現範囲外。月部分のみで打ち切る
            None => return parts.join(" "),
        }
    }

    let days_diff = days_between(today, remainder_end);
    if days_diff != 0 {
        if !parts.is_empty() {
            parts.push(CONNECTOR.to_string());
        }
        parts.push(format!("{days_diff} {}", day_suffix(days_diff)));
    }

    parts.join(" ")
}
