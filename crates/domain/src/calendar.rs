//! # 暦計算
//!
//! 対象判定と期間表記で共有する、暦月・暦日の差分計算。
//!
//! 月差は「完全に経過した暦月数」を 0 方向に切り捨てて数える。
//! 1 月 31 日 → 2 月 28 日は日付が月末に届かないため 0 か月になる。

use chrono::{Datelike, Months, NaiveDate};

/// 日付を「月 × 32 + 日」の整数に詰める
///
/// 日は最大 31 なので、差を 32 で割ると日付部分の過不足を含めた
/// 完全経過月数が得られる。
fn packed_month_day(date: NaiveDate) -> i64 {
    let proleptic_month = i64::from(date.year()) * 12 + i64::from(date.month0());
    proleptic_month * 32 + i64::from(date.day())
}

/// `start` から `end` までの完全経過暦月数（0 方向に切り捨て）
pub fn months_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (packed_month_day(end) - packed_month_day(start)) / 32
}

/// `start` から `end` までの暦日数
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    end.signed_duration_since(start).num_days()
}

/// 日付を `months` か月ずらす（負数は過去方向）
///
/// 移動先の月に同じ日が存在しない場合は月末日に丸める。
/// 表現可能な範囲を超えた場合は `None` を返す。
pub fn shift_months(date: NaiveDate, months: i64) -> Option<NaiveDate> {
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);

    if months >= 0 {
        date.checked_add_months(magnitude)
    } else {
        date.checked_sub_months(magnitude)
    }
}
