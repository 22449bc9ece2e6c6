//! # 受講登録
//!
//! ユーザーが 1 つのコースにアクセスできる期間（`access_from`..`access_to`）。
//! 1 人のユーザーが複数の受講登録を持つことができる。

use chrono::NaiveDate;

/// 受講登録エンティティ
///
/// 等価性は全フィールドの構造的な比較で判定する。
/// 本文生成で「トリガーとなった登録以外」を列挙する際にこの等価性を使う。
///
/// 値の整合性（終了日が開始日より後か、コース名が空でないか）は検証しない。
/// 不整合な行も他の行と同じく対象判定に回り、1 件の異常で実行全体が止まることはない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signup {
    user:        String,
    course:      String,
    access_from: NaiveDate,
    access_to:   NaiveDate,
}

impl Signup {
    pub fn new(
        user: impl Into<String>,
        course: impl Into<String>,
        access_from: NaiveDate,
        access_to: NaiveDate,
    ) -> Self {
        Self {
            user: user.into(),
            course: course.into(),
            access_from,
            access_to,
        }
    }

    /// 受講者のユーザー名
    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn course(&self) -> &str {
        &self.course
    }

    pub fn access_from(&self) -> NaiveDate {
        self.access_from
    }

    pub fn access_to(&self) -> NaiveDate {
        self.access_to
    }
}
