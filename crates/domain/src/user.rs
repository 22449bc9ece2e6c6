//! # ユーザー
//!
//! リマインダーの受信者。`name` が受講登録との突き合わせキーになる。
//!
//! メールアドレスの妥当性はここでは検証しない。送信前にアドレス検証器
//! （infra の `AddressChecker`）が判定し、不正なアドレスのユーザーは送信対象から外れる。

/// ユーザーエンティティ
///
/// 1 回の実行中は不変のスナップショット。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    name:  String,
    email: String,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name:  name.into(),
            email: email.into(),
        }
    }

    /// ユーザー名（受講登録との突き合わせキー）
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}
