//! # テスト用モック
//!
//! ユースケーステストで使用するインメモリ実装。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! accessmail-infra = { workspace = true, features = ["test-utils"] }
//! ```
//!
//! すべてのモックは `Clone` で内部状態を共有する。ユースケースに渡したあとも、
//! 手元のクローンから呼び出し記録を検証できる。

use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};

use accessmail_domain::{
    message::MessageComposer,
    notification::{EmailMessage, NotificationError},
    signup::Signup,
    user::User,
};
use chrono::NaiveDate;

use crate::{
    address::AddressChecker,
    error::InfraError,
    notification::NotificationSender,
    repository::{SignupRepository, UserRepository},
};

// ===== MockUserRepository =====

#[derive(Clone, Default)]
pub struct MockUserRepository {
    users: Arc<Mutex<Vec<User>>>,
    fail:  Arc<Mutex<bool>>,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_user(&self, user: User) {
        self.users.lock().unwrap().push(user);
    }

    /// 以降の `find_all` をエラーにする
    pub fn fail_on_read(&self) {
        *self.fail.lock().unwrap() = true;
    }
}

impl UserRepository for MockUserRepository {
    fn find_all(&self) -> Result<Vec<User>, InfraError> {
        if *self.fail.lock().unwrap() {
            return Err(InfraError::unexpected("ユーザーストアに接続できません"));
        }
        Ok(self.users.lock().unwrap().clone())
    }
}

// ===== MockSignupRepository =====

#[derive(Clone, Default)]
pub struct MockSignupRepository {
    signups: Arc<Mutex<Vec<Signup>>>,
}

impl MockSignupRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_signup(&self, signup: Signup) {
        self.signups.lock().unwrap().push(signup);
    }
}

impl SignupRepository for MockSignupRepository {
    fn find_all(&self) -> Result<Vec<Signup>, InfraError> {
        Ok(self.signups.lock().unwrap().clone())
    }
}

// ===== MockAddressChecker =====

/// 呼び出し回数を数えるアドレス検証
///
/// 既定ではすべてのアドレスを妥当と判定する。
#[derive(Clone, Default)]
pub struct MockAddressChecker {
    rejected: Arc<Mutex<HashSet<String>>>,
    calls:    Arc<Mutex<Vec<String>>>,
}

impl MockAddressChecker {
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定したアドレスを不正と判定させる
    pub fn reject(&self, address: impl Into<String>) {
        self.rejected.lock().unwrap().insert(address.into());
    }

    /// 判定を求められたアドレス（呼び出し順）
    pub fn checked_addresses(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl AddressChecker for MockAddressChecker {
    fn is_valid(&self, address: &str) -> bool {
        self.calls.lock().unwrap().push(address.to_string());
        !self.rejected.lock().unwrap().contains(address)
    }
}

// ===== MockNotificationSender =====

/// 送信したメールを記録する送信モック
#[derive(Clone, Default)]
pub struct MockNotificationSender {
    sent:        Arc<Mutex<Vec<EmailMessage>>>,
    failing_for: Arc<Mutex<HashSet<String>>>,
}

impl MockNotificationSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定した宛先への送信を失敗させる
    pub fn fail_for(&self, address: impl Into<String>) {
        self.failing_for.lock().unwrap().insert(address.into());
    }

    pub fn sent_emails(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

impl NotificationSender for MockNotificationSender {
    fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError> {
        if self.failing_for.lock().unwrap().contains(&email.to) {
            return Err(NotificationError::SendFailed(format!(
                "宛先が拒否されました: {}",
                email.to
            )));
        }
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

// ===== MockMessageComposer =====

/// `body` の呼び出し内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeCall {
    pub user:    User,
    pub trigger: Signup,
    pub group:   Vec<Signup>,
    pub today:   NaiveDate,
}

/// 固定の件名・本文を返し、呼び出しを記録する本文生成モック
#[derive(Clone, Default)]
pub struct MockMessageComposer {
    title_calls: Arc<Mutex<usize>>,
    body_calls:  Arc<Mutex<Vec<ComposeCall>>>,
}

impl MockMessageComposer {
    pub const TITLE: &'static str = "Title";
    pub const BODY: &'static str = "Message";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn title_calls(&self) -> usize {
        *self.title_calls.lock().unwrap()
    }

    pub fn body_calls(&self) -> Vec<ComposeCall> {
        self.body_calls.lock().unwrap().clone()
    }
}

impl MessageComposer for MockMessageComposer {
    fn title(&self) -> String {
        *self.title_calls.lock().unwrap() += 1;
        Self::TITLE.to_string()
    }

    fn body(&self, user: &User, trigger: &Signup, group: &[&Signup], today: NaiveDate) -> String {
        self.body_calls.lock().unwrap().push(ComposeCall {
            user: user.clone(),
            trigger: trigger.clone(),
            group: group.iter().copied().cloned().collect(),
            today,
        });
        Self::BODY.to_string()
    }
}
