//! # リマインダー送信ユースケース
//!
//! 外部協力者からユーザー・受講登録・「今日」を取得し、対象判定とグルーピングを行い、
//! 妥当なアドレスを持つ対象ユーザーに 1 通ずつリマインダーを送る。
//!
//! ## 実行の状態遷移
//!
//! ```text
//! Idle → Loaded → Filtered → Dispatching → Done
//!          │          │
//!          └──────────┴──→ Done（受講登録が空 / 対象が空）
//! ```
//!
//! - 送信順はユーザー一覧の順序に従う（受講登録の順序ではない）
//! - 外部協力者が失敗した時点で実行を中断し、エラーを返す
//! - 実行をまたいだ重複排除は行わない。同じ期間内に再実行すると再送される

use accessmail_domain::{
    clock::Clock,
    eligibility::EligibleIndex,
    grouping::GroupedSignups,
    message::MessageComposer,
    notification::EmailMessage,
};
use accessmail_infra::{
    AddressChecker,
    InfraError,
    notification::NotificationSender,
    repository::{SignupRepository, UserRepository},
};
use accessmail_shared::{
    event_log::{error, event},
    log_business_event,
};

use crate::error::ReminderError;

/// 1 回の実行の状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
enum RunState {
    Idle,
    Loaded,
    Filtered,
    Dispatching,
    Done,
}

fn transition(from: RunState, to: RunState) -> RunState {
    tracing::debug!(%from, %to, "状態遷移");
    to
}

fn log_store_error(e: &InfraError) {
    tracing::error!(
        error.category = error::category::INFRASTRUCTURE,
        error.kind = error::kind::RECORD_STORE,
        "レコードストアの読み込みに失敗: {e}"
    );
}

/// リマインダー送信ユースケース実装
///
/// 外部協力者はすべてジェネリクスで受け取る。
pub struct ReminderUseCaseImpl<U, S, C, A, N, M> {
    user_repo:       U,
    signup_repo:     S,
    clock:           C,
    address_checker: A,
    sender:          N,
    composer:        M,
}

impl<U, S, C, A, N, M> ReminderUseCaseImpl<U, S, C, A, N, M>
where
    U: UserRepository,
    S: SignupRepository,
    C: Clock,
    A: AddressChecker,
    N: NotificationSender,
    M: MessageComposer,
{
    pub fn new(
        user_repo: U,
        signup_repo: S,
        clock: C,
        address_checker: A,
        sender: N,
        composer: M,
    ) -> Self {
        Self {
            user_repo,
            signup_repo,
            clock,
            address_checker,
            sender,
            composer,
        }
    }

    /// リマインダーを 1 回分送信する
    ///
    /// # エラー
    ///
    /// レコードストアの読み込み、またはメール送信に失敗した時点で中断して返す。
    /// それまでに送信済みのメールは取り消さない。
    #[tracing::instrument(skip_all, name = "reminder_run")]
    pub fn run_once(&self) -> Result<(), ReminderError> {
        let today = self.clock.today();
        let users = self.user_repo.find_all().inspect_err(log_store_error)?;
        let signups = self.signup_repo.find_all().inspect_err(log_store_error)?;
        let state = transition(RunState::Idle, RunState::Loaded);

        if signups.is_empty() {
            tracing::info!(%today, "受講登録が無いため終了します");
            transition(state, RunState::Done);
            return Ok(());
        }

        let index = EligibleIndex::build(today, &signups);
        if index.is_empty() {
            tracing::info!(%today, signups = signups.len(), "リマインダー対象がありません");
            transition(state, RunState::Done);
            return Ok(());
        }
        let groups = GroupedSignups::build(&signups, &index);
        let state = transition(state, RunState::Filtered);

        tracing::info!(
            %today,
            users = users.len(),
            signups = signups.len(),
            eligible = index.len(),
            "リマインダー対象を抽出しました"
        );

        let state = transition(state, RunState::Dispatching);
        let mut dispatched = 0usize;

        for user in &users {
            if !self.address_checker.is_valid(user.email()) {
                tracing::debug!(user = user.name(), "メールアドレスが不正なためスキップ");
                continue;
            }
            let Some(trigger) = index.trigger_for(user.name()) else {
                continue;
            };
            let group = groups.group_for(user.name()).unwrap_or_default();

            let email = EmailMessage::new(
                user.email(),
                self.composer.title(),
                self.composer.body(user, trigger, group, today),
            );

            if let Err(e) = self.sender.send_email(&email) {
                log_business_event!(
                    event.category = event::category::REMINDER,
                    event.action = event::action::REMINDER_FAILED,
                    event.entity_type = event::entity_type::USER,
                    event.result = event::result::FAILURE,
                    reminder.recipient = %email.to,
                    reminder.course = trigger.course(),
                    error.category = error::category::EXTERNAL_SERVICE,
                    error.kind = error::kind::MAIL_TRANSPORT,
                    error.message = %e,
                    "リマインダー送信失敗のため実行を中断します"
                );
                return Err(e.into());
            }

            log_business_event!(
                event.category = event::category::REMINDER,
                event.action = event::action::REMINDER_SENT,
                event.entity_type = event::entity_type::USER,
                event.result = event::result::SUCCESS,
                reminder.recipient = %email.to,
                reminder.course = trigger.course(),
                reminder.access_to = %trigger.access_to(),
                reminder.group_size = group.len(),
                "リマインダー送信成功"
            );
            dispatched += 1;
        }

        transition(state, RunState::Done);
        log_business_event!(
            event.category = event::category::REMINDER,
            event.action = event::action::RUN_COMPLETED,
            event.result = event::result::SUCCESS,
            reminder.eligible = index.len(),
            reminder.dispatched = dispatched,
            "リマインダー送信を完了しました"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use accessmail_domain::{clock::FixedClock, signup::Signup, user::User};
    use accessmail_infra::mock::{
        MockAddressChecker,
        MockMessageComposer,
        MockNotificationSender,
        MockSignupRepository,
        MockUserRepository,
    };
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;

    type Sut = ReminderUseCaseImpl<
        MockUserRepository,
        MockSignupRepository,
        FixedClock,
        MockAddressChecker,
        MockNotificationSender,
        MockMessageComposer,
    >;

    struct Setup {
        users:    MockUserRepository,
        signups:  MockSignupRepository,
        checker:  MockAddressChecker,
        sender:   MockNotificationSender,
        composer: MockMessageComposer,
        sut:      Sut,
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn signup(user: &str, course: &str, access_to: NaiveDate) -> Signup {
        Signup::new(user, course, date(2017, 8, 10), access_to)
    }

    /// Jan, Marian, Kamil の 3 ユーザーと「今日 = 2017-10-10」を用意する
    fn setup() -> Setup {
        let users = MockUserRepository::new();
        users.add_user(User::new("Jan", "Jan@gmail.com"));
        users.add_user(User::new("Marian", "Marian@gmail.com"));
        users.add_user(User::new("Kamil", "Kamil@onet.pl"));

        let signups = MockSignupRepository::new();
        let checker = MockAddressChecker::new();
        let sender = MockNotificationSender::new();
        let composer = MockMessageComposer::new();

        let sut = ReminderUseCaseImpl::new(
            users.clone(),
            signups.clone(),
            FixedClock::new(date(2017, 10, 10)),
            checker.clone(),
            sender.clone(),
            composer.clone(),
        );

        Setup {
            users,
            signups,
            checker,
            sender,
            composer,
            sut,
        }
    }

    #[test]
    fn test_対象の受講登録があればメールを送信する() {
        let s = setup();
        s.signups.add_signup(signup("Jan", "Kurs Spring", date(2017, 10, 11)));

        s.sut.run_once().unwrap();

        let sent = s.sender.sent_emails();
        assert_eq!(
            sent,
            vec![EmailMessage::new(
                "Jan@gmail.com",
                MockMessageComposer::TITLE,
                MockMessageComposer::BODY
            )]
        );
        assert_eq!(s.composer.title_calls(), 1);
    }

    #[test]
    fn test_送信順はユーザー一覧の順序に従う() {
        let s = setup();
        s.signups.add_signup(signup("Marian", "Java Podstawy", date(2017, 11, 10)));
        s.signups.add_signup(signup("Jan", "Kurs Spring", date(2017, 10, 11)));

        s.sut.run_once().unwrap();

        let recipients: Vec<String> = s.sender.sent_emails().into_iter().map(|e| e.to).collect();
        assert_eq!(recipients, vec!["Jan@gmail.com", "Marian@gmail.com"]);
    }

    #[test]
    fn test_受講登録が空なら他の協力者を呼ばない() {
        let s = setup();

        s.sut.run_once().unwrap();

        assert!(s.checker.checked_addresses().is_empty());
        assert_eq!(s.composer.title_calls(), 0);
        assert!(s.composer.body_calls().is_empty());
        assert!(s.sender.sent_emails().is_empty());
    }

    #[test]
    fn test_対象が空なら検証も本文生成も送信もしない() {
        let s = setup();
        s.signups.add_signup(signup("Jan", "Kurs Spring", date(2017, 12, 11)));
        s.signups.add_signup(signup("Marian", "Android", date(2018, 6, 30)));

        s.sut.run_once().unwrap();

        assert!(s.checker.checked_addresses().is_empty());
        assert_eq!(s.composer.title_calls(), 0);
        assert!(s.composer.body_calls().is_empty());
        assert!(s.sender.sent_emails().is_empty());
    }

    #[test]
    fn test_不正なアドレスのユーザーだけ送信しない() {
        let s = setup();
        s.checker.reject("Jan@gmail.com");
        s.signups.add_signup(signup("Jan", "Kurs Spring", date(2017, 10, 11)));
        s.signups.add_signup(signup("Marian", "Java Podstawy", date(2017, 10, 17)));

        s.sut.run_once().unwrap();

        let sent = s.sender.sent_emails();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "Marian@gmail.com");
    }

    #[test]
    fn test_複数の対象登録を持つユーザーには1通だけ送り最初の登録をトリガーにする() {
        let s = setup();
        let first = signup("Jan", "Kurs Spring", date(2017, 10, 11));
        let ineligible = signup("Jan", "Android", date(2017, 12, 21));
        let second = signup("Jan", "Java Podstawy", date(2017, 11, 10));
        s.signups.add_signup(first.clone());
        s.signups.add_signup(ineligible.clone());
        s.signups.add_signup(second.clone());
        s.signups.add_signup(signup("Marian", "Kotlin", date(2018, 6, 30)));

        s.sut.run_once().unwrap();

        assert_eq!(s.sender.sent_emails().len(), 1);
        let calls = s.composer.body_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].user, User::new("Jan", "Jan@gmail.com"));
        assert_eq!(calls[0].trigger, first);
        assert_eq!(calls[0].group, vec![first, ineligible, second]);
        assert_eq!(calls[0].today, date(2017, 10, 10));
    }

    #[test]
    fn test_ユーザーに紐づかない受講登録は送信されない() {
        let s = setup();
        s.signups.add_signup(signup("Zbigniew", "Kurs Spring", date(2017, 10, 11)));

        s.sut.run_once().unwrap();

        assert!(s.sender.sent_emails().is_empty());
        assert!(s.composer.body_calls().is_empty());
    }

    #[test]
    fn test_送信失敗で実行を中断し以降のユーザーには送らない() {
        let s = setup();
        s.sender.fail_for("Jan@gmail.com");
        s.signups.add_signup(signup("Jan", "Kurs Spring", date(2017, 10, 11)));
        s.signups.add_signup(signup("Marian", "Java Podstawy", date(2017, 10, 17)));

        let result = s.sut.run_once();

        assert!(matches!(result, Err(ReminderError::Notification(_))));
        assert!(s.sender.sent_emails().is_empty());
    }

    #[test]
    fn test_ストアの読み込み失敗はエラーとして返す() {
        let s = setup();
        s.users.fail_on_read();
        s.signups.add_signup(signup("Jan", "Kurs Spring", date(2017, 10, 11)));

        let result = s.sut.run_once();

        assert!(matches!(result, Err(ReminderError::Store(_))));
        assert!(s.sender.sent_emails().is_empty());
    }
}
