//! # ユースケース層
//!
//! - [`reminder`] - 受講期限リマインダーの一括送信

pub mod reminder;

pub use reminder::ReminderUseCaseImpl;
