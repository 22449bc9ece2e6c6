//! # メールアドレス検証
//!
//! 送信前にメールアドレスの形式を判定する。
//! 不正なアドレスのユーザーは送信対象から外れ、メール送信には到達しない。

use regex::Regex;

use crate::InfraError;

/// `local@domain.tld` 形式。空白と 2 つ目の `@` を許さない
const DEFAULT_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

const MAX_LENGTH: usize = 255;

/// メールアドレスの妥当性判定を担当するトレイト
///
/// 副作用のない述語であること。
pub trait AddressChecker: Send + Sync {
    fn is_valid(&self, address: &str) -> bool;
}

/// 正規表現によるアドレス判定の実装
#[derive(Debug, Clone)]
pub struct RegexAddressChecker {
    pattern: Regex,
}

impl RegexAddressChecker {
    /// 既定のパターンで作成する
    pub fn new() -> Result<Self, InfraError> {
        Self::with_pattern(DEFAULT_PATTERN)
    }

    /// 任意のパターンで作成する
    ///
    /// # Errors
    ///
    /// - パターンが正規表現として不正な場合
    pub fn with_pattern(pattern: &str) -> Result<Self, InfraError> {
        let pattern = Regex::new(pattern)
            .map_err(|e| InfraError::unexpected(format!("不正なアドレスパターン: {e}")))?;

        Ok(Self { pattern })
    }
}

impl AddressChecker for RegexAddressChecker {
    fn is_valid(&self, address: &str) -> bool {
        address.len() <= MAX_LENGTH && self.pattern.is_match(address)
    }
}
