//! # SignupRepository
//!
//! 受講登録の読み込みを担当するリポジトリ。
//!
//! 行ごとの値の整合性は検証しない。受講期間が逆転した行もそのまま返し、
//! 他のユーザーの処理を妨げない。

use accessmail_domain::signup::Signup;

use super::snapshot::SnapshotFile;
use crate::error::InfraError;

/// 受講登録リポジトリトレイト
pub trait SignupRepository: Send + Sync {
    /// 全受講登録を取得する
    fn find_all(&self) -> Result<Vec<Signup>, InfraError>;
}

/// JSON スナップショット実装の SignupRepository
#[derive(Debug, Clone)]
pub struct JsonSignupRepository {
    snapshot: SnapshotFile,
}

impl JsonSignupRepository {
    pub fn new(snapshot: SnapshotFile) -> Self {
        Self { snapshot }
    }
}

impl SignupRepository for JsonSignupRepository {
    fn find_all(&self) -> Result<Vec<Signup>, InfraError> {
        let document = self.snapshot.load()?;

        Ok(document
            .signups
            .into_iter()
            .map(|record| {
                Signup::new(
                    record.user,
                    record.course,
                    record.access_from,
                    record.access_to,
                )
            })
            .collect())
    }
}
