//! # UserRepository
//!
//! リマインダーの受信者となるユーザーの読み込みを担当するリポジトリ。

use accessmail_domain::user::User;

use super::snapshot::SnapshotFile;
use crate::error::InfraError;

/// ユーザーリポジトリトレイト
pub trait UserRepository: Send + Sync {
    /// 全ユーザーを取得する
    ///
    /// 返す順序が送信順になる。
    fn find_all(&self) -> Result<Vec<User>, InfraError>;
}

/// JSON スナップショット実装の UserRepository
#[derive(Debug, Clone)]
pub struct JsonUserRepository {
    snapshot: SnapshotFile,
}

impl JsonUserRepository {
    pub fn new(snapshot: SnapshotFile) -> Self {
        Self { snapshot }
    }
}

impl UserRepository for JsonUserRepository {
    fn find_all(&self) -> Result<Vec<User>, InfraError> {
        let document = self.snapshot.load()?;

        Ok(document
            .users
            .into_iter()
            .map(|record| User::new(record.name, record.email))
            .collect())
    }
}
