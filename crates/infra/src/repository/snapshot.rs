//! JSON スナップショットファイル
//!
//! ```json
//! {
//!   "users":   [{ "name": "Jan", "email": "Jan@gmail.com" }],
//!   "signups": [{ "user": "Jan", "course": "Kurs Spring",
//!                 "access_from": "2017-08-10", "access_to": "2017-10-11" }]
//! }
//! ```
//!
//! 呼び出しごとにファイルを読み直す。配列の順序がそのまま入力順になる。

use std::{fs, path::PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::InfraError;

#[derive(Debug, Deserialize)]
pub(super) struct SnapshotDocument {
    #[serde(default)]
    pub users:   Vec<UserRecord>,
    #[serde(default)]
    pub signups: Vec<SignupRecord>,
}

#[derive(Debug, Deserialize)]
pub(super) struct UserRecord {
    pub name:  String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct SignupRecord {
    pub user:        String,
    pub course:      String,
    pub access_from: NaiveDate,
    pub access_to:   NaiveDate,
}

/// スナップショットファイルへのハンドル
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[tracing::instrument(skip_all, level = "debug", fields(path = %self.path.display()))]
    pub(super) fn load(&self) -> Result<SnapshotDocument, InfraError> {
        let raw = fs::read_to_string(&self.path)?;
        let document: SnapshotDocument = serde_json::from_str(&raw)?;

        tracing::debug!(
            users = document.users.len(),
            signups = document.signups.len(),
            "スナップショットを読み込みました"
        );

        Ok(document)
    }
}
