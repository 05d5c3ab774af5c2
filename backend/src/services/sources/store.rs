//! SQLite persistence of sources.
//!
//! Each call opens its own connection on the configured database file, the
//! same way the request handlers run: one blocking unit of work per request.
//! The verifier is stored as its wire JSON, so only the active payload is kept.

use std::path::{Path, PathBuf};

use common::model::source::{SourceRecord, SourceSubmission};
use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

use super::error::SourceStoreError;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS sources (
        uid         TEXT PRIMARY KEY,
        project_id  TEXT NOT NULL,
        name        TEXT NOT NULL,
        source_type TEXT NOT NULL,
        is_disabled INTEGER NOT NULL,
        provider    TEXT NOT NULL,
        verifier    TEXT NOT NULL,
        mask_id     TEXT NOT NULL UNIQUE
    );
    CREATE INDEX IF NOT EXISTS sources_project ON sources (project_id);
";

#[derive(Debug, Clone)]
pub struct SourceStore {
    path: PathBuf,
}

/// A `sources` row before its text columns are parsed.
struct SourceRow {
    uid: String,
    name: String,
    source_type: String,
    is_disabled: bool,
    provider: String,
    verifier: String,
    mask_id: String,
}

impl SourceStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Creates the schema if needed.
    pub fn init(&self) -> Result<(), SourceStoreError> {
        self.connect().map(|_| ())
    }

    fn connect(&self) -> Result<Connection, SourceStoreError> {
        let conn = Connection::open(&self.path)?;
        conn.execute_batch(SCHEMA)?;
        Ok(conn)
    }

    pub fn insert(
        &self,
        project_id: &str,
        submission: &SourceSubmission,
    ) -> Result<SourceRecord, SourceStoreError> {
        let conn = self.connect()?;
        let uid = Uuid::new_v4().to_string();
        let mask_id = Uuid::new_v4().simple().to_string();

        conn.execute(
            "INSERT INTO sources (uid, project_id, name, source_type, is_disabled, provider, verifier, mask_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                &uid,
                project_id,
                &submission.name,
                submission.source_class.as_str(),
                submission.is_disabled,
                provider_column(submission),
                serde_json::to_string(&submission.verifier)?,
                &mask_id,
            ],
        )?;

        Self::fetch(&conn, project_id, &uid)
    }

    pub fn get(&self, project_id: &str, source_id: &str) -> Result<SourceRecord, SourceStoreError> {
        let conn = self.connect()?;
        Self::fetch(&conn, project_id, source_id)
    }

    pub fn update(
        &self,
        project_id: &str,
        source_id: &str,
        submission: &SourceSubmission,
    ) -> Result<SourceRecord, SourceStoreError> {
        let conn = self.connect()?;
        let changed = conn.execute(
            "UPDATE sources
             SET name = ?1, source_type = ?2, is_disabled = ?3, provider = ?4, verifier = ?5
             WHERE uid = ?6 AND project_id = ?7",
            params![
                &submission.name,
                submission.source_class.as_str(),
                submission.is_disabled,
                provider_column(submission),
                serde_json::to_string(&submission.verifier)?,
                source_id,
                project_id,
            ],
        )?;

        if changed == 0 {
            return Err(SourceStoreError::NotFound);
        }
        Self::fetch(&conn, project_id, source_id)
    }

    fn fetch(
        conn: &Connection,
        project_id: &str,
        source_id: &str,
    ) -> Result<SourceRecord, SourceStoreError> {
        let row = conn
            .query_row(
                "SELECT uid, name, source_type, is_disabled, provider, verifier, mask_id
                 FROM sources WHERE uid = ?1 AND project_id = ?2",
                params![source_id, project_id],
                |row| {
                    Ok(SourceRow {
                        uid: row.get(0)?,
                        name: row.get(1)?,
                        source_type: row.get(2)?,
                        is_disabled: row.get(3)?,
                        provider: row.get(4)?,
                        verifier: row.get(5)?,
                        mask_id: row.get(6)?,
                    })
                },
            )
            .optional()?
            .ok_or(SourceStoreError::NotFound)?;

        Ok(SourceRecord {
            uid: row.uid,
            name: row.name,
            source_class: row.source_type.parse()?,
            is_disabled: row.is_disabled,
            provider: match row.provider.as_str() {
                "" => None,
                provider => Some(provider.parse()?),
            },
            verifier: serde_json::from_str(&row.verifier)?,
            mask_id: row.mask_id,
        })
    }
}

fn provider_column(submission: &SourceSubmission) -> &'static str {
    submission.provider.map(|p| p.as_str()).unwrap_or("")
}
