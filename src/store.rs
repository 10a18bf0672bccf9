// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{Connection, OptionalExtension, params};
use thiserror::Error;
use tracing::warn;

use crate::models::AppData;

/// Fixed key the whole document lives under; the table is an opaque blob
/// store with exactly one interesting row.
pub const STORAGE_KEY: &str = "cashbook-data";

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("dev.cashbook", "Cashbook", "cashbook"));

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("missing required field(s): {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

/// Strict parse used on import: both top-level collections must be present,
/// and malformed entries fail with serde's field-level message. The lenient
/// load path does not go through here.
pub fn parse_document(text: &str) -> Result<AppData, DocumentError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    let mut missing = Vec::new();
    for field in ["transactions", "categories"] {
        if value.get(field).is_none() {
            missing.push(field);
        }
    }
    if !missing.is_empty() {
        return Err(DocumentError::MissingFields(missing));
    }
    Ok(serde_json::from_value(value)?)
}

/// Single-document storage. `load` and `save` never fail the caller: load
/// falls back to the seed document, save logs and drops the write. The
/// in-memory copy may then diverge until the next successful save.
pub trait DocumentStore {
    fn load(&self) -> AppData;
    fn save(&self, data: &AppData);
}

pub fn db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("cashbook.sqlite"))
}

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open_default() -> Result<Self> {
        Self::open(&db_path()?)
    }

    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Open store at {}", path.display()))?;
        Self::from_connection(conn)
    }

    pub fn from_connection(conn: Connection) -> Result<Self> {
        init_schema(&conn)?;
        Ok(SqliteStore { conn })
    }

    fn read_blob(&self) -> Result<Option<String>> {
        let v: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM documents WHERE key=?1",
                params![STORAGE_KEY],
                |r| r.get(0),
            )
            .optional()?;
        Ok(v)
    }

    fn write_blob(&self, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO documents(key, value) VALUES(?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value=excluded.value",
            params![STORAGE_KEY, value],
        )?;
        Ok(())
    }
}

fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS documents(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );
    "#,
    )?;
    Ok(())
}

impl DocumentStore for SqliteStore {
    fn load(&self) -> AppData {
        match self.read_blob() {
            Ok(Some(text)) => match serde_json::from_str::<AppData>(&text) {
                Ok(data) => data,
                Err(e) => {
                    warn!(error = %e, "Stored document is malformed, using the seed document");
                    AppData::seed()
                }
            },
            Ok(None) => AppData::seed(),
            Err(e) => {
                warn!(error = %e, "Could not read the stored document, using the seed document");
                AppData::seed()
            }
        }
    }

    fn save(&self, data: &AppData) {
        let text = match serde_json::to_string(data) {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "Could not serialize the document, changes not persisted");
                return;
            }
        };
        if let Err(e) = self.write_blob(&text) {
            warn!(error = %e, "Could not persist the document, changes not persisted");
        }
    }
}
