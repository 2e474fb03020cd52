// src/store.rs
//! The encrypted container — SQLCipher-backed, one file, eight collections
//!
//! Every public repository operation opens the container, works inside
//! exclusive transactions, and drops the connection before returning, so the
//! exclusive-lock window is bounded to one logical operation. Passphrase
//! rotation rewrites the whole container into a sibling temp file under the
//! new key and renames it over the original, making the rotation atomic.

use std::path::Path;

use rusqlite::types::ValueRef;
use rusqlite::{params, Connection, TransactionBehavior};
use tracing::debug;

use crate::consts::{DB_KDF_ITERATIONS, RECORD_ID};
use crate::error::{Result, StoreError};
use crate::record::{Record, Value};

/// Write disposition for the single record of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// First-time store; fails if the collection already holds a record.
    Insert,
    /// Update path; fails if the collection holds no record yet.
    Replace,
}

/// An open handle on the container. Dropping it releases the file.
pub struct EncryptedStore {
    conn: Connection,
}

impl EncryptedStore {
    /// Opens the container at `path`, creating it if absent.
    ///
    /// When the file already exists the key is validated by enumerating the
    /// schema; wrong key and corrupt file are deliberately indistinguishable
    /// and both surface as `InvalidPassword`.
    pub fn open(path: &Path, key: Option<&str>) -> Result<Self> {
        let existed = path.exists();
        let conn = Connection::open(path)?;

        if let Some(key) = key.filter(|k| !k.is_empty()) {
            conn.execute_batch(&format!("PRAGMA key = '{}';", key.replace('\'', "''")))?;
            conn.execute_batch(&format!("PRAGMA kdf_iter = {DB_KDF_ITERATIONS};"))?;
        }
        conn.execute_batch("PRAGMA locking_mode = exclusive;")?;

        if existed {
            let probe: rusqlite::Result<i64> =
                conn.query_row("SELECT count(*) FROM sqlite_master", [], |row| row.get(0));
            if probe.is_err() {
                return Err(StoreError::InvalidPassword);
            }
        }

        debug!(path = %path.display(), existed, "container opened");
        Ok(Self { conn })
    }

    /// Names of the collections currently present in the container.
    pub fn collection_names(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT name FROM sqlite_master
             WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
             ORDER BY name",
        )?;
        let names = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(names)
    }

    pub fn has_collection(&self, collection: &str) -> Result<bool> {
        let present = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1)",
            [collection],
            |row| row.get(0),
        )?;
        Ok(present)
    }

    /// True iff the open container holds at least one collection.
    pub fn exists(&self) -> Result<bool> {
        Ok(!self.collection_names()?.is_empty())
    }

    /// Fetches the single fixed-id record of `collection`.
    ///
    /// A present collection with no stored row yields an empty record, so
    /// every field decodes to its default. Only a missing collection fails.
    pub fn read_record(&self, collection: &str) -> Result<Record> {
        if !self.has_collection(collection)? {
            return Err(StoreError::MissingCollection(collection.to_owned()));
        }

        let mut record = Record::new();
        let mut stmt = self.conn.prepare(&format!(
            r#"SELECT field, value FROM "{collection}" WHERE record_id = ?1"#
        ))?;
        let mut rows = stmt.query([RECORD_ID])?;
        while let Some(row) = rows.next()? {
            let field: String = row.get(0)?;
            match row.get_ref(1)? {
                ValueRef::Text(text) => {
                    record.insert_text(&field, std::str::from_utf8(text).unwrap_or(""));
                }
                ValueRef::Blob(blob) => record.insert_bytes(&field, Some(blob)),
                // NULL or numeric rows are treated as an absent field
                _ => {}
            }
        }
        Ok(record)
    }

    /// Stores the single record of `collection` under the fixed id, replacing
    /// every declared field in one exclusive transaction.
    pub fn write_record(
        &mut self,
        collection: &str,
        record: &Record,
        mode: WriteMode,
    ) -> Result<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Exclusive)?;

        tx.execute_batch(&format!(
            r#"CREATE TABLE IF NOT EXISTS "{collection}" (
                record_id INTEGER NOT NULL,
                field     TEXT NOT NULL,
                value     BLOB,
                PRIMARY KEY (record_id, field)
            );"#
        ))?;

        let existing: i64 = tx.query_row(
            &format!(r#"SELECT count(*) FROM "{collection}" WHERE record_id = ?1"#),
            [RECORD_ID],
            |row| row.get(0),
        )?;
        match mode {
            WriteMode::Insert if existing > 0 => {
                return Err(StoreError::RecordExists(collection.to_owned()));
            }
            WriteMode::Replace if existing == 0 => {
                return Err(StoreError::MissingRecord(collection.to_owned()));
            }
            _ => {}
        }

        tx.execute(
            &format!(r#"DELETE FROM "{collection}" WHERE record_id = ?1"#),
            [RECORD_ID],
        )?;
        {
            let mut stmt = tx.prepare(&format!(
                r#"INSERT INTO "{collection}" (record_id, field, value) VALUES (?1, ?2, ?3)"#
            ))?;
            for (field, value) in record.iter() {
                match value {
                    Value::Text(text) => stmt.execute(params![RECORD_ID, field, text])?,
                    Value::Bytes(bytes) => stmt.execute(params![RECORD_ID, field, bytes])?,
                    Value::Null => {
                        stmt.execute(params![RECORD_ID, field, rusqlite::types::Null])?
                    }
                };
            }
        }
        tx.commit()?;

        debug!(collection, ?mode, fields = record.len(), "record written");
        Ok(())
    }

    /// Re-encrypts the whole container under `new_key` (`None` removes the
    /// encryption). Opens with `old_key` first, so a wrong old key fails as
    /// `InvalidPassword` before anything is touched.
    ///
    /// The rewrite goes through `sqlcipher_export` into a temp file in the
    /// container's directory, which is then renamed over the original, so an
    /// interrupted rotation leaves the old container intact.
    pub fn rotate(path: &Path, old_key: Option<&str>, new_key: Option<&str>) -> Result<()> {
        if !path.exists() {
            return Err(StoreError::ConfigNotFound);
        }
        let store = Self::open(path, old_key)?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let staged = tempfile::Builder::new()
            .prefix("WaykDen-rekey-")
            .suffix(".db")
            .tempfile_in(dir)?;
        let staged_path = staged.path().to_string_lossy().into_owned();

        let key = new_key.unwrap_or("");
        store.conn.execute(
            "ATTACH DATABASE ?1 AS rekeyed KEY ?2",
            params![staged_path, key],
        )?;
        if !key.is_empty() {
            store
                .conn
                .execute_batch(&format!("PRAGMA rekeyed.kdf_iter = {DB_KDF_ITERATIONS};"))?;
        }
        store
            .conn
            .query_row("SELECT sqlcipher_export('rekeyed')", [], |_| Ok(()))?;
        store.conn.execute_batch("DETACH DATABASE rekeyed;")?;
        drop(store);

        staged.persist(path).map_err(|err| StoreError::Io(err.error))?;
        debug!(path = %path.display(), encrypted = !key.is_empty(), "container rotated");
        Ok(())
    }
}
