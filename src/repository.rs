// src/repository.rs
//! The configuration repository — façade over the eight collections
//!
//! Binds a configuration directory and an optional passphrase, validates the
//! passphrase up front against an existing container, and orchestrates full
//! load/save of the aggregate `DenConfig`. The image collection serves as
//! the existence marker deciding between the first-time insert path and the
//! replace-on-update path.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::aliases::ConfigKey;
use crate::consts::{CONTAINER_FILE_NAME, DEN_IMAGE_COLLECTION};
use crate::error::{Result, StoreError};
use crate::keyfile;
use crate::record::ConfigSection;
use crate::sections::DenConfig;
use crate::session::Session;
use crate::store::{EncryptedStore, WriteMode};

pub struct ConfigRepository {
    dir: PathBuf,
    db_path: PathBuf,
    key: Option<ConfigKey>,
}

impl ConfigRepository {
    /// Binds a repository to `dir`, resolving the passphrase and validating
    /// it against the container if one already exists.
    ///
    /// An explicit non-empty `key` wins; otherwise the session's
    /// last-validated passphrase is reused. The resolved key is recorded in
    /// the session for later operations, whether it was validated against an
    /// existing container or will key a container created by this
    /// repository.
    pub fn new(dir: impl AsRef<Path>, key: Option<&str>, session: &mut Session) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        let db_path = dir.join(CONTAINER_FILE_NAME);

        let resolved: Option<String> = match key {
            Some(k) if !k.is_empty() => Some(k.to_owned()),
            _ => session.config_key().map(str::to_owned),
        };

        if db_path.exists() {
            EncryptedStore::open(&db_path, resolved.as_deref())?;
        }
        // Recorded even when the container does not exist yet: the key the
        // repository will create it under is the one later opens must reuse.
        if let Some(k) = resolved.as_deref() {
            session.set_config_key(k);
        }

        Ok(Self {
            dir,
            db_path,
            key: resolved.map(ConfigKey::new),
        })
    }

    fn key(&self) -> Option<&str> {
        self.key.as_ref().map(|key| key.as_str())
    }

    pub fn container_path(&self) -> &Path {
        &self.db_path
    }

    /// True once at least one collection has been stored.
    pub fn db_exists(&self) -> Result<bool> {
        if !self.db_path.exists() {
            return Ok(false);
        }
        EncryptedStore::open(&self.db_path, self.key())?.exists()
    }

    /// Persists all eight sections in one container open. Inserts on a fresh
    /// container, replaces on an initialized one.
    pub fn store_config(&self, config: &DenConfig) -> Result<()> {
        let mut store = EncryptedStore::open(&self.db_path, self.key())?;
        let mode = if store.has_collection(DEN_IMAGE_COLLECTION)? {
            WriteMode::Replace
        } else {
            WriteMode::Insert
        };
        debug!(?mode, "storing aggregate configuration");

        write_section(&mut store, &config.image, mode)?;
        write_section(&mut store, &config.mongo, mode)?;
        write_section(&mut store, &config.picky, mode)?;
        write_section(&mut store, &config.lucid, mode)?;
        write_section(&mut store, &config.router, mode)?;
        write_section(&mut store, &config.server, mode)?;
        write_section(&mut store, &config.traefik, mode)?;
        write_section(&mut store, &config.docker, mode)?;
        Ok(())
    }

    /// Reads all eight sections in one container open.
    pub fn get_config(&self) -> Result<DenConfig> {
        if !self.db_exists()? {
            return Err(StoreError::ConfigNotFound);
        }
        let store = EncryptedStore::open(&self.db_path, self.key())?;
        Ok(DenConfig {
            image: read_section(&store)?,
            mongo: read_section(&store)?,
            picky: read_section(&store)?,
            lucid: read_section(&store)?,
            router: read_section(&store)?,
            server: read_section(&store)?,
            traefik: read_section(&store)?,
            docker: read_section(&store)?,
        })
    }

    /// Encrypts a currently unencrypted container under `new_key`.
    pub fn add_config_key(&mut self, new_key: &str, session: &mut Session) -> Result<()> {
        EncryptedStore::rotate(&self.db_path, None, Some(new_key))?;
        self.key = Some(ConfigKey::new(new_key.to_owned()));
        session.set_config_key(new_key);
        Ok(())
    }

    /// Removes the encryption, leaving a plaintext container.
    pub fn remove_config_key(&mut self, current_key: &str, session: &mut Session) -> Result<()> {
        EncryptedStore::rotate(&self.db_path, Some(current_key), None)?;
        self.key = None;
        session.clear_config_key();
        Ok(())
    }

    /// Re-encrypts the container under `new_key`.
    pub fn change_config_key(
        &mut self,
        new_key: &str,
        current_key: &str,
        session: &mut Session,
    ) -> Result<()> {
        EncryptedStore::rotate(&self.db_path, Some(current_key), Some(new_key))?;
        self.key = Some(ConfigKey::new(new_key.to_owned()));
        session.set_config_key(new_key);
        Ok(())
    }

    /// Best-effort recovery key from the sidecar file; `""` on any failure.
    pub fn load_recovery_key(&self) -> String {
        keyfile::load_or_create(&self.dir)
    }
}

fn write_section<S: ConfigSection>(
    store: &mut EncryptedStore,
    section: &S,
    mode: WriteMode,
) -> Result<()> {
    store.write_record(S::COLLECTION, &section.to_record(), mode)
}

fn read_section<S: ConfigSection>(store: &EncryptedStore) -> Result<S> {
    Ok(S::from_record(&store.read_record(S::COLLECTION)?))
}
