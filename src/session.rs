// src/session.rs
//! Per-session passphrase state
//!
//! The original tooling mirrored the last-validated passphrase into a
//! process-wide `WAYK_DEN_CONFIG_KEY` environment variable. That ambient
//! global is replaced by this explicit session object: every operation that
//! validates or rotates a passphrase receives it and may update it, and a
//! repository constructed without a passphrase falls back to the session's
//! last-validated value.

use crate::aliases::ConfigKey;

#[derive(Default)]
pub struct Session {
    config_key: Option<ConfigKey>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last passphrase validated or installed in this session, if any.
    pub fn config_key(&self) -> Option<&str> {
        self.config_key.as_ref().map(|key| key.as_str())
    }

    pub fn set_config_key(&mut self, key: &str) {
        self.config_key = Some(ConfigKey::new(key.to_owned()));
    }

    pub fn clear_config_key(&mut self) {
        self.config_key = None;
    }
}
