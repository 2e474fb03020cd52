// src/keyfile.rs
//! Recovery key sidecar — best-effort, never fatal
//!
//! A plaintext `WaykDen.key` file next to the container holds a generated
//! fallback passphrase so the container can be reopened without user
//! interaction. Every filesystem failure here is downgraded to an empty
//! string; the sidecar must never take the caller down with it.

use std::fs;
use std::io;
use std::path::Path;

use rand::distr::Alphanumeric;
use rand::Rng;
use tracing::debug;

use crate::consts::{KEY_FILE_NAME, RECOVERY_KEY_LEN};

/// Returns the sidecar contents verbatim, generating and persisting a fresh
/// key on first use. Any failure yields `""`.
pub fn load_or_create(dir: &Path) -> String {
    match try_load_or_create(dir) {
        Ok(key) => key,
        Err(err) => {
            debug!(dir = %dir.display(), %err, "recovery key sidecar unavailable");
            String::new()
        }
    }
}

fn try_load_or_create(dir: &Path) -> io::Result<String> {
    let path = dir.join(KEY_FILE_NAME);
    if path.exists() {
        return fs::read_to_string(&path);
    }

    // The generator groups for readability; the separators are stripped
    // before the key is persisted.
    let key = generate_grouped(RECOVERY_KEY_LEN).replace('-', "");
    fs::write(&path, &key)?;
    Ok(key)
}

/// Alphanumeric key in blocks of five, e.g. `h7KpQ-9fQxZ-...`.
fn generate_grouped(len: usize) -> String {
    let mut rng = rand::rng();
    let mut out = String::with_capacity(len + len / 5);
    for i in 0..len {
        if i > 0 && i % 5 == 0 {
            out.push('-');
        }
        out.push(char::from(rng.sample(Alphanumeric)));
    }
    out
}
