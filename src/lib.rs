// src/lib.rs
//! den-config-store — encrypted single-file configuration store for WaykDen
//!
//! Features:
//! - SQLCipher container (`WaykDen.db`) holding eight fixed collections
//! - Tolerant per-field reads with declared defaults
//! - Atomic passphrase rotation via export-and-rename
//! - Best-effort plaintext recovery key sidecar (`WaykDen.key`)

pub mod aliases;
pub mod consts;
pub mod error;
pub mod keyfile;
pub mod record;
pub mod repository;
pub mod sections;
pub mod session;
pub mod store;

// Re-export everything users need at the crate root
pub use error::{Result, StoreError};
pub use record::{ConfigSection, Record, Value};
pub use repository::ConfigRepository;
pub use sections::{
    DenConfig, DenDockerConfig, DenImageConfig, DenLucidConfig, DenMongoConfig, DenPickyConfig,
    DenRouterConfig, DenServerConfig, DenTraefikConfig,
};
pub use session::Session;
pub use store::{EncryptedStore, WriteMode};
