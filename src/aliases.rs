// src/aliases.rs
//! Re-exports secure-gate's ergonomic secret types
//!
//! These are the canonical secret wrappers used throughout den-config-store.

pub use secure_gate::{dynamic_alias, SecureConversionsExt, SecureRandomExt};

// Dynamic secrets
dynamic_alias!(ConfigKey, String); // container passphrase (held by repository + session)
dynamic_alias!(RecoveryKey, String); // generated sidecar passphrase
