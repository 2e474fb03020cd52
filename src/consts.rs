// src/consts.rs
//! Shared constants — container layout and security parameters

/// File name of the encrypted container inside the configuration directory
pub const CONTAINER_FILE_NAME: &str = "WaykDen.db";

/// File name of the plaintext recovery key sidecar
pub const KEY_FILE_NAME: &str = "WaykDen.key";

/// Fixed record id — every collection holds exactly one record under this id
pub const RECORD_ID: i64 = 1;

/// Recommended KDF iterations for SQLCipher databases (2025+)
// ~0.1–0.2s on modern hardware — good default
pub const DB_KDF_ITERATIONS: u32 = 256_000;

/// Length of the generated recovery key, separators excluded
pub const RECOVERY_KEY_LEN: usize = 20;

pub const DEN_IMAGE_COLLECTION: &str = "DenImageConfig";
pub const DEN_MONGO_COLLECTION: &str = "DenMongoConfig";
pub const DEN_PICKY_COLLECTION: &str = "DenPickyConfig";
pub const DEN_LUCID_COLLECTION: &str = "DenLucidConfig";
pub const DEN_ROUTER_COLLECTION: &str = "DenRouterConfig";
pub const DEN_SERVER_COLLECTION: &str = "DenServerConfig";
pub const DEN_TRAEFIK_COLLECTION: &str = "DenTraefikConfig";
pub const DEN_DOCKER_COLLECTION: &str = "DenDockerConfig";

/// All eight collection names, in store order
pub const COLLECTIONS: [&str; 8] = [
    DEN_IMAGE_COLLECTION,
    DEN_MONGO_COLLECTION,
    DEN_PICKY_COLLECTION,
    DEN_LUCID_COLLECTION,
    DEN_ROUTER_COLLECTION,
    DEN_SERVER_COLLECTION,
    DEN_TRAEFIK_COLLECTION,
    DEN_DOCKER_COLLECTION,
];
