// tests/store_tests.rs
use tempfile::tempdir;

use den_config_store::{EncryptedStore, Record, StoreError, WriteMode};

mod support;
use support::init_tracing;

#[test]
fn test_fresh_container_has_no_collections() {
    init_tracing();
    let dir = tempdir().unwrap();
    let store = EncryptedStore::open(&dir.path().join("WaykDen.db"), None).unwrap();
    assert!(!store.exists().unwrap());
    assert!(store.collection_names().unwrap().is_empty());
}

#[test]
fn test_write_then_read_record() {
    init_tracing();
    let dir = tempdir().unwrap();
    let path = dir.path().join("WaykDen.db");
    let mut store = EncryptedStore::open(&path, Some("secret")).unwrap();

    let mut record = Record::new();
    record.insert_text("Url", "mongodb://den-mongo");
    record.insert_text("Port", "27017");
    store
        .write_record("DenMongoConfig", &record, WriteMode::Insert)
        .unwrap();

    assert!(store.exists().unwrap());
    assert!(store.has_collection("DenMongoConfig").unwrap());

    let back = store.read_record("DenMongoConfig").unwrap();
    assert_eq!(back.text("Url"), "mongodb://den-mongo");
    assert_eq!(back.text("Port"), "27017");
}

#[test]
fn test_record_survives_reopen_with_key() {
    init_tracing();
    let dir = tempdir().unwrap();
    let path = dir.path().join("WaykDen.db");
    {
        let mut store = EncryptedStore::open(&path, Some("secret")).unwrap();
        let mut record = Record::new();
        record.insert_text("DockerClientUri", "unix:///var/run/docker.sock");
        store
            .write_record("DenDockerConfig", &record, WriteMode::Insert)
            .unwrap();
    }
    let store = EncryptedStore::open(&path, Some("secret")).unwrap();
    let back = store.read_record("DenDockerConfig").unwrap();
    assert_eq!(back.text("DockerClientUri"), "unix:///var/run/docker.sock");
}

#[test]
fn test_open_with_wrong_key_is_invalid_password() {
    init_tracing();
    let dir = tempdir().unwrap();
    let path = dir.path().join("WaykDen.db");
    {
        let mut store = EncryptedStore::open(&path, Some("secret")).unwrap();
        let mut record = Record::new();
        record.insert_text("Url", "mongodb://den-mongo");
        store
            .write_record("DenMongoConfig", &record, WriteMode::Insert)
            .unwrap();
    }

    let wrong = EncryptedStore::open(&path, Some("nope"));
    assert!(matches!(wrong, Err(StoreError::InvalidPassword)));

    // an empty passphrase against an encrypted container fails the same way
    let none = EncryptedStore::open(&path, None);
    assert!(matches!(none, Err(StoreError::InvalidPassword)));
}

#[test]
fn test_insert_twice_is_rejected() {
    init_tracing();
    let dir = tempdir().unwrap();
    let path = dir.path().join("WaykDen.db");
    let mut store = EncryptedStore::open(&path, None).unwrap();

    let mut record = Record::new();
    record.insert_text("Url", "a");
    store
        .write_record("DenMongoConfig", &record, WriteMode::Insert)
        .unwrap();

    let again = store.write_record("DenMongoConfig", &record, WriteMode::Insert);
    assert!(matches!(again, Err(StoreError::RecordExists(_))));
}

#[test]
fn test_replace_requires_prior_record() {
    init_tracing();
    let dir = tempdir().unwrap();
    let path = dir.path().join("WaykDen.db");
    let mut store = EncryptedStore::open(&path, None).unwrap();

    let mut record = Record::new();
    record.insert_text("Url", "a");
    let missing = store.write_record("DenMongoConfig", &record, WriteMode::Replace);
    assert!(matches!(missing, Err(StoreError::MissingRecord(_))));

    store
        .write_record("DenMongoConfig", &record, WriteMode::Insert)
        .unwrap();

    let mut updated = Record::new();
    updated.insert_text("Url", "b");
    store
        .write_record("DenMongoConfig", &updated, WriteMode::Replace)
        .unwrap();
    assert_eq!(store.read_record("DenMongoConfig").unwrap().text("Url"), "b");
}

#[test]
fn test_replace_drops_fields_absent_from_new_record() {
    init_tracing();
    let dir = tempdir().unwrap();
    let path = dir.path().join("WaykDen.db");
    let mut store = EncryptedStore::open(&path, None).unwrap();

    let mut full = Record::new();
    full.insert_text("Url", "mongodb://den-mongo");
    full.insert_text("Port", "27017");
    store
        .write_record("DenMongoConfig", &full, WriteMode::Insert)
        .unwrap();

    let mut partial = Record::new();
    partial.insert_text("Url", "mongodb://other");
    store
        .write_record("DenMongoConfig", &partial, WriteMode::Replace)
        .unwrap();

    let back = store.read_record("DenMongoConfig").unwrap();
    assert_eq!(back.text("Url"), "mongodb://other");
    // whole-record replace: the old Port row is gone, tolerant read defaults
    assert_eq!(back.text("Port"), "");
}

#[test]
fn test_read_missing_collection_fails() {
    init_tracing();
    let dir = tempdir().unwrap();
    let store = EncryptedStore::open(&dir.path().join("WaykDen.db"), None).unwrap();
    let missing = store.read_record("DenMongoConfig");
    assert!(matches!(missing, Err(StoreError::MissingCollection(_))));
}

#[test]
fn test_blob_fields_round_trip_through_container() {
    init_tracing();
    let dir = tempdir().unwrap();
    let path = dir.path().join("WaykDen.db");
    let mut store = EncryptedStore::open(&path, Some("secret")).unwrap();

    let material = vec![0x00, 0x01, 0xfe, 0xff, 0x80];
    let mut record = Record::new();
    record.insert_bytes("PublicKey", Some(&material));
    store
        .write_record("DenRouterConfig", &record, WriteMode::Insert)
        .unwrap();

    let back = store.read_record("DenRouterConfig").unwrap();
    assert_eq!(back.bytes("PublicKey"), Some(material));
}

#[test]
fn test_rotate_missing_container_is_config_not_found() {
    init_tracing();
    let dir = tempdir().unwrap();
    let result = EncryptedStore::rotate(&dir.path().join("WaykDen.db"), None, Some("secret"));
    assert!(matches!(result, Err(StoreError::ConfigNotFound)));
}
