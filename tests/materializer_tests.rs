use std::fs;

use solana_sdk::signature::{read_keypair_file, Keypair, Signer};
use tempfile::TempDir;

use solana_key_materializer::{KeyMaterializer, KeyStoreConfig, MaterializeError, SecretInput};

fn materializer_in(dir: &TempDir) -> KeyMaterializer {
    KeyMaterializer::new(KeyStoreConfig::new(dir.path().join(".config").join("solana")))
}

#[test]
fn test_materialize_known_value() {
    let dir = TempDir::new().unwrap();
    let materializer = materializer_in(&dir);

    let key = materializer
        .materialize("test", &SecretInput::new("2Uw1bpnsXxu3e"))
        .unwrap();

    assert_eq!(key.path, dir.path().join(".config/solana/test.json"));
    assert_eq!(key.byte_len, 9);
    assert_eq!(key.pubkey, None);
    assert_eq!(
        fs::read_to_string(&key.path).unwrap(),
        "[116,101,115,116,32,100,97,116,97]"
    );
}

#[test]
fn test_materialize_invalid_secret_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let materializer = materializer_in(&dir);

    let result = materializer.materialize("test", &SecretInput::new("0OIl"));

    assert!(matches!(result, Err(MaterializeError::Decode(_))));
    assert!(
        !materializer.output_path("test").unwrap().exists(),
        "Файл не должен создаваться при ошибке декодирования"
    );
}

#[test]
fn test_materialize_invalid_secret_keeps_existing_file() {
    let dir = TempDir::new().unwrap();
    let materializer = materializer_in(&dir);
    let key = materializer
        .materialize("test", &SecretInput::new("2Uw1bpnsXxu3e"))
        .unwrap();

    let result = materializer.materialize("test", &SecretInput::new("2Uw1bpns0"));

    assert!(result.is_err());
    assert_eq!(
        fs::read_to_string(&key.path).unwrap(),
        "[116,101,115,116,32,100,97,116,97]"
    );
}

#[test]
fn test_materialize_overwrites_previous_file() {
    let dir = TempDir::new().unwrap();
    let materializer = materializer_in(&dir);
    let keypair = Keypair::new();

    materializer
        .materialize("wallet", &SecretInput::new(keypair.to_base58_string()))
        .unwrap();
    let key = materializer
        .materialize("wallet", &SecretInput::new("2Uw1bpnsXxu3e"))
        .unwrap();

    let values: Vec<u8> = serde_json::from_str(&fs::read_to_string(&key.path).unwrap()).unwrap();
    assert_eq!(values, b"test data".to_vec());
}

#[test]
fn test_materialized_keypair_is_loadable() {
    let dir = TempDir::new().unwrap();
    let materializer = materializer_in(&dir);
    let keypair = Keypair::new();

    let key = materializer
        .materialize("wallet", &SecretInput::new(keypair.to_base58_string()))
        .unwrap();

    assert_eq!(key.byte_len, 64);
    assert_eq!(key.pubkey, Some(keypair.pubkey()));

    let loaded = read_keypair_file(&key.path).unwrap();
    assert_eq!(loaded.pubkey(), keypair.pubkey());
}

#[test]
fn test_materialize_rejects_path_in_file_name() {
    let dir = TempDir::new().unwrap();
    let materializer = materializer_in(&dir);

    let result = materializer.materialize("../escape", &SecretInput::new("2Uw1bpnsXxu3e"));

    assert!(matches!(result, Err(MaterializeError::InvalidFileName { .. })));
    assert!(!dir.path().join(".config/escape.json").exists());
    assert!(!materializer.config().dir().exists());
}

#[test]
fn test_materialize_io_error_when_dir_is_file() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, b"").unwrap();
    let materializer = KeyMaterializer::new(KeyStoreConfig::new(blocker.join("solana")));

    let result = materializer.materialize("test", &SecretInput::new("2Uw1bpnsXxu3e"));

    assert!(
        matches!(result, Err(MaterializeError::Io { .. })),
        "Ожидалась ошибка ввода-вывода при невозможности создать директорию"
    );
}

#[test]
fn test_materialize_leaves_no_temp_files() {
    let dir = TempDir::new().unwrap();
    let materializer = materializer_in(&dir);

    materializer
        .materialize("test", &SecretInput::new("2Uw1bpnsXxu3e"))
        .unwrap();

    let entries: Vec<_> = fs::read_dir(materializer.config().dir())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("test.json")]);
}

#[cfg(unix)]
#[test]
fn test_materialized_file_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let materializer = materializer_in(&dir);

    let key = materializer
        .materialize("test", &SecretInput::new("2Uw1bpnsXxu3e"))
        .unwrap();

    let mode = fs::metadata(&key.path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}
