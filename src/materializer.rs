use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info};
use solana_sdk::pubkey::Pubkey;
use tempfile::NamedTempFile;

use crate::config::KeyStoreConfig;
use crate::error::{MaterializeError, Result};
use crate::keyloader::{decode_base58_secret, SecretInput};

/// Результат успешной записи ключа.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializedKey {
    pub path: PathBuf,
    pub byte_len: usize,
    /// Заполнен, если байты распознаны как Solana `Keypair`.
    pub pubkey: Option<Pubkey>,
}

/// Декодирует base58 секрет и сохраняет его как JSON-массив байтов.
#[derive(Debug, Clone)]
pub struct KeyMaterializer {
    config: KeyStoreConfig,
}

impl KeyMaterializer {
    pub fn new(config: KeyStoreConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &KeyStoreConfig {
        &self.config
    }

    pub fn output_path(&self, file_name: &str) -> Result<PathBuf> {
        self.config.key_path(file_name)
    }

    /// Записывает декодированный секрет в `<dir>/<file_name>.json`.
    ///
    /// Секрет декодируется до любых изменений на диске, поэтому при ошибке
    /// декодирования существующий файл не трогается. Директория создаётся при
    /// необходимости, существующий файл перезаписывается целиком.
    ///
    /// # Аргументы:
    /// - `file_name`: имя файла без расширения
    /// - `secret`: приватный ключ в base58
    ///
    /// # Возвращает:
    /// - `Ok(MaterializedKey)` — путь, длина и (если есть) публичный ключ
    /// - `Err` — `InvalidFileName`, `Decode` или `Io`
    pub fn materialize(&self, file_name: &str, secret: &SecretInput) -> Result<MaterializedKey> {
        let path = self.output_path(file_name)?;
        let decoded = decode_base58_secret(secret)?;
        debug!("Декодировано {} байт", decoded.len());

        let json = decoded.to_json()?;
        write_key_file(self.config.dir(), &path, &json)?;
        info!("Ключ записан в {}", path.display());

        Ok(MaterializedKey {
            path,
            byte_len: decoded.len(),
            pubkey: decoded.keypair_pubkey(),
        })
    }
}

/// Пишет во временный файл в той же директории (права 0600) и атомарно
/// переименовывает его поверх `path`.
fn write_key_file(dir: &Path, path: &Path, contents: &[u8]) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| MaterializeError::io(dir, e))?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| MaterializeError::io(dir, e))?;
    if let Err(e) = tmp.write_all(contents) {
        return Err(MaterializeError::io(tmp.path(), e));
    }
    tmp.as_file()
        .sync_all()
        .map_err(|e| MaterializeError::io(tmp.path(), e))?;

    tmp.persist(path)
        .map_err(|e| MaterializeError::io(path, e.error))?;
    Ok(())
}
