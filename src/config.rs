use std::path::{Path, PathBuf};

use crate::error::{MaterializeError, Result};

/// Путь к конфигурации Solana относительно домашней директории.
pub const SOLANA_CONFIG_SUBDIR: [&str; 2] = [".config", "solana"];
pub const KEY_FILE_EXTENSION: &str = "json";
/// Длина сериализованного Ed25519 `Keypair` (secret || public).
pub const KEYPAIR_LENGTH: usize = 64;

/// Директория, в которую сохраняются файлы ключей.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyStoreConfig {
    dir: PathBuf,
}

impl KeyStoreConfig {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `~/.config/solana`, домашняя директория берётся из окружения процесса.
    pub fn from_home() -> Result<Self> {
        let home = dirs::home_dir().ok_or(MaterializeError::HomeDirNotFound)?;
        Ok(Self::new(
            SOLANA_CONFIG_SUBDIR
                .iter()
                .fold(home, |path, part| path.join(part)),
        ))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Строит `<dir>/<file_name>.json`.
    ///
    /// # Возвращает:
    /// - `Err(InvalidFileName)` — если имя пустое, является `.`/`..`
    ///   или содержит разделители пути либо NUL
    pub fn key_path(&self, file_name: &str) -> Result<PathBuf> {
        validate_file_name(file_name)?;
        Ok(self
            .dir
            .join(format!("{}.{}", file_name, KEY_FILE_EXTENSION)))
    }
}

fn validate_file_name(name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        Some("имя пустое")
    } else if name == "." || name == ".." {
        Some("ссылка на директорию")
    } else if name.contains(['/', '\\']) {
        Some("содержит разделитель пути")
    } else if name.contains('\0') {
        Some("содержит NUL")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(MaterializeError::InvalidFileName {
            name: name.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}
