use std::path::PathBuf;

use thiserror::Error;

/// Ошибки материализации ключа.
#[derive(Debug, Error)]
pub enum MaterializeError {
    /// Строка не является валидным base58.
    #[error("невалидная base58 строка: {0}")]
    Decode(#[from] bs58::decode::Error),

    #[error("недопустимое имя файла {name:?}: {reason}")]
    InvalidFileName { name: String, reason: &'static str },

    #[error("не удалось определить домашнюю директорию")]
    HomeDirNotFound,

    /// Ошибка создания директории или записи файла.
    #[error("ошибка ввода-вывода для {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("ошибка сериализации JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl MaterializeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MaterializeError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, MaterializeError>;
