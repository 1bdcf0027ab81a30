use std::fmt;

use serde::Serialize;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signer},
};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::config::KEYPAIR_LENGTH;
use crate::error::Result;

/// Секретная строка в формате base58, введённая оператором.
///
/// Память затирается при удалении значения.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SecretInput(String);

impl SecretInput {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl From<String> for SecretInput {
    fn from(secret: String) -> Self {
        Self(secret)
    }
}

impl fmt::Debug for SecretInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretInput(***)")
    }
}

/// Байты, полученные декодированием `SecretInput`.
///
/// Сериализуется в JSON как плоский массив чисел `[b0,b1,...]`.
#[derive(Serialize, Zeroize, ZeroizeOnDrop, PartialEq, Eq)]
#[serde(transparent)]
pub struct DecodedSecret(Vec<u8>);

impl DecodedSecret {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// JSON-массив байтов без завершающего перевода строки.
    pub fn to_json(&self) -> Result<Zeroizing<Vec<u8>>> {
        Ok(Zeroizing::new(serde_json::to_vec(self)?))
    }

    /// Публичный ключ, если байты являются сериализованным `Keypair`.
    ///
    /// Проверка информационная: байты любой длины остаются валидным секретом.
    pub fn keypair_pubkey(&self) -> Option<Pubkey> {
        if self.0.len() != KEYPAIR_LENGTH {
            return None;
        }

        #[allow(deprecated)]
        let keypair = Keypair::from_bytes(&self.0).ok()?;
        Some(keypair.pubkey())
    }
}

impl fmt::Debug for DecodedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DecodedSecret({} bytes)", self.0.len())
    }
}

impl From<Vec<u8>> for DecodedSecret {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

/// Декодирует приватный ключ из base58 в сырые байты.
///
/// Используется для строки, скопированной из кошелька (Phantom, Solflare и т.п.).
/// Завершающие пробельные символы отбрасываются, длина не проверяется.
///
/// # Аргументы:
/// - `secret`: строка в формате base58 (обычно 64 байта после декодирования)
///
/// # Возвращает:
/// - `Ok(DecodedSecret)` — при успешной декодировке
/// - `Err(MaterializeError::Decode)` — если строка содержит символы вне алфавита base58
pub fn decode_base58_secret(secret: &SecretInput) -> Result<DecodedSecret> {
    let data = bs58::decode(secret.expose().trim_end()).into_vec()?;
    Ok(DecodedSecret(data))
}
