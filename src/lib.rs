pub mod config;
pub mod error;
pub mod keyloader;
pub mod materializer;
pub mod prompt;

pub use config::KeyStoreConfig;
pub use error::{MaterializeError, Result};
pub use keyloader::{decode_base58_secret, DecodedSecret, SecretInput};
pub use materializer::{KeyMaterializer, MaterializedKey};
