use anyhow::{Context, Result};
use env_logger::Env;

use solana_key_materializer::{prompt, KeyMaterializer, KeyStoreConfig, MaterializeError};

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let config = KeyStoreConfig::from_home().context("Ошибка определения директории конфигурации")?;
    let materializer = KeyMaterializer::new(config);

    let file_name = prompt::prompt_file_name().context("Ошибка чтения имени файла")?;
    // Имя проверяется до запроса секрета.
    materializer.output_path(&file_name)?;

    let secret = prompt::prompt_secret().context("Ошибка чтения приватного ключа")?;
    let key = match materializer.materialize(&file_name, &secret) {
        Ok(key) => key,
        Err(e @ MaterializeError::Decode(_)) => {
            return Err(e).context("Невозможно декодировать base58 строку")
        }
        Err(e) => return Err(e).context("Ошибка сохранения ключа"),
    };
    drop(secret);

    println!("✅ Ключ сохранён в {}", key.path.display());
    if let Some(pubkey) = key.pubkey {
        println!("🔑 Публичный ключ: {}", pubkey);
    }
    Ok(())
}
