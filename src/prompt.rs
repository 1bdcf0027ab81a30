use std::io::{self, BufRead, Write};

use crate::keyloader::SecretInput;

/// Читает одну строку имени файла, отбрасывая только перевод строки.
///
/// Остальные символы сохраняются как есть, проверка имени выполняется в
/// `KeyStoreConfig::key_path`.
pub fn read_file_name<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<String> {
    write!(output, "Введите имя файла (без расширения): ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

pub fn prompt_file_name() -> io::Result<String> {
    read_file_name(&mut io::stdin().lock(), &mut io::stdout())
}

/// Запрашивает приватный ключ без отображения ввода в терминале.
pub fn prompt_secret() -> io::Result<SecretInput> {
    rpassword::prompt_password("Введите приватный ключ (base58): ").map(SecretInput::from)
}
