use std::path::Path;

use alphakey_core::{CodecOptions, Key};
use log::debug;

use crate::CliResult;

/// unveils the message and prints it as text, invalid UTF-8 is replaced
pub fn run(image: &Path, key: Key, options: CodecOptions) -> CliResult<()> {
    let message = alphakey_core::api::unveil::prepare()
        .with_options(options)
        .from_secret_file(image)
        .using_key(key)
        .execute()?;

    if std::str::from_utf8(&message).is_err() {
        debug!("message is not valid UTF-8, wrong key or wrong image?");
    }
    println!("{}", String::from_utf8_lossy(&message));

    Ok(())
}
