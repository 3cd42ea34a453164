use std::io::Write;
use std::path::Path;

use alphakey_core::CodecOptions;

use crate::CliResult;

/// hides `message` and prints the key, without a trailing newline
pub fn run(image: &Path, message: &str, output: &Path, options: CodecOptions) -> CliResult<()> {
    let key = alphakey_core::api::hide::prepare()
        .with_options(options)
        .with_message(message)
        .with_image(image)
        .with_output(output)
        .execute()?;

    let mut stdout = std::io::stdout().lock();
    write!(stdout, "{key}")?;
    stdout.flush()?;

    Ok(())
}
