use std::path::PathBuf;

use alphakey_core::{CodecOptions, Key};
use clap::builder::NonEmptyStringValueParser;
use clap::{ArgGroup, Parser};

use crate::commands;
use crate::CliResult;

/// Hides a text message in the alpha channel of an image, or unveils it again with the key
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(group(ArgGroup::new("mode").required(true).args(["message", "key"])))]
pub struct CliArgs {
    /// The PNG or JPEG image to run on
    #[arg(short = 'f', long = "file", value_name = "image file")]
    pub file: PathBuf,

    /// The message to be hidden, prints the key needed to unveil it
    #[arg(
        short = 'm',
        long = "msg",
        value_name = "text message",
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub message: Option<String>,

    /// The key printed when hiding, like "x y length"
    #[arg(short, long, value_name = "key")]
    pub key: Option<Key>,

    /// Final image will be stored as PNG file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        default_value = "out.png"
    )]
    pub write_to_file: PathBuf,

    /// Experimental: give up after that many draws for one pixel
    #[arg(long = "x-draw-limit", value_name = "draws")]
    pub draw_limit: Option<usize>,
}

impl CliArgs {
    pub fn run(self) -> CliResult<()> {
        let options = CodecOptions {
            draw_limit: self.draw_limit,
        };

        match (self.message, self.key) {
            (Some(message), None) => {
                commands::hide::run(&self.file, &message, &self.write_to_file, options)
            }
            (None, Some(key)) => commands::unveil::run(&self.file, key, options),
            _ => unreachable!("clap ensures exactly one of --msg and --key"),
        }
    }
}
