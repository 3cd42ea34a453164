use clap::Parser;

mod cli;
mod commands;

pub type CliResult<T> = alphakey_core::Result<T>;

fn main() -> CliResult<()> {
    env_logger::init();

    cli::CliArgs::parse().run()
}
