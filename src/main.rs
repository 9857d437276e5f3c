use anyhow::Result;
use clap::Parser;

use lingo_cli::cli::commands::{config, session};
use lingo_cli::cli::{Args, Command};
use lingo_cli::config::ResolveOptions;
use lingo_cli::output::{self, OutputConfig};
use lingo_cli::translation::print_languages;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    output::init(OutputConfig::from_flags(args.quiet, args.no_color));

    let options = ResolveOptions {
        endpoint: args.endpoint,
        model: args.model,
    };

    match args.command {
        Some(Command::Languages) => {
            print_languages();
        }
        Some(Command::Config { init }) => {
            config::run_config(&options, init)?;
        }
        None => {
            session::run_session(options).await?;
        }
    }

    Ok(())
}
