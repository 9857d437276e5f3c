use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "lingo")]
#[command(about = "Interactive AI-powered translation CLI tool")]
#[command(version)]
pub struct Args {
    /// Gemini API base URL
    #[arg(short = 'e', long)]
    pub endpoint: Option<String>,

    /// Model name
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Suppress status messages on stderr
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List supported language codes
    Languages,
    /// Show the resolved configuration
    Config {
        /// Write a config file with the default settings if none exists
        #[arg(long)]
        init: bool,
    },
}
