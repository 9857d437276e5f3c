//! Default command: the interactive translation session.

use anyhow::{Context, Result};
use std::io::{self, IsTerminal};

use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::session::{ReaderInput, Session, SessionOptions, TerminalInput};
use crate::translation::{GeminiClient, ReqwestTransport};
use crate::ui::Style;
use crate::{status, warn};

/// Runs the interactive session until the user quits.
///
/// Terminal stdin gets inquire prompts; piped stdin is read line by line so
/// sessions can be scripted.
pub async fn run_session(options: ResolveOptions) -> Result<()> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load_or_default()?;
    let config = resolve_config(&options, &file_config)?;

    status!(
        "{} {} {}",
        Style::label("model"),
        Style::value(&config.model),
        Style::secondary(&config.endpoint)
    );

    if config.api_key.is_none() {
        warn!(
            "{} No API key found. Set the {} environment variable:\n  \
             export {}=\"your-api-key\"\n",
            Style::warning("Warning:"),
            config.api_key_env,
            config.api_key_env
        );
    }

    let transport = ReqwestTransport::new().context("Failed to create HTTP client")?;
    let client = GeminiClient::new(transport, config.endpoint, config.model, config.api_key)
        .with_api_key_env(config.api_key_env);

    let summary = if io::stdin().is_terminal() {
        let options = SessionOptions::for_terminal(io::stdout().is_terminal());
        Session::new(TerminalInput::new(), client, io::stdout(), options)
            .run()
            .await?
    } else {
        let input = ReaderInput::new(io::stdin().lock(), io::stdout());
        Session::new(input, client, io::stdout(), SessionOptions::for_terminal(false))
            .run()
            .await?
    };

    status!(
        "{}",
        Style::secondary(format!(
            "{} translation(s), {} failed",
            summary.translations, summary.failures
        ))
    );

    Ok(())
}
