//! Config command handler.

use anyhow::Result;

use crate::config::{ConfigFile, ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};
use crate::ui::Style;

/// Shows the configuration the session would run with.
///
/// With `init`, first writes a config file holding the defaults unless one
/// already exists. The API key itself is never printed.
pub fn run_config(options: &ResolveOptions, init: bool) -> Result<()> {
    let manager = ConfigManager::new()?;

    if init {
        if manager.exists() {
            println!(
                "{} Config file already exists: {}\n",
                Style::warning("!"),
                Style::secondary(manager.config_path().display())
            );
        } else {
            manager.save(&ConfigFile::with_defaults())?;
            println!(
                "{} Configuration saved to {}\n",
                Style::success("✓"),
                Style::secondary(manager.config_path().display())
            );
        }
    }

    let file_config = manager.load_or_default()?;
    let resolved = resolve_config(options, &file_config)?;

    print_config(&manager, &resolved);
    Ok(())
}

fn print_config(manager: &ConfigManager, config: &ResolvedConfig) {
    let file_state = if manager.exists() { "" } else { " (not found)" };

    println!("{}", Style::header("Configuration"));
    println!(
        "  {}       {}{}",
        Style::label("file"),
        Style::secondary(manager.config_path().display()),
        Style::secondary(file_state)
    );
    println!(
        "  {}   {}",
        Style::label("endpoint"),
        Style::value(&config.endpoint)
    );
    println!(
        "  {}      {}",
        Style::label("model"),
        Style::value(&config.model)
    );
    println!(
        "  {}    {}",
        Style::label("api_key"),
        if config.api_key.is_some() {
            Style::success("(set)")
        } else {
            Style::warning(format!("(not set, export {})", config.api_key_env))
        }
    );
}
