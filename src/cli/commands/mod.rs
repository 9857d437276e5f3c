//! Subcommand implementations.

/// Config command handler.
pub mod config;

/// Interactive session handler (the default command).
pub mod session;
