//! # lingo - Interactive Translation CLI
//!
//! `lingo` is a command-line tool that translates text between languages by
//! asking a Gemini model through the `generateContent` API.
//!
//! ## Quick Start
//!
//! ```bash
//! export GEMINI_API_KEY="your-api-key"
//!
//! # Interactive session
//! lingo
//!
//! # Scripted session
//! printf 'en\nes\nHello\nn\n' | lingo
//!
//! # List language codes
//! lingo languages
//! ```
//!
//! ## Configuration
//!
//! Settings are read from `~/.config/lingo/config.toml`:
//!
//! ```toml
//! [gemini]
//! endpoint = "https://generativelanguage.googleapis.com"
//! model = "gemini-2.5-flash-preview-05-20"
//! api_key_env = "GEMINI_API_KEY"
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// Global output configuration (quiet mode, colors, stderr routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Interactive translation session.
pub mod session;

/// Language registry, prompt builder and Gemini client.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
