//! Interactive translation session.
//!
//! Collects a language pair and text, sends the translation request,
//! shows the result and asks whether to go again.

/// Input sources and the language/text prompts.
pub mod input;
mod runner;
mod ui;

pub use input::{LineSource, ReaderInput, TerminalInput, prompt_for_language, prompt_for_text};
pub use runner::{Session, SessionOptions, SessionSummary};
