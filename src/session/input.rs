//! Line-oriented input sources and the prompts built on top of them.

use anyhow::{Context, Result};
use inquire::autocompletion::{Autocomplete, Replacement};
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use inquire::{InquireError, Text};
use std::io::{BufRead, Write};

use crate::translation::{LanguageEntry, SUPPORTED_LANGUAGES, lookup};
use crate::ui::{Style, is_prompt_cancelled};

/// A source of answers to prompts.
///
/// `Ok(None)` means the input is closed (end of file, Ctrl+C) and no more
/// answers will come.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Reads a language code. Sources may offer completion here.
    fn read_language(&mut self, prompt: &str) -> Result<Option<String>> {
        self.read_line(prompt)
    }
}

impl<L: LineSource + ?Sized> LineSource for &mut L {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        (**self).read_line(prompt)
    }

    fn read_language(&mut self, prompt: &str) -> Result<Option<String>> {
        (**self).read_language(prompt)
    }
}

/// Interactive terminal prompts.
pub struct TerminalInput {
    render_config: RenderConfig<'static>,
}

impl TerminalInput {
    pub fn new() -> Self {
        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        Self { render_config }
    }

    fn finish(result: Result<String, InquireError>) -> Result<Option<String>> {
        match result {
            Ok(line) => Ok(Some(line)),
            Err(e) if is_prompt_cancelled(&e) => {
                println!(); // Clear line before goodbye message
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for TerminalInput {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        let result = Text::new(prompt)
            .with_render_config(self.render_config)
            .prompt();
        Self::finish(result)
    }

    fn read_language(&mut self, prompt: &str) -> Result<Option<String>> {
        let result = Text::new(prompt)
            .with_render_config(self.render_config)
            .with_autocomplete(LanguageCompleter)
            .with_help_message("Type a code or name, Tab to complete, Ctrl+C to quit")
            .prompt();
        Ok(Self::finish(result)?.map(|answer| answer_code(&answer).to_string()))
    }
}

/// Reads answers line by line from any buffered reader (piped stdin, tests).
///
/// Prompts are written to `writer` before each read.
pub struct ReaderInput<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ReaderInput<R, W> {
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> LineSource for ReaderInput<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.writer, "{prompt}: ")?;
        self.writer.flush()?;

        let mut line = String::new();
        let bytes_read = self
            .reader
            .read_line(&mut line)
            .context("Failed to read from stdin")?;

        if bytes_read == 0 {
            writeln!(self.writer)?;
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// The code at the start of a language answer.
///
/// Suggestions read `es  Spanish`, and inquire submits a highlighted
/// suggestion as-is when Enter is pressed on it.
fn answer_code(answer: &str) -> &str {
    answer.split_whitespace().next().unwrap_or("")
}

/// Language code autocompleter
#[derive(Clone, Default)]
pub struct LanguageCompleter;

impl Autocomplete for LanguageCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        let needle = input.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(vec![]);
        }

        let suggestions = SUPPORTED_LANGUAGES
            .iter()
            .filter(|entry| {
                entry.code.starts_with(&needle) || entry.name.to_lowercase().starts_with(&needle)
            })
            .map(|entry| format!("{}  {}", entry.code, entry.name))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        Ok(highlighted_suggestion.map(|s| answer_code(&s).to_string()))
    }
}

/// Asks for a language code until a registry code is entered.
///
/// Unknown codes are reported to `out` and asked for again; there is no retry limit.
pub fn prompt_for_language<I, W>(
    input: &mut I,
    out: &mut W,
    prompt: &str,
) -> Result<Option<&'static LanguageEntry>>
where
    I: LineSource + ?Sized,
    W: Write + ?Sized,
{
    loop {
        let Some(answer) = input.read_language(prompt)? else {
            return Ok(None);
        };

        if let Some(entry) = lookup(&answer) {
            return Ok(Some(entry));
        }

        writeln!(
            out,
            "{}",
            Style::warning(format!(
                "Invalid code '{}'. Please choose from the list above.",
                answer.trim().to_lowercase()
            ))
        )?;
    }
}

/// Reads the text to translate, trimmed. Emptiness is left to the caller.
pub fn prompt_for_text<I>(input: &mut I, prompt: &str) -> Result<Option<String>>
where
    I: LineSource + ?Sized,
{
    Ok(input.read_line(prompt)?.map(|text| text.trim().to_string()))
}
