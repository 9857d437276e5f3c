use anyhow::Result;
use std::io::Write;

use super::input::{LineSource, prompt_for_language, prompt_for_text};
use super::ui;
use crate::translation::{
    GeminiClient, LanguageEntry, TranslationRequest, TranslationResult, Transport,
};
use crate::ui::Spinner;

const SOURCE_PROMPT: &str = "Enter the source language code (e.g., 'en')";
const TARGET_PROMPT: &str = "Enter the target language code (e.g., 'es')";
const TEXT_PROMPT: &str = "Enter the text you want to translate";
const CONTINUE_PROMPT: &str = "Translate another text? (y/n)";

/// Presentation switches for a session.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    /// Clear the screen before showing the banner.
    pub clear_screen: bool,
    /// Show a spinner while waiting for the translation.
    pub show_spinner: bool,
}

impl SessionOptions {
    /// Terminal niceties only make sense when a human is watching.
    pub const fn for_terminal(is_terminal: bool) -> Self {
        Self {
            clear_screen: is_terminal,
            show_spinner: is_terminal,
        }
    }
}

/// Counters describing how a session went.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Times language selection started.
    pub cycles: usize,
    /// Translation calls made to the client.
    pub translations: usize,
    /// Calls that produced a failure.
    pub failures: usize,
    /// Cycles restarted because no text was entered.
    pub empty_text_retries: usize,
}

enum State {
    CollectingLanguages,
    CollectingText {
        source: &'static LanguageEntry,
        target: &'static LanguageEntry,
    },
    Translating(TranslationRequest),
    DisplayingResult(TranslationResult),
    AskingToContinue,
    Terminated,
}

/// The interactive translate-and-display loop.
///
/// Everything runs in sequence on the caller's task: each prompt and each
/// request is awaited before the next state is entered.
pub struct Session<I, T, W> {
    input: I,
    client: GeminiClient<T>,
    out: W,
    options: SessionOptions,
    summary: SessionSummary,
}

impl<I, T, W> Session<I, T, W>
where
    I: LineSource,
    T: Transport,
    W: Write,
{
    pub fn new(input: I, client: GeminiClient<T>, out: W, options: SessionOptions) -> Self {
        Self {
            input,
            client,
            out,
            options,
            summary: SessionSummary::default(),
        }
    }

    /// Runs until the user declines to continue or the input closes.
    ///
    /// Translation failures are displayed and never end the session; only
    /// terminal I/O errors are returned.
    pub async fn run(&mut self) -> Result<SessionSummary> {
        let mut state = State::CollectingLanguages;

        loop {
            state = match state {
                State::CollectingLanguages => self.collect_languages()?,
                State::CollectingText { source, target } => self.collect_text(source, target)?,
                State::Translating(request) => self.translate(request).await?,
                State::DisplayingResult(result) => self.display(&result)?,
                State::AskingToContinue => self.ask_to_continue()?,
                State::Terminated => break,
            };
        }

        ui::print_goodbye(&mut self.out)?;
        Ok(self.summary)
    }

    fn collect_languages(&mut self) -> Result<State> {
        self.summary.cycles += 1;

        if self.options.clear_screen {
            ui::clear_screen(&mut self.out)?;
        }
        ui::print_banner(&mut self.out)?;

        let Some(source) = prompt_for_language(&mut self.input, &mut self.out, SOURCE_PROMPT)?
        else {
            return Ok(State::Terminated);
        };
        let Some(target) = prompt_for_language(&mut self.input, &mut self.out, TARGET_PROMPT)?
        else {
            return Ok(State::Terminated);
        };

        Ok(State::CollectingText { source, target })
    }

    fn collect_text(
        &mut self,
        source: &'static LanguageEntry,
        target: &'static LanguageEntry,
    ) -> Result<State> {
        ui::print_direction(&mut self.out, source.name, target.name)?;
        self.out.flush()?;

        let Some(text) = prompt_for_text(&mut self.input, TEXT_PROMPT)? else {
            return Ok(State::Terminated);
        };

        // Empty text restarts from language selection, not from the text prompt
        if text.is_empty() {
            ui::print_empty_text(&mut self.out)?;
            self.summary.empty_text_retries += 1;
            return Ok(State::CollectingLanguages);
        }

        Ok(State::Translating(TranslationRequest {
            source,
            target,
            text,
        }))
    }

    async fn translate(&mut self, request: TranslationRequest) -> Result<State> {
        let prompt = request.prompt();

        let spinner = if self.options.show_spinner {
            self.out.flush()?;
            Some(Spinner::new("Translating..."))
        } else {
            ui::print_translating(&mut self.out)?;
            None
        };

        let result = self.client.translate(&prompt).await;
        drop(spinner);

        self.summary.translations += 1;
        if result.is_err() {
            self.summary.failures += 1;
        }

        Ok(State::DisplayingResult(result))
    }

    fn display(&mut self, result: &TranslationResult) -> Result<State> {
        ui::print_result(&mut self.out, result)?;
        self.out.flush()?;
        Ok(State::AskingToContinue)
    }

    fn ask_to_continue(&mut self) -> Result<State> {
        let again = self.input.read_line(CONTINUE_PROMPT)?;

        match again {
            Some(answer) if answer.trim().eq_ignore_ascii_case("y") => {
                Ok(State::CollectingLanguages)
            }
            _ => Ok(State::Terminated),
        }
    }
}
