//! Session screen output.

use std::io::{self, Write};

use crate::translation::{TranslationResult, format_columns};
use crate::ui::Style;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const RULE: &str = "=============================";

pub fn clear_screen<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    write!(out, "\x1B[2J\x1B[1;1H")?;
    out.flush()
}

pub fn print_banner<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(
        out,
        "    {} {}",
        Style::header("Language Translator"),
        Style::version(format!("v{VERSION}"))
    )?;
    writeln!(out, "{RULE}")?;
    print_language_table(out)
}

pub fn print_language_table<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", Style::header("--- Available Languages ---"))?;
    for row in format_columns() {
        writeln!(out, "{row}")?;
    }
    writeln!(out, "{}", "-".repeat(27))
}

pub fn print_direction<W: Write + ?Sized>(out: &mut W, source: &str, target: &str) -> io::Result<()> {
    writeln!(
        out,
        "\nTranslating from {} to {}.",
        Style::value(source),
        Style::value(target)
    )
}

pub fn print_empty_text<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", Style::warning("No text entered. Please try again."))
}

pub fn print_translating<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", Style::secondary("Translating..."))
}

pub fn print_result<W: Write + ?Sized>(out: &mut W, result: &TranslationResult) -> io::Result<()> {
    writeln!(out, "\n{}", Style::header("--- Translation Result ---"))?;
    match result {
        Ok(text) => writeln!(out, "{text}")?,
        Err(e) => writeln!(out, "{} {e}", Style::error("Error:"))?,
    }
    writeln!(out, "{}\n", "-".repeat(26))
}

pub fn print_goodbye<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", Style::success("Exiting translator. Goodbye!"))
}
