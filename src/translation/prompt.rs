pub const PROMPT_TEMPLATE: &str =
    "Translate the following text from {source_language} to {target_language}: \"{text}\"";

/// Renders the translation instruction sent to the model.
///
/// Quotes inside `text` are passed through unescaped.
#[allow(clippy::literal_string_with_formatting_args)]
pub fn build_prompt(source_language: &str, target_language: &str, text: &str) -> String {
    // Text goes in last so placeholders inside it stay literal
    PROMPT_TEMPLATE
        .replacen("{source_language}", source_language, 1)
        .replacen("{target_language}", target_language, 1)
        .replacen("{text}", text, 1)
}
