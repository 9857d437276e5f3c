mod client;
mod error;
mod language;
mod prompt;
mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{
    DEFAULT_API_KEY_ENV, DEFAULT_ENDPOINT, DEFAULT_MODEL, GeminiClient, TranslationRequest,
};
pub use error::{TranslationError, TranslationResult};
pub use language::{
    LanguageEntry, SUPPORTED_LANGUAGES, all as all_languages, format_columns, lookup,
    print_languages,
};
pub use prompt::build_prompt;
pub use transport::{HttpResponse, ReqwestTransport, Transport, TransportError};
