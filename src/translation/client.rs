use reqwest::{StatusCode, Url};
use serde::{Deserialize, Serialize};

use super::error::{TranslationError, TranslationResult};
use super::language::LanguageEntry;
use super::prompt::build_prompt;
use super::transport::{ReqwestTransport, Transport, TransportError};

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-05-20";
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// One text to translate between two registry languages.
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    pub source: &'static LanguageEntry,
    pub target: &'static LanguageEntry,
    pub text: String,
}

impl TranslationRequest {
    /// Renders the instruction sent to the model for this request.
    pub fn prompt(&self) -> String {
        build_prompt(self.source.name, self.target.name, &self.text)
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

// Every level is optional so that a missing key and a missing value can be told apart.
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    parts: Option<Vec<Part>>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: Option<String>,
}

/// Client for the Gemini `generateContent` endpoint.
pub struct GeminiClient<T = ReqwestTransport> {
    transport: T,
    endpoint: String,
    model: String,
    api_key: Option<String>,
    api_key_env: String,
}

impl<T: Transport> GeminiClient<T> {
    pub fn new(transport: T, endpoint: String, model: String, api_key: Option<String>) -> Self {
        Self {
            transport,
            endpoint,
            model,
            api_key,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
        }
    }

    /// Sets the environment variable name mentioned when the key is missing.
    #[must_use]
    pub fn with_api_key_env(mut self, api_key_env: impl Into<String>) -> Self {
        self.api_key_env = api_key_env.into();
        self
    }

    /// Sends `prompt` to the model and returns the cleaned-up translation.
    ///
    /// Makes exactly one request and never retries. Without an API key no
    /// request is made at all.
    pub async fn translate(&self, prompt: &str) -> TranslationResult {
        let Some(api_key) = self.api_key.as_deref().filter(|key| !key.is_empty()) else {
            return Err(TranslationError::MissingApiKey {
                env_var: self.api_key_env.clone(),
            });
        };

        let url = self.request_url(api_key)?;

        let request = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };
        let body = serde_json::to_string(&request)
            .map_err(|e| TranslationError::Unexpected(e.to_string()))?;

        let response = self
            .transport
            .post_json(url, body)
            .await
            .map_err(|e| match e {
                TransportError::Network(message) => TranslationError::Network(message),
                TransportError::Other(message) => TranslationError::Unexpected(message),
            })?;

        if !response.is_success() {
            return Err(TranslationError::Http {
                status: response.status,
                detail: http_error_detail(response.status, &response.body),
            });
        }

        extract_translation(&response.body)
    }

    fn request_url(&self, api_key: &str) -> Result<Url, TranslationError> {
        let invalid = |detail: String| {
            TranslationError::Unexpected(format!("invalid endpoint URL: {detail}"))
        };

        let mut url = Url::parse(&self.endpoint).map_err(|e| invalid(e.to_string()))?;
        let method = format!("{}:generateContent", self.model);

        // Segments are percent-encoded, so a model id cannot escape its path segment
        url.path_segments_mut()
            .map_err(|()| invalid(format!("'{}' cannot be a base", self.endpoint)))?
            .pop_if_empty()
            .extend(["v1beta", "models", method.as_str()]);
        url.query_pairs_mut().append_pair("key", api_key);

        Ok(url)
    }
}

/// Pulls `candidates[0].content.parts[0].text` out of a response body.
fn extract_translation(body: &str) -> TranslationResult {
    let response: GenerateContentResponse =
        serde_json::from_str(body).map_err(|_| TranslationError::InvalidResponseStructure)?;

    let part = response
        .candidates
        .and_then(|candidates| candidates.into_iter().next())
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts)
        .and_then(|parts| parts.into_iter().next())
        .ok_or(TranslationError::InvalidResponseStructure)?;

    let text = part.text.ok_or(TranslationError::EmptyTranslation)?;

    let cleaned = clean_translation(&text);
    if cleaned.trim().is_empty() {
        return Err(TranslationError::EmptyTranslation);
    }

    Ok(cleaned.to_string())
}

/// Trims whitespace, then one layer of surrounding double quotes.
fn clean_translation(text: &str) -> &str {
    let text = text.trim();
    let text = text.strip_prefix('"').unwrap_or(text);
    text.strip_suffix('"').unwrap_or(text)
}

fn http_error_detail(status: u16, body: &str) -> String {
    let reason = StatusCode::from_u16(status)
        .ok()
        .and_then(|status| status.canonical_reason())
        .unwrap_or("Unknown Status");

    let api_message = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|body| body.error.message)
        .filter(|message| !message.is_empty());

    match api_message {
        Some(message) => format!("{reason}: {message}"),
        None => reason.to_string(),
    }
}
