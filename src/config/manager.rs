use anyhow::{Context, Result, bail};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::paths;
use crate::translation::{DEFAULT_API_KEY_ENV, DEFAULT_ENDPOINT, DEFAULT_MODEL};

/// Settings in the `[gemini]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// Base URL of the generation API.
    pub endpoint: Option<String>,
    /// Model id used in the request path.
    pub model: Option<String>,
    /// Environment variable name containing the API key.
    pub api_key_env: Option<String>,
    /// API key stored directly in config (not recommended).
    pub api_key: Option<String>,
}

impl GeminiConfig {
    /// Name of the environment variable holding the API key.
    pub fn api_key_env(&self) -> &str {
        self.api_key_env
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_API_KEY_ENV)
    }

    /// Gets the API key, preferring environment variable over config file.
    pub fn get_api_key(&self) -> Option<String> {
        if let Ok(key) = std::env::var(self.api_key_env())
            && !key.is_empty()
        {
            return Some(key);
        }
        self.api_key.clone().filter(|key| !key.is_empty())
    }
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/lingo/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub gemini: GeminiConfig,
}

impl ConfigFile {
    /// A config file spelling out every built-in default.
    pub fn with_defaults() -> Self {
        Self {
            gemini: GeminiConfig {
                endpoint: Some(DEFAULT_ENDPOINT.to_string()),
                model: Some(DEFAULT_MODEL.to_string()),
                api_key_env: Some(DEFAULT_API_KEY_ENV.to_string()),
                api_key: None,
            },
        }
    }
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// The API base URL.
    pub endpoint: String,
    /// The model to use for translation.
    pub model: String,
    /// The API key, if one was found.
    pub api_key: Option<String>,
    /// The environment variable consulted for the API key.
    pub api_key_env: String,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Endpoint override.
    pub endpoint: Option<String>,
    /// Model name override.
    pub model: Option<String>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// Priority: CLI option, then config file, then built-in default. A missing
/// API key is not an error here; translations report it instead.
///
/// # Errors
///
/// Returns an error if the endpoint is not a valid URL or the model is empty.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    let gemini = &config_file.gemini;

    let endpoint = options
        .endpoint
        .as_ref()
        .or(gemini.endpoint.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    Url::parse(&endpoint).with_context(|| {
        format!(
            "Invalid endpoint URL: '{endpoint}'\n\n\
             Provide a full URL such as {DEFAULT_ENDPOINT}"
        )
    })?;

    let model = options
        .model
        .as_ref()
        .or(gemini.model.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    if model.trim().is_empty() {
        bail!(
            "Model name must not be empty\n\n\
             Please provide it via:\n  \
             - CLI option: lingo --model <name>\n  \
             - Config file: ~/.config/lingo/config.toml"
        );
    }

    Ok(ResolvedConfig {
        endpoint,
        model,
        api_key: gemini.get_api_key(),
        api_key_env: gemini.api_key_env().to_string(),
    })
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/lingo/config.toml`
    /// or `~/.config/lingo/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    /// Creates a config manager for an explicit file path.
    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn exists(&self) -> bool {
        self.config_path.is_file()
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(config_file)
    }

    /// Loads the config file, or the defaults when there is none.
    ///
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn create_test_manager(temp_dir: &TempDir) -> ConfigManager {
        ConfigManager::with_path(temp_dir.path().join("config.toml"))
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        let config = ConfigFile {
            gemini: GeminiConfig {
                endpoint: Some("http://localhost:8080".to_string()),
                model: Some("gemini-2.0-flash".to_string()),
                api_key_env: Some("MY_KEY".to_string()),
                api_key: None,
            },
        };

        manager.save(&config).unwrap();
        let loaded = manager.load().unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_path(temp_dir.path().join("nested/dir/config.toml"));

        manager.save(&ConfigFile::with_defaults()).unwrap();

        assert!(manager.exists());
    }

    #[test]
    fn test_load_nonexistent_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        assert!(manager.load().is_err());
        assert_eq!(manager.load_or_default().unwrap(), ConfigFile::default());
    }

    #[test]
    fn test_load_or_default_rejects_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        fs::write(manager.config_path(), "[gemini\nmodel = ").unwrap();

        let err = manager.load_or_default().unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_load_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        fs::write(manager.config_path(), "[gemini]\nmodel = \"gemini-pro\"\n").unwrap();

        let loaded = manager.load().unwrap();

        assert_eq!(loaded.gemini.model, Some("gemini-pro".to_string()));
        assert!(loaded.gemini.endpoint.is_none());
    }

    #[test]
    #[serial]
    fn test_get_api_key_from_env() {
        // SAFETY: serialized with other env-mutating tests
        unsafe {
            std::env::set_var("LINGO_TEST_API_KEY", "test-key-value");
        }

        let gemini = GeminiConfig {
            api_key: Some("fallback-key".to_string()),
            api_key_env: Some("LINGO_TEST_API_KEY".to_string()),
            ..GeminiConfig::default()
        };

        // Environment variable takes priority
        assert_eq!(gemini.get_api_key(), Some("test-key-value".to_string()));

        // SAFETY: Cleanup test env var
        unsafe {
            std::env::remove_var("LINGO_TEST_API_KEY");
        }
    }

    #[test]
    #[serial]
    fn test_get_api_key_fallback() {
        // SAFETY: serialized with other env-mutating tests
        unsafe {
            std::env::remove_var("LINGO_TEST_NONEXISTENT_KEY");
        }

        let gemini = GeminiConfig {
            api_key: Some("fallback-key".to_string()),
            api_key_env: Some("LINGO_TEST_NONEXISTENT_KEY".to_string()),
            ..GeminiConfig::default()
        };

        // Falls back to api_key when env var not set
        assert_eq!(gemini.get_api_key(), Some("fallback-key".to_string()));
    }

    #[test]
    #[serial]
    fn test_get_api_key_empty_values_are_absent() {
        // SAFETY: serialized with other env-mutating tests
        unsafe {
            std::env::set_var("LINGO_TEST_EMPTY_KEY", "");
        }

        let gemini = GeminiConfig {
            api_key: Some(String::new()),
            api_key_env: Some("LINGO_TEST_EMPTY_KEY".to_string()),
            ..GeminiConfig::default()
        };

        assert_eq!(gemini.get_api_key(), None);

        // SAFETY: Cleanup test env var
        unsafe {
            std::env::remove_var("LINGO_TEST_EMPTY_KEY");
        }
    }

    #[test]
    fn test_api_key_env_default() {
        assert_eq!(GeminiConfig::default().api_key_env(), "GEMINI_API_KEY");
    }

    // resolve_config tests

    #[test]
    fn test_resolve_config_builtin_defaults() {
        let resolved = resolve_config(&ResolveOptions::default(), &ConfigFile::default()).unwrap();

        assert_eq!(resolved.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(resolved.model, DEFAULT_MODEL);
        assert_eq!(resolved.api_key_env, DEFAULT_API_KEY_ENV);
    }

    #[test]
    fn test_resolve_config_invalid_endpoint() {
        let options = ResolveOptions {
            endpoint: Some("not a url".to_string()),
            model: None,
        };

        let result = resolve_config(&options, &ConfigFile::default());

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid endpoint URL"));
    }

    #[test]
    fn test_resolve_config_empty_model() {
        let options = ResolveOptions {
            endpoint: None,
            model: Some("  ".to_string()),
        };

        let result = resolve_config(&options, &ConfigFile::default());

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Model name"));
    }
}
