mod manager;

pub use manager::{
    ConfigFile, ConfigManager, GeminiConfig, ResolveOptions, ResolvedConfig, resolve_config,
};
