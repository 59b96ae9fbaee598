// Application configuration.
//
// A client-side bundle has no process environment at runtime, so values are
// captured from the build environment (`trunk build` / `cargo build`) and
// fall back to the defaults below.

use tracing::Level;

pub const DEFAULT_STORAGE_KEY: &str = "approveflow_projects";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TEXT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_VISION_MODEL: &str = "gemini-2.5-flash-image";

#[derive(Debug, Clone, PartialEq)]
pub struct AssistantConfig {
    pub api_key: Option<String>,
    pub api_base: String,
    pub text_model: String,
    pub vision_model: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: DEFAULT_API_BASE.to_string(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            vision_model: DEFAULT_VISION_MODEL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub storage_key: String,
    pub log_level: Level,
    pub assistant: AssistantConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            log_level: Level::INFO,
            assistant: AssistantConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(|name| match name {
            "GEMINI_API_KEY" => option_env!("GEMINI_API_KEY"),
            "APPROVEFLOW_API_BASE" => option_env!("APPROVEFLOW_API_BASE"),
            "APPROVEFLOW_TEXT_MODEL" => option_env!("APPROVEFLOW_TEXT_MODEL"),
            "APPROVEFLOW_VISION_MODEL" => option_env!("APPROVEFLOW_VISION_MODEL"),
            "APPROVEFLOW_STORAGE_KEY" => option_env!("APPROVEFLOW_STORAGE_KEY"),
            "APPROVEFLOW_LOG" => option_env!("APPROVEFLOW_LOG"),
            _ => None,
        })
    }

    // Builds a config from a variable lookup. Blank values count as unset.
    pub fn from_values<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Self {
        let get = |name: &str| {
            lookup(name)
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };
        let defaults = AppConfig::default();

        Self {
            storage_key: get("APPROVEFLOW_STORAGE_KEY").unwrap_or(defaults.storage_key),
            log_level: get("APPROVEFLOW_LOG")
                .and_then(|v| v.parse::<Level>().ok())
                .unwrap_or(defaults.log_level),
            assistant: AssistantConfig {
                api_key: get("GEMINI_API_KEY"),
                api_base: get("APPROVEFLOW_API_BASE")
                    .map(|v| v.trim_end_matches('/').to_string())
                    .unwrap_or(defaults.assistant.api_base),
                text_model: get("APPROVEFLOW_TEXT_MODEL").unwrap_or(defaults.assistant.text_model),
                vision_model: get("APPROVEFLOW_VISION_MODEL")
                    .unwrap_or(defaults.assistant.vision_model),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_lookup_yields_defaults() {
        let config = AppConfig::from_values(|_| None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.storage_key, "approveflow_projects");
    }

    #[test]
    fn overrides_are_trimmed_and_blank_values_ignored() {
        let config = AppConfig::from_values(|name| match name {
            "GEMINI_API_KEY" => Some("  secret "),
            "APPROVEFLOW_API_BASE" => Some("http://localhost:9000/v1/"),
            "APPROVEFLOW_TEXT_MODEL" => Some("   "),
            "APPROVEFLOW_LOG" => Some("debug"),
            _ => None,
        });

        assert_eq!(config.assistant.api_key.as_deref(), Some("secret"));
        assert_eq!(config.assistant.api_base, "http://localhost:9000/v1");
        assert_eq!(config.assistant.text_model, DEFAULT_TEXT_MODEL);
        assert_eq!(config.log_level, Level::DEBUG);
    }
}
