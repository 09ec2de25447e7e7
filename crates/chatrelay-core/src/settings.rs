//! Provider settings, read once from the environment at startup.
//!
//! Missing or empty API keys are a startup error: the process must not begin
//! serving traffic without one.

use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

/// Environment variable holding the provider API key.
pub const API_KEY_VAR: &str = "GROQ_API_KEY";
/// Environment variable selecting the model.
pub const MODEL_VAR: &str = "GROQ_MODEL";
/// Environment variable overriding the provider API base URL.
pub const BASE_URL_VAR: &str = "GROQ_BASE_URL";

/// Model used when `GROQ_MODEL` is unset.
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

/// Errors raised while loading settings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("GROQ_API_KEY environment variable not set.")]
    MissingApiKey,

    #[error("GROQ_API_KEY environment variable is empty.")]
    EmptyApiKey,
}

/// Settings for the completion provider.
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub api_key: Secret<String>,
    pub model: String,
    /// `None` means the adapter's built-in default.
    pub base_url: Option<String>,
}

impl ProviderSettings {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup.
    ///
    /// Blank `GROQ_MODEL` or `GROQ_BASE_URL` values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR).ok_or(SettingsError::MissingApiKey)?;
        if api_key.trim().is_empty() {
            return Err(SettingsError::EmptyApiKey);
        }

        let model = lookup(MODEL_VAR)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let base_url = lookup(BASE_URL_VAR).filter(|u| !u.trim().is_empty());

        Ok(Self {
            api_key: Secret::new(api_key),
            model,
            base_url,
        })
    }

    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_missing_api_key() {
        let result = ProviderSettings::from_lookup(lookup_from(&[]));
        assert_eq!(result.unwrap_err(), SettingsError::MissingApiKey);
    }

    #[test]
    fn test_empty_api_key() {
        let result = ProviderSettings::from_lookup(lookup_from(&[(API_KEY_VAR, "  ")]));
        assert_eq!(result.unwrap_err(), SettingsError::EmptyApiKey);
    }

    #[test]
    fn test_default_model() {
        let settings = ProviderSettings::from_lookup(lookup_from(&[(API_KEY_VAR, "gsk_test")])).unwrap();
        assert_eq!(settings.model, DEFAULT_MODEL);
        assert_eq!(settings.api_key(), "gsk_test");
        assert!(settings.base_url.is_none());
    }

    #[test]
    fn test_overrides() {
        let settings = ProviderSettings::from_lookup(lookup_from(&[
            (API_KEY_VAR, "gsk_test"),
            (MODEL_VAR, "llama-3.3-70b-versatile"),
            (BASE_URL_VAR, "http://127.0.0.1:9999/v1"),
        ]))
        .unwrap();

        assert_eq!(settings.model, "llama-3.3-70b-versatile");
        assert_eq!(settings.base_url.as_deref(), Some("http://127.0.0.1:9999/v1"));
    }

    #[test]
    fn test_blank_model_falls_back_to_default() {
        let settings =
            ProviderSettings::from_lookup(lookup_from(&[(API_KEY_VAR, "k"), (MODEL_VAR, "")])).unwrap();
        assert_eq!(settings.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_debug_redacts_key() {
        let settings = ProviderSettings::from_lookup(lookup_from(&[(API_KEY_VAR, "gsk_super_secret")])).unwrap();
        let debug = format!("{settings:?}");
        assert!(!debug.contains("gsk_super_secret"));
    }

    #[test]
    fn test_missing_key_message() {
        assert_eq!(
            SettingsError::MissingApiKey.to_string(),
            "GROQ_API_KEY environment variable not set."
        );
    }
}
