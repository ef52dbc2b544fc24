use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_API_BASE_URL: &str = "http://alexaev3api.azurewebsites.net/";
pub const APP_ID_ENV: &str = "APP_ID";
pub const API_BASE_URL_ENV: &str = "REMOTE_API_BASE_URL";

/// Runtime configuration for the skill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillConfig {
    /// Expected voice application id; requests from other applications are rejected
    pub app_id: Option<String>,
    /// Base URL of the remote device API
    pub api_base_url: String,
    /// Locale used when the host's locale has no phrase table
    pub default_locale: String,
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self {
            app_id: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            default_locale: "en".to_string(),
        }
    }
}

impl SkillConfig {
    pub fn load_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config: {}", path.display()))?;
        let config: SkillConfig = serde_yaml::from_str(&raw)
            .with_context(|| format!("parsing yaml: {}", path.display()))?;
        Ok(config)
    }

    /// Apply `APP_ID` and `REMOTE_API_BASE_URL` from the process environment
    pub fn with_env(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Empty values are treated as unset.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(app_id) = var(APP_ID_ENV) {
            self.app_id = Some(app_id);
        }
        if let Some(url) = var(API_BASE_URL_ENV) {
            self.api_base_url = url;
        }
        self
    }

    pub fn app_id(&self) -> Option<&str> {
        self.app_id.as_deref().filter(|id| !id.is_empty())
    }
}
