//! Environment Context: the host strings every predicate reads
//!
//! Captured once, lower-cased, and never mutated afterwards.

use crate::error::SniffError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variables read by [`EnvContext::from_env`]
pub const ENV_USER_AGENT: &str = "SNIFF_USER_AGENT";
pub const ENV_VENDOR: &str = "SNIFF_VENDOR";
pub const ENV_APP_VERSION: &str = "SNIFF_APP_VERSION";
pub const ENV_ONLINE: &str = "SNIFF_ONLINE";
pub const ENV_TOUCH: &str = "SNIFF_TOUCH";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EnvContext {
    user_agent: String,
    vendor: String,
    app_version: String,
    online: Option<bool>,
    touch: bool,
}

/// On-disk / document shape of a context. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ContextFile {
    #[serde(alias = "userAgent")]
    user_agent: Option<String>,
    vendor: Option<String>,
    #[serde(alias = "appVersion")]
    app_version: Option<String>,
    #[serde(alias = "onLine")]
    online: Option<bool>,
    #[serde(alias = "touchDevice")]
    touch: Option<bool>,
}

impl From<ContextFile> for EnvContext {
    fn from(file: ContextFile) -> Self {
        let mut context = EnvContext::new(
            file.user_agent.unwrap_or_default(),
            file.vendor.unwrap_or_default(),
            file.app_version.unwrap_or_default(),
        )
        .with_touch(file.touch.unwrap_or(false));
        context.online = file.online;
        context
    }
}

impl EnvContext {
    /// Capture a context from the three navigator strings
    pub fn new(
        user_agent: impl Into<String>,
        vendor: impl Into<String>,
        app_version: impl Into<String>,
    ) -> Self {
        let context = Self {
            user_agent: user_agent.into().to_lowercase(),
            vendor: vendor.into().to_lowercase(),
            app_version: app_version.into().to_lowercase(),
            online: None,
            touch: false,
        };

        tracing::debug!(
            user_agent_len = context.user_agent.len(),
            vendor_len = context.vendor.len(),
            app_version_len = context.app_version.len(),
            "captured environment context"
        );

        context
    }

    /// A context with nothing captured: no navigator, connectivity unknown
    pub fn empty() -> Self {
        Self::default()
    }

    /// Set the connectivity flag
    pub fn with_online(mut self, online: bool) -> Self {
        self.online = Some(online);
        self
    }

    /// Set touch capability
    pub fn with_touch(mut self, touch: bool) -> Self {
        self.touch = touch;
        self
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    pub fn app_version(&self) -> &str {
        &self.app_version
    }

    /// Connectivity flag, `None` when the host never reported one
    pub fn online(&self) -> Option<bool> {
        self.online
    }

    pub fn touch(&self) -> bool {
        self.touch
    }

    /// Parse a context from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, SniffError> {
        // an empty document deserializes to unit, not to a map
        if yaml.trim().is_empty() {
            return Ok(Self::empty());
        }
        let file: ContextFile = serde_yaml::from_str(yaml)?;
        Ok(file.into())
    }

    /// Parse a context from JSON
    pub fn from_json(json: &str) -> Result<Self, SniffError> {
        let file: ContextFile = serde_json::from_str(json)?;
        Ok(file.into())
    }

    /// Load a context file, choosing the format by extension
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SniffError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "yaml" | "yml" => Self::from_yaml(&std::fs::read_to_string(path)?),
            "json" => Self::from_json(&std::fs::read_to_string(path)?),
            _ => Err(SniffError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Capture a context from the process environment
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Capture a context through an arbitrary variable lookup.
    ///
    /// Unset strings become empty; booleans that are unset or unreadable
    /// count as absent.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut context = Self::new(
            lookup(ENV_USER_AGENT).unwrap_or_default(),
            lookup(ENV_VENDOR).unwrap_or_default(),
            lookup(ENV_APP_VERSION).unwrap_or_default(),
        )
        .with_touch(lookup(ENV_TOUCH).and_then(|v| parse_flag(&v)).unwrap_or(false));
        context.online = lookup(ENV_ONLINE).and_then(|v| parse_flag(&v));
        context
    }

    /// Stable content hash of everything the predicates can observe
    pub fn fingerprint(&self) -> String {
        let online = match self.online {
            Some(true) => "1",
            Some(false) => "0",
            None => "-",
        };
        let data = format!(
            "{}\0{}\0{}\0{}\0{}",
            self.user_agent,
            self.vendor,
            self.app_version,
            online,
            if self.touch { "1" } else { "0" },
        );
        format!("blake3:{}", blake3::hash(data.as_bytes()))
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
