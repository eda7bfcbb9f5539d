//! Site Configuration
//!
//! Copy and timings for the landing page. Every field has a default so a
//! JSON override only needs to name what it changes.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::faq::DEFAULT_FALLBACK;

/// Chat widget settings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Simulated thinking time before a reply
    #[serde(default = "default_delay_ms")]
    pub reply_delay_ms: u64,

    /// Seeded first assistant message
    #[serde(default = "default_greeting")]
    pub greeting: String,

    /// Reply when no FAQ entry matches
    #[serde(default = "default_fallback")]
    pub fallback: String,

    /// Panel header
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// Example questions shown under the input
    #[serde(default = "default_hint")]
    pub hint: String,
}

fn default_delay_ms() -> u64 { 1000 }
fn default_greeting() -> String { "Hi there! How can I help you with software license reselling today?".into() }
fn default_fallback() -> String { DEFAULT_FALLBACK.into() }
fn default_title() -> String { "SoftSell Assistant".into() }
fn default_placeholder() -> String { "Ask a question...".into() }
fn default_hint() -> String { "Example questions: \"How do I sell my license?\", \"How much can I get?\"".into() }

impl ChatConfig {
    pub const fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: default_delay_ms(),
            greeting: default_greeting(),
            fallback: default_fallback(),
            title: default_title(),
            placeholder: default_placeholder(),
            hint: default_hint(),
        }
    }
}

/// Contact form settings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Simulated submission time
    #[serde(default = "default_delay_ms")]
    pub submit_delay_ms: u64,
}

impl ContactConfig {
    pub const fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: default_delay_ms(),
        }
    }
}

/// Everything the landing page reads at start-up
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub chat: ChatConfig,

    #[serde(default)]
    pub contact: ContactConfig,
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON override
    pub fn from_json(json: &str) -> Result<Self> {
        let config = serde_json::from_str(json)?;
        tracing::debug!(?config, "Loaded site config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.chat.reply_delay(), Duration::from_millis(1000));
        assert_eq!(config.contact.submit_delay(), Duration::from_secs(1));
        assert_eq!(config.chat.title, "SoftSell Assistant");
        assert_eq!(config.chat.fallback, DEFAULT_FALLBACK);
    }

    #[test]
    fn test_partial_override() {
        let config = SiteConfig::from_json(r#"{"chat": {"reply_delay_ms": 250}}"#).unwrap();
        assert_eq!(config.chat.reply_delay_ms, 250);
        assert_eq!(config.chat.greeting, ChatConfig::default().greeting);
        assert_eq!(config.contact, ContactConfig::default());
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_bad_json() {
        assert!(SiteConfig::from_json("not json").is_err());
    }
}
