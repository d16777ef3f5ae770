use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

use crate::prompts::PromptTemplate;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Generation settings (prompting, creativity, history)
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Provider settings
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generation: GenerationConfig::default(),
            provider: ProviderConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.provider.model.is_empty() {
            return Err(anyhow!("Provider model must not be empty"));
        }

        if self.provider.provider_type != "groq" {
            return Err(anyhow!(
                "Unsupported provider type: {}",
                self.provider.provider_type
            ));
        }

        // Same range as the original creativity slider
        if !(0.1..=1.5).contains(&self.generation.creativity) {
            return Err(anyhow!(
                "Creativity must be between 0.1 and 1.5, got {}",
                self.generation.creativity
            ));
        }

        if self.generation.history_window == 0 {
            return Err(anyhow!("History window must be at least 1 message"));
        }

        Ok(())
    }
}

/// Generation settings applicable to every request
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GenerationConfig {
    /// System prompt used for every generation
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,

    /// Default video tone
    #[serde(default = "default_tone")]
    pub tone: String,

    /// Default target duration description
    #[serde(default = "default_target_duration")]
    pub target_duration: String,

    /// Sampling temperature; higher values give more creative hooks
    #[serde(default = "default_creativity")]
    pub creativity: f32,

    /// Number of trailing chat-history messages sent with each request
    #[serde(default = "default_history_window")]
    pub history_window: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            system_prompt: default_system_prompt(),
            tone: default_tone(),
            target_duration: default_target_duration(),
            creativity: default_creativity(),
            history_window: default_history_window(),
        }
    }
}

/// Provider configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProviderConfig {
    // @field: Provider type identifier
    #[serde(rename = "type", default = "default_provider_type")]
    pub provider_type: String,

    // @field: Model name
    #[serde(default = "default_model")]
    pub model: String,

    // @field: API key (falls back to GROQ_API_KEY when empty)
    #[serde(default = "String::new")]
    pub api_key: String,

    // @field: Service URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    // @field: Timeout seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            provider_type: default_provider_type(),
            model: default_model(),
            api_key: String::new(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ProviderConfig {
    /// API key from the config file, or from the GROQ_API_KEY environment
    /// variable when the config leaves it empty
    pub fn resolve_api_key(&self) -> Result<String> {
        if !self.api_key.is_empty() {
            return Ok(self.api_key.clone());
        }

        std::env::var("GROQ_API_KEY")
            .map_err(|_| anyhow!("No API key configured and GROQ_API_KEY is not set"))
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_system_prompt() -> String {
    PromptTemplate::SCRIPT_WRITER.to_string()
}

fn default_tone() -> String {
    "High Energy".to_string()
}

fn default_target_duration() -> String {
    "Standard (5-10 mins)".to_string()
}

fn default_creativity() -> f32 {
    0.7
}

fn default_history_window() -> usize {
    6
}

fn default_provider_type() -> String {
    "groq".to_string()
}

fn default_model() -> String {
    "llama-3.1-8b-instant".to_string()
}

fn default_endpoint() -> String {
    "https://api.groq.com/openai".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}
