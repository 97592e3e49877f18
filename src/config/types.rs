use crate::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub prompt: PromptConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Where the text-generation model is served and which model to use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_model_name")]
    pub name: String,
    /// Check once at startup that the backend serves `name`.
    #[serde(default = "default_true")]
    pub verify_on_startup: bool,
}

/// Decoding parameters sent with every generation call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    #[serde(default = "default_max_new_tokens")]
    pub max_new_tokens: u32,
    #[serde(default = "default_true")]
    pub do_sample: bool,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_top_p")]
    pub top_p: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptConfig {
    #[serde(default = "default_preamble")]
    pub preamble: String,
    #[serde(default = "default_user_marker")]
    pub user_marker: String,
    #[serde(default = "default_assistant_marker")]
    pub assistant_marker: String,
    #[serde(default)]
    pub max_prompt_chars: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_allowed_origin")]
    pub allowed_origin: String,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        self.prompt.validate()
    }
}

impl PromptConfig {
    /// Both markers must be non-blank: an empty delimiter matches at the end
    /// of every completion and would cut every reply to nothing.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("user_marker", &self.user_marker),
            ("assistant_marker", &self.assistant_marker),
        ] {
            if value.trim().is_empty() {
                return Err(Error::config(format!("prompt.{} must not be blank", field)));
            }
        }
        Ok(())
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            name: default_model_name(),
            verify_on_startup: true,
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_new_tokens: default_max_new_tokens(),
            do_sample: true,
            temperature: default_temperature(),
            top_p: default_top_p(),
        }
    }
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            preamble: default_preamble(),
            user_marker: default_user_marker(),
            assistant_marker: default_assistant_marker(),
            max_prompt_chars: None,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origin: default_allowed_origin(),
            logs: LogsConfig::default(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_base_url() -> String {
    "http://localhost:8080/v1".to_string()
}

fn default_model_name() -> String {
    "google/gemma-2b-it".to_string()
}

fn default_max_new_tokens() -> u32 {
    200
}

fn default_temperature() -> f32 {
    0.3
}

fn default_top_p() -> f32 {
    0.9
}

fn default_preamble() -> String {
    "You are a cybersecurity assistant. Only answer questions about cybersecurity, \
     such as threats, attacks, defenses and safe practices. If a request is not about \
     cybersecurity, politely decline and say you can only help with cybersecurity topics."
        .to_string()
}

fn default_user_marker() -> String {
    "User:".to_string()
}

fn default_assistant_marker() -> String {
    "Assistant:".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_allowed_origin() -> String {
    "http://localhost:3000".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}
