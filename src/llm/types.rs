use crate::config::GenerationConfig;
use serde::{Deserialize, Serialize};

/// A single call to the text-generation model.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub max_new_tokens: u32,
    pub do_sample: bool,
    pub temperature: f32,
    pub top_p: f32,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>, params: &GenerationConfig) -> Self {
        Self {
            prompt: prompt.into(),
            max_new_tokens: params.max_new_tokens,
            do_sample: params.do_sample,
            temperature: params.temperature,
            top_p: params.top_p,
        }
    }

    /// Temperature actually sent to the backend. Zero means greedy decoding.
    pub fn effective_temperature(&self) -> f32 {
        if self.do_sample { self.temperature } else { 0.0 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub generated_text: String,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct GenerationResponse {
    pub candidates: Vec<Candidate>,
}

impl GenerationResponse {
    pub fn first_text(&self) -> Option<&str> {
        self.candidates.first().map(|c| c.generated_text.as_str())
    }
}
