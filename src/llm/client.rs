use super::types::*;
use crate::{Result, config::ModelConfig};
use async_openai::{Client, config::OpenAIConfig, types as openai_types};
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse>;

    fn model_name(&self) -> &str;
}

/// Generator backed by an OpenAI-compatible `/completions` endpoint.
pub struct OpenAiGenerator {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiGenerator {
    pub fn new(config: &ModelConfig) -> Self {
        let mut openai_config = OpenAIConfig::new().with_api_key(config.api_key.clone());

        if !config.base_url.is_empty() {
            openai_config = openai_config.with_api_base(config.base_url.clone());
        }

        let client = Client::with_config(openai_config);

        Self {
            client,
            model: config.name.clone(),
        }
    }

    /// Builds the client and, unless disabled, confirms the backend serves the model.
    pub async fn load(config: &ModelConfig) -> Result<Self> {
        let generator = Self::new(config);

        if config.verify_on_startup {
            info!("Verifying model '{}' at {}", config.name, config.base_url);
            let model = generator.client.models().retrieve(&generator.model).await?;
            info!("Model '{}' is available (owned by {})", model.id, model.owned_by);
        }

        Ok(generator)
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse> {
        debug!(
            "Creating completion: {} prompt chars, max_tokens={}, temperature={}, top_p={}",
            request.prompt.len(),
            request.max_new_tokens,
            request.effective_temperature(),
            request.top_p
        );

        let openai_request = openai_types::CreateCompletionRequestArgs::default()
            .model(&self.model)
            .prompt(request.prompt.as_str())
            .max_tokens(request.max_new_tokens)
            .temperature(request.effective_temperature())
            .top_p(request.top_p)
            .n(1)
            .echo(true)
            .build()?;

        let response = self.client.completions().create(openai_request).await?;

        debug!(
            "Received completion response with {} choices",
            response.choices.len()
        );

        let candidates = response
            .choices
            .into_iter()
            .map(|choice| Candidate {
                generated_text: choice.text,
                finish_reason: choice.finish_reason.map(|fr| format!("{fr:?}")),
            })
            .collect();

        Ok(GenerationResponse { candidates })
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
