use super::prompt::PromptTemplate;
use crate::{
    Error, Result,
    config::{Config, GenerationConfig},
    llm::{GenerationRequest, TextGenerator},
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Maps one user prompt to one model invocation and relays the reply.
pub struct CompletionGateway {
    generator: Arc<dyn TextGenerator>,
    template: PromptTemplate,
    params: GenerationConfig,
    max_prompt_chars: Option<usize>,
    // The model handle is not assumed reentrant; calls go through one at a time.
    generation_lock: Mutex<()>,
}

impl CompletionGateway {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        template: PromptTemplate,
        params: GenerationConfig,
    ) -> Self {
        Self {
            generator,
            template,
            params,
            max_prompt_chars: None,
            generation_lock: Mutex::new(()),
        }
    }

    pub fn from_config(generator: Arc<dyn TextGenerator>, config: &Config) -> Self {
        Self::new(
            generator,
            PromptTemplate::from(&config.prompt),
            config.generation.clone(),
        )
        .with_max_prompt_chars(config.prompt.max_prompt_chars)
    }

    pub fn with_max_prompt_chars(mut self, max: Option<usize>) -> Self {
        self.max_prompt_chars = max;
        self
    }

    pub fn model_name(&self) -> &str {
        self.generator.model_name()
    }

    pub fn template(&self) -> &PromptTemplate {
        &self.template
    }

    pub async fn generate(&self, prompt: &str) -> Result<String> {
        if let Some(max) = self.max_prompt_chars {
            let length = prompt.chars().count();
            if length > max {
                return Err(Error::PromptTooLong { length, max });
            }
        }

        let request = GenerationRequest::new(self.template.render(prompt), &self.params);

        let response = {
            let _guard = self.generation_lock.lock().await;
            self.generator
                .generate(request)
                .await
                .map_err(|e| match e {
                    err @ Error::Generation(_) => err,
                    other => Error::generation(other.to_string()),
                })?
        };

        debug!("Raw generation result: {:?}", response.candidates);

        let completion = response
            .first_text()
            .ok_or_else(|| Error::generation("model returned no candidates"))?;

        let reply = self.template.extract_reply(completion);
        info!("Generated reply of {} chars", reply.chars().count());

        Ok(reply)
    }
}
