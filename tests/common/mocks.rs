use async_trait::async_trait;
use completion_gateway::{
    Error, Result,
    llm::{Candidate, GenerationRequest, GenerationResponse, TextGenerator},
};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};
use std::time::Duration;

/// Echoes the rendered prompt back, the way a text-generation pipeline does,
/// followed by a reply that quotes the user's question.
#[derive(Debug, Default)]
pub struct EchoGenerator {
    pub requests: Mutex<Vec<GenerationRequest>>,
}

impl EchoGenerator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn get_requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// Pulls the user text back out of a prompt rendered with the default markers.
pub fn asked(rendered: &str) -> &str {
    rendered
        .rsplit("User: ")
        .next()
        .unwrap_or_default()
        .trim_end_matches("\nAssistant:")
}

#[async_trait]
impl TextGenerator for EchoGenerator {
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse> {
        let text = format!(
            "{} You asked about [{}].",
            request.prompt,
            asked(&request.prompt)
        );
        self.requests.lock().unwrap().push(request);

        Ok(GenerationResponse {
            candidates: vec![Candidate {
                generated_text: text,
                finish_reason: Some("Stop".to_string()),
            }],
        })
    }

    fn model_name(&self) -> &str {
        "echo-model"
    }
}

/// Always fails, like a backend that ran out of memory.
#[derive(Debug)]
pub struct FailingGenerator {
    pub message: String,
}

impl FailingGenerator {
    pub fn new(message: &str) -> Arc<Self> {
        Arc::new(Self {
            message: message.to_string(),
        })
    }
}

#[async_trait]
impl TextGenerator for FailingGenerator {
    async fn generate(&self, _request: GenerationRequest) -> Result<GenerationResponse> {
        Err(Error::generation(self.message.clone()))
    }

    fn model_name(&self) -> &str {
        "failing-model"
    }
}

/// Tracks how many generation calls overlap.
#[derive(Debug, Default)]
pub struct SlowGenerator {
    in_flight: AtomicUsize,
    pub max_in_flight: AtomicUsize,
    pub calls: AtomicUsize,
}

impl SlowGenerator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait]
impl TextGenerator for SlowGenerator {
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        tokio::time::sleep(Duration::from_millis(20)).await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.calls.fetch_add(1, Ordering::SeqCst);

        Ok(GenerationResponse {
            candidates: vec![Candidate {
                generated_text: format!("{} done", request.prompt),
                finish_reason: None,
            }],
        })
    }

    fn model_name(&self) -> &str {
        "slow-model"
    }
}
