mod prompt;
mod service;

pub use prompt::PromptTemplate;
pub use service::CompletionGateway;
