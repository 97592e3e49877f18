mod client;
mod types;

pub use client::{OpenAiGenerator, TextGenerator};
pub use types::*;
