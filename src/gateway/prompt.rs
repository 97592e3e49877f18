use crate::config::PromptConfig;

/// Fixed instruction template wrapped around every user prompt.
///
/// The assistant marker doubles as the role-delimiter used to cut the reply
/// out of the raw completion.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptTemplate {
    preamble: String,
    user_marker: String,
    assistant_marker: String,
}

impl PromptTemplate {
    pub fn new(
        preamble: impl Into<String>,
        user_marker: impl Into<String>,
        assistant_marker: impl Into<String>,
    ) -> Self {
        Self {
            preamble: preamble.into(),
            user_marker: user_marker.into(),
            assistant_marker: assistant_marker.into(),
        }
    }

    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    pub fn delimiter(&self) -> &str {
        &self.assistant_marker
    }

    pub fn render(&self, user_prompt: &str) -> String {
        format!(
            "{}\n\n{} {}\n{}",
            self.preamble, self.user_marker, user_prompt, self.assistant_marker
        )
    }

    /// Extracts the assistant reply from a raw completion.
    ///
    /// Everything up to and including the last delimiter is dropped. A
    /// completion without any delimiter (backend did not echo the prompt) is
    /// returned trimmed.
    pub fn extract_reply(&self, completion: &str) -> String {
        let reply = match completion.rfind(&self.assistant_marker) {
            Some(pos) => &completion[pos + self.assistant_marker.len()..],
            None => completion,
        };
        reply.trim().to_string()
    }
}

impl From<&PromptConfig> for PromptTemplate {
    fn from(config: &PromptConfig) -> Self {
        Self::new(
            config.preamble.clone(),
            config.user_marker.clone(),
            config.assistant_marker.clone(),
        )
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::from(&PromptConfig::default())
    }
}
