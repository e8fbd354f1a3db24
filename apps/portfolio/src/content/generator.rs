use async_trait::async_trait;
use serde_json::Value;

use crate::llm_client::{LlmClient, LlmError};

/// Raw text returned by a structured-generation call.
#[derive(Debug, Clone)]
pub struct GeneratedText {
    pub text: String,
}

/// Remote content generator. Implement this to swap the backend without
/// touching the resolver.
///
/// Carried in `AppState` as `Arc<dyn ContentGenerator>`.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        schema: &Value,
        mime_type: &str,
    ) -> Result<GeneratedText, LlmError>;
}

#[async_trait]
impl ContentGenerator for LlmClient {
    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        schema: &Value,
        mime_type: &str,
    ) -> Result<GeneratedText, LlmError> {
        let response = self.call(model, prompt, schema, mime_type).await?;
        let text = response.text().ok_or(LlmError::EmptyContent)?;
        Ok(GeneratedText { text })
    }
}
