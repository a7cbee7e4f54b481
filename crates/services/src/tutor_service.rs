use std::env;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::TutorError;

/// Fallback shown when no API credential is configured. Returned without any
/// network attempt.
pub const CONFIG_MISSING_MESSAGE: &str =
    "API Key is missing. Please check your environment variables.";

/// Fallback shown for any transport or service failure.
pub const SERVICE_FAILURE_MESSAGE: &str =
    "Erro ao conectar com o Tutor IA. Tente novamente mais tarde.";

#[derive(Clone, Debug)]
pub struct TutorConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl TutorConfig {
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("EZ_TUTOR_API_KEY").ok()?;
        if api_key.trim().is_empty() {
            return None;
        }
        let base_url =
            env::var("EZ_TUTOR_BASE_URL").unwrap_or_else(|_| "https://api.openai.com/v1".into());
        let model = env::var("EZ_TUTOR_MODEL").unwrap_or_else(|_| "gpt-4o-mini".into());
        Some(Self {
            base_url,
            api_key,
            model,
        })
    }
}

/// Stateless gateway to the external tutoring service.
///
/// One round trip per question, no retries, no streaming. Failures never
/// propagate: [`TutorService::ask`] always resolves to a displayable string,
/// substituting one of two fixed fallbacks on any failure path.
#[derive(Clone)]
pub struct TutorService {
    client: Client,
    config: Option<TutorConfig>,
}

impl TutorService {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(TutorConfig::from_env())
    }

    #[must_use]
    pub fn new(config: Option<TutorConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }

    /// Ask the tutor a free-form question about the current lesson topic.
    ///
    /// Total: returns the tutor's answer on success, the configuration
    /// fallback when no credential is set, and the generic failure fallback
    /// on any transport or service error.
    pub async fn ask(&self, topic: &str, question: &str) -> String {
        match self.generate(&tutor_prompt(topic, question)).await {
            Ok(answer) => answer,
            Err(TutorError::Disabled) => CONFIG_MISSING_MESSAGE.to_string(),
            Err(err) => {
                tracing::warn!(error = %err, "tutor gateway request failed");
                SERVICE_FAILURE_MESSAGE.to_string()
            }
        }
    }

    /// Generate text from a prompt.
    ///
    /// # Errors
    ///
    /// Returns `TutorError` when the gateway is disabled, the request fails,
    /// or the response is empty.
    pub async fn generate(&self, prompt: &str) -> Result<String, TutorError> {
        let config = self.config.as_ref().ok_or(TutorError::Disabled)?;

        let url = format!("{}/chat/completions", config.base_url.trim_end_matches('/'));
        let payload = ChatRequest {
            model: config.model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: prompt.to_string(),
            }],
            temperature: 0.2,
        };

        let response = self
            .client
            .post(url)
            .bearer_auth(&config.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(TutorError::HttpStatus(response.status()));
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(TutorError::EmptyResponse)?;

        Ok(content.trim().to_string())
    }
}

/// Instruction sent with every question: teach in Portuguese, exemplify in
/// English, stay short.
fn tutor_prompt(topic: &str, question: &str) -> String {
    format!(
        "You are an expert English teacher for Portuguese speakers.\n\n\
         Current Lesson Topic: {topic}\n\
         Student Question: \"{question}\"\n\n\
         Explain the concept clearly in Portuguese, but provide examples in English.\n\
         Keep it concise (max 2 paragraphs). Use markdown for bolding key terms."
    )
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_carries_topic_and_question_verbatim() {
        let prompt = tutor_prompt("Verb to be", "Quando uso 'am'?");
        assert!(prompt.contains("Current Lesson Topic: Verb to be"));
        assert!(prompt.contains("Student Question: \"Quando uso 'am'?\""));
    }

    #[tokio::test]
    async fn disabled_gateway_short_circuits_to_config_fallback() {
        let tutor = TutorService::new(None);
        assert!(!tutor.enabled());
        let answer = tutor.ask("Greetings", "Como digo bom dia?").await;
        assert_eq!(answer, CONFIG_MISSING_MESSAGE);
    }

    #[tokio::test]
    async fn unreachable_service_maps_to_failure_fallback() {
        // A port in the dynamic range with nothing listening; connection is
        // refused immediately rather than timing out.
        let tutor = TutorService::new(Some(TutorConfig {
            base_url: "http://127.0.0.1:59999".into(),
            api_key: "test-key".into(),
            model: "test-model".into(),
        }));
        let answer = tutor.ask("Greetings", "Hello?").await;
        assert_eq!(answer, SERVICE_FAILURE_MESSAGE);
    }
}
