use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::error::{PlannerError, Result};

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_MODEL: &str = "openai/gpt-4.1-mini";
const MAX_RETRIES: usize = 3;
const SERVICE: &str = "chat";

/// Free-text generation from a prompt
#[async_trait]
pub trait TextGenerator: Send + Sync + std::fmt::Debug {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Client for an OpenAI-compatible chat completions endpoint
#[derive(Clone, Debug)]
pub struct ChatClient {
    api_key: String,
    base_url: String,
    model: String,
    max_tokens: Option<u32>,
    temperature: f32,
    timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: Some(800),
            temperature: 0.7,
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn request_body(&self, prompt: &str) -> Value {
        let mut body = json!({
            "model": self.model,
            "temperature": self.temperature,
            "messages": [
                {
                    "role": "system",
                    "content": "You are a travel planner. Reply with a plain-text day itinerary that gives an exact clock time (for example 9:00 AM) for every activity."
                },
                {"role": "user", "content": prompt}
            ],
        });

        if let Some(max_tokens) = self.max_tokens {
            body["max_tokens"] = json!(max_tokens);
        }

        body
    }

    /// Send one chat completion, retrying on rate limits and server errors
    pub async fn chat_completion(&self, body: &Value) -> Result<String> {
        let client = reqwest::Client::builder().timeout(self.timeout).build()?;
        let request_url = build_chat_url(&self.base_url);

        let mut attempt = 0;
        let mut backoff = Duration::from_millis(250);

        loop {
            let response = client
                .post(&request_url)
                .bearer_auth(&self.api_key)
                .header("X-Title", "daytrip-rs")
                .json(body)
                .send()
                .await
                .map_err(|err| {
                    if err.is_timeout() {
                        PlannerError::Timeout(format!("chat completion after {:?}", self.timeout))
                    } else {
                        PlannerError::Http(err)
                    }
                })?;

            let status = response.status();
            let retry_after = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.parse::<u64>().ok())
                .map(Duration::from_secs);
            let response_text = response.text().await?;

            if status == StatusCode::TOO_MANY_REQUESTS {
                let wait = retry_after.unwrap_or(backoff);
                if attempt < MAX_RETRIES {
                    warn!(target: "daytrip::chat", attempt, wait_ms = wait.as_millis() as u64, "rate limited");
                    tokio::time::sleep(wait).await;
                    attempt += 1;
                    backoff *= 2;
                    continue;
                }

                return Err(PlannerError::RateLimit {
                    retry_after: wait.as_secs().max(1),
                });
            }

            if status.is_server_error() && attempt < MAX_RETRIES {
                warn!(target: "daytrip::chat", attempt, %status, "server error, retrying");
                tokio::time::sleep(backoff).await;
                attempt += 1;
                backoff *= 2;
                continue;
            }

            if !status.is_success() {
                return Err(PlannerError::Api {
                    service: SERVICE,
                    status: status.as_u16(),
                    message: api_error_message(&response_text),
                });
            }

            let parsed: ChatResponse = PlannerError::decode(SERVICE, &response_text)?;
            let content = parsed
                .choices
                .into_iter()
                .next()
                .and_then(|choice| choice.message.content)
                .ok_or_else(|| PlannerError::Api {
                    service: SERVICE,
                    status: status.as_u16(),
                    message: "response contained no message content".to_string(),
                })?;

            debug!(target: "daytrip::chat", chars = content.len(), "completion received");
            return Ok(content);
        }
    }
}

#[async_trait]
impl TextGenerator for ChatClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let body = self.request_body(prompt);
        self.chat_completion(&body).await
    }
}

fn api_error_message(response_text: &str) -> String {
    serde_json::from_str::<Value>(response_text)
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .and_then(|error| error.get("message"))
                .and_then(|message| message.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| response_text.to_string())
}

fn build_chat_url(base_url: &str) -> String {
    let trimmed = base_url.trim_end_matches('/');
    if trimmed.ends_with("/chat/completions") {
        trimmed.to_string()
    } else {
        format!("{}/chat/completions", trimmed)
    }
}
