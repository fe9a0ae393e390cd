use crate::{config::DeepseekConfig, Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, warn};

/// Upstream error message that triggers the balance fallback.
const INSUFFICIENT_BALANCE_MESSAGE: &str = "Insufficient Balance";

/// Returned as ordinary data when the account has no credit left.
pub const INSUFFICIENT_BALANCE_REPLY: &str = "账户余额不足，请充值后再试。";

/// Returned as ordinary data when a 2xx body has neither error nor choices.
pub const NO_ANSWER_REPLY: &str = "对不起，没找到答案";

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub error: Option<ApiError>,
    /// The upstream sends `"choices": null` on some degenerate responses;
    /// that counts as "no choices", not a parse failure.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub choices: Vec<ChatCompletionChoice>,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<ChatCompletionChoice>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub message: String,
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionChoice {
    pub message: ChatMessage,
}

#[derive(Debug, Clone)]
pub struct DeepseekClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl DeepseekClient {
    pub fn new(config: DeepseekConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url,
            api_key: config.api_key,
            model: config.model,
        }
    }

    /// Sends a single-turn chat completion and shapes the outcome.
    ///
    /// Upstream-reported application errors come back as ordinary answer
    /// text; only transport failures, non-2xx statuses and unparseable
    /// bodies become errors, all wrapped with the `DeepSeek API error:`
    /// prefix.
    pub async fn ask(&self, prompt: &str) -> Result<String> {
        self.ask_inner(prompt)
            .await
            .map_err(|e| Error::deepseek(e.to_string()))
    }

    async fn ask_inner(&self, prompt: &str) -> Result<String> {
        debug!("Sending chat completion request to model: {}", self.model);

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        };

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(Error::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let result: ChatCompletionResponse = response.json().await?;

        if let Some(error) = result.error {
            warn!("DeepSeek reported an application error: {}", error.message);
            if error.message == INSUFFICIENT_BALANCE_MESSAGE {
                return Ok(INSUFFICIENT_BALANCE_REPLY.to_string());
            }
            // Upstream-reported errors are surfaced as answer text.
            return Ok(error.message);
        }

        if let Some(choice) = result.choices.first() {
            return Ok(choice.message.content.trim().to_string());
        }

        Ok(NO_ANSWER_REPLY.to_string())
    }
}
