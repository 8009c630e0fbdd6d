// SPDX-FileCopyrightText: 2026 Pulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider-mode classification over an OpenAI-compatible chat-completions
//! endpoint.
//!
//! The provider's answer is untrusted input: the request/parse path is an
//! explicit fallible operation, and [`Classifier::classify`] maps every
//! failure variant (error status, network failure, body read, JSON decode,
//! unknown sentiment) to the neutral fallback so ingestion always completes.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use pulse_config::model::ProviderConfig;
use pulse_core::types::TOPIC_OTHER;
use pulse_core::{Classification, Classifier, PulseError, Sentiment};

use crate::topics::TopicSet;

/// Fixed instruction demanding a strict JSON object answer.
const SYSTEM_INSTRUCTION: &str = "You are an assistant that analyzes customer feedback. \
     Return ONLY a JSON object: \
     {\"sentiment\":\"positive|neutral|negative\",\"topic\":\"one label from list\"}.";

/// Classifier delegating to an external chat-completions service.
pub struct ProviderClassifier {
    client: reqwest::Client,
    model: String,
    base_url: String,
    topics: TopicSet,
}

impl ProviderClassifier {
    /// Creates a provider classifier from configuration.
    ///
    /// Fails if the api key is absent or not a valid header value. No
    /// request timeout is set: the classification call may block its
    /// request for as long as the provider takes.
    pub fn new(config: &ProviderConfig, topics: TopicSet) -> Result<Self, PulseError> {
        let api_key = config
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                PulseError::Config("provider.api_key is required in provider mode".to_string())
            })?;

        let mut headers = HeaderMap::new();
        headers.insert(
            "authorization",
            HeaderValue::from_str(&format!("Bearer {api_key}"))
                .map_err(|e| PulseError::Config(format!("invalid api key header value: {e}")))?,
        );
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| PulseError::Provider {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            model: config.model.clone(),
            base_url: config.base_url.clone(),
            topics,
        })
    }

    /// One synchronous classification attempt. No retry, no backoff.
    async fn request_classification(&self, text: &str) -> Result<Classification, PulseError> {
        let user_content = format!(
            "Message:\n{text}\n\nAllowed topics (choose one):\n{}",
            self.topics
                .labels()
                .iter()
                .map(|l| format!("- {l}"))
                .collect::<Vec<_>>()
                .join("\n")
        );

        let request = ChatRequest {
            model: self.model.clone(),
            temperature: 0.0,
            response_format: ResponseFormat {
                format_type: "json_object".to_string(),
            },
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_INSTRUCTION.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user_content,
                },
            ],
        };

        let response = self
            .client
            .post(&self.base_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| PulseError::Provider {
                message: format!("HTTP request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, "classification response received");
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PulseError::Provider {
                message: format!("provider returned {status}: {body}"),
                source: None,
            });
        }

        let body = response.text().await.map_err(|e| PulseError::Provider {
            message: format!("failed to read response body: {e}"),
            source: Some(Box::new(e)),
        })?;
        let chat: ChatResponse =
            serde_json::from_str(&body).map_err(|e| PulseError::Provider {
                message: format!("failed to parse provider response: {e}"),
                source: Some(Box::new(e)),
            })?;
        let content = chat
            .choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .unwrap_or("{}");
        let payload: ClassificationPayload =
            serde_json::from_str(content).map_err(|e| PulseError::Provider {
                message: format!("provider answer is not the requested JSON object: {e}"),
                source: Some(Box::new(e)),
            })?;

        // Sentiment is lowercased as returned; a value outside the enum is a
        // malformed answer like any other.
        let sentiment_raw = payload
            .sentiment
            .unwrap_or_else(|| "neutral".to_string())
            .to_lowercase();
        let sentiment =
            sentiment_raw
                .parse::<Sentiment>()
                .map_err(|e| PulseError::Provider {
                    message: format!("provider returned unknown sentiment `{sentiment_raw}`"),
                    source: Some(Box::new(e)),
                })?;

        let topic = payload
            .topic
            .map(|t| self.topics.resolve(&t))
            .unwrap_or_else(|| TOPIC_OTHER.to_string());

        // The provider supplies no numeric intensity.
        Ok(Classification {
            sentiment,
            score: 0.0,
            topic,
        })
    }
}

#[async_trait]
impl Classifier for ProviderClassifier {
    fn name(&self) -> &str {
        "completion-provider"
    }

    async fn classify(&self, text: &str) -> Classification {
        match self.request_classification(text).await {
            Ok(classification) => classification,
            Err(e) => {
                warn!(error = %e, "classification failed, falling back to neutral");
                Classification::fallback()
            }
        }
    }
}

// --- Wire types for the chat-completions API ---

#[derive(Debug, Clone, Serialize)]
struct ChatRequest {
    model: String,
    temperature: f32,
    response_format: ResponseFormat,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: String,
}

#[derive(Debug, Clone, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// The JSON object the provider is instructed to return.
#[derive(Debug, Deserialize)]
struct ClassificationPayload {
    #[serde(default)]
    sentiment: Option<String>,
    #[serde(default)]
    topic: Option<String>,
}
