use std::collections::HashMap;

use chrono::Local;
use minijinja::Value;
use serde::{Deserialize, Serialize};

use crate::core::config::AssistantConfig;
use crate::core::error::{AppError, Result};
use crate::features::assistant::dtos::ChatMessageDto;
use crate::shared::prompts::render_template;

/// Canned reply returned when the upstream call fails
pub const FALLBACK_REPLY: &str = "Sorry, I can't answer right now. Please try again in a \
     moment, or reach the SponsorHub team through the contact form.";

/// System prompt used when the template file is unavailable
const FALLBACK_SYSTEM_PROMPT: &str = "You are the SponsorHub assistant. Answer questions about \
     sponsorship requests, offers and how the platform works. Be brief and friendly.";

const SYSTEM_PROMPT_TEMPLATE: &str = "assistant/system.jinja";

#[derive(Debug, Serialize)]
struct UpstreamMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<UpstreamMessage<'a>>,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    content: String,
}

/// Proxy for the upstream generative-text API
pub struct AssistantService {
    config: AssistantConfig,
    http_client: reqwest::Client,
}

impl AssistantService {
    pub fn new(config: AssistantConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    /// Send the conversation history upstream and return the reply text
    pub async fn reply(&self, history: &[ChatMessageDto]) -> Result<String> {
        let system_prompt = self.system_prompt();

        let mut messages = Vec::with_capacity(history.len() + 1);
        messages.push(UpstreamMessage {
            role: "system",
            content: &system_prompt,
        });
        messages.extend(history.iter().map(|m| UpstreamMessage {
            role: m.role.as_str(),
            content: &m.content,
        }));

        let request_body = CompletionRequest {
            model: &self.config.model,
            messages,
        };

        let response = self
            .http_client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to reach assistant API: {}", e);
                AppError::ExternalServiceError(format!("Failed to reach assistant API: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Assistant API error: HTTP {} - {}", status, body);
            return Err(AppError::ExternalServiceError(format!(
                "Assistant API returned HTTP {}",
                status
            )));
        }

        let completion: CompletionResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse assistant response: {}", e);
            AppError::ExternalServiceError(format!("Failed to parse assistant response: {}", e))
        })?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                AppError::ExternalServiceError("Assistant response contained no choices".to_string())
            })
    }

    /// Fixed system prompt, rendered with the current date
    fn system_prompt(&self) -> String {
        let today = Local::now().format("%Y-%m-%d").to_string();

        let mut ctx = HashMap::new();
        ctx.insert("today", Value::from(today));

        render_template(SYSTEM_PROMPT_TEMPLATE, &ctx).unwrap_or_else(|e| {
            tracing::warn!("Falling back to built-in system prompt: {}", e);
            FALLBACK_SYSTEM_PROMPT.to_string()
        })
    }
}
