use std::time::Duration;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::dispatch::Command;
use crate::knowledge::prompt::PromptContext;

pub const NOT_CONFIGURED: &str =
    "❌ AI service not configured. Please set GROQ_API_KEY environment variable.";
pub const EMPTY_REPLY: &str = "❌ AI service returned an empty response.";
const CONNECT_FAILED: &str = "Error connecting to AI service";

const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 1000;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Words that mark a free-form question as being about the project.
const TRIGGER_KEYWORDS: &[&str] = &[
    "xandeum", "xand", "pnode", "vnode", "xandminer", "devnet", "validator", "dao",
];

#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    fn new(role: &str, content: &str) -> Self {
        Self {
            role: role.to_string(),
            content: content.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}

/// Anything that turns a user question into a reply.
#[async_trait]
pub trait Responder: Send + Sync {
    async fn respond(&self, user_message: &str) -> String;
}

pub struct LlmClient {
    base_url: String,
    model: String,
    api_key: Option<String>,
    context: PromptContext,
}

impl LlmClient {
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
        context: PromptContext,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            model: model.into(),
            api_key: api_key.filter(|k| !k.is_empty()),
            context,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Resolve the chat completions endpoint from the base URL.
    fn endpoint(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        if base.ends_with("/chat/completions") {
            base.to_string()
        } else if base.ends_with("/v1") {
            format!("{}/chat/completions", base)
        } else {
            format!("{}/v1/chat/completions", base)
        }
    }

    async fn complete(&self, key: &str, user_message: &str) -> Result<String> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context(CONNECT_FAILED)?;

        let messages = [
            Message::new("system", self.context.as_str()),
            Message::new("user", user_message),
        ];
        let body = serde_json::json!({
            "model": self.model,
            "messages": messages,
            "temperature": TEMPERATURE,
            "max_tokens": MAX_TOKENS,
        });

        let resp = client
            .post(self.endpoint())
            .bearer_auth(key)
            .json(&body)
            .send()
            .await
            .context(CONNECT_FAILED)?;

        let status = resp.status();
        if status != StatusCode::OK {
            let text = resp.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "LLM request rejected");
            bail!("AI service error: {} - {}", status.as_u16(), text);
        }

        let parsed: ChatResponse = resp.json().await.context(CONNECT_FAILED)?;
        let choice = parsed
            .choices
            .into_iter()
            .next()
            .with_context(|| format!("{}: no choices in response", CONNECT_FAILED))?;

        // content may be null
        Ok(choice
            .message
            .content
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| EMPTY_REPLY.to_string()))
    }
}

#[async_trait]
impl Responder for LlmClient {
    /// One completion request with the project prompt as system message.
    /// Every failure comes back as a marked error string.
    async fn respond(&self, user_message: &str) -> String {
        let Some(key) = self.api_key.as_deref() else {
            return NOT_CONFIGURED.to_string();
        };

        match self.complete(key, user_message).await {
            Ok(content) => {
                debug!(answer_len = content.len(), "LLM reply received");
                content
            }
            Err(e) => {
                let message = format!("❌ {:#}", e);
                warn!(error = %message, "LLM request failed");
                message
            }
        }
    }
}

/// Whether a free-form (non-command) message should get an AI reply: it
/// mentions the bot, or asks a question about the project.
pub fn should_respond(text: &str, prefix: &str, bot_id: u64) -> bool {
    let text = text.trim();
    if text.is_empty() || (!prefix.is_empty() && text.starts_with(prefix)) {
        return false;
    }
    // A leading mention also works as a command prefix
    if mention_command(text, bot_id) {
        return false;
    }

    if mentions(text, bot_id) {
        return true;
    }

    let lower = text.to_lowercase();
    lower.ends_with('?')
        && lower
            .split(|c: char| !c.is_alphanumeric())
            .any(|word| TRIGGER_KEYWORDS.contains(&word))
}

fn mentions(text: &str, bot_id: u64) -> bool {
    text.contains(&format!("<@{}>", bot_id)) || text.contains(&format!("<@!{}>", bot_id))
}

fn mention_command(text: &str, bot_id: u64) -> bool {
    [format!("<@{}>", bot_id), format!("<@!{}>", bot_id)]
        .iter()
        .find_map(|mention| text.strip_prefix(mention.as_str()))
        .and_then(|rest| rest.split_whitespace().next())
        .is_some_and(|word| Command::ALL.iter().any(|c| c.name() == word))
}

/// Remove the bot's mention so only the question reaches the model.
pub fn strip_mention(text: &str, bot_id: u64) -> String {
    text.replace(&format!("<@!{}>", bot_id), "")
        .replace(&format!("<@{}>", bot_id), "")
        .trim()
        .to_string()
}
