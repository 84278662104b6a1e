use anyhow::{Context, Result};

const DEFAULT_PREFIX: &str = "!";
const DEFAULT_API_URL: &str = "https://api.xandeum.com";
const DEFAULT_LLM_BASE_URL: &str = "https://api.groq.com/openai/v1";
const DEFAULT_LLM_MODEL: &str = "llama-3.1-8b-instant";

/// Process-wide settings, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub discord_token: String,
    pub guild_id: Option<u64>,
    pub prefix: String,
    pub api_url: String,
    pub api_key: Option<String>,
    pub llm_base_url: String,
    pub llm_model: String,
    pub llm_api_key: Option<String>,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let _ = dotenv::dotenv();

        let discord_token = dotenv::var("DISCORD_TOKEN")
            .ok()
            .filter(|t| !t.is_empty())
            .context("DISCORD_TOKEN required")?;

        Ok(Self {
            discord_token,
            guild_id: dotenv::var("DISCORD_GUILD_ID")
                .ok()
                .and_then(|s| s.parse::<u64>().ok()),
            prefix: non_empty("BOT_PREFIX").unwrap_or_else(|| DEFAULT_PREFIX.to_string()),
            api_url: non_empty("PROJECT_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            api_key: non_empty("PROJECT_API_KEY"),
            llm_base_url: non_empty("LLM_BASE_URL")
                .unwrap_or_else(|| DEFAULT_LLM_BASE_URL.to_string()),
            llm_model: non_empty("LLM_MODEL").unwrap_or_else(|| DEFAULT_LLM_MODEL.to_string()),
            llm_api_key: non_empty("GROQ_API_KEY"),
        })
    }
}

fn non_empty(key: &str) -> Option<String> {
    dotenv::var(key).ok().filter(|v| !v.trim().is_empty())
}
