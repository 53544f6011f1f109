use recipe_errors::AppError;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_BASE_URL: &str = "https://api.together.xyz/v1";
pub const DEFAULT_MODEL: &str = "meta-llama/Llama-3-8b-chat-hf";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
const DEFAULT_PDF_PATH: &str = "recipe.pdf";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_SESSION_IDLE_MINUTES: i64 = 60;

#[derive(Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: Option<u32>,
}

impl LlmConfig {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

// Keeps the key out of logs.
impl std::fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub llm: LlmConfig,
    pub pdf_path: PathBuf,
    pub bind_addr: SocketAddr,
    pub session_idle_minutes: i64,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("TOGETHER_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AppError::MissingConfig("TOGETHER_API_KEY must be set".to_string()))?;

        let llm = LlmConfig {
            api_key,
            base_url: lookup("RECIPE_LLM_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: lookup("RECIPE_LLM_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            temperature: parse_or(&lookup, "RECIPE_LLM_TEMPERATURE", DEFAULT_TEMPERATURE)?,
            max_tokens: lookup("RECIPE_LLM_MAX_TOKENS")
                .map(|raw| parse_value("RECIPE_LLM_MAX_TOKENS", &raw))
                .transpose()?,
        };

        Ok(Self {
            llm,
            pdf_path: lookup("RECIPE_PDF_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PDF_PATH)),
            bind_addr: match lookup("RECIPE_BIND_ADDR") {
                Some(raw) => parse_value("RECIPE_BIND_ADDR", &raw)?,
                None => parse_value("RECIPE_BIND_ADDR", DEFAULT_BIND_ADDR)?,
            },
            session_idle_minutes: session_idle_minutes(&lookup)?,
        })
    }
}

fn session_idle_minutes<F>(lookup: &F) -> Result<i64, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let minutes = parse_or(lookup, "RECIPE_SESSION_IDLE_MINUTES", DEFAULT_SESSION_IDLE_MINUTES)?;
    if minutes < 1 {
        return Err(AppError::MissingConfig(format!(
            "RECIPE_SESSION_IDLE_MINUTES must be at least 1, got {}",
            minutes
        )));
    }
    Ok(minutes)
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, AppError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => parse_value(key, &raw),
        None => Ok(default),
    }
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> Result<T, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::MissingConfig(format!("{} has an invalid value: {:?}", key, raw)))
}
