//! Environment-driven configuration.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

use crate::intelligence::assistant::DEFAULT_ASSISTANT_MODEL;
use crate::intelligence::DEFAULT_ANALYSIS_MODEL;
use crate::parser::DEFAULT_EXTRACTION_MODEL;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";
const DEFAULT_LLM_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub environment: EnvironmentConfig,
    pub llm: LlmConfig,
}

#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub database_path: PathBuf,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub base_url: String,
    pub api_key: String,
    pub extraction_model: String,
    pub analysis_model: String,
    pub assistant_model: String,
    pub timeout_seconds: u64,
}

impl ConfigManager {
    pub fn load() -> Result<Self> {
        Ok(Self {
            environment: Self::load_environment()?,
            llm: Self::load_llm()?,
        })
    }

    fn load_environment() -> Result<EnvironmentConfig> {
        let env = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "local".to_string());
        info!("Loading environment configuration for: {}", env);

        let base_dir = if env == "production" {
            PathBuf::from("/app")
        } else {
            std::env::current_dir().context("Failed to get current directory")?
        };

        let port = match std::env::var("ROCKET_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .context("ROCKET_PORT must be a valid port number")?,
            Err(_) => DEFAULT_PORT,
        };

        let database_path = std::env::var("DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| base_dir.join("resume_analyzer.db"));

        Ok(EnvironmentConfig {
            database_path,
            port,
        })
    }

    fn load_llm() -> Result<LlmConfig> {
        let api_key = std::env::var("OPENROUTER_API_KEY")
            .context("OPENROUTER_API_KEY environment variable not set")?;

        Ok(LlmConfig {
            base_url: std::env::var("OPENROUTER_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_OPENROUTER_BASE_URL.to_string()),
            api_key,
            extraction_model: std::env::var("EXTRACTION_MODEL")
                .unwrap_or_else(|_| DEFAULT_EXTRACTION_MODEL.to_string()),
            analysis_model: std::env::var("ANALYSIS_MODEL")
                .unwrap_or_else(|_| DEFAULT_ANALYSIS_MODEL.to_string()),
            assistant_model: std::env::var("ASSISTANT_MODEL")
                .unwrap_or_else(|_| DEFAULT_ASSISTANT_MODEL.to_string()),
            timeout_seconds: DEFAULT_LLM_TIMEOUT_SECS,
        })
    }

    /// Ensure the database directory exists before the pool connects.
    pub async fn ensure_directories(&self) -> Result<()> {
        if let Some(parent) = self.environment.database_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        Ok(())
    }
}
