//! Command-line and environment configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use elle_models::GenerationConfig;
use elle_sdk::{config::DEFAULT_CHAT_URL, ChatEndpointConfig, GeminiClient};

use crate::advisory::{AdvisoryMode, ADVISORY_GENERATION};
use crate::error::DashboardError;

/// Elle turbine dashboard.
#[derive(Parser, Debug)]
#[command(name = "elle-dashboard")]
#[command(about = "Live wind turbine telemetry with a chat assistant")]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// generateContent endpoint
    #[arg(long, env = "ELLE_CHAT_URL", default_value = DEFAULT_CHAT_URL)]
    pub chat_url: String,

    /// API key, sent as the `key` query parameter
    #[arg(long, env = "GEMINI_API_KEY", default_value = "", hide_env_values = true)]
    pub api_key: String,

    /// Telemetry refresh period in milliseconds
    #[arg(long, env = "ELLE_REFRESH_MS", default_value_t = 5_000,
          value_parser = clap::value_parser!(u64).range(1..))]
    pub refresh_ms: u64,

    /// Where tracing output goes; the terminal belongs to the UI
    #[arg(long, env = "ELLE_LOG_FILE", default_value = "elle-dashboard.log")]
    pub log_file: PathBuf,

    /// Seed the telemetry simulator for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Ask the model for the energy advisory instead of simulating it
    #[arg(long)]
    pub ai_advisory: bool,

    /// Advisory sampling temperature [default: 0.7]
    #[arg(long)]
    pub temperature: Option<f32>,

    /// Advisory nucleus sampling threshold [default: 0.95]
    #[arg(long)]
    pub top_p: Option<f32>,

    /// Advisory top-k sampling [default: 40]
    #[arg(long)]
    pub top_k: Option<u32>,

    /// Upper bound on advisory length, in tokens [default: 150]
    #[arg(long)]
    pub max_output_tokens: Option<u32>,
}

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Chat endpoint. Chat requests carry no sampling parameters.
    pub chat: ChatEndpointConfig,
    pub advisory: AdvisoryMode,
    /// Sampling sent with advisory requests.
    pub advisory_generation: GenerationConfig,
    pub refresh: Duration,
    pub log_file: PathBuf,
    pub seed: Option<u64>,
}

impl Cli {
    fn advisory_generation(&self) -> GenerationConfig {
        GenerationConfig {
            temperature: self.temperature.or(ADVISORY_GENERATION.temperature),
            top_p: self.top_p.or(ADVISORY_GENERATION.top_p),
            top_k: self.top_k.or(ADVISORY_GENERATION.top_k),
            max_output_tokens: self.max_output_tokens.or(ADVISORY_GENERATION.max_output_tokens),
        }
    }
}

impl From<Cli> for DashboardConfig {
    fn from(cli: Cli) -> Self {
        let chat = ChatEndpointConfig::default()
            .with_url(cli.chat_url.clone())
            .with_api_key(cli.api_key.clone());
        let advisory = if cli.ai_advisory {
            AdvisoryMode::Generated
        } else {
            AdvisoryMode::Simulated
        };

        Self {
            chat,
            advisory,
            advisory_generation: cli.advisory_generation(),
            refresh: Duration::from_millis(cli.refresh_ms),
            log_file: cli.log_file,
            seed: cli.seed,
        }
    }
}

impl DashboardConfig {
    /// Endpoint used for advisories: the chat endpoint plus sampling.
    pub fn advisor_endpoint(&self) -> ChatEndpointConfig {
        ChatEndpointConfig {
            generation_config: Some(self.advisory_generation),
            ..self.chat.clone()
        }
    }

    pub fn chat_client(&self) -> Result<GeminiClient, DashboardError> {
        Ok(GeminiClient::new(self.chat.clone())?)
    }

    pub fn advisor_client(&self) -> Result<GeminiClient, DashboardError> {
        Ok(GeminiClient::new(self.advisor_endpoint())?)
    }
}
