//! Generated advisories.
//!
//! In [`AdvisoryMode::Generated`] the advisory is not drawn at random: after
//! every refresh the current readings are sent to the model and its trimmed
//! answer becomes the advisory. Failures never propagate; they turn into an
//! advisory text of their own.

use elle_models::{Advisory, GenerationConfig, Readings};
use elle_sdk::{ChatClient, ChatReply, SdkError};
use tracing::{debug, info, warn};

use crate::chat::ChatOutcome;

/// Shown when there are no readings to reason about.
pub const NOT_ENOUGH_DATA: &str =
    "Not enough data for a comprehensive insight yet. Awaiting all sensor readings.";

/// Where the advisory comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdvisoryMode {
    /// Coin flip between the two fixed advisories, drawn with each frame.
    #[default]
    Simulated,
    /// Asked from the model after each refresh.
    Generated,
}

/// Sampling used for advisory requests unless overridden.
pub const ADVISORY_GENERATION: GenerationConfig = GenerationConfig {
    temperature: Some(0.7),
    top_p: Some(0.95),
    top_k: Some(40),
    max_output_tokens: Some(150),
};

/// Prompt describing `readings`.
pub fn insight_prompt(readings: &Readings) -> String {
    format!(
        "You are an energy assistant for a small wind turbine that powers a farm. \
         Based on the readings below, give one concise, actionable insight about \
         energy use, turbine health or maintenance.\n\
         \n\
         Current readings:\n\
         - Wind speed: {}\n\
         - Wind direction: {}\n\
         - Current power: {}\n\
         - Generator temperature: {}\n\
         - Battery temperature: {}\n\
         \n\
         If a value looks unusually high or low, suggest a specific action. \
         Provide only the insight text, no conversational filler.",
        readings.wind_speed_text(),
        readings.wind_direction_text(),
        readings.current_power_text(),
        readings.generator_temp_text(),
        readings.battery_temp_text(),
    )
}

/// Advisory text for a model outcome.
pub fn insight_text(outcome: &ChatOutcome) -> String {
    match outcome {
        Ok(ChatReply::Text(text)) if !text.trim().is_empty() => text.trim().to_owned(),
        Ok(_) => "Failed to generate AI insight: Unexpected API response structure.".to_owned(),
        Err(SdkError::Http(e)) => format!("Failed to generate AI insight: API call error ({e})."),
        Err(SdkError::Decode(e)) => {
            format!("Failed to generate AI insight: Invalid JSON response ({e}).")
        }
        Err(e) => format!("Failed to generate AI insight: An unexpected error occurred ({e})."),
    }
}

/// Ask `client` for an advisory about `readings`.
///
/// Without readings no request is made and [`NOT_ENOUGH_DATA`] is returned.
pub async fn generate_advisory<C: ChatClient>(client: &C, readings: Option<&Readings>) -> Advisory {
    let Some(readings) = readings else {
        debug!("no readings yet, skipping insight request");
        return Advisory::from(NOT_ENOUGH_DATA);
    };

    let outcome = client.generate(&insight_prompt(readings)).await;
    match &outcome {
        Ok(_) => info!("insight generated"),
        Err(e) => warn!(error = %e, "insight generation failed"),
    }
    Advisory::new(insight_text(&outcome))
}
