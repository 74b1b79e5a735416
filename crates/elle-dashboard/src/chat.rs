//! Chat session state machine.
//!
//! ```text
//! Idle ──begin_submit──▶ Sending ──complete_exchange──▶ Idle
//! ```
//!
//! [`begin_submit`] is a no-op for blank input or while a request is already
//! outstanding. [`complete_exchange`] always appends exactly one bot message
//! and always returns the session to `Idle`.

use elle_models::ChatMessage;
use elle_sdk::{ChatReply, SdkError};
use tracing::{error, info};

use crate::state::SessionState;

/// Bot text used when the endpoint answered without any text.
pub const FALLBACK_REPLY: &str = "Sorry, I couldn't get a response right now.";
/// Bot text used when the endpoint could not be reached or read.
pub const CONNECT_ERROR_REPLY: &str = "Error: Could not connect to the chatbot.";

/// Result of one network exchange.
pub type ChatOutcome = Result<ChatReply, SdkError>;

/// Idle → Sending.
///
/// Appends the trimmed input as a user message, clears the input and marks
/// the session as loading. Returns the prompt to send, or `None` when the
/// submission was ignored.
pub fn begin_submit(state: &mut SessionState) -> Option<String> {
    if state.is_loading() {
        return None;
    }

    let prompt = state.input.trim().to_owned();
    if prompt.is_empty() {
        return None;
    }

    state.push_message(ChatMessage::user(prompt.clone()));
    state.input.clear();
    state.set_loading(true);

    info!(chars = prompt.chars().count(), "chat message submitted");
    Some(prompt)
}

/// Bot text for an exchange outcome.
pub fn reply_text(outcome: &ChatOutcome) -> &str {
    match outcome {
        Ok(ChatReply::Text(text)) => text,
        Ok(ChatReply::Empty) => FALLBACK_REPLY,
        Err(_) => CONNECT_ERROR_REPLY,
    }
}

/// Sending → Idle.
pub fn complete_exchange(state: &mut SessionState, outcome: &ChatOutcome) {
    match outcome {
        Ok(ChatReply::Text(_)) => info!("chat reply received"),
        Ok(ChatReply::Empty) => info!("chat reply carried no text, using fallback"),
        Err(e) => error!(error = %e, "error sending message to chatbot"),
    }

    state.push_message(ChatMessage::bot(reply_text(outcome)));
    state.set_loading(false);
}
