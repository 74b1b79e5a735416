//! Conversation log entries.
//!
//! The dashboard keeps an append-only, ordered list of [`ChatMessage`]s.
//! Messages are never edited or removed once pushed.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Who authored a chat message.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ChatRole {
    /// The person typing into the dashboard.
    User,
    /// The conversational endpoint (or a locally generated placeholder).
    Bot,
}

impl FromStr for ChatRole {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "bot" => Ok(Self::Bot),
            other => Err(ModelError::InvalidRole { value: other.to_string() }),
        }
    }
}

/// One entry of the conversation log.
///
/// # Examples
///
/// ```
/// use elle_models::{ChatMessage, ChatRole};
///
/// let msg = ChatMessage::user("Hello");
/// assert_eq!(msg.role, ChatRole::User);
/// assert_eq!(msg.text, "Hello");
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    /// Author of the message.
    pub role: ChatRole,
    /// Message body.
    pub text: String,
}

impl ChatMessage {
    /// Build a user-authored message.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    /// Build a bot-authored message.
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Bot,
            text: text.into(),
        }
    }
}
