//! # Elle SDK
//!
//! Client for the generative-text endpoint the Elle dashboard chats with.
//!
//! The SDK provides:
//!
//! * [`ChatClient`]: the seam the dashboard depends on; one call per user
//!   message.
//! * [`GeminiClient`]: the reqwest-backed implementation posting
//!   `generateContent` requests.
//! * [`ChatEndpointConfig`]: endpoint URL, API key and optional sampling
//!   parameters.
//! * [`SdkError`]: transport and decode failures.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use elle_sdk::{ChatClient, ChatEndpointConfig, ChatReply, GeminiClient};
//!
//! # async fn run() -> Result<(), elle_sdk::SdkError> {
//! let client = GeminiClient::new(ChatEndpointConfig::from_env())?;
//! match client.generate("How windy is it?").await? {
//!     ChatReply::Text(text) => println!("{text}"),
//!     ChatReply::Empty => println!("(no answer)"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;

pub use client::{decode_reply, ChatClient, ChatReply, GeminiClient};
pub use config::ChatEndpointConfig;
pub use error::SdkError;

// Re-export the wire types for ergonomic usage.
pub use elle_models::{GenerateContentRequest, GenerateContentResponse, GenerationConfig};
