#![deny(missing_docs)]

//! # Elle Models
//!
//! Core data types for the Elle turbine dashboard.
//!
//! ## Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`telemetry`] | Turbine readings, compass points, status, advisories |
//! | [`chat`] | Conversation log entries |
//! | [`gemini`] | Wire types of the generative-text `generateContent` call |
//! | [`error`] | [`ModelError`] |

pub mod chat;
pub mod error;
pub mod gemini;
pub mod telemetry;

// Re-export all public types at crate root for convenience.
pub use chat::*;
pub use error::*;
pub use gemini::*;
pub use telemetry::*;
