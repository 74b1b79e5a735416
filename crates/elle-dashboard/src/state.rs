//! Session state owned by the dashboard.
//!
//! Everything the dashboard shows is derived from one [`SessionState`]. It
//! is owned by a single [`Dashboard`](crate::app::Dashboard) and only ever
//! mutated on the UI loop, so it needs no synchronisation.

use elle_models::{Advisory, ChatMessage, Readings, TurbineStatus};

/// All mutable state of one dashboard session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    /// Latest readings, `None` until the first successful acquisition.
    pub readings: Option<Readings>,
    /// Current turbine status.
    pub status: TurbineStatus,
    /// Latest advisory.
    pub advisory: Advisory,
    /// Text currently typed into the chat input.
    pub input: String,
    /// Year shown in the footer.
    pub footer_year: i32,
    chat: Vec<ChatMessage>,
    is_loading: bool,
}

impl SessionState {
    /// Fresh state: no readings, status `Offline`, empty chat.
    pub fn new(footer_year: i32) -> Self {
        Self {
            readings: None,
            status: TurbineStatus::Offline,
            advisory: Advisory::default(),
            input: String::new(),
            footer_year,
            chat: Vec::new(),
            is_loading: false,
        }
    }

    /// The conversation log, oldest first.
    pub fn chat(&self) -> &[ChatMessage] {
        &self.chat
    }

    /// True while a chat request is outstanding.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Whether the chat input and submit control accept interaction.
    pub fn input_enabled(&self) -> bool {
        !self.is_loading
    }

    /// Append to the conversation log. The log never shrinks.
    pub(crate) fn push_message(&mut self, message: ChatMessage) {
        self.chat.push(message);
    }

    pub(crate) fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state() {
        let state = SessionState::new(2026);
        assert!(state.readings.is_none());
        assert_eq!(state.status, TurbineStatus::Offline);
        assert_eq!(state.advisory.as_str(), "No insights yet.");
        assert!(state.chat().is_empty());
        assert!(!state.is_loading());
        assert!(state.input_enabled());
        assert_eq!(state.footer_year, 2026);
    }

    #[test]
    fn loading_disables_input() {
        let mut state = SessionState::new(2026);
        state.set_loading(true);
        assert!(!state.input_enabled());
        state.set_loading(false);
        assert!(state.input_enabled());
    }

    #[test]
    fn push_message_appends_in_order() {
        let mut state = SessionState::new(2026);
        state.push_message(ChatMessage::user("a"));
        state.push_message(ChatMessage::bot("b"));
        let texts: Vec<_> = state.chat().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, ["a", "b"]);
    }
}
