//! Display surface abstraction.
//!
//! [`render`](crate::render::render) only talks to a [`Surface`]: a set of
//! named, write-only slots. The terminal UI draws a [`ViewSurface`]; tests
//! inspect one directly.

/// Visual class applied to the status slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusClass {
    /// Normal operation.
    Operational,
    /// Needs attention.
    Warning,
    /// Fault or acquisition failure.
    Error,
    /// Offline or anything else.
    #[default]
    Default,
}

/// What a chat row represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatLineKind {
    /// Shown when the log is empty.
    Placeholder,
    /// A user message.
    User,
    /// A bot message.
    Bot,
    /// Transient indicator while a request is outstanding.
    Typing,
}

/// One row of the chat view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatLine {
    /// Row kind, drives styling.
    pub kind: ChatLineKind,
    /// Row text.
    pub text: String,
}

impl ChatLine {
    /// Build a row.
    pub fn new(kind: ChatLineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Named write targets the render step projects state onto.
pub trait Surface {
    /// Wind speed slot.
    fn set_wind_speed(&mut self, text: &str);
    /// Wind direction slot.
    fn set_wind_direction(&mut self, text: &str);
    /// Current power slot.
    fn set_current_power(&mut self, text: &str);
    /// Generator temperature slot.
    fn set_generator_temp(&mut self, text: &str);
    /// Battery temperature slot.
    fn set_battery_temp(&mut self, text: &str);
    /// Status text and its visual class.
    fn set_status(&mut self, text: &str, class: StatusClass);
    /// Advisory slot.
    fn set_advisory(&mut self, text: &str);
    /// Replace every chat row.
    fn replace_chat_log(&mut self, lines: Vec<ChatLine>);
    /// Chat input contents.
    fn set_chat_input(&mut self, text: &str);
    /// Enable or disable the chat input and submit control together.
    fn set_controls_enabled(&mut self, enabled: bool);
    /// Keep the newest chat row in view.
    fn scroll_chat_to_end(&mut self);
    /// Footer year.
    fn set_footer_year(&mut self, year: i32);
}

/// In-memory [`Surface`], drawn by [`ui::draw`](crate::ui::draw).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewSurface {
    pub wind_speed: String,
    pub wind_direction: String,
    pub current_power: String,
    pub generator_temp: String,
    pub battery_temp: String,
    pub status: String,
    pub status_class: StatusClass,
    pub advisory: String,
    pub chat_lines: Vec<ChatLine>,
    pub chat_input: String,
    pub controls_enabled: bool,
    /// Set once the chat view has been asked to follow the newest row.
    pub follow_chat_tail: bool,
    pub footer_year: Option<i32>,
}

impl Surface for ViewSurface {
    fn set_wind_speed(&mut self, text: &str) {
        text.clone_into(&mut self.wind_speed);
    }

    fn set_wind_direction(&mut self, text: &str) {
        text.clone_into(&mut self.wind_direction);
    }

    fn set_current_power(&mut self, text: &str) {
        text.clone_into(&mut self.current_power);
    }

    fn set_generator_temp(&mut self, text: &str) {
        text.clone_into(&mut self.generator_temp);
    }

    fn set_battery_temp(&mut self, text: &str) {
        text.clone_into(&mut self.battery_temp);
    }

    fn set_status(&mut self, text: &str, class: StatusClass) {
        text.clone_into(&mut self.status);
        self.status_class = class;
    }

    fn set_advisory(&mut self, text: &str) {
        text.clone_into(&mut self.advisory);
    }

    fn replace_chat_log(&mut self, lines: Vec<ChatLine>) {
        self.chat_lines = lines;
    }

    fn set_chat_input(&mut self, text: &str) {
        text.clone_into(&mut self.chat_input);
    }

    fn set_controls_enabled(&mut self, enabled: bool) {
        self.controls_enabled = enabled;
    }

    fn scroll_chat_to_end(&mut self) {
        self.follow_chat_tail = true;
    }

    fn set_footer_year(&mut self, year: i32) {
        self.footer_year = Some(year);
    }
}
