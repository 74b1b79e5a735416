//! Projection of [`SessionState`] onto a [`Surface`].
//!
//! [`render`] has no return value and no failure mode. It rewrites every slot
//! from scratch, so calling it twice with the same state leaves the surface
//! exactly as the first call did.

use elle_models::{ChatRole, TurbineStatus};

use crate::state::SessionState;
use crate::surface::{ChatLine, ChatLineKind, StatusClass, Surface};

/// Shown in reading slots before any telemetry arrives.
pub const NOT_AVAILABLE: &str = "N/A";
/// Shown in the chat view while the log is empty.
pub const CHAT_PLACEHOLDER: &str = "Type a message to start chatting with Elle!";
/// Appended to the chat view while a request is outstanding.
pub const TYPING_INDICATOR: &str = "Elle is typing...";

/// Visual class for a turbine status.
pub fn status_class(status: TurbineStatus) -> StatusClass {
    match status {
        TurbineStatus::Operational => StatusClass::Operational,
        TurbineStatus::Warning => StatusClass::Warning,
        TurbineStatus::Error => StatusClass::Error,
        TurbineStatus::Offline => StatusClass::Default,
    }
}

/// Chat rows for the current state, including placeholder and typing rows.
pub fn chat_lines(state: &SessionState) -> Vec<ChatLine> {
    let mut lines: Vec<ChatLine> = if state.chat().is_empty() {
        vec![ChatLine::new(ChatLineKind::Placeholder, CHAT_PLACEHOLDER)]
    } else {
        state
            .chat()
            .iter()
            .map(|msg| {
                let kind = match msg.role {
                    ChatRole::User => ChatLineKind::User,
                    ChatRole::Bot => ChatLineKind::Bot,
                };
                ChatLine::new(kind, msg.text.clone())
            })
            .collect()
    };

    if state.is_loading() {
        lines.push(ChatLine::new(ChatLineKind::Typing, TYPING_INDICATOR));
    }

    lines
}

/// Write the whole state onto `surface`.
pub fn render<S: Surface + ?Sized>(state: &SessionState, surface: &mut S) {
    match &state.readings {
        Some(r) => {
            surface.set_wind_speed(&r.wind_speed_text());
            surface.set_wind_direction(&r.wind_direction_text());
            surface.set_current_power(&r.current_power_text());
            surface.set_generator_temp(&r.generator_temp_text());
            surface.set_battery_temp(&r.battery_temp_text());
        }
        None => {
            surface.set_wind_speed(NOT_AVAILABLE);
            surface.set_wind_direction(NOT_AVAILABLE);
            surface.set_current_power(NOT_AVAILABLE);
            surface.set_generator_temp(NOT_AVAILABLE);
            surface.set_battery_temp(NOT_AVAILABLE);
        }
    }

    surface.set_status(&state.status.to_string(), status_class(state.status));
    surface.set_advisory(state.advisory.as_str());

    surface.replace_chat_log(chat_lines(state));
    surface.set_chat_input(&state.input);
    surface.set_controls_enabled(state.input_enabled());
    surface.scroll_chat_to_end();

    surface.set_footer_year(state.footer_year);
}
