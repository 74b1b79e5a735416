//! Terminal drawing of a [`ViewSurface`].

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::surface::{ChatLine, ChatLineKind, StatusClass, ViewSurface};

fn status_color(class: StatusClass) -> Color {
    match class {
        StatusClass::Operational => Color::Green,
        StatusClass::Warning => Color::Yellow,
        StatusClass::Error => Color::Red,
        StatusClass::Default => Color::Gray,
    }
}

fn chat_style(kind: ChatLineKind) -> Style {
    match kind {
        ChatLineKind::Placeholder => Style::default().fg(Color::DarkGray),
        ChatLineKind::User => Style::default().fg(Color::Cyan),
        ChatLineKind::Bot => Style::default().fg(Color::Green),
        ChatLineKind::Typing => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    }
}

fn chat_prefix(kind: ChatLineKind) -> &'static str {
    match kind {
        ChatLineKind::User => "You: ",
        ChatLineKind::Bot => "Elle: ",
        ChatLineKind::Placeholder | ChatLineKind::Typing => "",
    }
}

/// Split `text` into rows of at most `width` terminal columns.
///
/// A character wider than `width` gets a row of its own.
fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut rows = Vec::new();
    let mut row = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width && !row.is_empty() {
            rows.push(std::mem::take(&mut row));
            used = 0;
        }
        row.push(ch);
        used += w;
    }
    rows.push(row);
    rows
}

/// Wrapped rows for the chat log, keeping only the last `height` when the
/// surface follows the tail.
fn chat_rows(lines: &[ChatLine], area: Rect, follow_tail: bool) -> Vec<Line<'static>> {
    let width = usize::from(area.width);
    let height = usize::from(area.height);

    let mut rows: Vec<Line<'static>> = Vec::new();
    for line in lines {
        let style = chat_style(line.kind);
        let full = format!("{}{}", chat_prefix(line.kind), line.text);
        rows.extend(
            wrap(&full, width)
                .into_iter()
                .map(|row| Line::from(Span::styled(row, style))),
        );
    }

    if follow_tail && rows.len() > height {
        rows.drain(..rows.len() - height);
    }
    rows
}

fn reading(label: &'static str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(label, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(value.to_owned()),
    ])
}

/// Draw the whole dashboard.
pub fn draw(f: &mut Frame, view: &ViewSurface) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9), // Telemetry + advisory
            Constraint::Min(3),    // Chat log
            Constraint::Length(3), // Input
            Constraint::Length(1), // Footer
        ])
        .split(f.area());

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);

    let status_style = Style::default()
        .fg(status_color(view.status_class))
        .add_modifier(Modifier::BOLD);
    let telemetry = Paragraph::new(vec![
        reading("Wind speed:      ", &view.wind_speed),
        reading("Wind direction:  ", &view.wind_direction),
        reading("Current power:   ", &view.current_power),
        reading("Generator temp:  ", &view.generator_temp),
        reading("Battery temp:    ", &view.battery_temp),
        Line::from(vec![
            Span::styled("Status:          ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(view.status.clone(), status_style),
        ]),
    ])
    .block(Block::default().borders(Borders::ALL).title("Elle Turbine"));
    f.render_widget(telemetry, top[0]);

    let advisory = Paragraph::new(view.advisory.as_str())
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Energy Advisory"));
    f.render_widget(advisory, top[1]);

    let chat_block = Block::default().borders(Borders::ALL).title("Chat with Elle");
    let inner = chat_block.inner(chunks[1]);
    let log = Paragraph::new(chat_rows(&view.chat_lines, inner, view.follow_chat_tail))
        .block(chat_block);
    f.render_widget(log, chunks[1]);

    let (input_style, input_title) = if view.controls_enabled {
        (Style::default().fg(Color::Yellow), "Message (Enter to send, Esc to quit)")
    } else {
        (Style::default().fg(Color::DarkGray), "Waiting for Elle...")
    };
    let input = Paragraph::new(view.chat_input.as_str())
        .style(input_style)
        .block(Block::default().borders(Borders::ALL).title(input_title));
    f.render_widget(input, chunks[2]);

    let footer = match view.footer_year {
        Some(year) => format!("© {year} Elle Wind"),
        None => "Elle Wind".to_owned(),
    };
    f.render_widget(
        Paragraph::new(footer).style(Style::default().fg(Color::DarkGray)),
        chunks[3],
    );
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, buffer::Cell, Terminal};

    use super::*;
    use crate::render::render;
    use crate::state::SessionState;

    fn screen(view: &ViewSurface, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, view)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(usize::from(width))
            .map(|row| row.iter().map(Cell::symbol).collect())
            .collect()
    }

    fn contains(rows: &[String], needle: &str) -> bool {
        rows.iter().any(|r| r.contains(needle))
    }

    #[test]
    fn wrap_splits_on_width() {
        assert_eq!(wrap("abcdef", 4), ["abcd", "ef"]);
        assert_eq!(wrap("", 4), [""]);
        assert!(wrap("abc", 0).is_empty());
    }

    #[test]
    fn wrap_counts_columns_not_chars() {
        assert_eq!(wrap("風車風車風", 4), ["風車", "風車", "風"]);
        assert_eq!(wrap("a風b", 2), ["a", "風", "b"]);
        assert_eq!(wrap("風", 1), ["風"]);
    }

    #[test]
    fn wide_reply_tail_stays_on_screen() {
        let mut view = ViewSurface::default();
        render(&SessionState::new(2026), &mut view);
        let reply = format!("{}END", "風".repeat(30));
        view.chat_lines = vec![ChatLine::new(ChatLineKind::Bot, reply)];

        let rows = screen(&view, 40, 24);
        assert!(contains(&rows, "END"));

        // "Elle: " + 60 columns of wide text + "END" in a 38-column panel.
        let area = Rect::new(0, 0, 38, 10);
        assert_eq!(chat_rows(&view.chat_lines, area, true).len(), 2);
    }

    #[test]
    fn initial_screen() {
        let mut view = ViewSurface::default();
        render(&SessionState::new(2026), &mut view);

        let rows = screen(&view, 100, 24);
        assert!(contains(&rows, "Wind speed:      N/A"));
        assert!(contains(&rows, "Status:          Offline"));
        assert!(contains(&rows, "No insights yet."));
        assert!(contains(&rows, "Type a message to start chatting with Elle!"));
        assert!(contains(&rows, "© 2026 Elle Wind"));
        assert!(contains(&rows, "Message (Enter to send, Esc to quit)"));
    }

    #[test]
    fn loading_screen_shows_typing_and_locked_input() {
        let mut state = SessionState::new(2026);
        state.input = "Hello".into();
        crate::chat::begin_submit(&mut state);
        let mut view = ViewSurface::default();
        render(&state, &mut view);

        let rows = screen(&view, 100, 24);
        assert!(contains(&rows, "You: Hello"));
        assert!(contains(&rows, "Elle is typing..."));
        assert!(contains(&rows, "Waiting for Elle..."));
    }

    #[test]
    fn chat_follows_tail() {
        let lines: Vec<ChatLine> = (0..30)
            .map(|i| ChatLine::new(ChatLineKind::Bot, format!("reply {i}")))
            .collect();
        let area = Rect::new(0, 0, 40, 5);

        let rows = chat_rows(&lines, area, true);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[4].spans[0].content, "Elle: reply 29");

        assert_eq!(chat_rows(&lines, area, false).len(), 30);
    }
}
