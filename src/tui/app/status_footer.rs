//! Status line and footer rendering
//!
//! Provides rendering functions for the status line (session state) and the
//! footer bar (keybinding hints).

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::Theme;

/// Render a status line with the given text in the secondary color.
pub fn render_status_line(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
    let status = Paragraph::new(text.to_string()).style(theme.text_secondary_style());
    frame.render_widget(status, area);
}

/// Render a centered footer with keybinding hints.
///
/// Takes pairs of (key, description) and joins them with " | " separators.
///
/// Example: `&[("Esc", "quit"), ("Enter", "run")]` renders as
/// `"Esc: quit | Enter: run"`.
pub fn render_footer(frame: &mut Frame, area: Rect, keys: &[(&str, &str)], theme: &Theme) {
    let spans: Vec<Span<'static>> = build_footer_spans(keys, theme);
    let footer = Paragraph::new(Line::from(spans))
        .style(theme.text_secondary_style())
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Build styled spans for footer keybinding hints.
///
/// Each key is highlighted with the theme accent color, descriptions use
/// the secondary text color, and entries are separated by " | ".
fn build_footer_spans(keys: &[(&str, &str)], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(keys.len() * 3);
    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(
                " | ".to_string(),
                Style::default().fg(theme.text_secondary),
            ));
        }
        spans.push(Span::styled(
            key.to_string(),
            Style::default().fg(theme.accent),
        ));
        spans.push(Span::styled(
            format!(": {}", desc),
            Style::default().fg(theme.text_secondary),
        ));
    }
    spans
}
