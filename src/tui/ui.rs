//! Terminal window rendering
//!
//! Draws the simulated terminal: a title bar with window controls, the
//! transcript (always scrolled to the bottom), the prompt and input line
//! while idle, then the status line and key hints.

use rand_core::RngCore;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::app::status_footer::{render_footer, render_status_line};
use crate::session::{LineKind, SessionState, TerminalSession};
use crate::theme::Theme;

/// Block drawn at the caret when it sits at the end of the input.
pub const CURSOR_BLOCK: &str = "█";

/// Key hints shown in the footer.
pub const FOOTER_KEYS: [(&str, &str); 4] = [
    ("Enter", "run"),
    ("↑/↓", "history"),
    ("Ctrl+L", "reset"),
    ("Esc", "quit"),
];

/// Split the screen into title bar, body, status line and footer.
pub fn build_layout(area: Rect) -> [Rect; 4] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2], chunks[3]]
}

/// Render the whole terminal window for `session`.
pub fn render_terminal<R: RngCore>(
    frame: &mut Frame,
    session: &TerminalSession<R>,
    title: &str,
    theme: &Theme,
) {
    let [title_area, body, status_area, footer_area] = build_layout(frame.area());

    render_title_bar(frame, title_area, title, theme);
    render_body(frame, body, session, theme);
    render_status_line(frame, status_area, &status_text(session), theme);
    render_footer(frame, footer_area, &FOOTER_KEYS, theme);
}

/// Window controls on the left, title centered.
fn render_title_bar(frame: &mut Frame, area: Rect, title: &str, theme: &Theme) {
    let controls = Line::from(vec![
        Span::styled("● ", Style::default().fg(Color::Red)),
        Span::styled("● ", Style::default().fg(Color::Yellow)),
        Span::styled("●", Style::default().fg(Color::Green)),
    ]);
    frame.render_widget(Paragraph::new(controls), area);

    let title = Paragraph::new(title.to_string())
        .style(theme.text_secondary_style().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

fn render_body<R: RngCore>(
    frame: &mut Frame,
    area: Rect,
    session: &TerminalSession<R>,
    theme: &Theme,
) {
    let mut lines: Vec<Line> = session
        .transcript()
        .lines()
        .iter()
        .map(|line| {
            let style = match line.kind {
                LineKind::Input => theme.accent_style(),
                LineKind::Output => theme.text_style(),
            };
            Line::styled(line.text.clone(), style)
        })
        .collect();

    if session.state() == SessionState::Idle {
        lines.push(input_line(session, area.width, theme));
    }

    let offset = scroll_offset(lines.len(), area.height);
    let body = Paragraph::new(lines).scroll((offset, 0));
    frame.render_widget(body, area);
}

/// Rows to skip so the last line sits at the bottom of a `height`-row view.
pub fn scroll_offset(total_lines: usize, height: u16) -> u16 {
    let offset = total_lines.saturating_sub(height as usize);
    u16::try_from(offset).unwrap_or(u16::MAX)
}

/// Prompt, pending input and caret.
///
/// When the line is wider than `width`, leading input characters are
/// dropped so the caret stays visible.
fn input_line<R: RngCore>(session: &TerminalSession<R>, width: u16, theme: &Theme) -> Line<'static> {
    let prompt = format!("{} ", session.prompt());
    let input = session.input();
    let (before, after) = input.as_str().split_at(input.cursor());

    // One cell is reserved for the caret.
    let available = (width as usize).saturating_sub(prompt.width() + 1);
    let before = visible_tail(before, available);

    let mut spans = vec![
        Span::styled(prompt, theme.accent_bold_style()),
        Span::styled(before.to_string(), theme.text_style()),
    ];

    let mut rest = after.chars();
    match rest.next() {
        Some(under_caret) => {
            spans.push(Span::styled(
                under_caret.to_string(),
                theme.text_style().add_modifier(Modifier::REVERSED),
            ));
            spans.push(Span::styled(rest.as_str().to_string(), theme.text_style()));
        }
        None => spans.push(Span::styled(CURSOR_BLOCK, theme.accent_style())),
    }

    Line::from(spans)
}

/// Longest suffix of `text` that fits in `width` columns.
pub fn visible_tail(text: &str, width: usize) -> &str {
    if text.width() <= width {
        return text;
    }
    let mut used = 0;
    let mut start = text.len();
    for (idx, c) in text.char_indices().rev() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    &text[start..]
}

fn status_text<R: RngCore>(session: &TerminalSession<R>) -> String {
    if session.is_animating() {
        return " running...".to_string();
    }
    match session.history_cursor() {
        Some(cursor) => format!(" history {}/{}", cursor + 1, session.history().len()),
        None => String::new(),
    }
}
