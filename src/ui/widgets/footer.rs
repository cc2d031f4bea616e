//! Footer widget with context-aware keybinding hints

use crate::app::{App, LoadPhase};
use crate::theme;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the footer with shortcuts for the current context
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    // Modal takes priority
    if app.modal.is_open() {
        let hints = vec![
            ("Enter", "Save"),
            ("Tab", "Next field"),
            ("Esc", "Cancel"),
        ];
        render_hints(frame, area, &hints);
        return;
    }

    let mut hints = vec![("a", "Add plate")];

    if !app.plates.is_empty() {
        hints.extend_from_slice(&[("e", "Edit"), ("d", "Delete"), ("↑↓", "Select")]);
    }

    if matches!(app.load, LoadPhase::Failed(_)) {
        hints.push(("r", "Retry"));
    }

    hints.push(("q", "Quit"));

    render_hints(frame, area, &hints);
}

fn render_hints(frame: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let chunks = Layout::horizontal([
        Constraint::Min(0),     // Hints (left)
        Constraint::Length(16), // Branding (right)
    ])
    .split(area);

    // Hints that do not fit the current width are dropped from the right.
    let mut spans = vec![Span::raw(" ")];
    let mut used = 1;
    let available = chunks[0].width as usize;

    for (i, (key, action)) in hints.iter().enumerate() {
        let needed = key.len() + 1 + action.len() + if i > 0 { 3 } else { 0 };
        if used + needed > available {
            break;
        }
        used += needed;

        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(theme::EMBER_CHAR_2)));
        }
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(theme::ACCENT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            *action,
            Style::default().fg(theme::TEXT_SECONDARY),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);

    let branding = Line::from(Span::styled(
        format!(
            "{} v{} ",
            crate::constants::APP_NAME,
            crate::constants::APP_VERSION
        ),
        Style::default().fg(theme::EMBER_CHAR_4),
    ));
    frame.render_widget(
        Paragraph::new(branding).alignment(Alignment::Right),
        chunks[1],
    );
}
