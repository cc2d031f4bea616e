//! Header bar with the app title and plate count.

use crate::app::App;
use crate::theme;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the header bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::BORDER_DEFAULT));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::horizontal([
        Constraint::Min(0),     // Title (left)
        Constraint::Length(20), // Plate count (right)
    ])
    .split(inner);

    let title = Line::from(vec![
        Span::styled(
            " platter ",
            Style::default()
                .fg(theme::ACCENT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "— your menu, in the terminal",
            Style::default().fg(theme::TEXT_SECONDARY),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), chunks[0]);

    let count = app.plates.len();
    let plural = if count == 1 { "plate" } else { "plates" };
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("{count} {plural} "),
            Style::default().fg(theme::TEXT_SECONDARY),
        ))
        .alignment(Alignment::Right),
        chunks[1],
    );
}
