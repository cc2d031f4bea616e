//! Toast notification overlay

use crate::app::App;
use crate::state::ToastKind;
use crate::theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render toast notification, anchored to the bottom-right corner
#[allow(clippy::cast_possible_truncation)]
pub fn render(frame: &mut Frame, app: &App) {
    let Some(toast) = &app.toast else {
        return;
    };

    let area = frame.area();
    let width = (toast.message.len() as u16 + 6)
        .clamp(24, 48)
        .min(area.width.max(1));
    let inner_width = width.saturating_sub(4).max(1) as usize;
    let text_lines = toast.message.len().div_ceil(inner_width) as u16;
    let height = text_lines + 2;

    let toast_area = Rect {
        x: area.right().saturating_sub(width + 1),
        y: area.bottom().saturating_sub(height + 2),
        width,
        height,
    };

    frame.render_widget(Clear, toast_area);

    let (title, color) = match toast.kind {
        ToastKind::Info => (" INFO ", theme::ACCENT_SECONDARY),
        ToastKind::Success => (" OK ", theme::SUCCESS),
        ToastKind::Error => (" ERROR ", theme::ERROR),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(Span::styled(
            title,
            Style::default()
                .fg(Color::Black)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(toast_area);
    frame.render_widget(block, toast_area);

    frame.render_widget(
        Paragraph::new(toast.message.clone())
            .style(Style::default().fg(theme::TEXT_PRIMARY))
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center),
        inner,
    );
}
