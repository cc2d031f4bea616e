//! Dashboard view: header, plate list, footer.

use crate::app::{App, LoadPhase};
use crate::constants;
use crate::theme;
use crate::ui::widgets::{footer, header};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Render the dashboard base view
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(1),    // Plate list
        Constraint::Length(1), // Footer
    ])
    .split(frame.area());

    header::render(frame, app, chunks[0]);
    render_plates(frame, app, chunks[1]);
    footer::render(frame, app, chunks[2]);
}

fn render_plates(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::BORDER_DEFAULT))
        .title(constants::TITLE_MENU);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match &app.load {
        LoadPhase::Loading => {
            render_banner(frame, inner, constants::MSG_LOADING, theme::TEXT_SECONDARY);
            return;
        }
        LoadPhase::Failed(reason) => {
            let lines = vec![
                Line::from(Span::styled(
                    format!("{}{reason}", constants::MSG_LOAD_FAILED),
                    Style::default().fg(theme::ERROR),
                )),
                Line::from(Span::styled(
                    constants::MSG_LOAD_RETRY_HINT,
                    Style::default().fg(theme::TEXT_SECONDARY),
                )),
            ];
            frame.render_widget(
                Paragraph::new(lines).alignment(Alignment::Center),
                centered_lines(inner, 2),
            );
            return;
        }
        LoadPhase::Ready => {}
    }

    if app.plates.is_empty() {
        render_banner(frame, inner, constants::MSG_EMPTY_MENU, theme::TEXT_SECONDARY);
        return;
    }

    let items: Vec<ListItem> = app.plates.iter().map(plate_row).collect();
    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(theme::ROW_SELECTED_BG)
                .fg(theme::ROW_SELECTED_FG)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");
    frame.render_stateful_widget(list, inner, &mut app.list_state);
}

fn plate_row(plate: &crate::state::FoodPlate) -> ListItem<'_> {
    let (badge, badge_color) = if plate.available {
        (constants::LABEL_AVAILABLE, theme::SUCCESS)
    } else {
        (constants::LABEL_UNAVAILABLE, theme::WARNING)
    };

    let title = Line::from(vec![
        Span::styled(
            plate.name.clone(),
            Style::default()
                .fg(theme::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!("R$ {}", plate.price),
            Style::default().fg(theme::ACCENT_SECONDARY),
        ),
        Span::raw("  "),
        Span::styled(format!("[{badge}]"), Style::default().fg(badge_color)),
    ]);
    let detail = Line::from(Span::styled(
        format!("   {}", plate.description),
        Style::default().fg(theme::TEXT_SECONDARY),
    ));

    ListItem::new(vec![title, detail])
}

fn render_banner(frame: &mut Frame, area: Rect, message: &str, color: ratatui::style::Color) {
    frame.render_widget(
        Paragraph::new(Span::styled(message, Style::default().fg(color)))
            .alignment(Alignment::Center),
        centered_lines(area, 1),
    );
}

/// Vertically center `height` lines inside `area`.
fn centered_lines(area: Rect, height: u16) -> Rect {
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x: area.x,
        y,
        width: area.width,
        height: height.min(area.height),
    }
}
