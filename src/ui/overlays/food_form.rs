//! Add/edit plate modal overlay.
//!
//! Renders the four form fields as labelled input boxes, with the focused
//! field highlighted and carrying the terminal cursor.

use crate::constants;
use crate::state::modal::{FIELD_COUNT, FIELD_LABELS};
use crate::state::{FoodForm, ModalState};
use crate::theme;
use ratatui::{
    layout::{Constraint, Flex, Layout, Position, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const FORM_WIDTH: u16 = 64;
// One bordered box of height 3 per field, plus the outer border.
#[allow(clippy::cast_possible_truncation)]
const FORM_HEIGHT: u16 = FIELD_COUNT as u16 * 3 + 2;

/// Render the add/edit modal overlay
pub fn render(frame: &mut Frame, modal: &ModalState) {
    let (form, title) = match modal {
        ModalState::Add(form) => (form, constants::TITLE_ADD_PLATE),
        ModalState::Edit { form, .. } => (form, constants::TITLE_EDIT_PLATE),
        ModalState::Closed => return,
    };

    let area = centered_rect(FORM_WIDTH, FORM_HEIGHT, frame.area());

    // Clear background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::BORDER_FOCUSED))
        .title(title)
        .title_bottom(Line::from(constants::HINT_FORM_FOOTER).centered());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([Constraint::Length(3); FIELD_COUNT]).split(inner);
    for (idx, row) in rows.iter().enumerate() {
        render_field(frame, form, idx, *row);
    }
}

fn render_field(frame: &mut Frame, form: &FoodForm, idx: usize, area: Rect) {
    let focused = form.focus() == idx;
    let border_color = if focused {
        theme::BORDER_FOCUSED
    } else {
        theme::BORDER_DEFAULT
    };
    let label_style = if focused {
        Style::default()
            .fg(theme::ACCENT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme::TEXT_SECONDARY)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(Line::styled(format!(" {} ", FIELD_LABELS[idx]), label_style));
    let input_area = block.inner(area);
    frame.render_widget(block, area);

    // Keep the cursor in view when the value is wider than the box.
    let scroll = form.scroll(idx, input_area.width.saturating_sub(1));
    let value = Paragraph::new(form.value(idx))
        .style(Style::default().fg(theme::TEXT_PRIMARY))
        .scroll((0, u16::try_from(scroll).unwrap_or(0)));
    frame.render_widget(value, input_area);

    if focused {
        let cursor_x = form.cursor(idx).saturating_sub(scroll);
        frame.set_cursor_position(Position::new(
            input_area.x + u16::try_from(cursor_x).unwrap_or(0),
            input_area.y,
        ));
    }
}

/// Create a centered rectangle with fixed dimensions
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Length(height)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Length(width)]).flex(Flex::Center);

    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}
