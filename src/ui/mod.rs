//! UI rendering module

mod dashboard;
mod overlays;
mod widgets;

use crate::app::App;
use ratatui::Frame;

/// Main render function - base view, then whichever overlays are active
pub fn render(frame: &mut Frame, app: &mut App) {
    // Base view
    dashboard::render(frame, app);

    // Modal overlay (add/edit form)
    if app.modal.is_open() {
        overlays::food_form::render(frame, &app.modal);
    }

    // Render toast notification if present
    if app.toast.is_some() {
        overlays::toast::render(frame, app);
    }
}
