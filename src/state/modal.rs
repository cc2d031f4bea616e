//! Modal form state for the add and edit flows.
//!
//! A modal is either closed, collecting a new plate, or editing an existing
//! one. The edit variant carries the target's id and availability so the
//! submit path can send a full replacement record without the form ever
//! exposing those fields.

use crossterm::event::{Event as CrosstermEvent, KeyEvent};
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

use crate::state::food::{FoodDraft, FoodPlate};

/// Number of text fields in the form.
pub const FIELD_COUNT: usize = 4;

/// Labels rendered next to each field, in focus order.
pub const FIELD_LABELS: [&str; FIELD_COUNT] = ["Name", "Image URL", "Price", "Description"];

/// The four text inputs collected by both modals.
#[derive(Default)]
pub struct FoodForm {
    fields: [Input; FIELD_COUNT],
    focus: usize,
}

impl FoodForm {
    /// Empty form for the add modal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Form prefilled from a draft (edit modal, or reopening after a failed
    /// submission).
    pub fn from_draft(draft: &FoodDraft) -> Self {
        Self {
            fields: [
                Input::from(draft.name.clone()),
                Input::from(draft.image.clone()),
                Input::from(draft.price.clone()),
                Input::from(draft.description.clone()),
            ],
            focus: 0,
        }
    }

    /// Index of the focused field.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Moves focus to the next field, wrapping.
    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % FIELD_COUNT;
    }

    /// Moves focus to the previous field, wrapping.
    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + FIELD_COUNT - 1) % FIELD_COUNT;
    }

    /// Feeds a key event to the focused input.
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.fields[self.focus].handle_event(&CrosstermEvent::Key(key));
    }

    /// Current value of the field at `idx`.
    pub fn value(&self, idx: usize) -> &str {
        self.fields[idx].value()
    }

    /// Cursor column of the field at `idx`, for rendering.
    pub fn cursor(&self, idx: usize) -> usize {
        self.fields[idx].visual_cursor()
    }

    /// Horizontal scroll offset keeping the cursor visible in `width` columns.
    pub fn scroll(&self, idx: usize, width: u16) -> usize {
        self.fields[idx].visual_scroll(width as usize)
    }

    /// Snapshot of the form as a submit payload.
    pub fn to_draft(&self) -> FoodDraft {
        FoodDraft {
            name: self.fields[0].value().to_string(),
            image: self.fields[1].value().to_string(),
            price: self.fields[2].value().to_string(),
            description: self.fields[3].value().to_string(),
        }
    }
}

/// Which modal, if any, is on screen.
#[derive(Default)]
pub enum ModalState {
    /// No overlay; keys drive the list.
    #[default]
    Closed,
    /// Collecting a new plate.
    Add(FoodForm),
    /// Editing an existing plate, keeping its identity out of the form.
    Edit {
        form: FoodForm,
        id: u64,
        available: bool,
    },
}

impl ModalState {
    /// Opens the edit modal prefilled from `plate`.
    pub fn edit(plate: &FoodPlate) -> Self {
        Self::Edit {
            form: FoodForm::from_draft(&FoodDraft::from_plate(plate)),
            id: plate.id,
            available: plate.available,
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> FoodDraft {
        FoodDraft {
            name: "Pizza".to_string(),
            image: "img".to_string(),
            price: "10".to_string(),
            description: "desc".to_string(),
        }
    }

    #[test]
    fn test_focus_wraps_both_directions() {
        let mut form = FoodForm::new();
        assert_eq!(form.focus(), 0);
        form.focus_prev();
        assert_eq!(form.focus(), FIELD_COUNT - 1);
        form.focus_next();
        assert_eq!(form.focus(), 0);
    }

    #[test]
    fn test_prefill_round_trips_through_draft() {
        let form = FoodForm::from_draft(&draft());
        assert_eq!(form.value(0), "Pizza");
        assert_eq!(form.to_draft(), draft());
    }

    #[test]
    fn test_edit_modal_carries_identity() {
        let plate = draft().into_plate(42, false);
        match ModalState::edit(&plate) {
            ModalState::Edit { id, available, .. } => {
                assert_eq!(id, 42);
                assert!(!available);
            }
            _ => panic!("expected edit modal"),
        }
    }
}
