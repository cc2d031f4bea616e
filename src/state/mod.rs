//! Application state types.

pub mod food;
pub mod modal;
pub mod toast;

pub use food::{FoodDraft, FoodPlate};
pub use modal::{FoodForm, ModalState};
pub use toast::{Toast, ToastKind};
