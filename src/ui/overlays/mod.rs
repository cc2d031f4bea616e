//! Modal overlays rendered on top of the dashboard.

pub mod food_form;
pub mod toast;
