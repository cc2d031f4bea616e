//! Ember color theme definitions.
//!
//! Warm terracotta palette used throughout the platter UI, with semantic
//! aliases so widgets never reference raw shades directly.

#![allow(dead_code)]
use ratatui::style::Color;

// === Ember Char (Dark backgrounds) ===

/// Darkest char shade.
pub const EMBER_CHAR_1: Color = Color::Rgb(28, 25, 23);
/// Dark char shade.
pub const EMBER_CHAR_2: Color = Color::Rgb(41, 37, 36);
/// Medium char shade.
pub const EMBER_CHAR_3: Color = Color::Rgb(68, 64, 60);
/// Lightest char shade.
pub const EMBER_CHAR_4: Color = Color::Rgb(87, 83, 78);

// === Ember Linen (Light text) ===

/// Primary linen shade.
pub const EMBER_LINEN_1: Color = Color::Rgb(231, 229, 228);
/// Brightest linen shade.
pub const EMBER_LINEN_2: Color = Color::Rgb(245, 245, 244);

// === Ember Glow (Warm accents) ===

/// Glow accent 1 - terracotta (primary accent).
pub const EMBER_GLOW_1: Color = Color::Rgb(234, 136, 100);
/// Glow accent 2 - amber.
pub const EMBER_GLOW_2: Color = Color::Rgb(251, 191, 36);
/// Glow accent 3 - copper.
pub const EMBER_GLOW_3: Color = Color::Rgb(217, 119, 87);

// === Status colors ===

/// Errors and failed loads.
pub const EMBER_RED: Color = Color::Rgb(220, 100, 96);
/// Success and available plates.
pub const EMBER_GREEN: Color = Color::Rgb(152, 195, 121);
/// Caution and pending states.
pub const EMBER_YELLOW: Color = Color::Rgb(229, 192, 123);

// === Semantic Color Aliases ===

/// Main background color.
pub const BG_COLOR: Color = Color::Rgb(20, 18, 16);
/// Primary text color.
pub const TEXT_PRIMARY: Color = EMBER_LINEN_1;
/// Secondary/muted text color.
pub const TEXT_SECONDARY: Color = EMBER_CHAR_4;
/// Primary accent color.
pub const ACCENT_PRIMARY: Color = EMBER_GLOW_1;
/// Secondary accent color.
pub const ACCENT_SECONDARY: Color = EMBER_GLOW_2;
/// Success state color.
pub const SUCCESS: Color = EMBER_GREEN;
/// Warning state color.
pub const WARNING: Color = EMBER_YELLOW;
/// Error state color.
pub const ERROR: Color = EMBER_RED;

// === UI Element Colors ===

/// Default border color.
pub const BORDER_DEFAULT: Color = EMBER_CHAR_3;
/// Focused element border color.
pub const BORDER_FOCUSED: Color = EMBER_GLOW_1;
/// Selected row background color.
pub const ROW_SELECTED_BG: Color = Color::Rgb(45, 40, 36);
/// Selected row text color.
pub const ROW_SELECTED_FG: Color = EMBER_GLOW_1;
