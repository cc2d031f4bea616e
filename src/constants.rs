//! Application-wide constants and configuration values.
//!
//! Static values used throughout platter: timing, API defaults, UI titles
//! and the fixed user-facing messages.

#![allow(dead_code)]
use std::time::Duration;

// === Application Metadata ===

/// Application name and title (from Cargo.toml).
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
/// Current application version (from Cargo.toml).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
/// Short technical summary of the application (from Cargo.toml).
pub const APP_SUMMARY: &str = env!("CARGO_PKG_DESCRIPTION");

// === Timing Configuration ===

/// UI refresh rate in milliseconds.
pub const DEFAULT_TICK_RATE: u64 = 250;
/// Ticks a toast stays on screen before expiring.
pub const TOAST_TICKS: u32 = 12;
/// Timeout for HTTP API calls.
pub const API_TIMEOUT: Duration = Duration::from_secs(10);

// === Backend Configuration ===

/// Default REST backend base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:3333";
/// Collection path for plate records on the backend.
pub const FOODS_PATH: &str = "foods";

// === Path Configuration ===

/// Name of the config subdirectory.
pub const CONFIG_DIR_NAME: &str = "platter";
/// Name of the config file.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Name of the log file, written next to the config file.
pub const LOG_FILE_NAME: &str = "platter.log";

// === UI Labels & Titles ===

pub const TITLE_MENU: &str = " Menu ";
pub const TITLE_ADD_PLATE: &str = " New Plate ";
pub const TITLE_EDIT_PLATE: &str = " Edit Plate ";
pub const HINT_FORM_FOOTER: &str = " [Enter] Save  [Tab] Next field  [Esc] Cancel ";
pub const LABEL_AVAILABLE: &str = "Available";
pub const LABEL_UNAVAILABLE: &str = "Sold out";

// === Messages ===

pub const MSG_LOADING: &str = "Loading menu...";
pub const MSG_EMPTY_MENU: &str = "No plates yet. Press [a] to add one.";
pub const MSG_LOAD_FAILED: &str = "Could not load the menu: ";
pub const MSG_LOAD_RETRY_HINT: &str = "Press [r] to retry.";
pub const MSG_PLATE_ADDED: &str = "Plate added";
pub const MSG_PLATE_UPDATED: &str = "Plate updated";
pub const MSG_PLATE_DELETED: &str = "Plate removed";
pub const MSG_DELETE_FAILED: &str = "Failed to delete plate";

// === Messages: CLI Output ===

pub const CLI_MSG_EMPTY_MENU: &str = "The menu is empty.";
pub const CLI_MSG_LIST_FAILED: &str = "Error: could not fetch the menu: ";
