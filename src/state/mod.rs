//! State - GPUI Entity State Modules
//!
//! Each state module represents a distinct piece of application state,
//! split by update frequency to avoid unnecessary re-renders.

pub mod config_state;
pub mod i18n_state;
pub mod log_state;
pub mod nav_state;
pub mod session_state;
pub mod table_state;
