//! Layout Components
//!
//! Header, sidebar navigation, page shell and log panel.

pub mod header;
pub mod log_panel;
pub mod shell;
pub mod sidebar;
