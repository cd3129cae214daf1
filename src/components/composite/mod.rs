//! Composite Components

pub mod data_display;
pub mod data_table;
pub mod modal;
pub mod search_filter;
