//! DataTable Component
//!
//! A sortable, paginated table driven by caller-owned state.

pub mod column;
pub mod data_table;
pub mod pagination;

pub use column::{Column, ColumnWidth};
pub use data_table::{DataTable, TableStyle};
pub use pagination::Pagination;
