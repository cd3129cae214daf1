//! UI Catalog Library
//!
//! A gallery of reusable GPUI components (buttons, inputs, navigation, modals,
//! tables, data display and form controls) with sign-in, sign-up and dashboard
//! demo screens. The table pipeline (filter, sort, paginate) lives in `domain`.

pub mod app;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod features;
pub mod i18n;
pub mod state;
pub mod theme;
pub mod utils;
