//! Features - Vertical Feature Slices
//!
//! Each feature contains its page, controller, and local data.

pub mod auth;
pub mod catalog;
pub mod dashboard;
