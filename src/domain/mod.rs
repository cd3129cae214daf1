//! Domain - Pure Data Structures and Table Logic
//!
//! These types don't depend on GPUI and represent the business domain.

pub mod activity;
pub mod config;
pub mod pipeline;
pub mod query;
pub mod record;
pub mod validation;
