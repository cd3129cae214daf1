//! Dashboard Feature
//!
//! Signed-in landing page with stats, projects and activity.

pub mod controller;
pub mod data;
pub mod page;
