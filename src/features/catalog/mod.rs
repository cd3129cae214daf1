//! Catalog Feature

pub mod page;
