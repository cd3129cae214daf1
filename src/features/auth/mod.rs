//! Auth Feature
//!
//! Sign-in and sign-up screens backed by the session state.

pub mod controller;
pub mod login_page;
pub mod signup_page;
