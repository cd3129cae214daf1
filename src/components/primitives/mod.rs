//! Primitive Components
//!
//! Basic building blocks: buttons, inputs and form controls.

pub mod button;
pub mod checkbox;
pub mod radio;
pub mod select;
pub mod switch;
pub mod text_input;
