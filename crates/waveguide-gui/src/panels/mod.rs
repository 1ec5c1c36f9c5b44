//! GUI panels for the calculator window.

pub mod form;
pub mod history;
