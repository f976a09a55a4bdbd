//! Formatting helpers for chart labels and card text.

pub mod decimal;
pub mod num;
pub mod time;
