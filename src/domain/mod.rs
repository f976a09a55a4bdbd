//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains some of:
//! - `mod.rs` — Rich domain types (validated, display-ready)
//! - `wire.rs` — Raw serde structs matching feed responses
//! - `convert.rs` — `TryFrom`/`From` conversions with validation
//! - `state.rs` — State containers with update methods

pub mod asset;
pub mod chart;
pub mod price_history;
