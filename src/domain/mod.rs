//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains some of:
//! - `mod.rs` — Rich domain types (validated, business-logic-ready)
//! - `wire.rs` — Raw serde structs matching the persisted history format
//! - `convert.rs` — `TryFrom`/`From` conversions with validation
//! - `state.rs` — State containers with update methods
//! - `store.rs` / `builder.rs` — Operations over state and storage

pub mod chart;
pub mod conversion;
pub mod history;
