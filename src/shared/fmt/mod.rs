//! Display formatting for glucose values and history timestamps.

pub mod num;
pub mod time;
