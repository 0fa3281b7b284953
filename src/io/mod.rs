//! Input/output helpers.
//!
//! - dashboard snapshot export (JSON) (`export`)

pub mod export;

pub use export::*;
