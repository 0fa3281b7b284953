//! Reporting utilities: formatted terminal output for the dashboard.

pub mod format;

pub use format::*;
