//! Utility modules

pub mod constants;
pub mod format;
