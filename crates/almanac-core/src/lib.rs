//! Shared building blocks for the Almanac workspace: errors, settings and
//! the small domain enums every other crate agrees on.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
