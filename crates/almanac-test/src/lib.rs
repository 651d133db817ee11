//! Almanac - integration test support.
//!
//! Re-exports the workspace crates under one root so the integration tests
//! can use `almanac_test::` paths, plus shared fixtures.

pub use almanac_core as core;
pub use almanac_expand as expand;
pub use almanac_service as service;

pub mod fixtures;
