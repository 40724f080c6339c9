//! Shared builders for integration tests.

pub mod diagnostic_helpers;
pub mod fixtures;
