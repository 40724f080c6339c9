//! HIR layer tests
//!
//! - Item and property extraction on whole declarations
//! - Incremental behaviour of the Salsa stages
//! - Usage validation over a program
//! - Identity fingerprint properties

pub mod tests_extraction;
pub mod tests_fingerprint;
pub mod tests_pipeline;
pub mod tests_validation;
