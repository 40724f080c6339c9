//! Foundation types for the analysis engine.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`FileId`] - Host-assigned file identifiers
//! - [`Position`], [`Span`], [`Location`] - Source positions for declarations and call sites
//! - [`hash`] - The stable identity hasher behind fingerprints and generated names
//! - Domain constants (marker attribute, generated-name prefixes)
//!
//! This module has NO dependencies on other crate modules.

pub mod constants;
mod file_id;
pub mod hash;
mod position;

pub use file_id::FileId;
pub use hash::{MemberKind, derive_name, fingerprint, roll};
pub use position::{Location, Position, Span};
