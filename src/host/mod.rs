//! Host driver: the entry point a build integration talks to.
//!
//! [`GeneratorHost`] owns the incremental database, accepts declarations
//! and compilation snapshots, hands changed enums to an [`Emitter`] and
//! runs usage validation with the configured [`AnalysisOptions`].

mod analysis;
mod options;

pub use analysis::{Emitter, GeneratorHost, RunReport};
pub use options::AnalysisOptions;
