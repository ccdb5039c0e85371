//! Diagnosis engine: run orchestration and per-project serialization.

pub mod diagnosis;
pub mod locks;

pub use diagnosis::{run_diagnosis, DiagnosisReport};
pub use locks::RunLocks;
