//! Diagnosis client for the language-model backend.
//!
//! Builds the fixed prompt contract from a project's fields, submits a
//! single chat completion to an OpenAI-compatible endpoint, and hands the
//! raw reply text back to `rigor_core::diagnosis` for defensive decoding.
//! Each diagnosis run is one stateless request; there is no retry here.

pub mod client;
pub mod prompt;

pub use client::{BackendError, DiagnosisBackend, LlmConfig, OpenAiBackend};
pub use prompt::DiagnosisRequest;
