//! Domain logic for the proposal diagnosis platform.
//!
//! Pure types and validation shared by the DB, LLM, and API layers.
//! This crate performs no I/O.

pub mod diagnosis;
pub mod error;
pub mod project;
pub mod suggestion;
pub mod types;
