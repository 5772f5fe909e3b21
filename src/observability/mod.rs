//! Observability subsystem for livequery
//!
//! Structured logging for the query pipeline.
//!
//! # Principles
//!
//! 1. Observability is read-only: logging never influences execution
//! 2. Synchronous, no background threads
//! 3. Deterministic output: one line per event, stable key order

mod logger;

pub use logger::{Logger, Severity};
