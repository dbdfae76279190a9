//! Time-series utilities shared by sources and the orchestrator.
//!
//! Modules include:
//! - `merge`: join per-symbol observation series into one ordered table

/// Merge utilities for joining per-symbol observation series.
pub mod merge;
