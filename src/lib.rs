//! Outfit recommendation engine.
//!
//! Three deterministic stages: keyword extraction over free-text
//! requests, constraint-driven outfit assembly from a read-only
//! catalog, and multi-factor scoring of the assembled candidates.

pub mod catalog;
pub mod config;
pub mod error;
pub mod recommend;
pub mod telemetry;
