//! Zonecheck Core - Domain models, classification rules, and configuration
//!
//! This crate contains the domain types and policy configuration for the
//! zoning compliance engine. The engine itself is stateless: every
//! evaluation receives an immutable snapshot of zones, rules, and project
//! data and returns freshly constructed results.

pub mod config;
pub mod error;
pub mod models;
pub mod rules;

pub use error::{Result, ZonecheckError};
