//! # tally-schema
//!
//! JSON Schema generation, validation, and registry for Tally.
//!
//! This crate provides:
//! - `SchemaRegistry`: central store of the schemas for stored and produced types
//! - Validation of loaded records and report output against those schemas
//! - Schema export for external tooling (`tally schema <name>`)
//!
//! Types are defined in `tally-core` and `tally-report` with
//! `#[derive(JsonSchema)]`; this crate only collects and applies them.

mod error;
mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
