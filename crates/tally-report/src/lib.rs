//! # tally-report
//!
//! Report aggregation for Tally: filter inspections by an inclusive date
//! interval, total quantities and points per activity, and hand the result to
//! read-only presentation sinks.
//!
//! - [`aggregate`]: the pure aggregation step and its interval-checked entry point
//! - [`result`]: `ReportRow` / `ReportResult`
//! - [`table`], [`chart`], [`document`]: sinks that render a finished result
//!
//! Aggregation is synchronous and stateless. Sinks never re-aggregate.

pub mod aggregate;
pub mod chart;
pub mod document;
pub mod error;
pub mod result;
pub mod table;

pub use aggregate::{aggregate, generate};
pub use error::ReportError;
pub use result::{ReportResult, ReportRow};
