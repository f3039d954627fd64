//! # tally-core
//!
//! Core types, activity catalog, and error types for Tally.
//!
//! This crate provides the foundational types shared across all Tally crates:
//! - Entity structs for the recorded data (inspections, activity entries, user profile)
//! - The read-only activity catalog and its points lookup
//! - Validated inclusive date intervals for reports
//! - Inspection ID generation
//! - Display-name collation used to order report rows
//! - Cross-cutting error types

pub mod catalog;
pub mod collation;
pub mod entities;
pub mod errors;
pub mod ids;
pub mod interval;
