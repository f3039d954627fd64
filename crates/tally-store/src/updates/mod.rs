//! Partial-update payloads for stored entities.

pub mod inspection;
