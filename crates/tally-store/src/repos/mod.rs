//! Service operations, grouped by what they touch.

pub mod inspection;
pub mod process;
pub mod profile;
pub mod report;
