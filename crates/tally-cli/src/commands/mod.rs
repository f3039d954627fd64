pub mod activities;
pub mod dispatch;
pub mod inspection;
pub mod process;
pub mod profile;
pub mod report;
pub mod schema;
pub mod shared;
