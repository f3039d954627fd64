mod inspection;
mod process;
mod profile;

pub use inspection::InspectionCommands;
pub use process::ProcessCommands;
pub use profile::{ProfileCommands, ProfileSetArgs};
