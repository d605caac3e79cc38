mod developer;
mod log;

pub use developer::DeveloperCommands;
pub use log::LogCommands;
