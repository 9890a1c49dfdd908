mod config;
mod error;
mod input;

pub use config::ConfigError;
pub use error::*;
pub use input::MalformedInput;
