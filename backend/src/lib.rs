pub mod app;
pub mod config;
pub mod error;
pub mod glutils;
pub mod logging;
pub mod platform;
pub mod prompt;
pub mod resources;
pub mod system;

pub use app::{Core, ExitStatus, Phase};
pub use error::{InitError, LifecycleError};
