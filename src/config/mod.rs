//! Configuration loading and validation.
mod loader;
mod paths;
pub mod types;


pub use loader::load_config;
pub use types::Config;
