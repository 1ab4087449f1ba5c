mod app;
mod config;
mod tags;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use tags::TagsError;
