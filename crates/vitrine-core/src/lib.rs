pub mod carousel;
pub mod config;
pub mod content;
pub mod error;

pub use config::AppConfig;
pub use error::{Error, Result};
