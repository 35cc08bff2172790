pub mod config;
pub mod paths;

pub use config::{Config, DataConfig, LoggingConfig, StatsConfig};
pub use paths::{PathManager, container_base_path};
