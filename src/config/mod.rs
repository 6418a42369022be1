mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, HapticIntensity, LoggingConfig, ScrubberConfig, StoreConfig};
