use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scrubber: ScrubberConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Strength of the tactile pulse fired on each scrubber key change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HapticIntensity {
    #[default]
    Light,
    Medium,
    Heavy,
}

/// Side index geometry and feedback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrubberConfig {
    /// Height of one key row, in terminal cells (default: 1.0).
    #[serde(default = "default_row_height")]
    pub row_height: f32,
    /// Vertical gap between rows (default: 0.0).
    #[serde(default)]
    pub row_gap: f32,
    /// Delay before the bubble hides after an interaction ends (default: 250).
    #[serde(default = "default_bubble_hide_delay_ms")]
    pub bubble_hide_delay_ms: u64,
    /// Pulse on key changes (default: true).
    #[serde(default = "default_true")]
    pub haptics: bool,
    #[serde(default)]
    pub haptic_intensity: HapticIntensity,
}

/// Where contacts come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// TOML contacts file. Without one, built-in sample contacts are used.
    #[serde(default)]
    pub contacts_file: Option<PathBuf>,
    /// Artificial latency for the sample store (default: 300).
    #[serde(default = "default_simulated_latency_ms")]
    pub simulated_latency_ms: u64,
    /// Make the sample store fail its first fetch (default: false).
    #[serde(default)]
    pub fail_first_fetch: bool,
}

/// Log output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Log file. Defaults to `<data_local_dir>/rolodex/rolodex.log`.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_row_height() -> f32 {
    1.0
}

fn default_bubble_hide_delay_ms() -> u64 {
    250
}

fn default_true() -> bool {
    true
}

fn default_simulated_latency_ms() -> u64 {
    300
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for ScrubberConfig {
    fn default() -> Self {
        Self {
            row_height: default_row_height(),
            row_gap: 0.0,
            bubble_hide_delay_ms: default_bubble_hide_delay_ms(),
            haptics: true,
            haptic_intensity: HapticIntensity::Light,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            contacts_file: None,
            simulated_latency_ms: default_simulated_latency_ms(),
            fail_first_fetch: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Configured log file, or the per-user default location.
    pub fn resolved_file(&self) -> PathBuf {
        self.file.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rolodex")
                .join("rolodex.log")
        })
    }
}
