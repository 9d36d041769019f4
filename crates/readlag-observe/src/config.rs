use serde::{Deserialize, Serialize};

use crate::format::LogFormat;

/// Logging bootstrap options for the binary that owns the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogConfig {
    pub format: LogFormat,
    /// `EnvFilter` directive string, e.g. `"info"` or `"readlag_probe=debug"`.
    pub level: String,
    pub with_targets: bool,
    pub use_color: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Text,
            level: "info".to_string(),
            with_targets: true,
            use_color: true,
        }
    }
}
