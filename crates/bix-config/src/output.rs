//! Report rendering configuration.

use serde::{Deserialize, Serialize};

fn default_format() -> String {
    "text".to_string()
}

const fn default_method_preview() -> usize {
    10
}

const fn default_special_preview() -> usize {
    15
}

const fn default_names_per_line() -> usize {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Default output format when `--format` is not given (text, json, raw, table).
    #[serde(default = "default_format")]
    pub format: String,

    /// Public methods listed before "... and N more".
    #[serde(default = "default_method_preview")]
    pub method_preview: usize,

    /// Special methods listed before "... and N more".
    #[serde(default = "default_special_preview")]
    pub special_preview: usize,

    /// Names per line in category listings.
    #[serde(default = "default_names_per_line")]
    pub names_per_line: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            method_preview: default_method_preview(),
            special_preview: default_special_preview(),
            names_per_line: default_names_per_line(),
        }
    }
}
