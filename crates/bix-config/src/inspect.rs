//! Inspection pass configuration.

use serde::{Deserialize, Serialize};

/// Number of leading documentation lines scanned for the summary paragraph.
const fn default_doc_max_lines() -> usize {
    3
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InspectConfig {
    /// Maximum number of documentation lines scanned when summarizing.
    #[serde(default = "default_doc_max_lines")]
    pub doc_max_lines: usize,

    /// Resolve and extract symbols on a rayon pool instead of sequentially.
    #[serde(default)]
    pub parallel: bool,

    /// Namespace snapshot to inspect instead of the embedded builtins table.
    #[serde(default)]
    pub snapshot: Option<String>,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            doc_max_lines: default_doc_max_lines(),
            parallel: false,
            snapshot: None,
        }
    }
}

impl InspectConfig {
    /// Check if a snapshot file replaces the embedded table.
    pub fn has_snapshot(&self) -> bool {
        self.snapshot.as_deref().is_some_and(|path| !path.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_are_correct() {
        let config = InspectConfig::default();
        assert_eq!(config.doc_max_lines, 3);
        assert!(!config.parallel);
        assert!(!config.has_snapshot());
    }

    #[test]
    fn empty_snapshot_path_is_ignored() {
        let config = InspectConfig {
            snapshot: Some(String::new()),
            ..Default::default()
        };
        assert!(!config.has_snapshot());
    }
}
