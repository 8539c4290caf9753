use std::path::PathBuf;

use anyhow::Context;
use bix_config::BixConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration, honoring a `.env` in the current directory.
pub fn load_config() -> anyhow::Result<BixConfig> {
    let config = BixConfig::load_with_dotenv().context("failed to load bix configuration")?;
    tracing::debug!(
        format = %config.output.format,
        parallel = config.inspect.parallel,
        "configuration loaded"
    );
    Ok(config)
}

/// Snapshot to inspect: `--snapshot` wins over `inspect.snapshot`.
///
/// `None` selects the embedded builtins table.
pub fn snapshot_path(flags: &GlobalFlags, config: &BixConfig) -> Option<PathBuf> {
    if let Some(path) = &flags.snapshot {
        tracing::debug!(path = %path.display(), "using snapshot from --snapshot");
        return Some(path.clone());
    }
    let configured = config
        .inspect
        .has_snapshot()
        .then(|| config.inspect.snapshot.as_deref().map(PathBuf::from))
        .flatten();
    match &configured {
        Some(path) => tracing::debug!(path = %path.display(), "using snapshot from inspect.snapshot"),
        None => tracing::debug!("using the embedded builtins table"),
    }
    configured
}
