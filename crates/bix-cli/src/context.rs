use anyhow::Context;
use bix_config::BixConfig;
use bix_inspector::{Catalog, Inspector, ObjectModel, load_namespace};

use crate::bootstrap;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::text::TextStyle;

/// Everything a command handler needs: the loaded namespace and resolved settings.
pub struct AppContext {
    pub inspector: Inspector<ObjectModel>,
    pub config: BixConfig,
    pub format: OutputFormat,
}

impl AppContext {
    pub fn init(config: BixConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let format = match flags.format {
            Some(format) => format,
            None => OutputFormat::from_config(&config.output.format)?,
        };

        let snapshot = bootstrap::snapshot_path(flags, &config);
        let model = load_namespace(snapshot.as_deref()).with_context(|| match &snapshot {
            Some(path) => format!("failed to load namespace snapshot {}", path.display()),
            None => "failed to build the embedded builtins table".to_string(),
        })?;

        let inspector = Inspector::new(model).with_doc_max_lines(config.inspect.doc_max_lines);

        Ok(Self {
            inspector,
            config,
            format,
        })
    }

    /// Run one full pass, sequential or on the rayon pool per `inspect.parallel`.
    pub fn catalog(&self) -> Catalog {
        if self.config.inspect.parallel {
            self.inspector.inspect_all_parallel()
        } else {
            self.inspector.inspect_all()
        }
    }

    pub fn style(&self) -> TextStyle {
        TextStyle::from(&self.config.output)
    }
}
