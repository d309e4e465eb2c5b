use clinical_guide_config::{Config, normalize_base_path};
use std::path::PathBuf;

/// Export settings after merging command-line flags over the config file.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub output_path: PathBuf,
    pub base_path: String,
    /// Whether the output directory came from the config file.
    pub from_config: bool,
}

impl Settings {
    /// Flags win over config values. Without any output directory there is
    /// nothing to export to.
    pub fn resolve(
        output: Option<PathBuf>,
        base_path: Option<String>,
        config: Option<Config>,
    ) -> Option<Self> {
        let (output_path, from_config) = match (output, config.as_ref()) {
            (Some(output), _) => {
                log::info!("Using output path from CLI argument: {}", output.display());
                (output, false)
            }
            (None, Some(config)) => {
                log::info!(
                    "Using output path from config: {}",
                    config.output_path.display()
                );
                (config.output_path.clone(), true)
            }
            (None, None) => return None,
        };

        let base_path = base_path
            .or_else(|| config.map(|c| c.base_path))
            .unwrap_or_default();

        Some(Self {
            output_path,
            base_path: normalize_base_path(&base_path),
            from_config,
        })
    }

    pub fn to_config(&self) -> Config {
        Config {
            output_path: self.output_path.clone(),
            base_path: self.base_path.clone(),
        }
    }
}
