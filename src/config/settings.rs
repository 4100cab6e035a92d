use std::env;
use std::path::Path;

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use crate::bar::Markup;
use crate::error::Result;
use crate::outputs::TemplateOptions;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub templates: TemplatesConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TemplatesConfig {
    /// Fail rendering when a template references a missing field
    #[serde(default = "default_strict")]
    pub strict: bool,
    /// Segment templates, looked up by their `name`
    #[serde(default)]
    pub definitions: Vec<TemplateDefinition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TemplateDefinition {
    /// Name used to render the template; case is preserved
    pub name: String,
    /// Handlebars source
    pub source: String,
    /// Output markup; pango templates escape interpolated data
    #[serde(default)]
    pub markup: Markup,
}

fn default_strict() -> bool {
    true
}

impl Settings {
    /// Load settings from `config/` in the working directory
    pub fn new() -> Result<Self> {
        Self::load("config")
    }

    /// Load `.env`, then `<dir>/default` and `<dir>/{RUN_MODE}` if present,
    /// then `SEGMENT_*` environment variables.
    pub fn load(config_dir: impl AsRef<Path>) -> Result<Self> {
        // Load .env file if exists
        let _ = dotenvy::dotenv();

        let config_dir = config_dir.as_ref();
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let settings = Config::builder()
            .set_default("templates.strict", true)?
            .add_source(File::from(config_dir.join("default")).required(false))
            .add_source(File::from(config_dir.join(&run_mode)).required(false))
            // SEGMENT_TEMPLATES__STRICT=false, ...
            .add_source(
                Environment::with_prefix("SEGMENT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(settings)
    }

    /// Build settings from an inline document
    pub fn parse(contents: &str, format: FileFormat) -> Result<Self> {
        let settings = Config::builder()
            .set_default("templates.strict", true)?
            .add_source(File::from_str(contents, format))
            .build()?
            .try_deserialize()?;

        Ok(settings)
    }
}

impl TemplatesConfig {
    pub fn options(&self) -> TemplateOptions {
        TemplateOptions {
            strict: self.strict,
        }
    }
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            strict: default_strict(),
            definitions: Vec::new(),
        }
    }
}
