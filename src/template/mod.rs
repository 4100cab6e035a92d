//! Named segment templates compiled at startup.
//!
//! This module provides:
//! - Compilation of every template declared in [`TemplatesConfig`]
//! - Lookup of compiled templates by name
//! - Rendering by name, with failures turned into error outputs
//!
//! # Example
//!
//! ```ignore
//! let settings = Settings::new()?;
//! let templates = TemplateSet::from_config(&settings.templates)?;
//!
//! // Every refresh
//! let output = templates.render("battery", &json!({"percent": 80}));
//! ```

use std::collections::HashMap;

use serde::Serialize;

use crate::bar::Output;
use crate::config::TemplatesConfig;
use crate::error::{OutputError, Result};
use crate::outputs::{self, TemplateFn};

/// Compiled templates keyed by name
#[derive(Debug, Clone, Default)]
pub struct TemplateSet {
    templates: HashMap<String, TemplateFn>,
}

impl TemplateSet {
    /// Compile every template definition.
    ///
    /// Stops at the first template that fails to compile or reuses a name.
    pub fn from_config(config: &TemplatesConfig) -> Result<Self> {
        let options = config.options();
        let mut templates = HashMap::with_capacity(config.definitions.len());

        for definition in &config.definitions {
            let name = &definition.name;
            if templates.contains_key(name) {
                return Err(OutputError::AlreadyExists(name.clone()));
            }

            let template = TemplateFn::compile(&definition.source, definition.markup, &options)
                .map_err(|e| match e {
                    OutputError::Compile { source, .. } => OutputError::Compile {
                        name: name.clone(),
                        source,
                    },
                    other => other,
                })?;

            tracing::debug!(template = %name, markup = ?definition.markup, "Segment template ready");
            templates.insert(name.clone(), template);
        }

        tracing::info!(
            count = templates.len(),
            strict = options.strict,
            "Template set compiled"
        );

        Ok(Self { templates })
    }

    /// Get a compiled template by name
    pub fn get(&self, name: &str) -> Option<&TemplateFn> {
        self.templates.get(name)
    }

    /// Check if a template exists
    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Names of all templates, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.templates.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Get the number of templates
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Check if the set holds no templates
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Render a template by name.
    ///
    /// An unknown name or a render failure becomes an error output.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Output {
        match self.templates.get(name) {
            Some(template) => template.render(data),
            None => {
                tracing::debug!(template = %name, "Unknown segment template");
                outputs::error(OutputError::NotFound(name.to_string()))
            }
        }
    }
}
