//! Compiled Handlebars templates that render data into outputs

use std::sync::Arc;

use handlebars::Handlebars;
use serde::Serialize;

use super::{error, pango_unsafe, text};
use crate::bar::{Markup, Output};
use crate::error::{OutputError, Result};
use crate::pango;

/// Options applied when compiling a template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateOptions {
    /// Fail rendering when the template references a missing field
    pub strict: bool,
}

impl Default for TemplateOptions {
    fn default() -> Self {
        Self { strict: true }
    }
}

/// A compiled template that turns data into an [`Output`].
///
/// Cloning is cheap and shares the compiled template.
#[derive(Clone)]
pub struct TemplateFn {
    registry: Arc<Handlebars<'static>>,
    name: &'static str,
    markup: Markup,
}

impl std::fmt::Debug for TemplateFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateFn")
            .field("name", &self.name)
            .field("markup", &self.markup)
            .finish()
    }
}

impl TemplateFn {
    /// Compile `source` for the given output markup.
    ///
    /// Pango templates escape every `{{value}}` interpolation; use
    /// `{{{value}}}` to insert trusted markup.
    pub fn compile(source: &str, markup: Markup, options: &TemplateOptions) -> Result<Self> {
        let name = match markup {
            Markup::None => "text",
            Markup::Pango => "pango",
        };

        let mut registry = Handlebars::new();
        registry.set_strict_mode(options.strict);
        match markup {
            Markup::None => registry.register_escape_fn(handlebars::no_escape),
            Markup::Pango => registry.register_escape_fn(pango::escape),
        }

        registry
            .register_template_string(name, source)
            .map_err(|source| OutputError::Compile {
                name: name.to_string(),
                source,
            })?;

        tracing::debug!(template = name, strict = options.strict, "Template compiled");

        Ok(Self {
            registry: Arc::new(registry),
            name,
            markup,
        })
    }

    /// Markup of the outputs this template produces
    pub fn markup(&self) -> Markup {
        self.markup
    }

    /// Render `data`, reporting failures to the caller
    pub fn try_render<T: Serialize>(&self, data: &T) -> Result<Output> {
        let rendered = self.registry.render(self.name, data)?;

        Ok(match self.markup {
            Markup::None => text(rendered),
            Markup::Pango => pango_unsafe(rendered),
        })
    }

    /// Render `data`. A failure is rendered as an error output.
    pub fn render<T: Serialize>(&self, data: &T) -> Output {
        self.try_render(data).unwrap_or_else(|e| {
            tracing::debug!(template = self.name, error = %e, "Template render failed");
            error(e)
        })
    }

    /// Turn this template into a plain rendering closure
    pub fn into_fn<T: Serialize>(self) -> impl Fn(&T) -> Output + Clone + Send + Sync {
        move |data: &T| self.render(data)
    }
}

fn compile_or_panic(source: &str, markup: Markup) -> TemplateFn {
    TemplateFn::compile(source, markup, &TemplateOptions::default()).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Template failed to compile");
        panic!("{e}")
    })
}

/// Compile a plain text template.
///
/// # Panics
///
/// Panics if `source` is not a valid template. Templates are meant to be
/// static strings checked at startup; see [`try_text_template`] otherwise.
pub fn text_template(source: &str) -> TemplateFn {
    compile_or_panic(source, Markup::None)
}

/// Compile a Pango markup template, escaping interpolated data.
///
/// # Panics
///
/// Panics if `source` is not a valid template.
pub fn pango_template(source: &str) -> TemplateFn {
    compile_or_panic(source, Markup::Pango)
}

/// Compile a plain text template, returning compile errors
pub fn try_text_template(source: &str) -> Result<TemplateFn> {
    TemplateFn::compile(source, Markup::None, &TemplateOptions::default())
}

/// Compile a Pango markup template, returning compile errors
pub fn try_pango_template(source: &str) -> Result<TemplateFn> {
    TemplateFn::compile(source, Markup::Pango, &TemplateOptions::default())
}
