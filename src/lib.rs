// Output model
pub mod bar;

// Constructors and compiled templates
pub mod outputs;
pub mod pango;
pub mod template;

// Supporting modules
pub mod config;
pub mod error;
pub mod telemetry;

pub use bar::{Markup, Output};
pub use error::{OutputError, Result};
pub use outputs::{TemplateFn, TemplateOptions};
pub use template::TemplateSet;
