mod settings;

pub use settings::{Settings, TemplateDefinition, TemplatesConfig};
