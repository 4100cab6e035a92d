use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid template {name}: {source}")]
    Compile {
        name: String,
        #[source]
        source: handlebars::TemplateError,
    },

    #[error("{0}")]
    Render(#[from] handlebars::RenderError),

    #[error("Template not found: {0}")]
    NotFound(String),

    #[error("Template already exists: {0}")]
    AlreadyExists(String),
}

pub type Result<T> = std::result::Result<T, OutputError>;
