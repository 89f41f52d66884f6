use thiserror::Error;

/// Errors raised by the entity facades
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Rest(#[from] jenwire_core::Error),

    #[error(transparent)]
    Plugin(#[from] jenwire_plugin_api::PluginError),

    #[error("malformed XML document: {0}")]
    Xml(#[from] xmltree::ParseError),

    #[error("failed to serialize XML document: {0}")]
    XmlWrite(#[from] xmltree::Error),

    #[error("document root is <{found}>, expected <{expected}>")]
    UnexpectedDocument {
        expected: &'static str,
        found: String,
    },

    #[error("unexpected API response: {0}")]
    UnexpectedResponse(String),

    #[error("failed to create view {0}")]
    ViewCreation(String),
}

pub type Result<T> = std::result::Result<T, Error>;
