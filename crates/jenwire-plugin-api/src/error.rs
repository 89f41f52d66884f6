use thiserror::Error;

use crate::xml::PluginType;

/// Errors raised while resolving or operating plugin handlers
#[derive(Debug, Error)]
pub enum PluginError {
    /// Resolution found no handler for a type at a call site where absence
    /// is fatal to the caller's intent. Optional call sites skip the
    /// fragment instead of raising this.
    #[error("no plugin handler supports type {0}")]
    NotSupported(PluginType),

    #[error("duplicate plugin registration for type {0}")]
    DuplicateType(String),

    #[error("malformed XML document: {0}")]
    Xml(#[from] xmltree::ParseError),

    #[error("failed to serialize XML document: {0}")]
    XmlWrite(#[from] xmltree::Error),

    #[error("failed to create view {0}")]
    ViewCreation(String),

    #[error("unexpected API response: {0}")]
    UnexpectedResponse(String),

    #[error(transparent)]
    Core(#[from] jenwire_core::Error),
}

pub type PluginResult<T> = Result<T, PluginError>;
