//! Registry construction errors
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("REGISTRY/duplicate predicate: {0}")]
    Duplicate(String),

    #[error("REGISTRY/invalid predicate name: {0:?}")]
    InvalidName(String),

    #[error("REGISTRY/unknown interface: {0}")]
    UnknownInterface(String),
}
