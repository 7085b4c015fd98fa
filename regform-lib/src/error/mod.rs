//! Error types

mod document;
mod load;

pub use document::*;
pub use load::*;

/// Top-level error for the registration form.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Loading the remote option list failed.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The document doesn't have the structure the form needs.
    #[error(transparent)]
    Document(#[from] DocumentError),
}
