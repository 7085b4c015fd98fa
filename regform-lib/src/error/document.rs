//! Document structure error types

/// Errors raised when binding to a document that lacks required elements.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    /// No element with the given ID.
    #[error("Missing element: #{id}")]
    MissingElement {
        /// The ID that was looked up.
        id: String,
    },

    /// No element carrying the given marker class inside the form.
    #[error("No element with class .{class} inside #{container}")]
    MissingMarker {
        /// The marker class.
        class: String,
        /// The container that was searched.
        container: String,
    },
}

impl DocumentError {
    /// Creates a missing element error.
    pub fn missing(id: impl Into<String>) -> Self {
        Self::MissingElement { id: id.into() }
    }

    /// Creates a missing marker error.
    pub fn missing_marker(class: impl Into<String>, container: impl Into<String>) -> Self {
        Self::MissingMarker {
            class: class.into(),
            container: container.into(),
        }
    }
}
