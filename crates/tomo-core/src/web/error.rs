//! Relationship web error types.

use thiserror::Error;

use crate::chord::LayoutError;
use crate::records::RecordError;

/// Errors raised by the relationship web entry points.
#[derive(Debug, Error)]
pub enum WebError {
    /// The summary index could not be loaded.
    #[error("{0}")]
    Records(#[from] RecordError),

    /// The summary loaded but no detail document did.
    #[error("No Mii data loaded")]
    NoCharacters,

    /// The chord layout produced something unusable.
    #[error("Failed to generate chord layout: {0}")]
    Layout(#[from] LayoutError),

    /// A filter change arrived before the view was activated.
    #[error("Relationship web has not been loaded yet")]
    NotActivated,
}
