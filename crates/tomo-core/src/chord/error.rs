use thiserror::Error;

/// Errors raised while laying out the chord diagram.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// The weight matrix is not square.
    #[error("Weight matrix is not square: row {row} has {len} columns, expected {expected}")]
    NotSquare { row: usize, len: usize, expected: usize },

    /// The layout primitive returned something that cannot be drawn.
    #[error("Malformed chord layout: {0}")]
    Malformed(String),
}
