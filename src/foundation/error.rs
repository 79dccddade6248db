/// Result alias used throughout the crate.
pub type HierResult<T> = Result<T, HierError>;

/// Every failure the drawing pipeline can report.
#[derive(thiserror::Error, Debug)]
pub enum HierError {
    /// `pop` was called on a transform stack with no saved snapshot.
    #[error("transform stack underflow: pop without matching push")]
    StackUnderflow,

    /// A render pass finished with saved snapshots still on the stack.
    #[error("unbalanced transform stack: {depth} push(es) without matching pop")]
    UnbalancedStack {
        /// Number of snapshots left on the stack.
        depth: usize,
    },

    /// Bad input: degenerate view window, viewport, preset index or config value.
    #[error("validation error: {0}")]
    Validation(String),

    /// Raster backend failure.
    #[error("render error: {0}")]
    Render(String),

    /// Config or dump (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else, with its source chain preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HierError {
    /// Build a [`HierError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`HierError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`HierError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
