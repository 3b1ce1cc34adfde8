use thiserror::Error;

/// Error type for overlap graph operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Token has fewer characters than the overlap width
    #[error("Token {token:?} is shorter than the {width}-character overlap")]
    TokenTooShort { token: String, width: usize },

    /// Overlap width of zero was requested
    #[error("Overlap width must be at least 1")]
    InvalidOverlapWidth,

    /// Longest path requested on a graph without vertices
    #[error("Graph has no vertices, longest path is undefined")]
    EmptyGraph,

    /// Longest path requested while cycles are still present
    #[error("Graph still has {residual} vertices on cycles. Call break_cycles() first.")]
    Cyclic { residual: usize },

    /// Token is not a vertex of the graph
    #[error("Token {token:?} is not in the graph")]
    UnknownToken { token: String },
}

/// Result type alias for overlap graph operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn token_too_short<S: Into<String>>(token: S, width: usize) -> Self {
        Error::TokenTooShort {
            token: token.into(),
            width,
        }
    }

    pub fn unknown_token<S: Into<String>>(token: S) -> Self {
        Error::UnknownToken {
            token: token.into(),
        }
    }
}
