//! Graph construction settings.

use crate::error::{Error, Result};

/// Number of characters compared between the tail of one token and the head
/// of the next.
pub const DEFAULT_OVERLAP_WIDTH: usize = 2;

/// What to do with tokens shorter than the overlap width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ShortTokens {
    /// Fail the insertion with [`Error::TokenTooShort`]
    Reject,

    /// Insert the token as a vertex that never gets an edge
    Isolate,
}

impl Default for ShortTokens {
    fn default() -> Self {
        ShortTokens::Reject
    }
}

/// Settings used by [`OverlapGraph`](crate::OverlapGraph) while inserting tokens.
///
/// # Examples
///
/// ```
/// use overlap_dag::{OverlapConfig, ShortTokens};
///
/// let config = OverlapConfig::with_width(3)
///     .unwrap()
///     .with_short_tokens(ShortTokens::Isolate);
///
/// assert_eq!(config.width(), 3);
/// assert_eq!(config.short_tokens(), ShortTokens::Isolate);
/// assert!(OverlapConfig::with_width(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlapConfig {
    width: usize,
    short_tokens: ShortTokens,
}

impl Default for OverlapConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_OVERLAP_WIDTH,
            short_tokens: ShortTokens::default(),
        }
    }
}

impl OverlapConfig {
    /// Default settings with a custom overlap width.
    pub fn with_width(width: usize) -> Result<Self> {
        if width == 0 {
            return Err(Error::InvalidOverlapWidth);
        }
        Ok(Self {
            width,
            ..Self::default()
        })
    }

    pub fn with_short_tokens(mut self, policy: ShortTokens) -> Self {
        self.short_tokens = policy;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn short_tokens(&self) -> ShortTokens {
        self.short_tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OverlapConfig::default();
        assert_eq!(config.width(), 2);
        assert_eq!(config.short_tokens(), ShortTokens::Reject);
    }

    #[test]
    fn test_zero_width_rejected() {
        assert_eq!(OverlapConfig::with_width(0), Err(Error::InvalidOverlapWidth));
    }

    #[test]
    fn test_builder_keeps_width() {
        let config = OverlapConfig::with_width(4)
            .unwrap()
            .with_short_tokens(ShortTokens::Isolate);
        assert_eq!(config.width(), 4);
        assert_eq!(config.short_tokens(), ShortTokens::Isolate);
    }
}
