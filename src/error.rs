//! Error type for optimization requests.

use thiserror::Error;

/// Errors returned by [`optimize`](crate::optimizer::optimize).
///
/// Both variants are terminal for the request; no partial result exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptimizeError {
    /// The point set cannot form a route, e.g. fewer than two points.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The algorithm selector is not one of `greedy`, `2opt`, `genetic`.
    #[error("unknown algorithm '{0}' (expected one of: greedy, 2opt, genetic)")]
    UnknownAlgorithm(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let e = OptimizeError::InvalidInput("at least 2 points are required, got 1".into());
        assert_eq!(e.to_string(), "invalid input: at least 2 points are required, got 1");
        let e = OptimizeError::UnknownAlgorithm("bogus".into());
        assert!(e.to_string().contains("'bogus'"));
    }
}
