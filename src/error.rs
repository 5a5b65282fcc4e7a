use thiserror::Error;

/// Errors raised while loading a grammar.
///
/// Recognition itself never errors on input: a token sequence outside the
/// language is a rejection value ([`Recognition::accepted`] is false and
/// [`Recognition::build_tree`] returns `None`), not an `Err`.
///
/// [`Recognition::accepted`]: crate::Recognition::accepted
/// [`Recognition::build_tree`]: crate::Recognition::build_tree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Grammar text did not match the line format.
    #[error("malformed grammar: {0}")]
    ParseError(String),

    /// Grammar text parsed but violates a structural rule: no productions,
    /// an empty right-hand side, or a start symbol with no production.
    #[error("invalid grammar: {0}")]
    ValidationError(String),
}
