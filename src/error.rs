//! # Errors
//!
//! [`FormatError`] is returned when a traversal format string can't be parsed
//! and [`ParseError`] when serialized tree text can't be loaded.

use thiserror::Error;

/// Traversal format error
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum FormatError {
    /// The format string has no steps.
    #[error("A traversal format needs at least one step.")]
    Empty,
    /// The format string contains a character other than `K`, `L`, or `P`.
    #[error("Invalid traversal step {found:?} at position {position}; expected one of K, L, P.")]
    InvalidStep {
        /// Character offset of the offending step.
        position: usize,
        /// The character that was found.
        found: char,
    },
}

/// Tree text parse error
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ParseError {
    /// The text ended before every node the format asks for was read.
    #[error("The serialized tree ended unexpectedly.")]
    UnexpectedEnd,
    /// A token is neither `null` nor a valid key.
    #[error("Token {index} ({token:?}) is not a valid key.")]
    InvalidKey {
        /// Zero-based position of the token in the text.
        index: usize,
        /// The rejected token.
        token: String,
    },
    /// A key or subtree the format visits more than once was not repeated
    /// identically.
    #[error("Token {index} does not repeat the key or subtree it should.")]
    Mismatch {
        /// Zero-based position of the first disagreeing token.
        index: usize,
    },
    /// Tokens were left over after the whole tree was read.
    #[error("{count} tokens were left over after reading the tree.")]
    TrailingTokens {
        /// How many tokens were not consumed.
        count: usize,
    },
    /// The format string itself is invalid.
    #[error(transparent)]
    Format(#[from] FormatError),
    /// The format does not visit the key first or last, so the text can't be
    /// read back unambiguously.
    #[error("Trees serialized with format {format} can't be read back; the key must be visited first or last.")]
    Undecodable {
        /// The rejected format.
        format: String,
    },
}
