//! Turning a raw input line into argument vectors.
//!
//! A line is first cut into statements on `;` by [`Statements`], then each
//! statement is cut into whitespace-delimited words by [`tokenize`]. Neither
//! step understands quoting, escapes or variable references.

mod statements;
mod tokens;

pub use statements::{Statements, TERMINATOR};
pub use tokens::{tokenize, Tokens, DELIMITERS, TOKEN_CHUNK};

/// Marks a statement that asks for an inter-process pipeline.
pub const PIPE: char = '|';
