//! Shared location types used by the lexer, symbol table and error reporting.

pub mod span;

pub use span::{Position, SourceMap, Span, Spanned};
