//! Symbol table and `LET` type inference
//!
//! The lexer registers names while scanning; `inference` refines variable
//! types once the token stream is complete.

pub mod inference;
pub mod table;

pub use inference::{infer_from_head, infer_types, InferenceSummary};
pub use table::{InferredType, SymbolEntry, SymbolKind, SymbolTable};
