//! Lexical analyzer for a small BASIC-like language
//!
//! Converts source text into classified tokens and a symbol table, then
//! refines variable types from `LET` assignments.

pub mod config;
pub mod lexical;
#[macro_use]
pub mod logging;
pub mod pipeline;
pub mod symbols;
pub mod tokens;
pub mod utils;

// Re-export key types for library consumers
pub use lexical::{LexerError, LexicalAnalyzer, LexicalMetrics};
pub use pipeline::{process_file, process_source, tokenize, tokenize_with_config};
pub use pipeline::{LexicalOutput, PipelineError, PipelineResult};
pub use symbols::{InferredType, SymbolEntry, SymbolKind, SymbolTable};
pub use tokens::{Token, TokenCategory, TokenStream};

/// Program tokenized by the driver when no input file is given
pub const DEMO_PROGRAM: &str = "
LET name = 'muhammed'
LET a = 5 
LET b = 10 
LET z = 2
IF a == b OR a > z
THEN  
LET c = a + b 
LET d = c * 2 
a++
ELSE 
LET e = a - b 
z+=a
ENDIF 
CALL myFunction(a, b) 
CALL Help
";
