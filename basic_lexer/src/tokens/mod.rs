//! Token system for the BASIC lexer
//!
//! Converts classified lexemes into `(category, lexeme)` tokens.
//!
//! ## Key Components
//!
//! - **[`Token`]** - immutable category/lexeme pair
//! - **[`TokenCategory`]** - keyword, identifier, number, string, five operator
//!   families, logical operator and special character
//! - **[`Keyword`]** / **[`LogicalOperator`]** - reserved words, matched
//!   case-insensitively and normalised to uppercase
//! - **[`OPERATORS`]** - symbolic operators ordered longest first, so `>=` is
//!   never split into `>` and `=`
//! - **[`TokenStream`]** - ordered container consumed by inference and rendering
//!
//! All tokens carry span information for error reporting.

pub mod keywords;
pub mod token;
pub mod token_stream;

pub use keywords::{Keyword, LogicalOperator, KEYWORDS, LOGICAL_OPERATORS};
pub use token::{
    classify_special, classify_word, is_blank, is_number_continue, is_number_start,
    is_word_continue, is_word_start, match_operator, Operator, OperatorKind, Token, TokenCategory,
    OPERATORS, SPECIAL_CHARACTERS,
};
pub use token_stream::{SpannedToken, TokenStream};

pub use crate::utils::{Position, Span, Spanned};
