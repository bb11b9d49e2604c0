//! Token model and the single classification functions
//!
//! A token is an immutable `(category, lexeme)` pair. Each fixed lexeme set
//! (keywords, logical operators, symbolic operators, special characters) is
//! resolved by one function returning the matching variant.
use super::keywords::{Keyword, LogicalOperator};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Token categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TokenCategory {
    Keyword,
    Identifier,
    Number,
    String,
    ArithmeticOperator,
    RelationalOperator,
    LogicalOperator,
    CompoundAssignmentOperator,
    AssignmentOperator,
    CrementOperator,
    Special,
}

impl TokenCategory {
    /// Display label used by the textual token listing
    pub const fn label(self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::Identifier => "identifier",
            Self::Number => "number",
            Self::String => "string",
            Self::ArithmeticOperator => "Arithmetic Operator",
            Self::RelationalOperator => "Relational Operator",
            Self::LogicalOperator => "Logical Operator",
            Self::CompoundAssignmentOperator => "Compound Assignment Operator",
            Self::AssignmentOperator => "Assignment Operator",
            Self::CrementOperator => "Crement Operator",
            Self::Special => "special",
        }
    }

    /// Check if this category is produced by the symbolic operator table
    pub fn is_operator(self) -> bool {
        matches!(
            self,
            Self::ArithmeticOperator
                | Self::RelationalOperator
                | Self::CompoundAssignmentOperator
                | Self::AssignmentOperator
                | Self::CrementOperator
        )
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// === OPERATORS ===

/// Operator families; the symbol sets are disjoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperatorKind {
    Arithmetic,
    Relational,
    CompoundAssignment,
    Crement,
    Assignment,
}

impl OperatorKind {
    pub const fn category(self) -> TokenCategory {
        match self {
            Self::Arithmetic => TokenCategory::ArithmeticOperator,
            Self::Relational => TokenCategory::RelationalOperator,
            Self::CompoundAssignment => TokenCategory::CompoundAssignmentOperator,
            Self::Crement => TokenCategory::CrementOperator,
            Self::Assignment => TokenCategory::AssignmentOperator,
        }
    }
}

/// A symbolic operator and the family it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Operator {
    pub symbol: &'static str,
    pub kind: OperatorKind,
}

impl Operator {
    const fn new(symbol: &'static str, kind: OperatorKind) -> Self {
        Self { symbol, kind }
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.symbol.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.symbol.is_empty()
    }
}

/// Symbolic operators, longest first
pub const OPERATORS: [Operator; 17] = [
    Operator::new("==", OperatorKind::Relational),
    Operator::new(">=", OperatorKind::Relational),
    Operator::new("<=", OperatorKind::Relational),
    Operator::new("!=", OperatorKind::Relational),
    Operator::new("+=", OperatorKind::CompoundAssignment),
    Operator::new("-=", OperatorKind::CompoundAssignment),
    Operator::new("*=", OperatorKind::CompoundAssignment),
    Operator::new("/=", OperatorKind::CompoundAssignment),
    Operator::new("++", OperatorKind::Crement),
    Operator::new("--", OperatorKind::Crement),
    Operator::new("+", OperatorKind::Arithmetic),
    Operator::new("-", OperatorKind::Arithmetic),
    Operator::new("*", OperatorKind::Arithmetic),
    Operator::new("/", OperatorKind::Arithmetic),
    Operator::new(">", OperatorKind::Relational),
    Operator::new("<", OperatorKind::Relational),
    Operator::new("=", OperatorKind::Assignment),
];

/// Single-character punctuation
pub const SPECIAL_CHARACTERS: [char; 5] = ['(', ')', ',', '[', ']'];

// === TOKEN ===

/// A classified lexeme
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub category: TokenCategory,
    pub lexeme: String,
}

impl Token {
    pub fn new(category: TokenCategory, lexeme: impl Into<String>) -> Self {
        Self {
            category,
            lexeme: lexeme.into(),
        }
    }

    pub fn keyword(keyword: Keyword) -> Self {
        Self::new(TokenCategory::Keyword, keyword.as_str())
    }

    pub fn identifier(name: &str) -> Self {
        Self::new(TokenCategory::Identifier, name)
    }

    pub fn number(text: &str) -> Self {
        Self::new(TokenCategory::Number, text)
    }

    /// String literal; `value` excludes the quotes
    pub fn string(value: &str) -> Self {
        Self::new(TokenCategory::String, value)
    }

    pub fn operator(operator: Operator) -> Self {
        Self::new(operator.kind.category(), operator.symbol)
    }

    pub fn special(ch: char) -> Self {
        Self::new(TokenCategory::Special, ch.to_string())
    }

    /// Check if this token is the given keyword
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.category == TokenCategory::Keyword && self.lexeme == keyword.as_str()
    }

    pub fn is_identifier(&self) -> bool {
        self.category == TokenCategory::Identifier
    }

    /// Get identifier name if this token is an identifier
    pub fn as_identifier(&self) -> Option<&str> {
        match self.category {
            TokenCategory::Identifier => Some(&self.lexeme),
            _ => None,
        }
    }

    /// Check if this token is the plain `=` assignment
    pub fn is_assignment(&self) -> bool {
        self.category == TokenCategory::AssignmentOperator
    }

    /// One line of the token listing: `Token: <label>, Lexeme: <lexeme>`
    pub fn render(&self) -> String {
        format!("Token: {}, Lexeme: {}", self.category.label(), self.lexeme)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lexeme)
    }
}

// === CLASSIFICATION FUNCTIONS ===

/// Classify a scanned word: keyword, logical operator or identifier
///
/// Keywords and logical operators are normalised to uppercase; identifiers
/// keep their source spelling.
pub fn classify_word(word: &str) -> Token {
    if let Some(keyword) = Keyword::from_word(word) {
        Token::keyword(keyword)
    } else if let Some(op) = LogicalOperator::from_word(word) {
        Token::new(TokenCategory::LogicalOperator, op.as_str())
    } else {
        Token::identifier(word)
    }
}

/// Longest operator starting at `idx` in `line`
pub fn match_operator(line: &[char], idx: usize) -> Option<Operator> {
    let rest = line.get(idx..)?;
    OPERATORS
        .iter()
        .copied()
        .find(|op| op.len() <= rest.len() && op.symbol.chars().zip(rest).all(|(a, b)| a == *b))
}

/// Special-character token for `ch`, if it is one
pub fn classify_special(ch: char) -> Option<Token> {
    SPECIAL_CHARACTERS
        .contains(&ch)
        .then(|| Token::special(ch))
}

/// Characters that may start an identifier or keyword
///
/// Letter-numbers such as `Ⅻ` are alphabetic to Unicode but do not start a
/// word.
pub fn is_word_start(ch: char) -> bool {
    (ch.is_alphabetic() && !ch.is_numeric()) || ch == '_'
}

/// Characters that may continue an identifier or keyword
pub fn is_word_continue(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Characters that may continue a number
pub fn is_number_continue(ch: char) -> bool {
    is_number_start(ch) || ch == '.'
}

/// Numbers start with an ASCII decimal digit; `½` or `Ⅻ` never does
pub fn is_number_start(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Separators skipped between lexemes: Unicode whitespace plus the ASCII
/// information separators U+001C..=U+001F
pub fn is_blank(ch: char) -> bool {
    ch.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&ch)
}
