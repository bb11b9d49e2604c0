//! Reserved words of the language
//!
//! Both tables are matched case-insensitively and always render uppercase.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Statement and block keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Keyword {
    // === ASSIGNMENT ===
    Let,

    // === CONDITIONALS ===
    If,
    Then,
    Else,
    EndIf,

    // === LOOPS ===
    While,
    Do,
    EndWhile,
    For,
    To,
    Step,
    EndFor,
    Repeat,
    Until,
    In,

    // === FUNCTIONS ===
    Func,
    Begin,
    Return,
    End,
    Call,
}

/// Every keyword, in declaration order
pub const KEYWORDS: [Keyword; 20] = [
    Keyword::Let,
    Keyword::If,
    Keyword::Then,
    Keyword::Else,
    Keyword::EndIf,
    Keyword::While,
    Keyword::Do,
    Keyword::EndWhile,
    Keyword::For,
    Keyword::To,
    Keyword::Step,
    Keyword::EndFor,
    Keyword::Repeat,
    Keyword::Until,
    Keyword::In,
    Keyword::Func,
    Keyword::Begin,
    Keyword::Return,
    Keyword::End,
    Keyword::Call,
];

impl Keyword {
    /// Canonical (uppercase) spelling
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Let => "LET",
            Self::If => "IF",
            Self::Then => "THEN",
            Self::Else => "ELSE",
            Self::EndIf => "ENDIF",
            Self::While => "WHILE",
            Self::Do => "DO",
            Self::EndWhile => "ENDWHILE",
            Self::For => "FOR",
            Self::To => "TO",
            Self::Step => "STEP",
            Self::EndFor => "ENDFOR",
            Self::Repeat => "REPEAT",
            Self::Until => "UNTIL",
            Self::In => "IN",
            Self::Func => "FUNC",
            Self::Begin => "BEGIN",
            Self::Return => "RETURN",
            Self::End => "END",
            Self::Call => "CALL",
        }
    }

    /// Case-insensitive lookup
    pub fn from_word(word: &str) -> Option<Self> {
        KEYWORDS
            .iter()
            .copied()
            .find(|kw| kw.as_str().eq_ignore_ascii_case(word))
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Word-form logical operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogicalOperator {
    And,
    Or,
    Not,
}

pub const LOGICAL_OPERATORS: [LogicalOperator; 3] =
    [LogicalOperator::And, LogicalOperator::Or, LogicalOperator::Not];

impl LogicalOperator {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
        }
    }

    /// Case-insensitive lookup
    pub fn from_word(word: &str) -> Option<Self> {
        LOGICAL_OPERATORS
            .iter()
            .copied()
            .find(|op| op.as_str().eq_ignore_ascii_case(word))
    }
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
