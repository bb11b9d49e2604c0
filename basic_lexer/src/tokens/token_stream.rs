//! Ordered token sequence produced by one tokenization call
//!
//! Order is the only sequencing mechanism: the inference pass and all
//! renderers walk the stream front to back.

use crate::{
    tokens::token::{Token, TokenCategory},
    utils::{Span, Spanned},
};
use serde::Serialize;

/// A token with span information
pub type SpannedToken = Spanned<Token>;

/// Append-only token container with positional lookups
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TokenStream {
    tokens: Vec<SpannedToken>,
}

impl TokenStream {
    pub fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Append a token
    pub fn push(&mut self, token: Token, span: Span) {
        self.tokens.push(SpannedToken::new(token, span));
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token at `index`
    pub fn get(&self, index: usize) -> Option<&SpannedToken> {
        self.tokens.get(index)
    }

    /// Token value at `index`, without its span
    pub fn token_at(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index).map(|spanned| &spanned.value)
    }

    /// Most recently appended token
    pub fn last_token(&self) -> Option<&Token> {
        self.tokens.last().map(|spanned| &spanned.value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SpannedToken> {
        self.tokens.iter()
    }

    /// Token values in order
    pub fn values(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().map(|spanned| &spanned.value)
    }

    /// Number of tokens in `category`
    pub fn count_category(&self, category: TokenCategory) -> usize {
        self.values().filter(|t| t.category == category).count()
    }

    /// Lexemes joined by single spaces
    pub fn joined_lexemes(&self) -> String {
        self.values()
            .map(|t| t.lexeme.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// One `Token: <label>, Lexeme: <lexeme>` line per token
    pub fn render(&self) -> String {
        let mut out = String::new();
        for token in self.values() {
            out.push_str(&token.render());
            out.push('\n');
        }
        out
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a SpannedToken;
    type IntoIter = std::slice::Iter<'a, SpannedToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::keywords::Keyword;
    use crate::utils::Position;

    fn span(offset: usize, column: u32, len: usize) -> Span {
        let start = Position::new(offset, 1, column);
        Span::new(start, start.advance_chars(len))
    }

    fn sample() -> TokenStream {
        let mut stream = TokenStream::new();
        stream.push(Token::keyword(Keyword::Let), span(0, 0, 3));
        stream.push(Token::identifier("a"), span(4, 4, 1));
        stream.push(Token::new(TokenCategory::AssignmentOperator, "="), span(6, 6, 1));
        stream.push(Token::number("5"), span(8, 8, 1));
        stream
    }

    #[test]
    fn test_lookups() {
        let stream = sample();
        assert_eq!(stream.len(), 4);
        assert!(!stream.is_empty());
        assert_eq!(stream.last_token(), Some(&Token::number("5")));
        assert_eq!(stream.token_at(1), Some(&Token::identifier("a")));
        assert_eq!(stream.get(1).map(|t| t.span.start.column), Some(4));
        assert!(stream.token_at(9).is_none());
        assert_eq!(stream.count_category(TokenCategory::Identifier), 1);
        assert_eq!(stream.joined_lexemes(), "LET a = 5");
    }

    #[test]
    fn test_render() {
        let rendered = sample().render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Token: keyword, Lexeme: LET");
        assert_eq!(lines[2], "Token: Assignment Operator, Lexeme: =");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_iterates_in_push_order() {
        let stream = sample();
        let offsets: Vec<usize> = (&stream).into_iter().map(|t| t.span.start.offset).collect();
        assert_eq!(offsets, vec![0, 4, 6, 8]);
        assert_eq!(stream.iter().count(), stream.values().count());
    }

    #[test]
    fn test_serializes_as_sequence() {
        let json = serde_json::to_value(sample()).unwrap();
        let array = json.as_array().unwrap();
        assert_eq!(array.len(), 4);
        assert_eq!(array[0]["value"]["category"], "Keyword");
        assert_eq!(array[0]["value"]["lexeme"], "LET");
        assert_eq!(array[3]["span"]["start"]["column"], 8);
    }
}
