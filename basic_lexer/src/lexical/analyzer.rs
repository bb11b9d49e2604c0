//! Core lexical analyzer: scanner, classifier and symbol registration
//!
//! Source text is split on `\n` and every line is scanned left to right with
//! an explicit cursor. Each lexeme is classified and appended as one token;
//! identifiers are registered in the symbol table before their token is
//! appended. Any error aborts the whole call.

use super::call::parse_call_parameters;
use crate::config::compile_time::lexical::*;
use crate::config::compile_time::symbols::MAX_SYMBOL_COUNT;
use crate::config::runtime::LexicalPreferences;
use crate::logging::codes;
use crate::symbols::{SymbolEntry, SymbolTable};
use crate::tokens::{
    classify_special, classify_word, is_blank, is_number_continue, is_number_start,
    is_word_continue, is_word_start, match_operator, Keyword, Token, TokenCategory, TokenStream,
};
use crate::utils::{Position, Span};
use crate::{log_debug, log_error, log_success, log_warning};
use std::collections::{BTreeMap, HashMap};

/// Lexical analysis errors with compile-time security boundaries
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexerError {
    #[error("Unterminated comment starting at line {line}, column {column}")]
    UnterminatedComment { line: u32, column: u32 },

    #[error("Unterminated string starting at line {line}, column {column}")]
    UnterminatedString { line: u32, column: u32 },

    #[error("Unclosed parameter list for function call at line {line}")]
    UnclosedParameterList { line: u32 },

    #[error("Invalid character '{character}' at line {line}, column {column}")]
    InvalidCharacter {
        character: char,
        line: u32,
        column: u32,
    },

    #[error("Identifier too long: {length} characters (max {MAX_IDENTIFIER_LENGTH}) at line {line}, column {column}")]
    IdentifierTooLong { length: usize, line: u32, column: u32 },

    #[error("String too large: {size} characters (max {MAX_STRING_SIZE}) at line {line}, column {column}")]
    StringTooLarge { size: usize, line: u32, column: u32 },

    #[error("Too many tokens: {count} (max {MAX_TOKEN_COUNT})")]
    TooManyTokens { count: usize },

    #[error("Too many source lines: {lines} (max {MAX_SOURCE_LINES})")]
    TooManyLines { lines: usize },

    #[error("Too many symbols: {count} (max {MAX_SYMBOL_COUNT})")]
    TooManySymbols { count: usize },
}

impl LexerError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            LexerError::UnterminatedComment { .. } => codes::lexical::UNTERMINATED_COMMENT,
            LexerError::UnterminatedString { .. } => codes::lexical::UNTERMINATED_STRING,
            LexerError::UnclosedParameterList { .. } => codes::lexical::UNCLOSED_PARAMETER_LIST,
            LexerError::InvalidCharacter { .. } => codes::lexical::INVALID_CHARACTER,
            LexerError::IdentifierTooLong { .. } => codes::lexical::IDENTIFIER_TOO_LONG,
            LexerError::StringTooLarge { .. } => codes::lexical::STRING_TOO_LARGE,
            LexerError::TooManyTokens { .. } => codes::lexical::TOO_MANY_TOKENS,
            LexerError::TooManyLines { .. } => codes::lexical::TOO_MANY_LINES,
            LexerError::TooManySymbols { .. } => codes::symbols::TOO_MANY_SYMBOLS,
        }
    }

    /// Line the error refers to, if it refers to one
    pub fn line(&self) -> Option<u32> {
        match self {
            LexerError::UnterminatedComment { line, .. }
            | LexerError::UnterminatedString { line, .. }
            | LexerError::UnclosedParameterList { line }
            | LexerError::InvalidCharacter { line, .. }
            | LexerError::IdentifierTooLong { line, .. }
            | LexerError::StringTooLarge { line, .. } => Some(*line),
            LexerError::TooManyTokens { .. }
            | LexerError::TooManyLines { .. }
            | LexerError::TooManySymbols { .. } => None,
        }
    }

    /// 0-based column the error refers to, if it refers to one
    pub fn column(&self) -> Option<u32> {
        match self {
            LexerError::UnterminatedComment { column, .. }
            | LexerError::UnterminatedString { column, .. }
            | LexerError::InvalidCharacter { column, .. }
            | LexerError::IdentifierTooLong { column, .. }
            | LexerError::StringTooLarge { column, .. } => Some(*column),
            _ => None,
        }
    }
}

/// Lexical analysis metrics, reset on every call
#[derive(Debug, Default, Clone)]
pub struct LexicalMetrics {
    pub total_tokens: usize,
    pub lines_scanned: usize,
    pub comments_skipped: usize,
    pub max_string_length: usize,
    pub variables_registered: usize,
    pub functions_registered: usize,
    pub reclassified_variables: usize,

    // Runtime preference-controlled metrics
    pub category_counts: BTreeMap<TokenCategory, usize>,
    pub operator_usage_patterns: HashMap<String, usize>,
}

impl LexicalMetrics {
    pub(crate) fn record_token(&mut self, token: &Token, preferences: &LexicalPreferences) {
        self.total_tokens += 1;

        if preferences.collect_detailed_metrics {
            *self.category_counts.entry(token.category).or_insert(0) += 1;
        }

        if token.category.is_operator() && preferences.track_operator_patterns {
            *self
                .operator_usage_patterns
                .entry(token.lexeme.clone())
                .or_insert(0) += 1;
        }
    }

    pub(crate) fn record_string_length(&mut self, length: usize) {
        self.max_string_length = self.max_string_length.max(length);
    }

    pub(crate) fn record_comment(&mut self) {
        self.comments_skipped += 1;
    }

    /// Tokens seen in `category` (zero unless detailed metrics are collected)
    pub fn category_count(&self, category: TokenCategory) -> usize {
        self.category_counts.get(&category).copied().unwrap_or(0)
    }
}

/// Tokens and symbols produced by one scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    pub tokens: TokenStream,
    pub symbols: SymbolTable,
}

/// Per-line scan position
struct LineCursor<'a> {
    chars: &'a [char],
    number: u32,
    /// Char offset of the line start within the whole source
    offset: usize,
    cursor: usize,
}

impl LineCursor<'_> {
    fn position(&self, column: usize) -> Position {
        Position::new(self.offset + column, self.number, column as u32)
    }

    fn span(&self, start: usize, end: usize) -> Span {
        Span::new(self.position(start), self.position(end))
    }

    /// First index at or after `from` holding `target`
    fn find(&self, target: char, from: usize) -> Option<usize> {
        self.chars
            .get(from..)?
            .iter()
            .position(|&c| c == target)
            .map(|p| from + p)
    }

    /// Advance while `pred` holds, returning the consumed run
    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let start = self.cursor;
        while self.cursor < self.chars.len() && pred(self.chars[self.cursor]) {
            self.cursor += 1;
        }
        self.chars[start..self.cursor].iter().collect()
    }
}

/// Core lexical analyzer with global logging integration and compile-time security boundaries
pub struct LexicalAnalyzer {
    metrics: LexicalMetrics,
    preferences: LexicalPreferences,
}

impl LexicalAnalyzer {
    pub fn new() -> Self {
        Self {
            metrics: LexicalMetrics::default(),
            preferences: LexicalPreferences::default(),
        }
    }

    pub fn with_preferences(preferences: LexicalPreferences) -> Self {
        Self {
            metrics: LexicalMetrics::default(),
            preferences,
        }
    }

    /// Tokenize a whole source text, registering identifiers as they are seen
    pub fn tokenize(&mut self, source: &str) -> Result<ScanResult, LexerError> {
        self.metrics = LexicalMetrics::default();

        let lines: Vec<&str> = source.split('\n').collect();

        log_debug!("Starting lexical analysis",
            "line_count" => lines.len(),
            "char_count" => source.chars().count(),
            "max_tokens_allowed" => MAX_TOKEN_COUNT,
            "max_string_size_allowed" => MAX_STRING_SIZE
        );

        let mut result = ScanResult::default();

        if lines.len() > MAX_SOURCE_LINES {
            let error = LexerError::TooManyLines { lines: lines.len() };
            log_error!(error.error_code(), "Source line limit exceeded",
                "line_count" => lines.len(),
                "limit" => MAX_SOURCE_LINES
            );
            return Err(error);
        }

        let mut offset = 0;
        for (index, text) in lines.iter().enumerate() {
            let chars: Vec<char> = text.chars().collect();
            let mut line = LineCursor {
                chars: &chars,
                number: (index + 1) as u32,
                offset,
                cursor: 0,
            };

            if let Err(error) = self.scan_line(&mut line, &mut result) {
                self.report_failure(&error, &line, result.tokens.len());
                return Err(error);
            }

            self.metrics.lines_scanned += 1;
            offset += chars.len() + 1;
        }

        log_success!(codes::success::TOKENIZATION_COMPLETE, "Tokenization completed successfully",
            "tokens" => result.tokens.len(),
            "symbols" => result.symbols.len(),
            "lines" => self.metrics.lines_scanned,
            "comments_skipped" => self.metrics.comments_skipped,
            "max_string_length" => self.metrics.max_string_length
        );

        Ok(result)
    }

    pub fn metrics(&self) -> &LexicalMetrics {
        &self.metrics
    }

    pub fn preferences(&self) -> &LexicalPreferences {
        &self.preferences
    }

    // === PRIVATE SCANNING ===

    fn scan_line(
        &mut self,
        line: &mut LineCursor<'_>,
        result: &mut ScanResult,
    ) -> Result<(), LexerError> {
        while line.cursor < line.chars.len() {
            let ch = line.chars[line.cursor];

            if is_blank(ch) {
                line.cursor += 1;
            } else if ch == '{' {
                self.skip_comment(line)?;
            } else if ch == '\'' {
                self.scan_string(line, result)?;
            } else if is_number_start(ch) {
                let start = line.cursor;
                let text = line.take_while(is_number_continue);
                self.emit(result, Token::number(&text), line.span(start, line.cursor))?;
            } else if is_word_start(ch) {
                self.scan_word(line, result)?;
            } else if let Some(op) = match_operator(line.chars, line.cursor) {
                let start = line.cursor;
                line.cursor += op.len();
                self.emit(result, Token::operator(op), line.span(start, line.cursor))?;
            } else if let Some(token) = classify_special(ch) {
                let start = line.cursor;
                line.cursor += 1;
                self.emit(result, token, line.span(start, line.cursor))?;
            } else {
                return Err(LexerError::InvalidCharacter {
                    character: ch,
                    line: line.number,
                    column: line.cursor as u32,
                });
            }
        }
        Ok(())
    }

    /// `{ ... }` on a single line
    fn skip_comment(&mut self, line: &mut LineCursor<'_>) -> Result<(), LexerError> {
        let close = line
            .find('}', line.cursor + 1)
            .ok_or(LexerError::UnterminatedComment {
                line: line.number,
                column: line.cursor as u32,
            })?;
        line.cursor = close + 1;
        self.metrics.record_comment();
        Ok(())
    }

    /// `' ... '` on a single line; the token value excludes the quotes
    fn scan_string(
        &mut self,
        line: &mut LineCursor<'_>,
        result: &mut ScanResult,
    ) -> Result<(), LexerError> {
        let start = line.cursor;
        let close = line
            .find('\'', start + 1)
            .ok_or(LexerError::UnterminatedString {
                line: line.number,
                column: start as u32,
            })?;

        let size = close - start - 1;
        if size > MAX_STRING_SIZE {
            return Err(LexerError::StringTooLarge {
                size,
                line: line.number,
                column: start as u32,
            });
        }

        let value: String = line.chars[start + 1..close].iter().collect();
        self.metrics.record_string_length(size);
        line.cursor = close + 1;
        self.emit(result, Token::string(&value), line.span(start, line.cursor))
    }

    /// Keyword, logical operator or identifier, with symbol registration
    fn scan_word(
        &mut self,
        line: &mut LineCursor<'_>,
        result: &mut ScanResult,
    ) -> Result<(), LexerError> {
        let start = line.cursor;
        let word = line.take_while(is_word_continue);
        let length = line.cursor - start;
        let span = line.span(start, line.cursor);

        if length > MAX_IDENTIFIER_LENGTH {
            return Err(LexerError::IdentifierTooLong {
                length,
                line: line.number,
                column: start as u32,
            });
        }

        let token = classify_word(&word);
        if token.is_identifier() {
            let after_call = result
                .tokens
                .last_token()
                .is_some_and(|t| t.is_keyword(Keyword::Call));

            self.check_symbol_capacity(&result.symbols, &word)?;

            if after_call {
                let parameters = parse_call_parameters(line.chars, &mut line.cursor, line.number)?;
                self.register_function(&mut result.symbols, &word, parameters, span);
            } else if result.symbols.register_variable(&word) {
                self.metrics.variables_registered += 1;
            }
        }

        self.emit(result, token, span)
    }

    fn register_function(
        &mut self,
        symbols: &mut SymbolTable,
        name: &str,
        parameters: Vec<String>,
        span: Span,
    ) {
        let parameter_count = parameters.len();
        let previous = symbols.register_function(name, parameters);
        self.metrics.functions_registered += 1;

        if let Some(SymbolEntry::Variable { inferred_type }) = previous {
            self.metrics.reclassified_variables += 1;
            if self.preferences.warn_on_reclassification {
                log_warning!(code = codes::symbols::VARIABLE_RECLASSIFIED,
                    "CALL reclassified a variable as a function",
                    span = span,
                    "name" => name,
                    "previous_type" => inferred_type,
                    "parameters" => parameter_count
                );
            }
        }
    }

    fn check_symbol_capacity(&self, symbols: &SymbolTable, name: &str) -> Result<(), LexerError> {
        if !symbols.contains(name) && symbols.len() >= MAX_SYMBOL_COUNT {
            return Err(LexerError::TooManySymbols {
                count: symbols.len() + 1,
            });
        }
        Ok(())
    }

    /// Append one token, enforcing the token limit
    fn emit(&mut self, result: &mut ScanResult, token: Token, span: Span) -> Result<(), LexerError> {
        if result.tokens.len() >= MAX_TOKEN_COUNT {
            return Err(LexerError::TooManyTokens {
                count: result.tokens.len() + 1,
            });
        }
        self.metrics.record_token(&token, &self.preferences);
        result.tokens.push(token, span);
        Ok(())
    }

    fn report_failure(&self, error: &LexerError, line: &LineCursor<'_>, tokens_processed: usize) {
        let column = error.column().unwrap_or(line.cursor as u32) as usize;
        let span = Span::single(line.position(column));
        let message = if self.preferences.include_position_in_errors {
            format!(
                "Lexical analysis failed at line {}, column {}: {}",
                line.number, column, error
            )
        } else {
            format!("Lexical analysis failed: {}", error)
        };

        log_error!(error.error_code(), &message,
            span = span,
            "line" => line.number,
            "column" => column,
            "tokens_processed" => tokens_processed
        );
    }
}

impl Default for LexicalAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
