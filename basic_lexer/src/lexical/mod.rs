//! Lexical analysis module
//!
//! Scans source text into a token stream and builds the symbol table as
//! identifiers are encountered. Type inference runs afterwards, in the
//! pipeline.

pub mod analyzer;
pub mod call;

use crate::config::compile_time::lexical::*;
use crate::config::runtime::LexicalPreferences;

pub use analyzer::{LexerError, LexicalAnalyzer, LexicalMetrics, ScanResult};
pub use call::parse_call_parameters;

/// Tokenize source text with default preferences
pub fn tokenize(source: &str) -> Result<ScanResult, LexerError> {
    LexicalAnalyzer::new().tokenize(source)
}

/// Tokenize with custom runtime preferences (limits remain compile-time)
pub fn tokenize_with_preferences(
    source: &str,
    preferences: LexicalPreferences,
) -> Result<ScanResult, LexerError> {
    LexicalAnalyzer::with_preferences(preferences).tokenize(source)
}

/// Verify every lexical error code is registered with metadata
pub fn validate_error_codes() -> Result<(), String> {
    let lexical_codes = [
        crate::logging::codes::lexical::INVALID_CHARACTER,
        crate::logging::codes::lexical::UNTERMINATED_STRING,
        crate::logging::codes::lexical::UNTERMINATED_COMMENT,
        crate::logging::codes::lexical::UNCLOSED_PARAMETER_LIST,
        crate::logging::codes::lexical::IDENTIFIER_TOO_LONG,
        crate::logging::codes::lexical::STRING_TOO_LARGE,
        crate::logging::codes::lexical::TOO_MANY_TOKENS,
        crate::logging::codes::lexical::TOO_MANY_LINES,
        crate::logging::codes::symbols::TOO_MANY_SYMBOLS,
    ];

    for code in &lexical_codes {
        if crate::logging::codes::get_error_metadata(code.as_str()).is_none() {
            return Err(format!(
                "Lexical error code {} not found in metadata registry",
                code.as_str()
            ));
        }
    }

    crate::log_debug!("Lexical limits in effect",
        "max_source_lines" => MAX_SOURCE_LINES,
        "max_token_count" => MAX_TOKEN_COUNT,
        "max_identifier_length" => MAX_IDENTIFIER_LENGTH,
        "max_string_size" => MAX_STRING_SIZE
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_registered() {
        assert!(validate_error_codes().is_ok());
    }

    #[test]
    fn test_module_entry_points_agree() {
        let source = "LET a = 5\nCALL f(a)";
        let default = tokenize(source).unwrap();
        let custom = tokenize_with_preferences(source, LexicalPreferences::default()).unwrap();
        assert_eq!(default, custom);
    }
}
