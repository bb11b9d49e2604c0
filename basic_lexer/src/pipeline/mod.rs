//! Lexical pipeline: scan, register symbols, then infer `LET` types
//!
//! Each call builds a fresh token stream and symbol table; nothing is shared
//! between calls.

mod error;
pub mod output;
mod result;
mod validation;

pub use error::PipelineError;
pub use output::LexicalOutput;
pub use result::PipelineResult;
pub use validation::validate_pipeline;

use crate::config::runtime::RuntimeConfig;
use crate::lexical::LexicalAnalyzer;
use crate::logging;
use crate::symbols::infer_types;
use std::path::Path;
use std::time::Instant;

/// Tokenize source text and infer variable types with default preferences
pub fn tokenize(source: &str) -> Result<LexicalOutput, PipelineError> {
    tokenize_with_config(source, &RuntimeConfig::default())
}

/// Tokenize source text with explicit runtime preferences
pub fn tokenize_with_config(
    source: &str,
    config: &RuntimeConfig,
) -> Result<LexicalOutput, PipelineError> {
    process_source(source, config).map(|result| result.output)
}

/// Run the full pipeline over in-memory source text
pub fn process_source(source: &str, config: &RuntimeConfig) -> Result<PipelineResult, PipelineError> {
    let start_time = Instant::now();

    let mut analyzer = LexicalAnalyzer::with_preferences(config.lexical.clone());
    let scan = analyzer.tokenize(source)?;

    let mut symbols = scan.symbols;
    let inference = infer_types(&scan.tokens, &mut symbols, &config.inference);

    let result = PipelineResult::new(
        LexicalOutput::new(scan.tokens, symbols),
        analyzer.metrics().clone(),
        inference,
        start_time.elapsed(),
    );
    result.log_success();

    Ok(result)
}

/// Read a file and run the pipeline over its contents
pub fn process_file(path: &Path, config: &RuntimeConfig) -> Result<PipelineResult, PipelineError> {
    let display = path.display().to_string();

    logging::with_source_context(&display, || {
        crate::log_info!("Starting lexical pipeline", "file" => display.as_str());

        let source = std::fs::read_to_string(path).map_err(|e| {
            let error = PipelineError::FileRead {
                path: display.clone(),
                message: e.to_string(),
            };
            crate::log_error!(error.error_code(), "Failed to read source file",
                "file" => display.as_str(),
                "reason" => e
            );
            error
        })?;

        process_source(&source, config)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical::LexerError;
    use crate::logging::codes;
    use crate::symbols::{InferredType, SymbolEntry};
    use crate::tokens::TokenCategory;
    use crate::DEMO_PROGRAM;
    use assert_matches::assert_matches;

    #[test]
    fn test_validate_pipeline() {
        assert!(validate_pipeline().is_ok());
    }

    #[test]
    fn test_config_error_conversion() {
        let config_error = RuntimeConfig::from_toml_str("[lexical\n").unwrap_err();
        let error = PipelineError::from(config_error);

        assert_matches!(error, PipelineError::Config(_));
        assert_eq!(error.error_code(), codes::system::CONFIGURATION_INVALID);
        assert!(error.to_string().starts_with("Configuration error: "));
        assert!(error.as_lexer_error().is_none());
    }

    #[test]
    fn test_string_assignment() {
        let output = tokenize("LET name = 'muhammed'").unwrap();
        assert_eq!(output.symbols.inferred_type("name"), Some(InferredType::String));
    }

    #[test]
    fn test_type_copied_from_identifier() {
        let output = tokenize("LET a = 5\nLET b = a").unwrap();
        assert_eq!(output.symbols.inferred_type("a"), Some(InferredType::Integer));
        assert_eq!(output.symbols.inferred_type("b"), Some(InferredType::Integer));
    }

    #[test]
    fn test_function_registration() {
        let output = tokenize("CALL myFunction(a, b)\nCALL Help").unwrap();
        assert_eq!(
            output.symbols.get("myFunction"),
            Some(&SymbolEntry::function(vec!["a".into(), "b".into()]))
        );
        assert_eq!(output.symbols.get("Help"), Some(&SymbolEntry::function(vec![])));
    }

    #[test]
    fn test_let_to_reclassified_name_keeps_function() {
        let output = tokenize("LET f = 1\nCALL f(x)\nLET f = 'now a string'").unwrap();
        assert_eq!(
            output.symbols.get("f"),
            Some(&SymbolEntry::function(vec!["x".into()]))
        );
    }

    #[test]
    fn test_errors_abort_whole_call() {
        let error = tokenize("LET a = 1\nLET b = {oops").unwrap_err();
        assert_matches!(
            error.as_lexer_error(),
            Some(LexerError::UnterminatedComment { line: 2, column: 8 })
        );
        assert_eq!(error.to_string(), "Unterminated comment starting at line 2, column 8");
    }

    #[test]
    fn test_idempotent() {
        let first = tokenize(DEMO_PROGRAM).unwrap();
        let second = tokenize(DEMO_PROGRAM).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
    }

    #[test]
    fn test_demo_program() {
        let result = process_source(DEMO_PROGRAM, &RuntimeConfig::default()).unwrap();
        let output = &result.output;

        assert_eq!(result.token_count(), 54);
        assert_eq!(result.inference.assignments_examined, 7);
        assert_eq!(result.inference.types_assigned, 7);
        assert_eq!(output.tokens.count_category(TokenCategory::Keyword), 13);

        assert_eq!(
            output.render_symbol_table(),
            "\nSymbol Table:\n\
             Name: Help, Type: function (with no parameters)\n\
             Name: a, Type: integer\n\
             Name: b, Type: integer\n\
             Name: c, Type: integer\n\
             Name: d, Type: integer\n\
             Name: e, Type: integer\n\
             Name: myFunction, Type: function (with parameters: a, b)\n\
             Name: name, Type: string\n\
             Name: z, Type: integer\n"
        );

        let rendered = output.render_tokens();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Token: keyword, Lexeme: LET");
        assert_eq!(lines[1], "Token: identifier, Lexeme: name");
        assert_eq!(lines[2], "Token: Assignment Operator, Lexeme: =");
        assert_eq!(lines[3], "Token: string, Lexeme: muhammed");
        assert!(lines.contains(&"Token: Logical Operator, Lexeme: OR"));
        assert!(lines.contains(&"Token: Crement Operator, Lexeme: ++"));
        assert!(lines.contains(&"Token: Compound Assignment Operator, Lexeme: +="));
        assert_eq!(lines[lines.len() - 1], "Token: identifier, Lexeme: Help");

        assert!(output.render().ends_with("Name: z, Type: integer\n"));
    }

    #[test]
    fn test_json_output_shape() {
        let output = tokenize("LET a = 5\nCALL f(a)").unwrap();
        let json: serde_json::Value = serde_json::from_str(&output.to_json().unwrap()).unwrap();

        assert_eq!(json["tokens"][0]["value"]["category"], "Keyword");
        assert_eq!(json["tokens"][0]["value"]["lexeme"], "LET");
        assert_eq!(json["tokens"][4]["span"]["start"]["line"], 2);
        assert_eq!(json["symbols"]["a"]["kind"], "variable");
        assert_eq!(json["symbols"]["a"]["inferred_type"], "integer");
        assert_eq!(json["symbols"]["f"]["parameters"][0], "a");
    }

    #[test]
    fn test_process_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"LET greeting = 'hi'\n").unwrap();

        let result = process_file(file.path(), &RuntimeConfig::default()).unwrap();
        assert_eq!(
            result.output.symbols.inferred_type("greeting"),
            Some(InferredType::String)
        );

        let missing = process_file(Path::new("/definitely/not/here.bas"), &RuntimeConfig::default())
            .unwrap_err();
        assert_matches!(missing, PipelineError::FileRead { ref path, .. } if path.contains("here.bas"));
        assert_eq!(missing.error_code(), codes::system::FILE_READ_FAILURE);
    }

    #[test]
    fn test_non_decimal_numeric_is_rejected() {
        let error = tokenize("LET x = ½").unwrap_err();
        assert_matches!(
            error.as_lexer_error(),
            Some(LexerError::InvalidCharacter { character: '½', line: 1, column: 8 })
        );
    }

    // The only test that installs the global logger. Events are matched on the
    // thread-local source context so concurrent tests do not interfere.
    #[test]
    fn test_diagnostic_events_are_logged() {
        use crate::logging::{Code, LogEvent, LogLevel, LoggingService, MemoryLogger};
        use std::sync::Arc;

        let memory = Arc::new(MemoryLogger::new());
        logging::init_global_logging_with_service(Arc::new(LoggingService::new(
            memory.clone(),
            LogLevel::Warning,
        )))
        .unwrap();

        let source_name = "diagnostic-events.bas";
        let events = |code: Code| -> Vec<LogEvent> {
            memory
                .get_events_with_code(code)
                .into_iter()
                .filter(|e| e.context.get("source").map(String::as_str) == Some(source_name))
                .collect()
        };

        let mut config = RuntimeConfig::default();
        config.lexical.warn_on_reclassification = true;
        config.lexical.include_position_in_errors = true;

        logging::with_source_context(source_name, || {
            process_source("LET f = 1\nCALL f(x)", &config).unwrap();
            process_source("LET a = 1\nLET b = {oops", &config).unwrap_err();
        });

        let reclassified = events(codes::symbols::VARIABLE_RECLASSIFIED);
        assert_eq!(reclassified.len(), 1);
        assert_eq!(reclassified[0].level, LogLevel::Warning);
        assert_eq!(reclassified[0].context.get("name").map(String::as_str), Some("f"));
        assert_eq!(reclassified[0].span.map(|s| s.start.line), Some(2));

        let ignored = events(codes::symbols::FUNCTION_ASSIGNMENT_IGNORED);
        assert_eq!(ignored.len(), 1);
        assert_eq!(ignored[0].context.get("name").map(String::as_str), Some("f"));

        let failures = events(codes::lexical::UNTERMINATED_COMMENT);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].level, LogLevel::Error);
        assert!(failures[0]
            .message
            .starts_with("Lexical analysis failed at line 2, column 8: "));
        let span = failures[0].span.unwrap();
        assert_eq!((span.start.line, span.start.column), (2, 8));

        // Without positions in the message, and without the reclassification warning
        config.lexical.include_position_in_errors = false;
        config.lexical.warn_on_reclassification = false;
        logging::with_source_context(source_name, || {
            process_source("LET g = 1\nCALL g", &config).unwrap();
            process_source("{oops", &config).unwrap_err();
        });

        assert_eq!(events(codes::symbols::VARIABLE_RECLASSIFIED).len(), 1);
        let failures = events(codes::lexical::UNTERMINATED_COMMENT);
        assert_eq!(failures.len(), 2);
        assert_eq!(
            failures[1].message,
            "Lexical analysis failed: Unterminated comment starting at line 1, column 0"
        );
    }
}
