//! Consolidated diagnostic codes and classification
//!
//! Single source of truth for every code the lexer emits together with its
//! behavioral metadata.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for error, warning and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// CLASSIFICATION TYPES
// ============================================================================

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for a code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub requires_halt: bool,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

impl ErrorMetadata {
    pub fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        requires_halt: bool,
        description: &'static str,
        recommended_action: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            requires_halt,
            description,
            recommended_action,
        }
    }
}

// ============================================================================
// CODE CONSTANTS
// ============================================================================

/// System error codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const FILE_READ_FAILURE: Code = Code::new("ERR002");
    pub const CONFIGURATION_INVALID: Code = Code::new("ERR003");
}

/// Lexical analysis error codes
pub mod lexical {
    use super::Code;

    pub const INVALID_CHARACTER: Code = Code::new("E020");
    pub const UNTERMINATED_STRING: Code = Code::new("E021");
    pub const UNTERMINATED_COMMENT: Code = Code::new("E022");
    pub const UNCLOSED_PARAMETER_LIST: Code = Code::new("E023");

    // Limit violations
    pub const IDENTIFIER_TOO_LONG: Code = Code::new("E024");
    pub const STRING_TOO_LARGE: Code = Code::new("E025");
    pub const TOO_MANY_TOKENS: Code = Code::new("E026");
    pub const TOO_MANY_LINES: Code = Code::new("E027");
}

/// Symbol table codes
pub mod symbols {
    use super::Code;

    pub const TOO_MANY_SYMBOLS: Code = Code::new("E050");
    pub const VARIABLE_RECLASSIFIED: Code = Code::new("W051");
    pub const FUNCTION_ASSIGNMENT_IGNORED: Code = Code::new("W052");
}

/// Success codes
pub mod success {
    use super::Code;

    pub const PIPELINE_COMPLETE: Code = Code::new("I001");
    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I004");
    pub const TOKENIZATION_COMPLETE: Code = Code::new("I020");
    pub const TYPE_INFERENCE_COMPLETE: Code = Code::new("I050");
}

// ============================================================================
// METADATA REGISTRY
// ============================================================================

static ERROR_REGISTRY: OnceLock<HashMap<&'static str, ErrorMetadata>> = OnceLock::new();

fn get_error_registry() -> &'static HashMap<&'static str, ErrorMetadata> {
    ERROR_REGISTRY.get_or_init(|| {
        let mut registry = HashMap::new();

        // System errors
        registry.insert(
            "ERR001",
            ErrorMetadata::new(
                "ERR001",
                "System",
                Severity::Critical,
                false,
                true,
                "Internal lexer error",
                "Report lexer system bug",
            ),
        );
        registry.insert(
            "ERR002",
            ErrorMetadata::new(
                "ERR002",
                "System",
                Severity::High,
                false,
                true,
                "Source file could not be read",
                "Check the path and file permissions",
            ),
        );
        registry.insert(
            "ERR003",
            ErrorMetadata::new(
                "ERR003",
                "System",
                Severity::High,
                false,
                true,
                "Runtime configuration file is missing or invalid",
                "Fix the TOML file passed with --config",
            ),
        );

        // Lexical errors
        registry.insert(
            "E020",
            ErrorMetadata::new(
                "E020",
                "Lexical",
                Severity::High,
                false,
                true,
                "Character not matched by any lexeme rule, operator or special character",
                "Remove the character or place it inside a string literal or comment",
            ),
        );
        registry.insert(
            "E021",
            ErrorMetadata::new(
                "E021",
                "Lexical",
                Severity::High,
                false,
                true,
                "String literal without closing quote on the same line",
                "Add the closing ' before the end of the line",
            ),
        );
        registry.insert(
            "E022",
            ErrorMetadata::new(
                "E022",
                "Lexical",
                Severity::High,
                false,
                true,
                "Comment without closing brace on the same line",
                "Add the closing } before the end of the line",
            ),
        );
        registry.insert(
            "E023",
            ErrorMetadata::new(
                "E023",
                "Lexical",
                Severity::High,
                false,
                true,
                "CALL parameter list without closing parenthesis on the same line",
                "Close the parameter list with ) on the CALL line",
            ),
        );
        registry.insert(
            "E024",
            ErrorMetadata::new(
                "E024",
                "Lexical",
                Severity::Medium,
                false,
                true,
                "Identifier exceeds the configured maximum length",
                "Shorten the identifier",
            ),
        );
        registry.insert(
            "E025",
            ErrorMetadata::new(
                "E025",
                "Lexical",
                Severity::Medium,
                false,
                true,
                "String literal exceeds the configured maximum size",
                "Split the literal into smaller pieces",
            ),
        );
        registry.insert(
            "E026",
            ErrorMetadata::new(
                "E026",
                "Lexical",
                Severity::High,
                false,
                true,
                "Source produces more tokens than allowed",
                "Split the program into smaller sources",
            ),
        );
        registry.insert(
            "E027",
            ErrorMetadata::new(
                "E027",
                "Lexical",
                Severity::High,
                false,
                true,
                "Source has more lines than allowed",
                "Split the program into smaller sources",
            ),
        );

        // Symbol table
        registry.insert(
            "E050",
            ErrorMetadata::new(
                "E050",
                "Symbols",
                Severity::High,
                false,
                true,
                "Symbol table exceeds the configured maximum size",
                "Reduce the number of distinct identifiers",
            ),
        );
        registry.insert(
            "W051",
            ErrorMetadata::new(
                "W051",
                "Symbols",
                Severity::Low,
                true,
                false,
                "Identifier first seen as a variable was invoked with CALL and is now a function",
                "Use distinct names for variables and functions",
            ),
        );
        registry.insert(
            "W052",
            ErrorMetadata::new(
                "W052",
                "Symbols",
                Severity::Low,
                true,
                false,
                "LET assignment targets a name registered as a function; no type inferred",
                "Use distinct names for variables and functions",
            ),
        );

        registry
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

/// Get metadata for a specific code
pub fn get_error_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    get_error_registry().get(code)
}

/// Get severity from code
pub fn get_severity(code: &str) -> Severity {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.severity)
        .unwrap_or(Severity::Medium)
}

/// Check if error is recoverable
pub fn is_recoverable(code: &str) -> bool {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recoverable)
        .unwrap_or(true)
}

/// Check if error requires immediate halt
pub fn requires_halt(code: &str) -> bool {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.requires_halt)
        .unwrap_or(false)
}

/// Get human-readable description for code
pub fn get_description(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.description)
        .unwrap_or("Unknown error")
}

/// Get recommended action for code
pub fn get_action(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recommended_action)
        .unwrap_or("No specific action available")
}

/// Get category from code
pub fn get_category(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.category)
        .unwrap_or("Unknown")
}
