// build.rs - TOML-driven compile-time limit generation
use std::env;
use std::fs;
use std::path::Path;

#[derive(serde::Deserialize)]
struct CompileTimeConfig {
    lexical: LexicalLimits,
    symbols: SymbolLimits,
    logging: LoggingLimits,
}

#[derive(serde::Deserialize)]
struct LexicalLimits {
    max_source_lines: usize,
    max_token_count: usize,
    max_identifier_length: usize,
    max_string_size: usize,
}

#[derive(serde::Deserialize)]
struct SymbolLimits {
    max_symbol_count: usize,
}

#[derive(serde::Deserialize)]
struct LoggingLimits {
    log_buffer_size: usize,
    max_log_message_length: usize,
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=BASIC_LEXER_BUILD_PROFILE");
    println!("cargo:rerun-if-env-changed=BASIC_LEXER_CONFIG_DIR");

    let profile =
        env::var("BASIC_LEXER_BUILD_PROFILE").unwrap_or_else(|_| "development".to_string());
    let config_dir = env::var("BASIC_LEXER_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

    // Workspace root is the parent of the basic_lexer directory
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let workspace_root = Path::new(&manifest_dir)
        .parent()
        .expect("Could not find workspace root (parent directory)");

    let config_path = workspace_root
        .join(&config_dir)
        .join(format!("{}.toml", profile));

    println!("cargo:rerun-if-changed={}", config_path.display());

    if !config_path.exists() {
        panic!(
            "Configuration file not found: {}\nWorkspace root: {}\nLooking for: {}/{}/{}.toml",
            config_path.display(),
            workspace_root.display(),
            workspace_root.display(),
            config_dir,
            profile
        );
    }

    let config_content = fs::read_to_string(&config_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", config_path.display(), e));

    let config: CompileTimeConfig = toml::from_str(&config_content)
        .unwrap_or_else(|e| panic!("Invalid TOML in {}: {}", config_path.display(), e));

    validate_limits(&config, &profile);
    generate_constants(&config, &profile);
}

fn validate_limits(config: &CompileTimeConfig, profile: &str) {
    const ABSOLUTE_MAX_TOKENS: usize = 50_000_000;
    const ABSOLUTE_MAX_STRING_SIZE: usize = 100_000_000;

    if config.lexical.max_token_count == 0 || config.lexical.max_token_count > ABSOLUTE_MAX_TOKENS
    {
        panic!("LIMITS: max_token_count must be in 1..={}", ABSOLUTE_MAX_TOKENS);
    }

    if config.lexical.max_string_size > ABSOLUTE_MAX_STRING_SIZE {
        panic!("LIMITS: max_string_size exceeds absolute maximum");
    }

    if config.lexical.max_identifier_length == 0 || config.lexical.max_source_lines == 0 {
        panic!("LIMITS: identifier length and source line limits cannot be zero");
    }

    if config.symbols.max_symbol_count == 0 {
        panic!("LIMITS: max_symbol_count cannot be zero");
    }

    if config.logging.log_buffer_size < 16 {
        panic!("LIMITS: log_buffer_size too small (min: 16)");
    }

    if profile == "production" && config.lexical.max_token_count > 5_000_000 {
        panic!("PRODUCTION: max_token_count too high for production");
    }
}

fn generate_constants(config: &CompileTimeConfig, profile: &str) {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("constants.rs");

    let constants_code = format!(
        r#"
// Generated compile-time constants from TOML configuration
// Profile: {}
// DO NOT EDIT - Generated by build.rs

pub mod compile_time {{
    pub mod lexical {{
        pub const MAX_SOURCE_LINES: usize = {};
        pub const MAX_TOKEN_COUNT: usize = {};
        pub const MAX_IDENTIFIER_LENGTH: usize = {};
        pub const MAX_STRING_SIZE: usize = {};
    }}

    pub mod symbols {{
        pub const MAX_SYMBOL_COUNT: usize = {};
    }}

    pub mod logging {{
        pub const LOG_BUFFER_SIZE: usize = {};
        pub const MAX_LOG_MESSAGE_LENGTH: usize = {};
    }}
}}
"#,
        profile,
        // Lexical
        config.lexical.max_source_lines,
        config.lexical.max_token_count,
        config.lexical.max_identifier_length,
        config.lexical.max_string_size,
        // Symbols
        config.symbols.max_symbol_count,
        // Logging
        config.logging.log_buffer_size,
        config.logging.max_log_message_length,
    );

    fs::write(output_path, constants_code).unwrap();
}
