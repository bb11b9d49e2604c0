use basic_lexer::config::runtime::RuntimeConfig;
use basic_lexer::utils::SourceMap;
use basic_lexer::{logging, pipeline, PipelineError, PipelineResult, DEMO_PROGRAM};
use std::env;
use std::path::{Path, PathBuf};

/// Parsed command line
#[derive(Debug, Default)]
struct Options {
    input: Option<PathBuf>,
    config: Option<PathBuf>,
    json: bool,
    help: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    let program_name = args.first().map(String::as_str).unwrap_or("basic_lexer");

    let options = match parse_options(&args[1.min(args.len())..]) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!("       {} --help", program_name);
            std::process::exit(1);
        }
    };

    if options.help {
        print_help(program_name);
        return Ok(());
    }

    let config = match load_config(options.config.as_deref()) {
        Ok(config) => config,
        Err(error) => {
            print_error(&error, None);
            std::process::exit(1);
        }
    };

    // Initialize global logging system
    logging::config::init_runtime_preferences(config.logging.clone())?;
    logging::init_global_logging()?;

    // Validate pipeline configuration
    pipeline::validate_pipeline()?;

    let result = match &options.input {
        Some(path) => pipeline::process_file(path, &config),
        None => pipeline::process_source(DEMO_PROGRAM, &config),
    };

    match result {
        Ok(result) => print_result(&result, options.json)?,
        Err(error) => {
            let source = match &options.input {
                Some(path) => read_for_report(path),
                None => Some(DEMO_PROGRAM.to_string()),
            };
            print_error(&error, source.as_deref());
            std::process::exit(1);
        }
    }

    Ok(())
}

fn parse_options(args: &[String]) -> Result<Options, String> {
    let mut options = Options::default();
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => options.help = true,
            "--json" => options.json = true,
            "--config" => {
                let Some(path) = args.get(i + 1) else {
                    return Err("--config requires a path".to_string());
                };
                options.config = Some(PathBuf::from(path));
                i += 1;
            }
            other if other.starts_with("--") => {
                return Err(format!("Unknown option '{}'", other));
            }
            path => {
                if options.input.is_some() {
                    return Err(format!("Unexpected extra argument '{}'", path));
                }
                options.input = Some(PathBuf::from(path));
            }
        }
        i += 1;
    }

    Ok(options)
}

fn load_config(path: Option<&Path>) -> Result<RuntimeConfig, PipelineError> {
    match path {
        Some(path) => Ok(RuntimeConfig::from_file(path)?),
        None => Ok(RuntimeConfig::default()),
    }
}

fn print_help(program_name: &str) {
    println!("BASIC Lexer v{}", env!("CARGO_PKG_VERSION"));
    println!("Tokenizes a BASIC-like program and prints its tokens and symbol table");
    println!();
    println!("USAGE:");
    println!("    {} [FILE] [options]", program_name);
    println!();
    println!("ARGUMENTS:");
    println!("    [FILE]    Source file to tokenize (default: built-in demo program)");
    println!();
    println!("OPTIONS:");
    println!("    --json           Print tokens and symbol table as JSON");
    println!("    --config PATH    Load runtime preferences from a TOML file");
    println!("    --help           Show this help message");
    println!();
    println!("ENVIRONMENT:");
    println!("    BASIC_LEXER_LOG_LEVEL         error | warning | info | debug");
    println!("    BASIC_LEXER_LOG_STRUCTURED    true for JSON log lines on stderr");
    println!("    BASIC_LEXER_LOG_CONSOLE       false to silence diagnostics");
    println!();
    println!("BUILD CONFIGURATION:");
    println!("    {}", basic_lexer::config::build_info::source_info());
}

fn print_result(result: &PipelineResult, json: bool) -> Result<(), PipelineError> {
    if json {
        println!("{}", result.output.to_json()?);
    } else {
        print!("{}", result.output.render());
    }
    Ok(())
}

/// Source text used to point at the failing line; `None` if unreadable
fn read_for_report(path: &Path) -> Option<String> {
    std::fs::read_to_string(path).ok()
}

fn print_error(error: &PipelineError, source: Option<&str>) {
    let located = error
        .as_lexer_error()
        .and_then(|e| e.line().map(|line| (line, e.column())));

    match (located, source) {
        (Some((line, column)), Some(source)) => {
            let map = SourceMap::new(source);
            eprint!("{}", map.format_error(line, column, &error.to_string()));
        }
        _ => eprintln!("Error: {}", error),
    }
}
