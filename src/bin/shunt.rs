//! Command-line interface for shunt
//! This binary converts infix arithmetic expressions to postfix notation.
//!
//! Usage:
//!   shunt `<expression>` [--format `<spec>`]    - Convert an expression given inline
//!   shunt --file `<path>` [--format `<spec>`]   - Convert the expression stored in a file
//!   shunt [--format `<spec>`] < input         - Convert the expression read from stdin
//!   shunt --list-formats                      - List all available processing specs

use clap::{Arg, ArgAction, ArgMatches, Command};
use shunt::shunt::formats::FormatRegistry;
use shunt::shunt::processor::{process, process_file, InputMode, ProcessingSpec};
use shunt_config::{ConfigError, Loader, ShuntConfig};
use std::io::Read;
use tracing::debug;

fn main() {
    let matches = Command::new("shunt")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert infix arithmetic expressions to postfix notation (RPN)")
        .arg(
            Arg::new("expression")
                .help("Expression to convert; read from stdin when omitted")
                .conflicts_with("file")
                .index(1),
        )
        .arg(
            Arg::new("file")
                .long("file")
                .help("Read the expression from a file"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Processing spec, e.g. 'postfix-simple', 'postfix-json', 'token-lines'"),
        )
        .arg(
            Arg::new("separator")
                .long("separator")
                .short('s')
                .help("Separator used by the 'simple' format"),
        )
        .arg(
            Arg::new("tokens")
                .long("tokens")
                .help("Treat input as whitespace separated tokens instead of lexing it")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Path to a TOML configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available processing specs")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log processing steps to stderr")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    init_logging(matches.get_flag("verbose"));

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    let registry = FormatRegistry::with_separator(&config.output.separator);

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&registry);
        return;
    }

    handle_convert_command(&matches, &config, &registry);
}

/// Log to stderr so stdout only carries the converted expression.
/// `RUST_LOG` takes precedence over `--verbose`.
fn init_logging(verbose: bool) {
    use tracing_subscriber::filter::{LevelFilter, Targets};
    use tracing_subscriber::{fmt::Layer, prelude::*};

    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let targets = std::env::var("RUST_LOG")
        .ok()
        .and_then(|value| value.parse::<Targets>().ok())
        .unwrap_or_else(|| Targets::new().with_default(default_level));

    tracing_subscriber::registry()
        .with(
            Layer::new()
                .with_ansi(false)
                .with_writer(std::io::stderr)
                .with_filter(targets),
        )
        .init();
}

/// Layer the config file and CLI flags over the embedded defaults
fn load_config(matches: &ArgMatches) -> Result<ShuntConfig, ConfigError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if let Some(separator) = matches.get_one::<String>("separator") {
        loader = loader.set_override("output.separator", separator.as_str())?;
    }
    if matches.get_flag("tokens") {
        loader = loader.set_override("input.mode", "tokens")?;
    }
    loader.build()
}

/// Handle the list-formats command
fn handle_list_formats_command(registry: &FormatRegistry) {
    println!("Available processing specs:\n");
    for spec in ProcessingSpec::available_specs(registry) {
        let description = registry
            .get(&spec.format)
            .map(|formatter| formatter.description())
            .unwrap_or_default();
        println!("  {:<16} {}", spec.to_string(), description);
    }
}

/// Handle the default convert command
fn handle_convert_command(matches: &ArgMatches, config: &ShuntConfig, registry: &FormatRegistry) {
    let spec = ProcessingSpec::from_string(&config.output.format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    let mode = match config.input.mode {
        shunt_config::InputMode::Expression => InputMode::Expression,
        shunt_config::InputMode::Tokens => InputMode::Tokens,
    };
    debug!(%spec, ?mode, "converting");

    let result = if let Some(expression) = matches.get_one::<String>("expression") {
        process(expression, mode, &spec, registry)
    } else if let Some(path) = matches.get_one::<String>("file") {
        process_file(path, mode, &spec, registry)
    } else {
        let mut source = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut source) {
            eprintln!("Error reading stdin: {}", e);
            std::process::exit(1);
        }
        process(&source, mode, &spec, registry)
    };

    match result {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
