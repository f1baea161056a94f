//! Command-line interface for the rst parser
//! This binary parses a reStructuredText file (or stdin) and prints the resulting tree.
//!
//! Usage:
//!   rst `<path>` [--format `<format>`] [--config `<file>`]   - Parse and print the tree
//!   rst - < notes.rst                                      - Read from stdin
//!   rst --list-formats                                     - List available output formats
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`, e.g. `RUST_LOG=rst_parser=debug`.

use clap::{Arg, ArgAction, ArgMatches, Command};
use rst_config::{ConfigError, Loader, RstConfig};
use rst_parser::rst::formats::FormatParams;
use rst_parser::{FormatRegistry, ParserOptions, RstParser};
use std::io::Read;

fn main() {
    env_logger::init();

    let matches = Command::new("rst")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse reStructuredText docstrings and print the document tree")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the rst file, or '-' for stdin")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (dump, treeviz, json, yaml); defaults to the config value"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("no-dedent")
                .long("no-dedent")
                .help("Keep the common indentation of the input")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-inlines")
                .long("no-inlines")
                .help("Hide inline items in treeviz output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("diagnostics")
                .long("diagnostics")
                .short('d')
                .help("Print parse diagnostics to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let registry = FormatRegistry::with_defaults();

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&registry);
        return;
    }

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    let Some(path) = matches.get_one::<String>("path") else {
        eprintln!("A path is required unless listing formats");
        std::process::exit(1);
    };
    handle_parse_command(path, &config, &registry);
}

/// Defaults, then the user file, then command line flags.
fn load_config(matches: &ArgMatches) -> Result<RstConfig, ConfigError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.format(format)?;
    }
    if matches.get_flag("no-dedent") {
        loader = loader.dedent(false)?;
    }
    if matches.get_flag("no-inlines") {
        loader = loader.show_inlines(false)?;
    }
    if matches.get_flag("diagnostics") {
        loader = loader.show_diagnostics(true)?;
    }
    loader.build()
}

fn read_input(path: &str) -> std::io::Result<String> {
    if path == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        std::fs::read_to_string(path)
    }
}

/// Handle the parse command
fn handle_parse_command(path: &str, config: &RstConfig, registry: &FormatRegistry) {
    let format = config.output.format.as_str();
    if !registry.has(format) {
        eprintln!("Unknown format '{}'", format);
        eprintln!("Available formats: {}", registry.names().join(", "));
        std::process::exit(1);
    }

    let text = read_input(path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path, e);
        std::process::exit(1);
    });

    let parser = RstParser::with_options(ParserOptions::from(&config.parser));
    let (doc, diagnostics) = parser.parse_with_diagnostics(&text);

    if config.output.show_diagnostics {
        for diagnostic in &diagnostics {
            eprintln!("{}: {}", path, diagnostic);
        }
    }

    let params = FormatParams::from([(
        "show-inlines".to_string(),
        config.output.treeviz.show_inlines.to_string(),
    )]);

    match registry.serialize(&doc, format, &params) {
        Ok(output) => println!("{}", output.trim_end()),
        Err(e) => {
            eprintln!("Error formatting output: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle the list-formats command
fn handle_list_formats_command(registry: &FormatRegistry) {
    println!("Available output formats:\n");
    for formatter in registry.formatters() {
        println!("  {}", formatter.name());
        println!("    {}", formatter.description());
        println!();
    }
}
