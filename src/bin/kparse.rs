//! Command-line interface for kparse
//! Parses tagged Korean sentences and prints the constituency tree in different formats.
//!
//! Usage:
//!   kparse parse `[<descriptors>|-]` [--format `<format>`] [--config `<file>`] [--all-levels] [--trace]
//!   kparse analyze `[<descriptors>|-]` [--config `<file>`] [--all-levels]  - Print the full analysis as JSON
//!   kparse formats                                                   - List available output formats
//!
//! Descriptors are `lexeme:TAG` pairs separated by `;` or whitespace, e.g.
//! `빵:NNG;을:JKO;주:VV;세요:EF;.:SF`. `-` (the default) reads them from stdin.

use clap::{Arg, ArgAction, ArgMatches, Command};
use kparse::kparse::config::{Loader, TagMap};
use kparse::kparse::formats::{FormatRegistry, JsonFormatter};
use kparse::kparse::lexing::parse_descriptors;
use kparse::kparse::parsing::TraceLevel;
use kparse::kparse::processor::{Analysis, Analyzer, AnalyzerOptions};
use std::collections::BTreeMap;
use std::io::Read;

fn input_arg() -> Arg {
    Arg::new("input")
        .help("Tagged morphemes as lexeme:TAG descriptors, or '-' for stdin")
        .default_value("-")
        .index(1)
}

fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .short('c')
        .help("YAML tag tables layered over the built-in defaults")
}

fn all_levels_arg() -> Arg {
    Arg::new("all-levels")
        .long("all-levels")
        .help("Keep single-child chains in structured output")
        .action(ArgAction::SetTrue)
}

fn main() {
    let matches = Command::new("kparse")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A constituency parser for tagged Korean sentences")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("parse")
                .about("Parse a sentence and print its tree")
                .arg(input_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'bracket', 'treeviz', 'json')")
                        .default_value("bracket"),
                )
                .arg(config_arg())
                .arg(all_levels_arg())
                .arg(
                    Arg::new("trace")
                        .long("trace")
                        .help("Print the parse log to stderr")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("analyze")
                .about("Print every derived view of a sentence as JSON")
                .arg(input_arg())
                .arg(config_arg())
                .arg(all_levels_arg()),
        )
        .subcommand(Command::new("formats").about("List available output formats"))
        .get_matches();

    match matches.subcommand() {
        Some(("parse", parse_matches)) => handle_parse_command(parse_matches),
        Some(("analyze", analyze_matches)) => handle_analyze_command(analyze_matches),
        Some(("formats", _)) => handle_formats_command(),
        _ => unreachable!(),
    }
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

fn load_tagmap(matches: &ArgMatches) -> TagMap {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    loader.build().unwrap_or_else(|e| fail(e))
}

fn read_input(matches: &ArgMatches) -> String {
    match matches.get_one::<String>("input").map(String::as_str) {
        Some("-") | None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .unwrap_or_else(|e| fail(format!("reading stdin: {}", e)));
            text
        }
        Some(descriptors) => descriptors.to_string(),
    }
}

fn run_analysis(matches: &ArgMatches, trace: TraceLevel) -> Analysis {
    let tokens = parse_descriptors(&read_input(matches)).unwrap_or_else(|e| fail(e));
    let options = AnalyzerOptions {
        trace,
        show_all_levels: matches.get_flag("all-levels"),
    };
    Analyzer::new(load_tagmap(matches))
        .with_options(options)
        .analyze(&tokens, &BTreeMap::new())
}

/// Handle the parse command
fn handle_parse_command(matches: &ArgMatches) {
    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("bracket");
    let trace = matches.get_flag("trace");

    let mut registry = FormatRegistry::with_defaults();
    if registry.get(format).is_none() {
        fail(format!("Format '{}' not found", format));
    }
    if matches.get_flag("all-levels") {
        registry.register(JsonFormatter {
            show_all_levels: true,
        });
    }

    let level = if trace {
        TraceLevel::Full
    } else {
        TraceLevel::Quiet
    };
    let analysis = run_analysis(matches, level);

    if trace {
        for line in &analysis.log {
            eprintln!("{}", line);
        }
    }
    if let Some(error) = analysis.error {
        eprintln!("kparse: {}", error);
    }

    let output = registry
        .serialize(&analysis.tree, format)
        .unwrap_or_else(|e| fail(e));
    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
}

/// Handle the analyze command
fn handle_analyze_command(matches: &ArgMatches) {
    let analysis = run_analysis(matches, TraceLevel::Full);
    let json = serde_json::to_string_pretty(&analysis).unwrap_or_else(|e| fail(e));
    println!("{}", json);
}

/// Handle the formats command
fn handle_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available output formats:\n");
    for name in registry.list_formats() {
        println!("  {}", name);
        if let Some(formatter) = registry.get(&name) {
            println!("    {}", formatter.description());
        }
    }
}
