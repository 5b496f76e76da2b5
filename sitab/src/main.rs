//! # sitab
//!
//! A CLI tool for turning columns of measurements into siunitx LaTeX tables.
//!
//! ## Overview
//!
//! sitab is built on top of sitablib. It reads a JSON table description,
//! applies command-line overrides and writes the rendered `.tex` document.
//!
//! ## Input
//!
//! ```json
//! {
//!   "caption": "A table with values including uncertainties.",
//!   "label": "tab:values",
//!   "column_names": ["$E_\\gamma$ / keV", "Second column"],
//!   "table_format": "1.0",
//!   "placement": "float",
//!   "output": "table.tex",
//!   "columns": [
//!     {"precision": 3, "values": [[1.0, 0.19782], [2.2, 0.02023]]},
//!     {"precision": 0, "values": [[5, 5], [4, 4]]}
//!   ]
//! }
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Write the table named in the input file
//! sitab values.json
//!
//! # Override output path and placement
//! sitab values.json -o tables/values.tex --here
//!
//! # Print the document instead of writing it
//! sitab values.json --print
//!
//! # Show the formatted cells as JSON
//! sitab values.json --json
//! ```

mod logging;
mod render;

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Context};
use clap::{Arg, ArgAction, ArgMatches, Command};
use serde::Deserialize;
use sitablib::{render_document, write_table, Placement, TableFormat, TableOptions, TexTable};

use logging::{init_logging, LogConfig};
use render::render_outcome;

/// A table description as read from the input file
#[derive(Debug, Deserialize)]
struct TableFile {
    #[serde(flatten)]
    options: TableOptions,
    /// Artifact path, unless given with `--output`
    #[serde(default)]
    output: Option<PathBuf>,
}

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("sitab")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Format value(uncertainty) columns into siunitx LaTeX tables")
        .arg(
            Arg::new("input")
                .required(true)
                .help("JSON table description ('-' reads stdin)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Write the document here (overrides \"output\" in the input)"),
        )
        .arg(
            Arg::new("caption")
                .long("caption")
                .help("Table caption"),
        )
        .arg(
            Arg::new("label")
                .long("label")
                .help("Cross-reference label, e.g. tab:values"),
        )
        .arg(
            Arg::new("table-format")
                .long("table-format")
                .value_parser(|s: &str| s.parse::<TableFormat>())
                .help("siunitx table-format directive, e.g. 4.2"),
        )
        .arg(
            Arg::new("here")
                .long("here")
                .action(ArgAction::SetTrue)
                .help("Pin the table in place with [H]"),
        )
        .arg(
            Arg::new("print")
                .long("print")
                .action(ArgAction::SetTrue)
                .conflicts_with("json")
                .help("Print the document to stdout instead of writing a file"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print the formatted table as JSON"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("More log output (-v info, -vv debug)"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose")
                .help("Only log errors"),
        )
}

/// Read and parse the table description
fn load_table_file(input: &str) -> anyhow::Result<TableFile> {
    let text = if input == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read table description from stdin")?;
        buf
    } else {
        fs::read_to_string(input).with_context(|| format!("failed to read '{}'", input))?
    };

    serde_json::from_str(&text).with_context(|| format!("invalid table description in '{}'", input))
}

/// Apply command-line overrides on top of the file's options
fn apply_overrides(mut options: TableOptions, matches: &ArgMatches) -> TableOptions {
    if let Some(caption) = matches.get_one::<String>("caption") {
        options = options.caption(caption);
    }
    if let Some(label) = matches.get_one::<String>("label") {
        options = options.label(label);
    }
    if let Some(format) = matches.get_one::<TableFormat>("table-format") {
        options = options.table_format(*format);
    }
    if matches.get_flag("here") {
        options = options.placement(Placement::Here);
    }
    options
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let input = matches
        .get_one::<String>("input")
        .ok_or_else(|| anyhow!("missing input"))?;
    let file = load_table_file(input)?;
    let options = apply_overrides(file.options, matches);

    if matches.get_flag("json") {
        let table = TexTable::build(&options)?;
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(());
    }

    if matches.get_flag("print") {
        let table = TexTable::build(&options)?;
        print!("{}", render_document(&table));
        return Ok(());
    }

    let path = matches
        .get_one::<PathBuf>("output")
        .cloned()
        .or(file.output)
        .ok_or_else(|| anyhow!("no output path: pass --output or set \"output\" in the input"))?;

    let outcome = write_table(&options, &path)?;
    if outcome.is_written() {
        println!("{}", render_outcome(&outcome));
    } else if !tracing::enabled!(tracing::Level::WARN) {
        // sitablib already logged the skip as a warning otherwise
        eprintln!("{}", render_outcome(&outcome));
    }
    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    let config = LogConfig::from_verbosity(matches.get_count("verbose"), matches.get_flag("quiet"));
    init_logging(&config);

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(args: &[&str]) -> ArgMatches {
        let mut argv = vec!["sitab"];
        argv.extend(args);
        build_command().try_get_matches_from(argv).unwrap()
    }

    #[test]
    fn test_command_is_valid() {
        build_command().debug_assert();
    }

    #[test]
    fn test_overrides() {
        let m = matches(&[
            "in.json",
            "--caption",
            "New caption",
            "--label",
            "tab:new",
            "--table-format",
            "2.3",
            "--here",
        ]);
        let options = apply_overrides(TableOptions::new("Old", "tab:old"), &m);

        assert_eq!(options.caption, "New caption");
        assert_eq!(options.label, "tab:new");
        assert_eq!(options.table_format, TableFormat::new(2, 3));
        assert_eq!(options.placement, Placement::Here);
    }

    #[test]
    fn test_no_overrides_keeps_file_values() {
        let m = matches(&["in.json"]);
        let options = apply_overrides(
            TableOptions::new("Old", "tab:old").table_format(TableFormat::new(1, 0)),
            &m,
        );

        assert_eq!(options.caption, "Old");
        assert_eq!(options.table_format, TableFormat::new(1, 0));
        assert_eq!(options.placement, Placement::Float);
    }

    #[test]
    fn test_bad_table_format_rejected() {
        let result =
            build_command().try_get_matches_from(["sitab", "in.json", "--table-format", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_table_file_with_output() {
        let file: TableFile = serde_json::from_str(
            r#"{
                "caption": "c",
                "label": "l",
                "output": "out.tex",
                "column_names": ["a"],
                "columns": [{"precision": 1, "values": [[1.0, 0.1]]}]
            }"#,
        )
        .unwrap();

        assert_eq!(file.output, Some(PathBuf::from("out.tex")));
        assert_eq!(file.options.columns.len(), 1);
        assert_eq!(file.options.caption, "c");
    }
}
