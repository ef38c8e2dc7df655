use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use array_puzzles::casebook::OutputFormat;
use array_puzzles::{run_cases, CaseFile, ReportFormatter};
use colored::Colorize;

const USAGE: &str = "Usage: array-puzzles [CASE_FILE] [--json]

Runs the puzzle solutions against a .toml or .json case file.
Without CASE_FILE the built-in examples are used.";

struct Args {
    path: Option<PathBuf>,
    json: bool,
    help: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        path: None,
        json: false,
        help: false,
    };

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--json" => args.json = true,
            "-h" | "--help" => args.help = true,
            flag if flag.starts_with('-') => {
                return Err(format!("unknown option '{flag}'\n\n{USAGE}"));
            }
            path if args.path.is_none() => args.path = Some(PathBuf::from(path)),
            extra => return Err(format!("unexpected argument '{extra}'\n\n{USAGE}")),
        }
    }

    Ok(args)
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::from(2);
        }
    };

    if args.help {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let file = match &args.path {
        Some(path) => match CaseFile::load(path) {
            Ok(file) => file,
            Err(err) => {
                eprintln!("{} {err}", "error:".red().bold());
                return ExitCode::FAILURE;
            }
        },
        None => CaseFile::builtin(),
    };

    if file.is_empty() {
        eprintln!("{}", "warning: case file contains no cases".yellow());
    }

    let summary = run_cases(&file);

    let format = if args.json {
        OutputFormat::Json
    } else {
        file.settings.format
    };

    match format {
        OutputFormat::Json => match ReportFormatter::format_json(&summary) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("{} failed to encode report: {err}", "error:".red().bold());
                return ExitCode::FAILURE;
            }
        },
        OutputFormat::Text => {
            let color = file.settings.color && ReportFormatter::should_use_colors();
            print!("{}", ReportFormatter::format_text(&summary, color));
        }
    }

    if summary.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
