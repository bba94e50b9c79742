use anyhow::Result;
use clap::{Parser, ValueEnum};
use colored::Colorize;
use digit_swap::config::load_from_path;
use digit_swap::logging;
use digit_swap::selftest::{builtin_cases, run_cases, CaseOutcome, CaseReport, Expected};
use digit_swap::{DecimalInt, Prompter, ReplaceRequest, Side};
use serde_json::json;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "digit-swap")]
#[command(about = "Replace the nth digit of an integer", long_about = None)]
#[command(version)]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// The integer to modify (any size, may be negative)
    #[arg(long)]
    number: Option<DecimalInt>,

    /// 1-based position of the digit to replace
    #[arg(long)]
    n: Option<DecimalInt>,

    /// Replacement digit (0-9)
    #[arg(long)]
    digit: Option<DecimalInt>,

    /// Count from 'left' (most significant) or 'right' (least significant)
    #[arg(
        long,
        value_enum,
        ignore_case = true,
        env = "DIGIT_SWAP_SIDE",
        default_value_t = SideArg::Right
    )]
    side: SideArg,

    /// Run the built-in self test
    #[arg(long)]
    test: bool,

    /// Extra case table (TOML) to run alongside the self test; implies --test
    #[arg(long, value_name = "FILE")]
    cases: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum SideArg {
    Left,
    Right,
}

impl From<SideArg> for Side {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::Left => Side::Left,
            SideArg::Right => Side::Right,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);

    if cli.test || !cli.cases.is_empty() {
        return cmd_test(&cli.cases, cli.format);
    }

    let request = match (cli.number, cli.n, cli.digit) {
        (Some(number), Some(n), Some(digit)) => ReplaceRequest {
            number,
            n: n.saturating_i64(),
            digit: digit.saturating_i64(),
            side: cli.side.into(),
        },
        _ => {
            let stdin = io::stdin();
            let mut prompter = Prompter::new(stdin.lock(), io::stdout());
            match prompter.read_request() {
                Ok(request) => request,
                Err(e) => {
                    eprintln!("{} {}", "Invalid input:".red(), e);
                    std::process::exit(1);
                }
            }
        }
    };

    cmd_replace(&request, cli.format)
}

fn cmd_replace(request: &ReplaceRequest, format: OutputFormat) -> Result<()> {
    tracing::debug!(%request, "replacing digit");

    match request.apply() {
        Ok(result) => {
            match format {
                OutputFormat::Text => println!("{result}"),
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&json!({
                        "request": request,
                        "result": result,
                    }))?
                ),
            }
            Ok(())
        }
        Err(e) => {
            match format {
                OutputFormat::Text => eprintln!("{} {}", "Error:".red(), e),
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&json!({
                        "request": request,
                        "error": { "kind": e.kind(), "message": e.to_string() },
                    }))?
                ),
            }
            std::process::exit(1);
        }
    }
}

fn cmd_test(case_files: &[PathBuf], format: OutputFormat) -> Result<()> {
    let mut cases = builtin_cases();
    for path in case_files {
        cases.extend(load_from_path(path)?);
    }

    let report = run_cases(&cases);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            for case in &report.cases {
                if case.outcome.is_pass() {
                    println!("{} {}", "✓".green(), case.case.name);
                } else {
                    println!("{} {}: {}", "✗".red(), case.case.name, describe_failure(case));
                }
            }
            println!();
            if report.all_passed() {
                println!("{}", "All tests passed".green());
            } else {
                println!(
                    "{}",
                    format!("{} of {} tests failed", report.failed, report.total()).red()
                );
            }
        }
    }

    if !report.all_passed() {
        std::process::exit(1);
    }
    Ok(())
}

fn describe_failure(case: &CaseReport) -> String {
    let expected = match &case.case.expected {
        Expected::Value(value) => value.to_string(),
        Expected::Error(kind) => format!("{kind} error"),
    };
    let request = &case.case.request;
    match &case.outcome {
        CaseOutcome::Passed => String::new(),
        CaseOutcome::Mismatch { got } | CaseOutcome::UnexpectedSuccess { got } => {
            format!("{request}: got {got}, expected {expected}")
        }
        CaseOutcome::UnexpectedError { message, .. } | CaseOutcome::WrongError { message, .. } => {
            format!("{request}: raised {message}, expected {expected}")
        }
    }
}
