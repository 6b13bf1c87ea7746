//! Implementation of the `timelog check` command.

use std::fs::read_to_string;
use std::path::PathBuf;

use owo_colors::{OwoColorize, Stream::Stdout};
use serde::Serialize;
use timelog::parse_template;

use crate::output::diagnostic::TemplateDiagnostic;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Template files to check
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one checked file.
#[derive(Serialize)]
struct CheckResult {
    file: String,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    column: Option<usize>,
    /// Range names, depth first.
    ranges: Vec<String>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let mut results = Vec::with_capacity(args.files.len());

    for path in &args.files {
        let content = read_to_string(path)
            .map_err(|e| miette::miette!("Cannot read {}: {}", path.display(), e))?;

        let result = match parse_template(&content) {
            Ok(template) => CheckResult {
                file: path.display().to_string(),
                ok: true,
                error: None,
                line: None,
                column: None,
                ranges: template
                    .range_names()
                    .into_iter()
                    .map(ToString::to_string)
                    .collect(),
            },
            Err(err) => {
                if !args.json {
                    let diagnostic = TemplateDiagnostic::from_parse_error(path, &content, &err);
                    eprintln!("{:?}", miette::Report::new(diagnostic));
                }
                let (line, column) = err.position();
                CheckResult {
                    file: path.display().to_string(),
                    ok: false,
                    error: Some(err.to_string()),
                    line: Some(line),
                    column: Some(column),
                    ranges: Vec::new(),
                }
            }
        };
        results.push(result);
    }

    let failed = results.iter().filter(|r| !r.ok).count();
    if args.json {
        let json = serde_json::to_string_pretty(&results)
            .map_err(|e| miette::miette!("Cannot encode results: {}", e))?;
        println!("{json}");
    } else {
        for result in results.iter().filter(|r| r.ok) {
            println!(
                "{} {}",
                "ok".if_supports_color(Stdout, |t| t.green()),
                result.file
            );
        }
        if failed > 0 {
            println!(
                "{}",
                format!("{failed} of {} templates failed", results.len())
                    .if_supports_color(Stdout, |t| t.red())
            );
        }
    }

    Ok(if failed > 0 {
        exitcode::DATAERR
    } else {
        exitcode::OK
    })
}
