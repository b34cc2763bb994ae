use std::fs;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use compute::{Radiocarbon, Statistics, write_report};
use formats::{parse_grade_args, parse_grades};
use foundation::Years;
use serde::Serialize;
use serde_json::json;
use tracing::{debug, info};

use crate::config::{LabkitConfig, OutputFormat};

/// Printed in place of a position when a line has none.
pub const NO_POSITION: &str = "(none)";

#[derive(Debug, Serialize)]
struct AgeReport {
    ratio: f64,
    half_life_years: f64,
    age_years: Years,
}

/// Dispatches `args` (program name already stripped) to a subcommand.
pub fn run<R: BufRead, W: Write>(
    mut args: Vec<String>,
    config: &LabkitConfig,
    input: &mut R,
    out: &mut W,
) -> Result<(), String> {
    if args.is_empty() {
        return Err(usage());
    }

    let cmd = args.remove(0);
    debug!(command = %cmd, ?args, "dispatching");

    match cmd.as_str() {
        "age" => cmd_age(&args, config, out),
        "grades" => cmd_grades(&args, config, out),
        "extract" => cmd_extract(&args, config, input, out),
        "help" | "--help" | "-h" => write_line(out, usage().trim_end()),
        _ => Err(usage()),
    }
}

fn cmd_age<W: Write>(args: &[String], config: &LabkitConfig, out: &mut W) -> Result<(), String> {
    // labkit age <ratio> [--json]
    let mut output = config.output;
    let mut raw_ratio: Option<&str> = None;

    for arg in args {
        match arg.as_str() {
            "--json" => output = OutputFormat::Json,
            s if s.starts_with("--") => {
                return Err(format!("unknown arg: {s}\n\n{}", usage()));
            }
            s => {
                if raw_ratio.is_some() {
                    return Err("age takes exactly one ratio".to_string());
                }
                raw_ratio = Some(s);
            }
        }
    }

    let raw = raw_ratio.ok_or_else(|| format!("age requires a ratio\n\n{}", usage()))?;
    let ratio: f64 = raw
        .trim()
        .parse()
        .map_err(|e| format!("invalid ratio {raw:?}: {e}"))?;

    let age = Radiocarbon::estimate_age(ratio, config.half_life).map_err(|e| e.to_string())?;
    info!(
        ratio,
        half_life = config.half_life.years(),
        age = age.0,
        "estimated sample age"
    );

    match output {
        OutputFormat::Text => write_line(out, &format!("{} years", age.0)),
        OutputFormat::Json => {
            let report = AgeReport {
                ratio,
                half_life_years: config.half_life.years(),
                age_years: age,
            };
            let payload = serde_json::to_string(&report).map_err(|e| format!("json: {e}"))?;
            write_line(out, &payload)
        }
    }
}

fn cmd_grades<W: Write>(
    args: &[String],
    config: &LabkitConfig,
    out: &mut W,
) -> Result<(), String> {
    // labkit grades <n> [n ...] [--file PATH] [--json]
    let mut output = config.output;
    let mut file: Option<PathBuf> = None;
    let mut values: Vec<&str> = Vec::new();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--file" => {
                i += 1;
                if i >= args.len() {
                    return Err("--file requires a path".to_string());
                }
                file = Some(PathBuf::from(&args[i]));
            }
            "--json" => output = OutputFormat::Json,
            s if s.starts_with("--") => {
                return Err(format!("unknown arg: {s}\n\n{}", usage()));
            }
            s => values.push(s),
        }
        i += 1;
    }

    let mut grades = parse_grade_args(&values).map_err(|e| e.to_string())?;
    if let Some(path) = file {
        let text = fs::read_to_string(&path).map_err(|e| format!("read {path:?}: {e}"))?;
        grades.extend(parse_grades(&text).map_err(|e| format!("{}: {e}", path.display()))?);
    }
    debug!(count = grades.len(), "parsed grades");

    let stats = Statistics::grade_stats(&grades).map_err(|e| format!("grade statistics: {e}"))?;
    info!(mean = stats.mean, sd = stats.sd, "computed grade statistics");

    match output {
        OutputFormat::Text => {
            write_report(out, stats.mean, stats.sd).map_err(|e| format!("write report: {e}"))
        }
        OutputFormat::Json => {
            let payload = serde_json::to_string(&stats).map_err(|e| format!("json: {e}"))?;
            write_line(out, &payload)
        }
    }
}

fn cmd_extract<R: BufRead, W: Write>(
    args: &[String],
    config: &LabkitConfig,
    input: &mut R,
    out: &mut W,
) -> Result<(), String> {
    // labkit extract [--json] [--] <line> | labkit extract --stdin
    let mut output = config.output;
    let mut from_stdin = false;
    let mut words: Vec<&str> = Vec::new();

    let mut rest = args.iter();
    for arg in rest.by_ref() {
        match arg.as_str() {
            "--" => break,
            "--stdin" => from_stdin = true,
            "--json" => output = OutputFormat::Json,
            s if s.starts_with("--") => {
                return Err(format!("unknown arg: {s}\n\n{}", usage()));
            }
            s => words.push(s),
        }
    }
    // Everything after `--` is log text, even if it looks like a flag.
    words.extend(rest.map(String::as_str));

    let extractor = &config.extractor;

    if from_stdin {
        if !words.is_empty() {
            return Err("extract takes either a line or --stdin, not both".to_string());
        }
        let mut found = 0usize;
        for line in input.lines() {
            let line = line.map_err(|e| format!("read stdin: {e}"))?;
            let position = extractor.extract(&line);
            found += usize::from(position.is_some());
            write_position(out, output, position)?;
        }
        info!(found, "extracted positions from stdin");
        return Ok(());
    }

    let line = if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    };
    let position = extractor
        .try_extract(line.as_deref())
        .map_err(|e| format!("{e}\n\n{}", usage()))?;
    debug!(marker = %extractor.marker, found = position.is_some(), "extracted position");
    write_position(out, output, position)
}

fn write_position<W: Write>(
    out: &mut W,
    output: OutputFormat,
    position: Option<&str>,
) -> Result<(), String> {
    match output {
        OutputFormat::Text => write_line(out, position.unwrap_or(NO_POSITION)),
        OutputFormat::Json => write_line(out, &json!({ "position": position }).to_string()),
    }
}

fn write_line<W: Write>(out: &mut W, line: &str) -> Result<(), String> {
    writeln!(out, "{line}").map_err(|e| format!("write output: {e}"))
}

fn usage() -> String {
    let exe = "labkit";
    format!(
        "Usage:\n\
         \x20 {exe} age <ratio> [--json]\n\
         \x20 {exe} grades <grade> [grade ...] [--file PATH] [--json]\n\
         \x20 {exe} extract [--json] [--] <line>\n\
         \x20 {exe} extract --stdin [--json]\n\
         \n\
         Notes:\n\
         - `age` takes the carbon-14 ratio in (0, 1]; half-life from \
         LABKIT_HALF_LIFE_YEARS (default 5730).\n\
         - `grades` accepts comma/space separated numbers or a JSON array; \
         `#` starts a comment in files.\n\
         - `extract` prints the text after the position marker \
         (LABKIT_POSITION_MARKER, default `x:`), or {NO_POSITION}.\n\
         - Words after `--` are log text, even when they start with `--`.\n\
         - LABKIT_OUTPUT=json switches every command to JSON output.\n"
    )
}
