// crates/strip_ignored_cli/src/lib.rs

use std::fs;
use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use strip_ignored::{transform_with_summary, MarkerSet};

pub mod config;

pub use config::RunConfig;

pub fn build_cli() -> Command {
    Command::new("strip_ignored")
        .version("0.1.0")
        .about("Removes ignore-marked lines from a code sample and re-indents the rest")
        .arg(
            Arg::new("input")
                .value_name("FILE")
                .help("File to read; stdin when omitted or '-'"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .num_args(1)
                .help("Write the result here instead of stdout"),
        )
        .arg(
            Arg::new("start")
                .long("start")
                .num_args(1)
                .help("Region start marker [env: STRIP_IGNORED_START]"),
        )
        .arg(
            Arg::new("end")
                .long("end")
                .num_args(1)
                .help("Region end marker [env: STRIP_IGNORED_END]"),
        )
        .arg(
            Arg::new("next_line")
                .long("next-line")
                .num_args(1)
                .help("Ignore-next-line marker [env: STRIP_IGNORED_NEXT_LINE]"),
        )
        .arg(
            Arg::new("no_indent_from_following_line")
                .long("no-indent-from-following-line")
                .help("Take the indent to strip from the closing marker, not the next kept line")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Enable verbose logging")
                .action(ArgAction::SetTrue),
        )
}

/// Reads the sample, strips it, and writes the result.
pub fn run(config: &RunConfig) -> Result<()> {
    let code = read_input(config)?;
    if !config.options.uses_default_markers() {
        log::debug!("Using custom markers");
    }
    let markers = MarkerSet::resolve(&config.options);
    let (output, summary) = transform_with_summary(&code, &markers);

    log::info!(
        "kept {} line(s), dropped {} marker line(s) and {} ignored line(s)",
        summary.kept_lines,
        summary.marker_lines,
        summary.ignored_lines
    );
    if summary.unterminated_region {
        log::warn!(
            "region opened with {:?} was never closed; the rest of the input was dropped",
            markers.region_start.literal()
        );
    }
    if summary.dangling_next_line {
        log::warn!("input ends with an ignore-next-line marker");
    }

    write_output(config, &output)
}

fn read_input(config: &RunConfig) -> Result<String> {
    match &config.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Error reading {}", path.display())),
        None => {
            let mut code = String::new();
            io::stdin()
                .read_to_string(&mut code)
                .context("Error reading stdin")?;
            Ok(code)
        }
    }
}

fn write_output(config: &RunConfig, output: &str) -> Result<()> {
    match &config.output {
        Some(path) => fs::write(path, output)
            .with_context(|| format!("Error writing {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(output.as_bytes())
                .and_then(|_| stdout.flush())
                .context("Error writing stdout")
        }
    }
}
