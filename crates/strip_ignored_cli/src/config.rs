// crates/strip_ignored_cli/src/config.rs

use std::env;
use std::path::PathBuf;

use clap::ArgMatches;
use strip_ignored::IgnoreOptions;

pub const START_ENV: &str = "STRIP_IGNORED_START";
pub const END_ENV: &str = "STRIP_IGNORED_END";
pub const NEXT_LINE_ENV: &str = "STRIP_IGNORED_NEXT_LINE";

/// Runtime configuration composed from CLI flags and environment.
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// `None` reads stdin.
    pub input: Option<PathBuf>,
    /// `None` writes stdout.
    pub output: Option<PathBuf>,
    pub options: IgnoreOptions,
    pub verbose: bool,
}

impl RunConfig {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let input = matches
            .get_one::<String>("input")
            .filter(|path| path.as_str() != "-")
            .map(PathBuf::from);
        let output = matches.get_one::<String>("output").map(PathBuf::from);

        let options = IgnoreOptions {
            region_start: flag_or_env(matches, "start", START_ENV),
            region_end: flag_or_env(matches, "end", END_ENV),
            next_line: flag_or_env(matches, "next_line", NEXT_LINE_ENV),
            indent_from_following_line: !matches.get_flag("no_indent_from_following_line"),
        };

        Self {
            input,
            output,
            options,
            verbose: matches.get_flag("verbose"),
        }
    }
}

/// The flag wins; otherwise the environment variable, if set.
fn flag_or_env(matches: &ArgMatches, id: &str, var: &str) -> Option<String> {
    matches
        .get_one::<String>(id)
        .cloned()
        .or_else(|| env::var(var).ok())
}
