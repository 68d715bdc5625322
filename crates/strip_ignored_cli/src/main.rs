// crates/strip_ignored_cli/src/main.rs

use anyhow::Result;
use log::LevelFilter;

use strip_ignored_cli::{build_cli, run, RunConfig};

fn main() -> Result<()> {
    let matches = build_cli().get_matches();
    let config = RunConfig::from_matches(&matches);

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if config.verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    log::debug!("{:?}", config);
    run(&config)
}
