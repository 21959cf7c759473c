mod cli;
mod cli_help;
mod config;
mod coverage;
mod report_helpers;
mod runner;
mod scan;
mod walk;

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;

use cli::Cli;
use config::{Config, Overrides};

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let project_root = cli.project_root.unwrap_or_else(|| PathBuf::from("."));
    let overrides = Overrides {
        config: cli.config,
        services: cli.services,
        results_dir: cli.results_dir,
        report_name: cli.report_name,
        no_run: cli.no_run,
        timeout_secs: cli.timeout,
    };
    let config = Config::resolve(&project_root, overrides)?;
    coverage::run(&config, &scan::JAVA, cli.json)
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
