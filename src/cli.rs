/// CLI argument definitions for the `covscan` command.
///
/// The tool has a single mode of operation, so there are no subcommands:
/// the optional positional argument is the project root and every flag
/// overrides the corresponding config file value.
use std::path::PathBuf;

use clap::Parser;

use crate::cli_help;
use crate::config::{ServiceSpec, parse_service_arg};

#[derive(Parser)]
#[command(
    name = "covscan",
    version,
    about = "Estimate test coverage of Java services from their source trees",
    long_about = cli_help::COVSCAN
)]
pub struct Cli {
    /// Project root containing the services (default: current directory)
    pub project_root: Option<PathBuf>,

    /// Config file (default: covscan.toml in the project root, if present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Service to analyze as NAME=PATH, relative to the project root
    /// (repeatable; replaces the configured service list)
    #[arg(long = "service", value_name = "NAME=PATH", value_parser = parse_service_arg)]
    pub services: Vec<ServiceSpec>,

    /// Directory receiving the JSON report, relative to the project root
    /// (default: test-results)
    #[arg(long, value_name = "DIR")]
    pub results_dir: Option<PathBuf>,

    /// File name of the JSON report (default: test-coverage-report.json)
    #[arg(long, value_name = "NAME")]
    pub report_name: Option<String>,

    /// Do not run the Gradle test task
    #[arg(long)]
    pub no_run: bool,

    /// Timeout for each Gradle test run, in seconds (default: 300)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Print the report as JSON instead of the summary
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["covscan"]).unwrap();
        assert!(cli.project_root.is_none());
        assert!(cli.services.is_empty());
        assert!(!cli.no_run);
        assert!(!cli.json);
        assert!(cli.timeout.is_none());
    }

    #[test]
    fn all_flags() {
        let cli = Cli::try_parse_from([
            "covscan",
            "/work/project",
            "--config",
            "cov.toml",
            "--service",
            "api=services/api",
            "--service",
            "web=services/web",
            "--results-dir",
            "out",
            "--report-name",
            "r.json",
            "--no-run",
            "--timeout",
            "60",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.project_root, Some(PathBuf::from("/work/project")));
        assert_eq!(cli.config, Some(PathBuf::from("cov.toml")));
        assert_eq!(
            cli.services,
            vec![
                ServiceSpec::new("api", "services/api"),
                ServiceSpec::new("web", "services/web"),
            ]
        );
        assert_eq!(cli.results_dir, Some(PathBuf::from("out")));
        assert_eq!(cli.report_name.as_deref(), Some("r.json"));
        assert!(cli.no_run);
        assert_eq!(cli.timeout, Some(60));
        assert!(cli.json);
    }

    #[test]
    fn bad_service_rejected() {
        assert!(Cli::try_parse_from(["covscan", "--service", "nopath"]).is_err());
    }

    #[test]
    fn results_dir_help_names_its_base() {
        let help = Cli::command().render_long_help().to_string();
        assert!(help.contains("relative to the project root"), "{help}");
    }

    #[test]
    fn bad_timeout_rejected() {
        assert!(Cli::try_parse_from(["covscan", "--timeout", "soon"]).is_err());
    }
}
