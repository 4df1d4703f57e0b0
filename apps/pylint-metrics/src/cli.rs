//! CLI argument parsing via `clap`.

use crate::output::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "pylint-metrics",
    version,
    about = "Summarize pylint metrics",
    long_about = "Run pylint on one or more modules and summarize the metrics it reports: message counts per category, raw line counts, duplication and the overall score.\n\nConfiguration precedence: CLI > pylint-metrics.toml > defaults.",
    after_help = "Examples:\n  pylint-metrics mypkg\n  pylint-metrics mypkg other.py -f metrics.txt\n  pylint-metrics mypkg -o pylint.log --strip-reports\n  pylint-metrics mypkg -c .pylintrc --format json",
    arg_required_else_help = true
)]
/// Top-level CLI options.
pub struct Cli {
    #[arg(required = true, num_args = 1.., help = "Modules or packages to analyze")]
    pub modules: Vec<String>,
    #[arg(short = 'f', long = "file", value_name = "FILE", help = "Write the metrics summary to FILE instead of the terminal")]
    pub file: Option<PathBuf>,
    #[arg(short = 'o', long = "outfile", value_name = "FILE", help = "Write the raw pylint output to FILE")]
    pub outfile: Option<PathBuf>,
    #[arg(short = 'c', long = "conf", value_name = "FILE", help = "pylint configuration file (passed as --rcfile)")]
    pub conf: Option<String>,
    #[arg(long, value_enum, help = "Summary format: human|json (default: human)")]
    pub format: Option<OutputFormat>,
    #[arg(long, value_name = "PROGRAM", help = "pylint executable (default: pylint)")]
    pub pylint: Option<String>,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "With -o, omit pylint's trailing report tables")]
    pub strip_reports: bool,
    #[arg(long, value_name = "DIR", help = "Where to start config discovery (default: current dir)")]
    pub repo_root: Option<PathBuf>,
    #[arg(short, long, action = clap::ArgAction::Count, help = "Raise log verbosity (-v info, -vv debug)")]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_flags() {
        let cli = Cli::try_parse_from([
            "pylint-metrics",
            "pkg",
            "mod.py",
            "-f",
            "m.txt",
            "-o",
            "raw.txt",
            "-c",
            "rc.cfg",
        ])
        .unwrap();
        assert_eq!(cli.modules, vec!["pkg", "mod.py"]);
        assert_eq!(cli.file, Some(PathBuf::from("m.txt")));
        assert_eq!(cli.outfile, Some(PathBuf::from("raw.txt")));
        assert_eq!(cli.conf.as_deref(), Some("rc.cfg"));
        assert_eq!(cli.format, None);
        assert!(!cli.strip_reports);
    }

    #[test]
    fn test_parse_long_flags_and_verbosity() {
        let cli = Cli::try_parse_from([
            "pylint-metrics",
            "--format",
            "json",
            "--pylint",
            "/usr/bin/pylint",
            "--strip-reports",
            "-vv",
            "pkg",
        ])
        .unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.pylint.as_deref(), Some("/usr/bin/pylint"));
        assert!(cli.strip_reports);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_modules_required() {
        assert!(Cli::try_parse_from(["pylint-metrics", "-f", "m.txt"]).is_err());
    }
}
