//! pylint-metrics CLI binary entry point.
//! Invokes pylint, extracts metrics and writes them out.

use clap::Parser;
use log::LevelFilter;
use pylint_metrics::cli::Cli;
use pylint_metrics::errors::MetricsError;
use pylint_metrics::invoke::Invocation;
use pylint_metrics::{config, extract, invoke, output, utils};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if let Err(e) = run(cli) {
        eprintln!("{} {}", utils::error_prefix(), e);
        std::process::exit(e.exit_code());
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    // RUST_LOG, when set, wins over -v
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .init();
}

fn run(cli: Cli) -> Result<(), MetricsError> {
    let eff = config::resolve_effective(
        cli.repo_root.as_deref(),
        cli.pylint.as_deref(),
        cli.conf.as_deref(),
        cli.format,
        if cli.strip_reports { Some(true) } else { None },
    );

    let inv = Invocation {
        program: eff.pylint,
        modules: cli.modules,
        rcfile: eff.rcfile,
        extra_args: eff.extra_args,
    };
    let report = invoke::run(&inv)?;

    // Raw output first so a report that fails extraction is still on disk
    if let Some(path) = cli.outfile.as_deref() {
        output::write_raw(path, &report, eff.strip_reports)?;
        eprintln!("{} Wrote output to: {}", utils::note_prefix(), path.display());
    }

    let summary = extract::extract(&report)?;
    match cli.file.as_deref() {
        Some(path) => {
            output::write_metrics(path, &summary, eff.format)?;
            eprintln!("{} Wrote metrics to: {}", utils::note_prefix(), path.display());
        }
        None => output::print_metrics(&summary, eff.format),
    }
    Ok(())
}
