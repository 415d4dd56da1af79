use std::process;

use anyhow::Result;
use clap::Parser;

use benchplot::chart;
use benchplot::config::Config;
use benchplot::discover;
use benchplot::report;
use benchplot::runner;

#[derive(Parser)]
#[command(
    name = "benchplot",
    version,
    about = "Run pre-built benchmark executables and chart their timings"
)]
struct Cli {
    /// How many times to invoke each benchmark executable
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    runs: u32,

    /// Workload bound passed to every executable as its only argument
    bound: u64,
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::default();

    let targets = discover::discover_targets(&config.bin_dir)?;
    let labels = config.resolve_labels(&targets)?;

    let summary = runner::run_targets(&targets, cli.runs, cli.bound)?;

    print!("{}", report::format_summary(&labels, &summary));

    chart::render_charts(&config.plot_dir, &labels, &summary)?;

    let run_report = report::build_report(&targets, &labels, &summary, cli.runs, cli.bound);
    report::write_json_report(&config.plot_dir, &run_report)?;

    Ok(())
}

fn main() {
    // A missing or malformed argument is a usage error and exits 1;
    // --help/--version go to stdout and exit 0.
    let cli = Cli::try_parse().unwrap_or_else(|err| {
        if err.use_stderr() {
            eprintln!("{}", err);
            process::exit(1);
        }
        let _ = err.print();
        process::exit(0);
    });

    if let Err(err) = run(cli) {
        eprintln!("{}", err);
        process::exit(1);
    }
}
