//! u-tsp-brute CLI: exact TSP by exhaustive enumeration.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use serde::Serialize;
use u_tsp_brute::instance::{random_cities, read_cities};
use u_tsp_brute::models::{City, SearchResult};
use u_tsp_brute::report::{format_elapsed, results_file_name, ProgressBar, ResultWriter};
use u_tsp_brute::search::{
    CancelToken, Enumerator, SearchConfig, SearchMode, DEFAULT_ROUTE_BUDGET,
};
use u_tsp_brute::{TspError, TspResult};

#[derive(Parser)]
#[command(name = "u-tsp-brute")]
#[command(about = "Exact TSP by exhaustive enumeration over anchored permutations")]
#[command(version)]
struct Cli {
    /// City file: 7 header lines, then `index x y` per line
    #[arg(required_unless_present = "random", conflicts_with = "random")]
    file: Option<PathBuf>,

    /// Generate this many random cities instead of reading a file
    #[arg(long, value_name = "N")]
    random: Option<usize>,

    /// Seed for --random
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Keep and write every route, not only the minimum
    #[arg(long)]
    all: bool,

    /// Maximum number of routes retained with --all
    #[arg(long, default_value_t = DEFAULT_ROUTE_BUDGET)]
    route_budget: u64,

    /// Split the search across worker threads
    #[arg(long)]
    parallel: bool,

    /// Stop after this many seconds and report the best route found so far
    #[arg(long, value_name = "SECS")]
    time_limit: Option<u64>,

    /// Results file (default: results<N>.txt)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the result as JSON to stdout instead of writing a results file
    #[arg(long)]
    json: bool,

    /// No progress bar or banner
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    cities: &'a [City],
    min_route: Vec<&'a str>,
    result: &'a SearchResult,
    elapsed_seconds: f64,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code(&e)
        }
    }
}

fn run(cli: &Cli) -> TspResult<()> {
    let cities = load_cities(cli)?;

    let mode = if cli.all {
        SearchMode::CollectAll
    } else {
        SearchMode::MinOnly
    };
    let config = SearchConfig::default()
        .with_mode(mode)
        .with_route_budget(cli.route_budget)
        .with_parallel(cli.parallel);

    let cancel = CancelToken::new();
    let _watchdog = cli
        .time_limit
        .map(|secs| cancel.cancel_after(Duration::from_secs(secs)));
    let enumerator = Enumerator::new(config).with_cancel(cancel);

    let start = Instant::now();
    let result = if cli.quiet || cli.json {
        enumerator.run(&cities)?
    } else {
        let mut bar = ProgressBar::new(io::stderr());
        let outcome = enumerator.run_with_progress(&cities, &mut bar);
        bar.clear();
        outcome?
    };
    let elapsed = start.elapsed();

    if cli.json {
        let report = JsonReport {
            cities: &cities,
            min_route: result
                .min_route()
                .cities(&cities)
                .into_iter()
                .map(City::name)
                .collect(),
            result: &result,
            elapsed_seconds: elapsed.as_secs_f64(),
        };
        serde_json::to_writer_pretty(io::stdout().lock(), &report)?;
        println!();
        return Ok(());
    }

    let path = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(results_file_name(cities.len())));
    let mut writer = ResultWriter::new(BufWriter::new(File::create(&path)?));
    writer.write_result(&cities, &result)?;
    writer.write_footer(elapsed)?;

    if !cli.quiet {
        print_success(&path, elapsed);
    }
    Ok(())
}

fn load_cities(cli: &Cli) -> TspResult<Vec<City>> {
    match (&cli.file, cli.random) {
        (_, Some(n)) => random_cities(n, cli.seed),
        (Some(path), None) => read_cities(path),
        (None, None) => Err(TspError::EmptyInput),
    }
}

fn print_success(path: &Path, elapsed: Duration) {
    let rule = "=".repeat(55);
    println!("{rule}");
    println!(
        "Results generated in {} ({}). Have a nice day!",
        path.display(),
        format_elapsed(elapsed)
    );
    println!("{rule}");
}

fn exit_code(e: &TspError) -> ExitCode {
    match e {
        TspError::EmptyInput | TspError::InvalidCity { .. } | TspError::Parse { .. } => {
            ExitCode::from(4)
        }
        TspError::ResourceExhaustion { .. } => ExitCode::from(5),
        TspError::Cancelled => ExitCode::from(6),
        TspError::Io(_) => ExitCode::from(7),
        TspError::Json(_) => ExitCode::from(1),
    }
}
