use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use data_loader::MovieTable;
use reports::{GenreReport, TopRatedReport, YearReport};
use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

/// Environment variable naming the dataset file.
const DATASET_PATH_VAR: &str = "MOVIES_FILE_PATH";

/// Movie Reports - aggregate reports over a tabular movie dataset
#[derive(Parser)]
#[command(name = "movie-reports")]
#[command(
    about = "Print aggregate reports over a tabular movie dataset",
    long_about = None
)]
struct Cli {
    /// Report highest/lowest rating and average runtime for the given year
    #[arg(short = 'r', long = "year-report", value_name = "YEAR")]
    year_report: Option<u16>,

    /// Report movie count and average rating for the given genre
    #[arg(short = 'g', long = "genre-report", value_name = "GENRE")]
    genre_report: Option<String>,

    /// Report the top 10 rated movies of the given year with vote likes
    #[arg(short = 'v', long = "votes-report", value_name = "YEAR")]
    votes_report: Option<u16>,

    /// Dataset file path (overrides the MOVIES_FILE_PATH environment
    /// variable)
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    file: Option<PathBuf>,
}

impl Cli {
    fn wants_any_report(&self) -> bool {
        self.year_report.is_some() || self.genre_report.is_some() || self.votes_report.is_some()
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    if !cli.wants_any_report() {
        eprintln!("At least one report option must be provided. Use -h for help.");
        return ExitCode::from(1);
    }

    let Some(path) = resolve_dataset_path(&cli) else {
        eprintln!("No dataset configured: pass --file or set {DATASET_PATH_VAR}.");
        return ExitCode::from(2);
    };

    let start = Instant::now();
    let table = match load_table(&path) {
        Ok(table) => table,
        Err(err) => {
            eprintln!("{err:#}");
            return ExitCode::from(3);
        }
    };
    tracing::info!(elapsed = ?start.elapsed(), movies = table.len(), "dataset ready");

    run_reports(&cli, &table);
    ExitCode::SUCCESS
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

/// The --file flag wins over the environment variable.
fn resolve_dataset_path(cli: &Cli) -> Option<PathBuf> {
    cli.file
        .clone()
        .or_else(|| env::var_os(DATASET_PATH_VAR).map(PathBuf::from))
}

fn load_table(path: &Path) -> Result<MovieTable> {
    MovieTable::load_from_file(path)
        .with_context(|| format!("Failed to load dataset from {}", path.display()))
}

/// Run every requested report. Empty results print their message and the
/// process still exits 0.
fn run_reports(cli: &Cli, table: &MovieTable) {
    if let Some(year) = cli.year_report {
        match reports::year_report(table, year) {
            Ok(report) => print_year_report(&report),
            Err(err) => println!("{err}"),
        }
    }
    if let Some(genre) = &cli.genre_report {
        match reports::genre_report(table, genre) {
            Ok(report) => print_genre_report(&report),
            Err(err) => println!("{err}"),
        }
    }
    if let Some(year) = cli.votes_report {
        match reports::top_rated_report(table, year, 10) {
            Ok(report) => print_top_rated_report(&report),
            Err(err) => println!("{err}"),
        }
    }
}

fn print_year_report(report: &YearReport) {
    println!("{}", format!("Year report for {}", report.year).bold().blue());
    println!(
        "{}Highest rating: {:.1} - {} ({} votes)",
        "• ".green(),
        report.highest.rating,
        report.highest.title,
        report.highest.votes
    );
    println!(
        "{}Lowest rating: {:.1} - {} ({} votes)",
        "• ".green(),
        report.lowest.rating,
        report.lowest.title,
        report.lowest.votes
    );
    match report.average_runtime {
        Some(avg) => println!("{}Average runtime: {:.1} min", "• ".green(), avg),
        None => println!("{}Average runtime: unknown", "• ".green()),
    }
}

fn print_genre_report(report: &GenreReport) {
    println!(
        "{}",
        format!("Genre report for '{}'", report.genre).bold().blue()
    );
    println!("{}Movies found: {}", "• ".cyan(), report.count);
    println!(
        "{}Average rating: {:.1}",
        "• ".cyan(),
        report.average_rating
    );
}

fn print_top_rated_report(report: &TopRatedReport) {
    println!(
        "{}",
        format!(
            "Top {} rated movies of {}",
            report.entries.len(),
            report.year
        )
        .bold()
        .blue()
    );
    for (rank, entry) in report.entries.iter().enumerate() {
        println!(
            "{}. {} ({:.1})",
            (rank + 1).to_string().green(),
            entry.title,
            entry.rating
        );
        println!("   {} {}", "😀".repeat(entry.likes as usize), entry.votes);
    }
}
