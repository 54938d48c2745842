use clap::{ArgGroup, Parser, ValueEnum};
use serde::Serialize;
use statesearch::error::Error;
use statesearch::search::{
    validate, Heuristic, HeuristicTable, SearchEngineName, SearchReport, StateSpace, Verbosity,
    ZeroHeuristic,
};
use statesearch::validation::{check_consistency, check_optimism};
use std::fmt::Display;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(version)]
#[command(group(
    ArgGroup::new("mode")
        .required(true)
        .args(["algorithm", "check_optimistic", "check_consistent"])
))]
/// Search a weighted state space with BFS, UCS or A*, or check whether a
/// heuristic is optimistic or consistent.
struct Cli {
    #[arg(
        value_enum,
        help = "The search algorithm to run",
        long = "alg",
        id = "algorithm"
    )]
    algorithm: Option<SearchEngineName>,
    #[arg(help = "The state space file", long = "ss", value_name = "STATE_SPACE")]
    state_space: PathBuf,
    #[arg(
        help = "The heuristic file, needed by astar and both checks",
        long = "h",
        value_name = "HEURISTIC"
    )]
    heuristic: Option<PathBuf>,
    #[arg(
        help = "Check that the heuristic never overestimates the true cost",
        long = "check-optimistic"
    )]
    check_optimistic: bool,
    #[arg(
        help = "Check that the heuristic is consistent on every edge",
        long = "check-consistent"
    )]
    check_consistent: bool,
    #[arg(
        help = "Also write the report to this file",
        short = 'o',
        long = "output",
        value_name = "OUTPUT"
    )]
    output: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "The report format",
        short = 'f',
        long = "format",
        default_value_t = ReportFormat::Text
    )]
    format: ReportFormat,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum ReportFormat {
    /// The line-oriented report
    Text,
    /// The same report as a JSON object
    Json,
}

fn main() {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    if let Err(e) = run(&cli) {
        error!("{}", e);
        let mut source = std::error::Error::source(&e);
        while let Some(cause) = source {
            error!("caused by: {}", cause);
            source = cause.source();
        }
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let state_space = StateSpace::from_path(&cli.state_space)?;

    if let Some(algorithm) = cli.algorithm {
        search(cli, algorithm, &state_space)
    } else if cli.check_optimistic {
        let path = require_heuristic(cli, "--check-optimistic")?;
        let heuristic = HeuristicTable::from_path(path)?;
        let report = check_optimism(&state_space, &heuristic, &path.display().to_string())?;
        emit(cli, &report)
    } else {
        let path = require_heuristic(cli, "--check-consistent")?;
        let heuristic = HeuristicTable::from_path(path)?;
        let report = check_consistency(&state_space, &heuristic, &path.display().to_string())?;
        emit(cli, &report)
    }
}

fn search(cli: &Cli, algorithm: SearchEngineName, state_space: &StateSpace) -> Result<(), Error> {
    let (table, label) = if algorithm.uses_heuristic() {
        let path = require_heuristic(cli, "--alg astar")?;
        (
            Some(HeuristicTable::from_path(path)?),
            format!("{} {}", algorithm.label(), path.display()),
        )
    } else {
        (None, algorithm.label().to_string())
    };
    let zero = ZeroHeuristic::new();
    let heuristic: &dyn Heuristic = match &table {
        Some(table) => table,
        None => &zero,
    };

    let (result, statistics) = algorithm.search(state_space, heuristic)?;
    statistics.log();

    match result.solution() {
        Some(solution) => {
            info!("validating path");
            let cost = validate(solution.path(), state_space)?;
            if cost != solution.cost() {
                warn!(
                    reported = solution.cost().into_inner(),
                    replayed = cost.into_inner(),
                    "replayed path cost differs from the reported cost"
                );
            }
            info!(path_length = solution.path().len(), "path is valid");
        }
        None => info!("no path found"),
    }

    emit(cli, &SearchReport::new(label, &result, &statistics))
}

fn require_heuristic<'a>(cli: &'a Cli, mode: &str) -> Result<&'a Path, Error> {
    cli.heuristic
        .as_deref()
        .ok_or_else(|| Error::Usage(format!("{} needs a heuristic file, pass one with --h", mode)))
}

fn emit<R: Display + Serialize>(cli: &Cli, report: &R) -> Result<(), Error> {
    let rendered = match cli.format {
        ReportFormat::Text => report.to_string(),
        ReportFormat::Json => format!("{}\n", serde_json::to_string_pretty(report)?),
    };
    print!("{}", rendered);

    if let Some(output) = &cli.output {
        std::fs::write(output, &rendered).map_err(|source| Error::Output {
            path: output.clone(),
            source,
        })?;
        info!(output = %output.display(), "wrote report");
    }
    Ok(())
}
