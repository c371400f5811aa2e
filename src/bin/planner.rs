use clap::Parser;
use serde::Serialize;
use std::{
    path::{Path, PathBuf},
    process::ExitCode,
    time::Duration,
};
use taxi_search::search::{
    search_engines::{SearchEngineName, SearchResult, SearchStatistics},
    validate, EncodedState, HeuristicName, SearchConfig, TaxiEnvironment, TaxiState, Verbosity,
};
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(version)]
/// Solve the taxi puzzle with one or more search engines and check every plan
/// in the simulator.
struct Cli {
    #[arg(
        help = "The initial state as an encoded integer in [0, 499]",
        short = 's',
        long = "state",
        id = "STATE",
        conflicts_with = "SEED"
    )]
    state: Option<EncodedState>,
    #[arg(
        help = "Seed for drawing the initial state from the simulator's start \
        distribution. A random seed is used if neither a state nor a seed is given.",
        long = "seed",
        id = "SEED"
    )]
    seed: Option<u64>,
    #[arg(
        value_enum,
        help = "The search engines to run, in order. Defaults to all of them.",
        short = 'e',
        long = "engine",
        id = "ENGINE"
    )]
    engines: Vec<SearchEngineName>,
    #[arg(
        value_enum,
        help = "The heuristic used by A*",
        long = "heuristic",
        id = "HEURISTIC"
    )]
    heuristic: Option<HeuristicName>,
    #[arg(help = "A TOML file with search settings", long = "config", id = "CONFIG")]
    config: Option<PathBuf>,
    #[arg(help = "Stop a search after this many expansions", long = "max-expansions")]
    max_expansions: Option<i64>,
    #[arg(
        help = "Stop a search after this much time, e.g. \"30s\"",
        long = "time-limit",
        value_parser = humantime::parse_duration
    )]
    time_limit: Option<Duration>,
    #[arg(help = "Stop a search above this much memory", long = "memory-limit-mb")]
    memory_limit_mb: Option<usize>,
    #[arg(
        help = "Directory to write one plan file per engine into",
        short = 'o',
        long = "output-dir",
        id = "OUTPUT"
    )]
    output_dir: Option<PathBuf>,
    #[arg(help = "Print one JSON record per search run", long = "json")]
    json: bool,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY"
    )]
    verbosity: Option<Verbosity>,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

#[derive(Serialize)]
struct RunRecord<'a> {
    engine: String,
    initial_state: EncodedState,
    decoded_state: TaxiState,
    seed: Option<u64>,
    result: &'static str,
    plan: Option<Vec<&'static str>>,
    total_reward: Option<i64>,
    statistics: &'a SearchStatistics,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => match SearchConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => SearchConfig::default(),
    };
    apply_overrides(&cli, &mut config);

    let level: tracing::Level = config.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let (initial_state, seed) = match choose_initial_state(&cli) {
        Ok(start) => start,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    info!(initial_state = %initial_state, encoded = initial_state.encode(), ?seed);
    if !cli.json {
        println!(
            "Solutions found for initial state {} ({}){}:",
            initial_state,
            initial_state.encode(),
            seed.map(|seed| format!(", seed={}", seed)).unwrap_or_default()
        );
    }

    let mut all_valid = true;
    for engine_name in &config.engines {
        let mut engine = engine_name.create(config.heuristic);
        let (result, statistics) = engine.search(initial_state, config.termination_condition());

        if cli.json {
            print_record(*engine_name, initial_state, seed, &result, &statistics);
        }

        let solution = match result.into_solution() {
            Ok(solution) => solution,
            Err(e) => {
                warn!("{} found no plan: {}", engine_name, e);
                if !cli.json {
                    println!("{:>5}\tno plan found: {}", engine_name, e);
                }
                all_valid = false;
                continue;
            }
        };
        if !cli.json {
            println!(
                "{:>5}\t{} ({} expansions)",
                engine_name,
                solution,
                statistics.expanded_nodes()
            );
        }

        let mut env = match seed {
            Some(_) => TaxiEnvironment::new(),
            None => TaxiEnvironment::with_initial_state(initial_state),
        };
        match validate(&solution, initial_state, &mut env, seed.unwrap_or_default()) {
            Ok(()) => info!(
                "{} plan is valid, completed in {} actions",
                engine_name,
                solution.plan.len()
            ),
            Err(e) => {
                error!("{} plan is invalid: {}", engine_name, e);
                all_valid = false;
            }
        }

        if let Some(output_dir) = &cli.output_dir {
            if let Err(e) = write_plan(output_dir, *engine_name, initial_state, &solution.plan) {
                error!("failed to write plan: {}", e);
                all_valid = false;
            }
        }
    }

    if all_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn apply_overrides(cli: &Cli, config: &mut SearchConfig) {
    if !cli.engines.is_empty() {
        config.engines = cli.engines.clone();
    }
    if let Some(heuristic) = cli.heuristic {
        config.heuristic = heuristic;
    }
    if cli.max_expansions.is_some() {
        config.max_expansions = cli.max_expansions;
    }
    if cli.time_limit.is_some() {
        config.time_limit = cli.time_limit;
    }
    if cli.memory_limit_mb.is_some() {
        config.memory_limit_mb = cli.memory_limit_mb;
    }
    if let Some(verbosity) = cli.verbosity {
        config.verbosity = verbosity;
    }
}

fn choose_initial_state(cli: &Cli) -> Result<(TaxiState, Option<u64>), String> {
    if let Some(encoded) = cli.state {
        let state = TaxiState::decode(encoded).map_err(|e| e.to_string())?;
        return Ok((state, None));
    }
    let seed = cli.seed.unwrap_or_else(|| rand::random::<u64>() % 500);
    Ok((taxi_search::search::initial_state_for_seed(seed), Some(seed)))
}

fn print_record(
    engine_name: SearchEngineName,
    initial_state: TaxiState,
    seed: Option<u64>,
    result: &SearchResult,
    statistics: &SearchStatistics,
) {
    let solution = result.solution();
    let record = RunRecord {
        engine: engine_name.to_string(),
        initial_state: initial_state.encode(),
        decoded_state: initial_state,
        seed,
        result: result.name(),
        plan: solution.map(|solution| solution.plan.labels()),
        total_reward: solution.map(|solution| solution.total_reward),
        statistics,
    };
    match serde_json::to_string(&record) {
        Ok(line) => println!("{}", line),
        Err(e) => error!("failed to serialise run record: {}", e),
    }
}

fn write_plan(
    output_dir: &Path,
    engine_name: SearchEngineName,
    initial_state: TaxiState,
    plan: &taxi_search::search::Plan,
) -> std::io::Result<()> {
    std::fs::create_dir_all(output_dir)?;
    let file_name = format!(
        "{}-{}.plan",
        format!("{:?}", engine_name).to_lowercase(),
        initial_state.encode()
    );
    let path = output_dir.join(file_name);
    std::fs::write(&path, format!("{}\n", plan))?;
    info!("plan written to {}", path.display());
    Ok(())
}
