use clap::Parser;
use std::{path::PathBuf, process::ExitCode};
use taxi_search::search::{
    generate_successor, validate, EncodedState, Plan, Reward, Solution, TaxiEnvironment,
    TaxiState,
};

#[derive(Parser)]
#[command(version)]
/// Replay a plan file in the taxi simulator.
struct Cli {
    #[arg(help = "The initial state as an encoded integer in [0, 499]")]
    state: EncodedState,
    #[arg(help = "The plan file to validate")]
    plan: PathBuf,
    #[arg(
        help = "The reward the plan should collect. Defaults to the reward of \
        replaying the plan in the search's transition model.",
        short = 'r',
        long = "reward",
        allow_negative_numbers = true
    )]
    reward: Option<Reward>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let initial_state = match TaxiState::decode(cli.state) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let plan = match Plan::from_path(&cli.plan) {
        Ok(plan) => plan,
        Err(e) => {
            eprintln!("{}: {}", cli.plan.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let total_reward = cli
        .reward
        .unwrap_or_else(|| model_reward(initial_state, &plan));
    let solution = Solution::new(plan, total_reward);

    let mut env = TaxiEnvironment::with_initial_state(initial_state);
    match validate(&solution, initial_state, &mut env, 0) {
        Ok(()) => {
            println!(
                "Plan valid: {} actions, reward = {}",
                solution.plan.len(),
                solution.total_reward
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("Plan invalid: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn model_reward(initial_state: TaxiState, plan: &Plan) -> Reward {
    let mut state = initial_state;
    let mut total = 0;
    for &action in plan.iter() {
        let successor = generate_successor(&state, action);
        total += successor.reward;
        state = successor.state;
    }
    total
}
