use crate::search::{
    action_mask, environment::Environment, generate_successor, Action, ActionMask, EncodedState,
    Reward, Solution, TaxiState,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use strum::EnumCount;
use thiserror::Error;
use tracing::{debug, warn};

/// A disagreement between the search's model of the world and an
/// environment. Any of these means the transition model is wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("environment started in state {actual}, expected {expected}")]
    InitialStateMismatch {
        expected: EncodedState,
        actual: EncodedState,
    },
    #[error("environment reported the goal after {step} of {len} actions")]
    ReachedGoalEarly { step: usize, len: usize },
    #[error("plan of {len} actions does not reach the goal, final state is {final_state}")]
    Incomplete { len: usize, final_state: EncodedState },
    #[error("reward mismatch: search computed {expected}, environment paid {actual}")]
    RewardMismatch { expected: Reward, actual: Reward },
    #[error(
        "transition mismatch after {action} from {state}: environment gave \
        ({env_state}, {env_reward}), model gave ({model_state}, {model_reward})"
    )]
    TransitionMismatch {
        state: EncodedState,
        action: Action,
        env_state: EncodedState,
        env_reward: Reward,
        model_state: EncodedState,
        model_reward: Reward,
    },
    #[error("action mask mismatch in state {state}: environment {environment:?}, model {model:?}")]
    ActionMaskMismatch {
        state: EncodedState,
        environment: [bool; Action::COUNT],
        model: [bool; Action::COUNT],
    },
    #[error("done flag mismatch in state {state}: environment {actual}, model {expected}")]
    DoneMismatch {
        state: EncodedState,
        expected: bool,
        actual: bool,
    },
    #[error("environment reported invalid state {0}")]
    InvalidState(EncodedState),
}

/// Replay a solution in an environment reset with `seed`. The environment
/// must start in `initial_state`, report the goal exactly after the last
/// action, and pay exactly the reward the search computed.
pub fn validate(
    solution: &Solution,
    initial_state: TaxiState,
    env: &mut dyn Environment,
    seed: u64,
) -> Result<(), ValidationError> {
    let start = env.reset(seed);
    if start != initial_state.encode() {
        return Err(ValidationError::InitialStateMismatch {
            expected: initial_state.encode(),
            actual: start,
        });
    }

    let len = solution.plan.len();
    let mut total_reward: Reward = 0;
    let mut current = start;
    let mut done = initial_state.is_goal();
    for (i, &action) in solution.plan.iter().enumerate() {
        if done {
            return Err(ValidationError::ReachedGoalEarly { step: i, len });
        }
        let step = env.step(action);
        total_reward += step.reward;
        current = step.next_state;
        done = step.done;
    }

    if !done {
        return Err(ValidationError::Incomplete {
            len,
            final_state: current,
        });
    }
    if total_reward != solution.total_reward {
        warn!(
            expected = solution.total_reward,
            actual = total_reward,
            "reward mismatch"
        );
        return Err(ValidationError::RewardMismatch {
            expected: solution.total_reward,
            actual: total_reward,
        });
    }
    debug!(len, total_reward, "plan validated");
    Ok(())
}

/// Step an environment with `num_steps` random actions and compare every
/// transition, reward and action mask with the model.
pub fn validate_transitions(
    env: &mut dyn Environment,
    seed: u64,
    num_steps: usize,
) -> Result<(), ValidationError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut current = env.reset(seed);

    for _ in 0..num_steps {
        let state = TaxiState::decode(current).map_err(|_| ValidationError::InvalidState(current))?;
        let action = Action::from_index(rng.gen_range(0..Action::COUNT)).unwrap_or(Action::Down);
        let expected = generate_successor(&state, action);
        let step = env.step(action);

        if step.next_state != expected.state.encode() || step.reward != expected.reward {
            return Err(ValidationError::TransitionMismatch {
                state: current,
                action,
                env_state: step.next_state,
                env_reward: step.reward,
                model_state: expected.state.encode(),
                model_reward: expected.reward,
            });
        }
        let model_mask: ActionMask = action_mask(&expected.state);
        if step.action_mask != model_mask {
            return Err(ValidationError::ActionMaskMismatch {
                state: step.next_state,
                environment: step.action_mask.as_array(),
                model: model_mask.as_array(),
            });
        }
        if step.done != expected.state.is_goal() {
            return Err(ValidationError::DoneMismatch {
                state: step.next_state,
                expected: expected.state.is_goal(),
                actual: step.done,
            });
        }
        current = step.next_state;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{environment::Step, Plan, TaxiEnvironment};

    fn solution(plan: &str, total_reward: Reward) -> Solution {
        Solution::new(Plan::from_text(plan).unwrap(), total_reward)
    }

    fn env_at(col: u8, row: u8, passenger: u8, destination: u8) -> (TaxiState, TaxiEnvironment) {
        let state = TaxiState::new(col, row, passenger, destination).unwrap();
        (state, TaxiEnvironment::with_initial_state(state))
    }

    #[test]
    fn validate_good_plan_ok() {
        let (state, mut env) = env_at(0, 0, 1, 0);
        let plan = "D D R R U U R R PU D D L L L U U L DO";
        assert_eq!(validate(&solution(plan, 3), state, &mut env, 0), Ok(()));
    }

    #[test]
    fn validate_reward_mismatch() {
        let (state, mut env) = env_at(0, 0, 1, 0);
        let plan = "D D R R U U R R PU D D L L L U U L DO";
        assert_eq!(
            validate(&solution(plan, 5), state, &mut env, 0),
            Err(ValidationError::RewardMismatch {
                expected: 5,
                actual: 3
            })
        );
    }

    #[test]
    fn validate_bad_plan_incomplete() {
        let (state, mut env) = env_at(0, 0, 1, 0);
        let plan = "D D R R U U R R PU";
        assert!(matches!(
            validate(&solution(plan, -9), state, &mut env, 0),
            Err(ValidationError::Incomplete { len: 9, .. })
        ));
    }

    #[test]
    fn validate_goal_too_early() {
        let (state, mut env) = env_at(4, 4, 4, 3);
        let plan = "L DO U";
        assert_eq!(
            validate(&solution(plan, 18), state, &mut env, 0),
            Err(ValidationError::ReachedGoalEarly { step: 2, len: 3 })
        );
    }

    #[test]
    fn validate_wrong_start() {
        let state = TaxiState::new(0, 0, 1, 0).unwrap();
        let mut env = TaxiEnvironment::with_initial_state(TaxiState::new(1, 0, 1, 0).unwrap());
        assert!(matches!(
            validate(&solution("DO", 20), state, &mut env, 0),
            Err(ValidationError::InitialStateMismatch { expected: 4, .. })
        ));
    }

    #[test]
    fn validate_empty_plan_at_goal() {
        let (state, mut env) = env_at(2, 2, 1, 1);
        assert_eq!(validate(&Solution::new(Plan::empty(), 0), state, &mut env, 7), Ok(()));
    }

    #[test]
    fn model_environment_matches_model() {
        let mut env = TaxiEnvironment::new();
        for seed in 0..5 {
            assert_eq!(validate_transitions(&mut env, seed, 500), Ok(()));
        }
    }

    /// A simulator whose drop-off pays a different reward.
    #[derive(Debug)]
    struct StingyTaxi(TaxiEnvironment);

    impl Environment for StingyTaxi {
        fn reset(&mut self, seed: u64) -> EncodedState {
            self.0.reset(seed)
        }

        fn step(&mut self, action: Action) -> Step {
            let mut step = self.0.step(action);
            if step.reward == 20 {
                step.reward = 19;
            }
            step
        }
    }

    /// A simulator that never ends the episode.
    #[derive(Debug)]
    struct EndlessTaxi(TaxiEnvironment);

    impl Environment for EndlessTaxi {
        fn reset(&mut self, seed: u64) -> EncodedState {
            self.0.reset(seed)
        }

        fn step(&mut self, action: Action) -> Step {
            Step {
                done: false,
                ..self.0.step(action)
            }
        }
    }

    #[test]
    fn done_mismatch_is_detected() {
        let (_, env) = env_at(3, 4, 4, 3);
        let mut env = EndlessTaxi(env);
        // Delivery at the destination ends the episode in the model.
        env.reset(0);
        let step = env.step(Action::DropOff);
        assert_eq!(step.reward, 20);
        assert!(!step.done);

        assert!(matches!(
            validate_transitions(&mut env, 0, 2000),
            Err(ValidationError::DoneMismatch {
                expected: true,
                actual: false,
                ..
            })
        ));
    }

    #[test]
    fn reward_mismatch_is_detected() {
        let (state, env) = env_at(4, 4, 4, 3);
        let mut env = StingyTaxi(env);
        assert_eq!(
            validate(&solution("L DO", 19), state, &mut env, 0),
            Err(ValidationError::RewardMismatch {
                expected: 19,
                actual: 18
            })
        );
        assert!(matches!(
            validate_transitions(&mut env, 0, 2000),
            Err(ValidationError::TransitionMismatch { .. })
        ));
    }
}
