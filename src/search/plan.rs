//! A plan is a sequence of actions that can be executed to deliver the
//! passenger. This module provides the [`Plan`] struct, which represents a
//! plan, and [`Solution`], a plan together with the reward it collects.

use crate::search::{Action, Reward};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::ops::Deref;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("failed to read plan file: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    steps: Vec<Action>,
}

impl Plan {
    pub fn empty() -> Self {
        Self { steps: vec![] }
    }

    pub fn new(steps: Vec<Action>) -> Self {
        Self { steps }
    }

    pub fn from_path(path: &Path) -> Result<Self, PlanError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_text(&contents)
    }

    /// Parse a plan written as action labels (`D U R L PU DO`), separated by
    /// whitespace. Everything after a `;` on a line is a comment.
    pub fn from_text(text: &str) -> Result<Self, PlanError> {
        let mut steps = vec![];
        for (line_index, line) in text.lines().enumerate() {
            let content = line.split(';').next().unwrap_or_default();
            for label in content.split_whitespace() {
                let action = label.parse::<Action>().map_err(|message| PlanError::Parse {
                    line: line_index + 1,
                    message,
                })?;
                steps.push(action);
            }
        }
        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[Action] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.steps.iter().map(|action| action.label()).collect()
    }
}

impl Display for Plan {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.steps.iter().map(Action::label).join(" "))
    }
}

impl IntoIterator for Plan {
    type Item = Action;
    type IntoIter = std::vec::IntoIter<Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl Deref for Plan {
    type Target = [Action];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}

/// A plan found by a search engine and the total reward the environment
/// should pay for executing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub plan: Plan,
    pub total_reward: Reward,
}

impl Solution {
    pub fn new(plan: Plan, total_reward: Reward) -> Self {
        Self { plan, total_reward }
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] reward = {}", self.plan, self.total_reward)
    }
}
