use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{EnumCount, EnumIter};

/// One of the six taxi actions, in the index order used by the reference
/// simulator.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount, Serialize, Deserialize,
)]
pub enum Action {
    /// Move south, increasing the row.
    Down,
    /// Move north, decreasing the row.
    Up,
    /// Move east, increasing the column.
    Right,
    /// Move west, decreasing the column.
    Left,
    PickUp,
    DropOff,
}

impl Action {
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Action::Down => "D",
            Action::Up => "U",
            Action::Right => "R",
            Action::Left => "L",
            Action::PickUp => "PU",
            Action::DropOff => "DO",
        }
    }

    pub fn is_movement(&self) -> bool {
        matches!(
            self,
            Action::Down | Action::Up | Action::Right | Action::Left
        )
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::iter()
            .find(|action| action.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown action label {:?}", s))
    }
}
