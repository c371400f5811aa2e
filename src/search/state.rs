use crate::search::layout::{GRID_SIZE, LANDMARKS, LANDMARK_NAMES};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use thiserror::Error;

/// The single-integer state representation used by the reference simulator.
pub type EncodedState = u32;

/// Passenger location value meaning the passenger is inside the taxi.
pub const IN_TAXI: u8 = 4;

const NUM_PASSENGER_LOCATIONS: u32 = LANDMARKS.len() as u32 + 1;
const NUM_DESTINATIONS: u32 = LANDMARKS.len() as u32;

/// Number of distinct encoded states, `5 * 5 * 5 * 4`.
pub const NUM_STATES: u32 =
    GRID_SIZE as u32 * GRID_SIZE as u32 * NUM_PASSENGER_LOCATIONS * NUM_DESTINATIONS;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("encoded state {0} is outside [0, {max}]", max = NUM_STATES - 1)]
    InvalidEncoding(EncodedState),
    #[error("{field} = {value} is out of range, expected at most {max}")]
    OutOfRange {
        field: &'static str,
        value: u8,
        max: u8,
    },
}

/// A state of the taxi puzzle.
///
/// `passenger_location` is a landmark index in `0..4`, or [`IN_TAXI`].
/// `destination` is a landmark index and never changes during an episode.
/// Every field is range checked on construction and deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "StateFields")]
pub struct TaxiState {
    pub(crate) taxi_col: u8,
    pub(crate) taxi_row: u8,
    pub(crate) passenger_location: u8,
    pub(crate) destination: u8,
}

/// Unchecked field values as they appear in serialized form.
#[derive(Deserialize)]
struct StateFields {
    taxi_col: u8,
    taxi_row: u8,
    passenger_location: u8,
    destination: u8,
}

impl TryFrom<StateFields> for TaxiState {
    type Error = StateError;

    fn try_from(fields: StateFields) -> Result<Self, Self::Error> {
        Self::new(
            fields.taxi_col,
            fields.taxi_row,
            fields.passenger_location,
            fields.destination,
        )
    }
}

impl TaxiState {
    pub fn new(
        taxi_col: u8,
        taxi_row: u8,
        passenger_location: u8,
        destination: u8,
    ) -> Result<Self, StateError> {
        check_range("taxi_col", taxi_col, GRID_SIZE - 1)?;
        check_range("taxi_row", taxi_row, GRID_SIZE - 1)?;
        check_range("passenger_location", passenger_location, IN_TAXI)?;
        check_range("destination", destination, NUM_DESTINATIONS as u8 - 1)?;
        Ok(Self {
            taxi_col,
            taxi_row,
            passenger_location,
            destination,
        })
    }

    /// Decode a state from its integer form,
    /// `((taxi_row * 5 + taxi_col) * 5 + passenger_location) * 4 + destination`.
    pub fn decode(encoded: EncodedState) -> Result<Self, StateError> {
        if encoded >= NUM_STATES {
            return Err(StateError::InvalidEncoding(encoded));
        }
        let mut rest = encoded;
        let destination = rest % NUM_DESTINATIONS;
        rest /= NUM_DESTINATIONS;
        let passenger_location = rest % NUM_PASSENGER_LOCATIONS;
        rest /= NUM_PASSENGER_LOCATIONS;
        let taxi_col = rest % GRID_SIZE as u32;
        rest /= GRID_SIZE as u32;
        let taxi_row = rest;

        Ok(Self {
            taxi_col: taxi_col as u8,
            taxi_row: taxi_row as u8,
            passenger_location: passenger_location as u8,
            destination: destination as u8,
        })
    }

    pub fn encode(&self) -> EncodedState {
        ((u32::from(self.taxi_row) * GRID_SIZE as u32 + u32::from(self.taxi_col))
            * NUM_PASSENGER_LOCATIONS
            + u32::from(self.passenger_location))
            * NUM_DESTINATIONS
            + u32::from(self.destination)
    }

    pub fn taxi_col(&self) -> u8 {
        self.taxi_col
    }

    pub fn taxi_row(&self) -> u8 {
        self.taxi_row
    }

    pub fn passenger_location(&self) -> u8 {
        self.passenger_location
    }

    pub fn destination(&self) -> u8 {
        self.destination
    }

    pub fn taxi_position(&self) -> (u8, u8) {
        (self.taxi_col, self.taxi_row)
    }

    pub fn passenger_in_taxi(&self) -> bool {
        self.passenger_location == IN_TAXI
    }

    /// The passenger is at the destination landmark. This holds for a state
    /// whose passenger already waits at the destination before any pickup.
    pub fn is_goal(&self) -> bool {
        self.passenger_location == self.destination
    }

    /// Iterate over every encodable state in encoding order.
    pub fn all() -> impl Iterator<Item = TaxiState> {
        (0..NUM_STATES).filter_map(|encoded| Self::decode(encoded).ok())
    }
}

fn check_range(field: &'static str, value: u8, max: u8) -> Result<(), StateError> {
    if value > max {
        return Err(StateError::OutOfRange { field, value, max });
    }
    Ok(())
}

impl TryFrom<EncodedState> for TaxiState {
    type Error = StateError;

    fn try_from(encoded: EncodedState) -> Result<Self, Self::Error> {
        Self::decode(encoded)
    }
}

impl From<TaxiState> for EncodedState {
    fn from(state: TaxiState) -> Self {
        state.encode()
    }
}

impl Display for TaxiState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let passenger = match self.passenger_location {
            IN_TAXI => "taxi",
            index => LANDMARK_NAMES[index as usize],
        };
        write!(
            f,
            "[{}, {}, {}, {}] (taxi at ({}, {}), passenger {}, destination {})",
            self.taxi_col,
            self.taxi_row,
            self.passenger_location,
            self.destination,
            self.taxi_col,
            self.taxi_row,
            passenger,
            LANDMARK_NAMES[self.destination as usize],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_encode_round_trip() {
        for encoded in 0..NUM_STATES {
            let state = TaxiState::decode(encoded).unwrap();
            assert_eq!(state.encode(), encoded);
        }
    }

    #[test]
    fn decode_known_values() {
        assert_eq!(NUM_STATES, 500);
        assert_eq!(
            TaxiState::decode(4).unwrap(),
            TaxiState::new(0, 0, 1, 0).unwrap()
        );
        assert_eq!(
            TaxiState::decode(499).unwrap(),
            TaxiState::new(4, 4, 4, 3).unwrap()
        );
        // ((2 * 5 + 3) * 5 + 4) * 4 + 1
        assert_eq!(
            TaxiState::decode(277).unwrap(),
            TaxiState::new(3, 2, 4, 1).unwrap()
        );
    }

    #[test]
    fn decode_rejects_out_of_range() {
        assert_eq!(
            TaxiState::decode(500),
            Err(StateError::InvalidEncoding(500))
        );
        assert!(TaxiState::decode(u32::MAX).is_err());
    }

    #[test]
    fn new_validates_fields() {
        assert!(TaxiState::new(5, 0, 0, 0).is_err());
        assert!(TaxiState::new(0, 5, 0, 0).is_err());
        assert!(TaxiState::new(0, 0, 5, 0).is_err());
        assert!(matches!(
            TaxiState::new(0, 0, 0, 4),
            Err(StateError::OutOfRange {
                field: "destination",
                ..
            })
        ));
    }

    #[test]
    fn all_visits_every_state_once() {
        assert_eq!(TaxiState::all().count(), NUM_STATES as usize);
    }

    #[test]
    fn deserialization_checks_ranges() {
        let state = TaxiState::new(3, 2, IN_TAXI, 1).unwrap();
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(serde_json::from_str::<TaxiState>(&json).unwrap(), state);

        let bad = r#"{"taxi_col":0,"taxi_row":0,"passenger_location":9,"destination":0}"#;
        let err = serde_json::from_str::<TaxiState>(bad).unwrap_err();
        assert!(err.to_string().contains("passenger_location = 9"), "{}", err);
    }

    #[test]
    fn goal_is_passenger_at_destination() {
        assert!(TaxiState::new(2, 2, 3, 3).unwrap().is_goal());
        assert!(!TaxiState::new(3, 4, IN_TAXI, 3).unwrap().is_goal());
        assert!(!TaxiState::new(3, 4, 1, 3).unwrap().is_goal());
    }
}
