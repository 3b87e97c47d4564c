#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the rover simulation.
//!
//! This crate defines the vocabulary that connects the console adapter, the
//! authoritative plateau world, and the instruction executor: compass
//! orientations with their rotation and displacement tables, grid positions,
//! rover identifiers, the closed instruction set, and the error types that
//! movement and deployment report back to their callers.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Compass orientation a rover faces on the plateau.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Facing toward increasing Y-values.
    North,
    /// Facing toward increasing X-values.
    East,
    /// Facing toward decreasing Y-values.
    South,
    /// Facing toward decreasing X-values.
    West,
}

impl Orientation {
    const LEFT_ROTATION: [Self; 4] = [Self::West, Self::North, Self::East, Self::South];
    const RIGHT_ROTATION: [Self; 4] = [Self::East, Self::South, Self::West, Self::North];
    const DISPLACEMENT: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

    const fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }

    /// Returns the orientation reached by a quarter turn to the left.
    #[must_use]
    pub const fn rotated_left(self) -> Self {
        Self::LEFT_ROTATION[self.index()]
    }

    /// Returns the orientation reached by a quarter turn to the right.
    #[must_use]
    pub const fn rotated_right(self) -> Self {
        Self::RIGHT_ROTATION[self.index()]
    }

    /// Unit displacement `(dx, dy)` of one forward step in this orientation.
    #[must_use]
    pub const fn displacement(self) -> (i32, i32) {
        Self::DISPLACEMENT[self.index()]
    }

    /// Single-letter token used by the console protocol.
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::East => "E",
            Self::South => "S",
            Self::West => "W",
        }
    }

    /// Parses a console token into an orientation, ignoring letter case.
    #[must_use]
    pub fn from_abbreviation(token: &str) -> Option<Self> {
        match token.trim().to_ascii_uppercase().as_str() {
            "N" => Some(Self::North),
            "E" => Some(Self::East),
            "S" => Some(Self::South),
            "W" => Some(Self::West),
            _ => None,
        }
    }
}

/// Single atomic command a rover can execute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Instruction {
    /// Advance one cell in the current orientation.
    Move,
    /// Rotate a quarter turn to the left, keeping the position.
    TurnLeft,
    /// Rotate a quarter turn to the right, keeping the position.
    TurnRight,
}

impl Instruction {
    /// Single-character token used by the console protocol.
    #[must_use]
    pub const fn token(self) -> char {
        match self {
            Self::Move => 'M',
            Self::TurnLeft => 'L',
            Self::TurnRight => 'R',
        }
    }

    /// Parses a console token into an instruction, ignoring letter case.
    #[must_use]
    pub fn from_token(token: char) -> Option<Self> {
        match token.to_ascii_uppercase() {
            'M' => Some(Self::Move),
            'L' => Some(Self::TurnLeft),
            'R' => Some(Self::TurnRight),
            _ => None,
        }
    }
}

/// Unique identifier assigned to a rover when it is registered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoverId(u64);

impl RoverId {
    /// Creates a new rover identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

/// Location of a single grid cell on the plateau.
///
/// Coordinates are signed so that a candidate cell one step beyond the
/// origin can be represented and reported; valid plateau cells are always
/// non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    x: i32,
    y: i32,
}

impl Position {
    /// Creates a new grid position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// X-coordinate of the position.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Y-coordinate of the position.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Cell reached by one forward step in the provided orientation.
    #[must_use]
    pub const fn displaced_by(self, orientation: Orientation) -> Self {
        let (dx, dy) = orientation.displacement();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Coordinate axis referenced by boundary failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("X"),
            Self::Y => f.write_str("Y"),
        }
    }
}

/// Reasons a plateau configuration is rejected before any rover deploys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// A plateau dimension was negative.
    #[error("the plateau's {axis}-dimension must not be negative, got {value}")]
    NegativeDimension {
        /// Axis carrying the rejected dimension.
        axis: Axis,
        /// Dimension value that was rejected.
        value: i32,
    },
}

/// Reasons a rover deployment request is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DeployError {
    /// A starting coordinate was negative.
    #[error("the {axis}-value must not be negative, got {value}")]
    NegativeCoordinate {
        /// Axis carrying the rejected coordinate.
        axis: Axis,
        /// Coordinate value that was rejected.
        value: i32,
    },
    /// No orientation was supplied for the rover.
    #[error("the rover's orientation must not be missing")]
    MissingOrientation,
}

/// Reasons a move instruction is rejected; the rover keeps its state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Error)]
pub enum MoveError {
    /// The candidate cell lies outside the plateau bounds.
    #[error("{axis}-value {attempted} exceeds the plateau, movement aborted")]
    PlateauExceeded {
        /// Axis on which the candidate cell left the plateau.
        axis: Axis,
        /// Attempted out-of-range coordinate value.
        attempted: i32,
    },
    /// The candidate cell is occupied by another rover.
    #[error("position ({x} {y}) is blocked by another rover, movement aborted")]
    PositionBlocked {
        /// X-coordinate of the blocked cell.
        x: i32,
        /// Y-coordinate of the blocked cell.
        y: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::{Axis, Instruction, MoveError, Orientation, Position, RoverId};
    use serde::{de::DeserializeOwned, Serialize};

    const ALL_ORIENTATIONS: [Orientation; 4] = [
        Orientation::North,
        Orientation::East,
        Orientation::South,
        Orientation::West,
    ];

    #[test]
    fn left_and_right_rotations_are_inverse() {
        for orientation in ALL_ORIENTATIONS {
            assert_eq!(orientation.rotated_left().rotated_right(), orientation);
            assert_eq!(orientation.rotated_right().rotated_left(), orientation);
        }
    }

    #[test]
    fn four_rotations_complete_a_cycle() {
        for orientation in ALL_ORIENTATIONS {
            let mut left = orientation;
            let mut right = orientation;
            for _ in 0..4 {
                left = left.rotated_left();
                right = right.rotated_right();
            }
            assert_eq!(left, orientation);
            assert_eq!(right, orientation);
        }
    }

    #[test]
    fn displacement_vectors_match_compass() {
        assert_eq!(Orientation::North.displacement(), (0, 1));
        assert_eq!(Orientation::East.displacement(), (1, 0));
        assert_eq!(Orientation::South.displacement(), (0, -1));
        assert_eq!(Orientation::West.displacement(), (-1, 0));
    }

    #[test]
    fn abbreviations_parse_back_to_their_orientation() {
        for orientation in ALL_ORIENTATIONS {
            assert_eq!(
                Orientation::from_abbreviation(orientation.abbreviation()),
                Some(orientation)
            );
        }
        assert_eq!(Orientation::from_abbreviation("n"), Some(Orientation::North));
        assert_eq!(Orientation::from_abbreviation("Q"), None);
    }

    #[test]
    fn instruction_tokens_parse_back() {
        for instruction in [Instruction::Move, Instruction::TurnLeft, Instruction::TurnRight] {
            assert_eq!(Instruction::from_token(instruction.token()), Some(instruction));
        }
        assert_eq!(Instruction::from_token('m'), Some(Instruction::Move));
        assert_eq!(Instruction::from_token('X'), None);
    }

    #[test]
    fn displaced_position_moves_exactly_one_cell() {
        let origin = Position::new(3, 3);
        assert_eq!(origin.displaced_by(Orientation::North), Position::new(3, 4));
        assert_eq!(origin.displaced_by(Orientation::East), Position::new(4, 3));
        assert_eq!(origin.displaced_by(Orientation::South), Position::new(3, 2));
        assert_eq!(origin.displaced_by(Orientation::West), Position::new(2, 3));
    }

    fn assert_round_trip<T>(value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let bytes = bincode::serialize(value).expect("serialize");
        let restored: T = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(&restored, value);
    }

    #[test]
    fn rover_id_round_trips_through_bincode() {
        assert_round_trip(&RoverId::new(42));
    }

    #[test]
    fn position_round_trips_through_bincode() {
        assert_round_trip(&Position::new(5, -1));
    }

    #[test]
    fn move_error_round_trips_through_bincode() {
        assert_round_trip(&MoveError::PlateauExceeded {
            axis: Axis::Y,
            attempted: -1,
        });
        assert_round_trip(&MoveError::PositionBlocked { x: 2, y: 2 });
    }
}
