#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative plateau state for the rover simulation.
//!
//! The [`Simulation`] owns the plateau bounds and the registry of deployed
//! rovers. It is the only place rover state mutates: deployment validates and
//! registers a rover, and [`Simulation::execute`] applies one instruction,
//! consulting the plateau bounds and the occupancy of every other rover
//! before a move is allowed to land.

use mars_rover_core::{
    Axis, ConfigurationError, DeployError, Instruction, MoveError, Orientation, Position, RoverId,
};

/// Smallest coordinate value that lies on the plateau, on both axes.
pub const MIN_COORDINATE: i32 = 0;

/// Axis-aligned rectangular bounds all rovers must remain within.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plateau {
    max_x: i32,
    max_y: i32,
}

impl Plateau {
    /// Creates a plateau anchored at the origin with the provided maxima.
    ///
    /// Rejects negative dimensions; the plateau is immutable afterwards.
    pub fn new(max_x: i32, max_y: i32) -> Result<Self, ConfigurationError> {
        if max_x < MIN_COORDINATE {
            return Err(ConfigurationError::NegativeDimension {
                axis: Axis::X,
                value: max_x,
            });
        }
        if max_y < MIN_COORDINATE {
            return Err(ConfigurationError::NegativeDimension {
                axis: Axis::Y,
                value: max_y,
            });
        }
        Ok(Self { max_x, max_y })
    }

    /// Largest X-coordinate that lies on the plateau.
    #[must_use]
    pub const fn max_x(&self) -> i32 {
        self.max_x
    }

    /// Largest Y-coordinate that lies on the plateau.
    #[must_use]
    pub const fn max_y(&self) -> i32 {
        self.max_y
    }

    /// Reports whether the provided cell lies within the plateau bounds.
    #[must_use]
    pub const fn contains(&self, position: Position) -> bool {
        self.exceeded_axis(position).is_none()
    }

    /// Returns the axis on which the cell leaves the plateau, if any,
    /// together with the offending coordinate value.
    ///
    /// A unit step changes a single coordinate, so at most one axis can be
    /// exceeded at a time.
    #[must_use]
    pub const fn exceeded_axis(&self, position: Position) -> Option<(Axis, i32)> {
        if position.x() < MIN_COORDINATE || position.x() > self.max_x {
            return Some((Axis::X, position.x()));
        }
        if position.y() < MIN_COORDINATE || position.y() > self.max_y {
            return Some((Axis::Y, position.y()));
        }
        None
    }
}

#[derive(Clone, Copy, Debug)]
struct Rover {
    id: RoverId,
    position: Position,
    orientation: Orientation,
}

/// Owns the plateau and the registry of deployed rovers for one run.
#[derive(Debug)]
pub struct Simulation {
    plateau: Plateau,
    rovers: Vec<Rover>,
    next_id: u64,
}

impl Simulation {
    /// Creates a fresh simulation on the provided plateau with no rovers.
    #[must_use]
    pub fn new(plateau: Plateau) -> Self {
        Self {
            plateau,
            rovers: Vec::new(),
            next_id: 1,
        }
    }

    /// Validates a deployment request, registers the rover, and returns the
    /// identifier minted for it.
    ///
    /// Deployment checks only the request itself; plateau bounds and
    /// occupancy are enforced on movement, not on initial placement.
    pub fn deploy(
        &mut self,
        x: i32,
        y: i32,
        orientation: Option<Orientation>,
    ) -> Result<RoverId, DeployError> {
        if x < MIN_COORDINATE {
            return Err(DeployError::NegativeCoordinate {
                axis: Axis::X,
                value: x,
            });
        }
        if y < MIN_COORDINATE {
            return Err(DeployError::NegativeCoordinate {
                axis: Axis::Y,
                value: y,
            });
        }
        let orientation = orientation.ok_or(DeployError::MissingOrientation)?;

        let id = RoverId::new(self.next_id);
        self.next_id += 1;
        self.rovers.push(Rover {
            id,
            position: Position::new(x, y),
            orientation,
        });
        Ok(id)
    }

    /// Applies a single instruction to the identified rover.
    ///
    /// Turns always succeed and leave the position untouched. A move first
    /// checks the plateau bounds, then the occupancy of every other rover at
    /// the candidate cell; a rejected move leaves the rover unchanged.
    pub fn execute(&mut self, rover: RoverId, instruction: Instruction) -> Result<(), MoveError> {
        // Identifiers are minted by deploy and rovers are never removed, so
        // a missing entry can only come from a foreign id. Skip it, matching
        // how unknown ids are ignored elsewhere in the workspace.
        let Some(index) = self.rover_index(rover) else {
            return Ok(());
        };

        match instruction {
            Instruction::TurnLeft => {
                let entry = &mut self.rovers[index];
                entry.orientation = entry.orientation.rotated_left();
                Ok(())
            }
            Instruction::TurnRight => {
                let entry = &mut self.rovers[index];
                entry.orientation = entry.orientation.rotated_right();
                Ok(())
            }
            Instruction::Move => {
                let candidate = self.rovers[index]
                    .position
                    .displaced_by(self.rovers[index].orientation);

                if let Some((axis, attempted)) = self.plateau.exceeded_axis(candidate) {
                    return Err(MoveError::PlateauExceeded { axis, attempted });
                }
                if self.is_occupied(candidate, Some(rover)) {
                    return Err(MoveError::PositionBlocked {
                        x: candidate.x(),
                        y: candidate.y(),
                    });
                }

                self.rovers[index].position = candidate;
                Ok(())
            }
        }
    }

    /// Reports whether some registered rover other than `excluding`
    /// currently occupies the provided cell.
    ///
    /// The comparison is by coordinates against live rover state, so a move
    /// completed by one rover is visible to the next rover's check.
    #[must_use]
    pub fn is_occupied(&self, position: Position, excluding: Option<RoverId>) -> bool {
        self.rovers
            .iter()
            .any(|rover| Some(rover.id) != excluding && rover.position == position)
    }

    fn rover_index(&self, rover: RoverId) -> Option<usize> {
        self.rovers.iter().position(|entry| entry.id == rover)
    }
}

/// Query functions that provide read-only access to the simulation state.
pub mod query {
    use super::{Plateau, Simulation};
    use mars_rover_core::{Orientation, Position, RoverId};

    /// Provides read-only access to the plateau bounds.
    #[must_use]
    pub fn plateau(simulation: &Simulation) -> &Plateau {
        &simulation.plateau
    }

    /// Captures the current state of a single rover, if it is registered.
    #[must_use]
    pub fn rover_snapshot(simulation: &Simulation, rover: RoverId) -> Option<RoverSnapshot> {
        simulation
            .rovers
            .iter()
            .find(|entry| entry.id == rover)
            .map(|entry| RoverSnapshot {
                id: entry.id,
                position: entry.position,
                orientation: entry.orientation,
            })
    }

    /// Captures a read-only view of every deployed rover.
    #[must_use]
    pub fn rover_view(simulation: &Simulation) -> RoverView {
        let mut snapshots: Vec<RoverSnapshot> = simulation
            .rovers
            .iter()
            .map(|entry| RoverSnapshot {
                id: entry.id,
                position: entry.position,
                orientation: entry.orientation,
            })
            .collect();
        snapshots.sort_by_key(|snapshot| snapshot.id);
        RoverView { snapshots }
    }

    /// Immutable representation of a single rover's state used for queries.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct RoverSnapshot {
        /// Identifier minted for the rover at deployment.
        pub id: RoverId,
        /// Cell the rover currently occupies.
        pub position: Position,
        /// Compass orientation the rover currently faces.
        pub orientation: Orientation,
    }

    /// Read-only snapshot describing all rovers on the plateau.
    #[derive(Clone, Debug, Default)]
    pub struct RoverView {
        snapshots: Vec<RoverSnapshot>,
    }

    impl RoverView {
        /// Iterator over the captured snapshots in deterministic id order.
        pub fn iter(&self) -> impl Iterator<Item = &RoverSnapshot> {
            self.snapshots.iter()
        }

        /// Consumes the view, yielding the underlying snapshots.
        #[must_use]
        pub fn into_vec(self) -> Vec<RoverSnapshot> {
            self.snapshots
        }
    }
}
