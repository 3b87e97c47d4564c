#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure execution system that drives one rover through its instructions.
//!
//! Instructions are applied strictly in order. The first rejected move halts
//! the remainder of that rover's list; instructions queued for other rovers
//! are unaffected. The report always carries the rover's state at the moment
//! execution stopped, whether it completed or halted.

use mars_rover_core::{Instruction, MoveError, Orientation, Position, RoverId};
use mars_rover_world::{query, Simulation};

/// Drives rovers through their instruction lists, one rover at a time.
#[derive(Debug, Default)]
pub struct Executor;

/// Terminal outcome of one rover's instruction list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecutionStatus {
    /// Every instruction was applied without a rejection.
    Completed,
    /// A rejected move stopped the remaining instructions.
    Halted {
        /// Failure that caused the halt.
        reason: MoveError,
    },
}

/// Result of driving a rover through its instruction list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExecutionReport {
    /// Rover the report describes.
    pub rover: RoverId,
    /// Terminal state the execution reached.
    pub status: ExecutionStatus,
    /// Position of the rover when execution stopped.
    pub position: Position,
    /// Orientation of the rover when execution stopped.
    pub orientation: Orientation,
    /// Number of instructions applied before execution stopped.
    pub executed: usize,
}

impl ExecutionReport {
    /// Reports whether the full instruction list was applied.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self.status, ExecutionStatus::Completed)
    }
}

impl Executor {
    /// Applies the instruction list to the identified rover.
    ///
    /// Returns `None` when the rover was never deployed; otherwise the
    /// report captures the rover's state when execution stopped. There is
    /// no retry and no rollback beyond the failing move not happening.
    pub fn run(
        &self,
        simulation: &mut Simulation,
        rover: RoverId,
        instructions: &[Instruction],
    ) -> Option<ExecutionReport> {
        let _ = query::rover_snapshot(simulation, rover)?;

        let mut status = ExecutionStatus::Completed;
        let mut executed = 0;
        for &instruction in instructions {
            match simulation.execute(rover, instruction) {
                Ok(()) => executed += 1,
                Err(reason) => {
                    status = ExecutionStatus::Halted { reason };
                    break;
                }
            }
        }

        let snapshot = query::rover_snapshot(simulation, rover)?;
        Some(ExecutionReport {
            rover,
            status,
            position: snapshot.position,
            orientation: snapshot.orientation,
            executed,
        })
    }
}
