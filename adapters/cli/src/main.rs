#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that drives rover simulations from console input.
//!
//! All text parsing and presentation lives here; the world and the executor
//! only ever see structured values. The console protocol matches the classic
//! exercise: one plateau line (`5 5`), then per rover a deployment line
//! (`1 2 N`) followed by an instruction line (`LMLMLMLMM`).

use std::io::{self, BufRead};

use anyhow::{bail, Context, Result};
use clap::Parser;
use mars_rover_core::{Instruction, Orientation, RoverId};
use mars_rover_system_execution::{ExecutionStatus, Executor};
use mars_rover_world::{Plateau, Simulation};

/// Simulates rovers driving across a bounded plateau.
#[derive(Debug, Parser)]
#[command(name = "mars-rover")]
struct Args {
    /// Number of rovers to deploy onto the plateau.
    #[arg(long, default_value_t = 2)]
    rovers: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Enter the size of the plateau (max X and max Y, separated by a blank)");
    let (max_x, max_y) = parse_plateau_size(&read_line(&mut lines)?)?;
    let plateau = Plateau::new(max_x, max_y)?;
    let mut simulation = Simulation::new(plateau);

    let mut routes: Vec<(RoverId, Vec<Instruction>)> = Vec::with_capacity(args.rovers);
    for ordinal in 1..=args.rovers {
        println!(
            "Enter the deploy position of rover {ordinal} and its orientation (N, E, S, W), separated by blanks"
        );
        let (x, y, orientation) = parse_deployment(&read_line(&mut lines)?)?;
        let rover = simulation
            .deploy(x, y, orientation)
            .with_context(|| format!("rover {ordinal} could not be deployed"))?;

        println!("Enter the instructions (M, L, R) for rover {ordinal}, without separation");
        let instructions = parse_instructions(&read_line(&mut lines)?)?;
        routes.push((rover, instructions));
    }

    let executor = Executor;
    for (rover, instructions) in routes {
        let Some(report) = executor.run(&mut simulation, rover, &instructions) else {
            continue;
        };
        match report.status {
            ExecutionStatus::Completed => println!(
                "{} {} {}",
                report.position.x(),
                report.position.y(),
                report.orientation.abbreviation()
            ),
            ExecutionStatus::Halted { reason } => eprintln!(
                "Rover {} halted: {reason}. Last known position: {} {} {}",
                report.rover.get(),
                report.position.x(),
                report.position.y(),
                report.orientation.abbreviation()
            ),
        }
    }

    Ok(())
}

fn read_line(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<String> {
    let line = lines
        .next()
        .context("console input ended unexpectedly")?
        .context("failed to read console input")?;
    Ok(line.trim().to_owned())
}

fn parse_plateau_size(line: &str) -> Result<(i32, i32)> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [max_x, max_y] = tokens.as_slice() else {
        bail!("expected two plateau dimensions, got {line:?}");
    };
    Ok((parse_coordinate(max_x)?, parse_coordinate(max_y)?))
}

fn parse_deployment(line: &str) -> Result<(i32, i32, Option<Orientation>)> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [x, y, orientation] = tokens.as_slice() else {
        bail!("expected two coordinates and an orientation, got {line:?}");
    };
    Ok((
        parse_coordinate(x)?,
        parse_coordinate(y)?,
        Orientation::from_abbreviation(orientation),
    ))
}

fn parse_instructions(line: &str) -> Result<Vec<Instruction>> {
    line.chars()
        .filter(|token| !token.is_whitespace())
        .map(|token| {
            Instruction::from_token(token)
                .with_context(|| format!("invalid instruction token {token:?}"))
        })
        .collect()
}

fn parse_coordinate(token: &str) -> Result<i32> {
    token
        .parse()
        .with_context(|| format!("invalid coordinate {token:?}"))
}
