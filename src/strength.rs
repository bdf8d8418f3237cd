use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::error::PredictError;
use crate::model::{
    Algorithm, DEFAULT_FORMATION_BONUS, FORMATION_BONUS, PlayerStats, Team, is_known_formation,
};

const W_SHOOTING: f64 = 0.20;
const W_SPEED: f64 = 0.15;
const W_PASSING: f64 = 0.15;
const W_DRIBBLING: f64 = 0.15;
const W_DEFENSE: f64 = 0.20;
const W_STRENGTH: f64 = 0.15;

/// One team's strength plus what it cost to compute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrengthReading {
    pub value: f64,
    pub elapsed: Duration,
    pub iterations: usize,
}

/// Runs the selected algorithm under a stopwatch.
pub fn strength(team: &Team, algorithm: Algorithm) -> Result<StrengthReading, PredictError> {
    if !is_known_formation(&team.formation) {
        warn!(
            "unknown formation {:?} for {}, using multiplier {DEFAULT_FORMATION_BONUS}",
            team.formation, team.name
        );
    }

    let start = Instant::now();
    let (value, iterations) = match algorithm {
        Algorithm::Iterative => strength_iterative(team)?,
        Algorithm::Recursive => strength_recursive(team)?,
    };
    let elapsed = start.elapsed();

    debug!(
        "{} strength ({algorithm}): {value:.4} over {iterations} players in {elapsed:?}",
        team.name
    );
    Ok(StrengthReading {
        value,
        elapsed,
        iterations,
    })
}

/// Single pass over the roster. Returns `(strength, players processed)`.
pub fn strength_iterative(team: &Team) -> Result<(f64, usize), PredictError> {
    let mut total = 0.0;
    let mut processed = 0usize;
    for player in &team.players {
        total += player_contribution(player);
        processed += 1;
    }
    Ok((finish(team, total, processed)?, processed))
}

/// Same result as [`strength_iterative`], one player per step with the
/// running sum carried as an accumulator.
///
/// Each step returns its tail call instead of making it, and the trampoline
/// below runs them, so stack use stays flat for any roster size.
pub fn strength_recursive(team: &Team) -> Result<(f64, usize), PredictError> {
    let mut call = Call::Accumulate {
        index: 0,
        total: 0.0,
        processed: 0,
    };
    loop {
        match call {
            Call::Accumulate {
                index,
                total,
                processed,
            } => call = accumulate(team, index, total, processed),
            Call::Done { total, processed } => {
                return Ok((finish(team, total, processed)?, processed));
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Call {
    Accumulate {
        index: usize,
        total: f64,
        processed: usize,
    },
    Done {
        total: f64,
        processed: usize,
    },
}

fn accumulate(team: &Team, index: usize, total: f64, processed: usize) -> Call {
    let Some(player) = team.players.get(index) else {
        return Call::Done { total, processed };
    };
    Call::Accumulate {
        index: index + 1,
        total: total + player_contribution(player),
        processed: processed + 1,
    }
}

// Shared tail of both algorithms: average, then formation and spirit scaling.
fn finish(team: &Team, total: f64, processed: usize) -> Result<f64, PredictError> {
    if processed == 0 {
        return Err(PredictError::InvalidTeam {
            team: team.name.clone(),
        });
    }
    let average = total / processed as f64;
    Ok(average * formation_bonus(&team.formation) * (team.team_spirit / 100.0))
}

pub fn player_contribution(p: &PlayerStats) -> f64 {
    p.shooting * W_SHOOTING
        + p.speed * W_SPEED
        + p.passing * W_PASSING
        + p.dribbling * W_DRIBBLING
        + p.defense * W_DEFENSE
        + p.strength * W_STRENGTH
}

pub fn formation_bonus(formation: &str) -> f64 {
    FORMATION_BONUS
        .iter()
        .find(|(tag, _)| *tag == formation)
        .map(|(_, bonus)| *bonus)
        .unwrap_or(DEFAULT_FORMATION_BONUS)
}
