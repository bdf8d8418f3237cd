use log::info;

use crate::error::PredictError;
use crate::model::{Algorithm, Comparison, PredictionResult, Team};
use crate::strength::{StrengthReading, strength};

// One predicted goal per this much strength.
const STRENGTH_PER_GOAL: f64 = 20.0;
const TIME_DECIMALS: i32 = 8;

/// Combines two teams' strengths into a match prediction.
///
/// Holds no per-call state: every reading carries its own timing and
/// iteration count, so one predictor can serve any number of calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchPredictor;

impl MatchPredictor {
    pub fn new() -> Self {
        Self
    }

    /// Both teams are measured with the same `algorithm`.
    pub fn predict(
        &self,
        team1: &Team,
        team2: &Team,
        algorithm: Algorithm,
    ) -> Result<PredictionResult, PredictError> {
        let r1 = strength(team1, algorithm)?;
        let r2 = strength(team2, algorithm)?;
        let result = combine(team1, team2, algorithm, r1, r2)?;
        info!(
            "{} vs {} ({algorithm}): {:.2}% / {:.2}%, score {}, {} iterations",
            result.team1_name,
            result.team2_name,
            result.team1_win_prob,
            result.team2_win_prob(),
            result.predicted_score,
            result.iterations
        );
        Ok(result)
    }

    /// Runs [`MatchPredictor::predict`] once per algorithm on the same teams.
    pub fn compare(&self, team1: &Team, team2: &Team) -> Result<Comparison, PredictError> {
        Ok(Comparison {
            iterative: self.predict(team1, team2, Algorithm::Iterative)?,
            recursive: self.predict(team1, team2, Algorithm::Recursive)?,
        })
    }
}

fn combine(
    team1: &Team,
    team2: &Team,
    algorithm: Algorithm,
    r1: StrengthReading,
    r2: StrengthReading,
) -> Result<PredictionResult, PredictError> {
    let total = r1.value + r2.value;
    if total == 0.0 || !total.is_finite() {
        return Err(PredictError::UndefinedProbability {
            team1: team1.name.clone(),
            team2: team2.name.clone(),
        });
    }
    let team1_win_prob = r1.value / total * 100.0;

    let execution_time = round_to((r1.elapsed + r2.elapsed).as_secs_f64(), TIME_DECIMALS);

    Ok(PredictionResult {
        algorithm,
        team1_name: team1.name.clone(),
        team2_name: team2.name.clone(),
        team1_strength: r1.value,
        team2_strength: r2.value,
        team1_win_prob,
        predicted_score: format!(
            "{}-{}",
            predicted_goals(r1.value),
            predicted_goals(r2.value)
        ),
        execution_time,
        iterations: r1.iterations + r2.iterations,
    })
}

/// `strength / 20`, rounded half away from zero (2.5 -> 3).
pub fn predicted_goals(strength: f64) -> u32 {
    (strength / STRENGTH_PER_GOAL).round().max(0.0) as u32
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
