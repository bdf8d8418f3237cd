use std::fmt;

/// Failures of a single prediction call.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictError {
    /// The roster is empty, so there is nothing to average.
    InvalidTeam { team: String },
    /// Both strengths are zero, so neither side has a share of the total.
    UndefinedProbability { team1: String, team2: String },
}

impl fmt::Display for PredictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictError::InvalidTeam { team } => {
                write!(f, "Invalid team: {team} has no players")
            }
            PredictError::UndefinedProbability { team1, team2 } => write!(
                f,
                "Undefined win probability: {team1} and {team2} have zero combined strength"
            ),
        }
    }
}

impl std::error::Error for PredictError {}
