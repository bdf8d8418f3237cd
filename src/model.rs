use std::fmt;

use serde::{Deserialize, Serialize};

pub const DEFAULT_ROSTER_SIZE: usize = 11;
pub const RATING_MIN: f64 = 0.0;
pub const RATING_MAX: f64 = 100.0;

// Formation tag -> strength multiplier. Anything else plays at 1.0.
pub const FORMATION_BONUS: [(&str, f64); 4] = [
    ("4-3-3", 1.1),
    ("4-4-2", 1.0),
    ("5-3-2", 0.9),
    ("3-5-2", 1.05),
];
pub const DEFAULT_FORMATION_BONUS: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub name: String,
    pub shooting: f64,
    pub speed: f64,
    pub passing: f64,
    pub dribbling: f64,
    pub defense: f64,
    pub strength: f64,
}

impl PlayerStats {
    /// Rating fields in display order, paired with their labels.
    pub fn ratings(&self) -> [(&'static str, f64); 6] {
        [
            ("shooting", self.shooting),
            ("speed", self.speed),
            ("passing", self.passing),
            ("dribbling", self.dribbling),
            ("defense", self.defense),
            ("strength", self.strength),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub players: Vec<PlayerStats>,
    pub formation: String,
    pub team_spirit: f64,
}

/// Both sides of one fixture, as read from a teams file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchInput {
    pub team1: Team,
    pub team2: Team,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Iterative,
    Recursive,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Iterative, Algorithm::Recursive];

    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Iterative => "iterative",
            Algorithm::Recursive => "recursive",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub algorithm: Algorithm,
    pub team1_name: String,
    pub team2_name: String,
    pub team1_strength: f64,
    pub team2_strength: f64,
    // Percent, 0..=100.
    pub team1_win_prob: f64,
    pub predicted_score: String,
    // Seconds, rounded to 8 decimals.
    pub execution_time: f64,
    pub iterations: usize,
}

impl PredictionResult {
    pub fn team2_win_prob(&self) -> f64 {
        100.0 - self.team1_win_prob
    }
}

/// One prediction per algorithm, computed on identical inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub iterative: PredictionResult,
    pub recursive: PredictionResult,
}

pub fn is_known_formation(formation: &str) -> bool {
    FORMATION_BONUS.iter().any(|(tag, _)| *tag == formation)
}

pub fn known_formations() -> impl Iterator<Item = &'static str> {
    FORMATION_BONUS.iter().map(|(tag, _)| *tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algorithm_serializes_lowercase() {
        let json = serde_json::to_string(&Algorithm::Recursive).unwrap();
        assert_eq!(json, "\"recursive\"");
        let back: Algorithm = serde_json::from_str("\"iterative\"").unwrap();
        assert_eq!(back, Algorithm::Iterative);
        assert_eq!(Algorithm::Recursive.to_string(), "recursive");
    }

    #[test]
    fn known_formations_match_bonus_table() {
        assert!(is_known_formation("4-3-3"));
        assert!(is_known_formation("3-5-2"));
        assert!(!is_known_formation("2-3-5"));
        assert_eq!(known_formations().count(), 4);
    }

    #[test]
    fn team2_probability_is_complement() {
        let result = PredictionResult {
            algorithm: Algorithm::Iterative,
            team1_name: "A".to_string(),
            team2_name: "B".to_string(),
            team1_strength: 60.0,
            team2_strength: 40.0,
            team1_win_prob: 60.0,
            predicted_score: "3-2".to_string(),
            execution_time: 0.0,
            iterations: 22,
        };
        assert_eq!(result.team1_win_prob + result.team2_win_prob(), 100.0);
    }
}
