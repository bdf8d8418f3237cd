use rand::Rng;
use rand::seq::SliceRandom;

use crate::model::{FORMATION_BONUS, MatchInput, PlayerStats, Team};

const POSITIONS: [&str; 4] = ["GK", "DF", "MF", "FW"];

pub fn random_team<R: Rng + ?Sized>(rng: &mut R, name: &str, roster_size: usize) -> Team {
    let formation = FORMATION_BONUS
        .choose(rng)
        .map(|(tag, _)| (*tag).to_string())
        .unwrap_or_else(|| "4-4-2".to_string());

    let players = (0..roster_size)
        .map(|i| {
            let mut rating = || (rng.gen_range(40.0..=99.0_f64) * 10.0).round() / 10.0;
            PlayerStats {
                name: format!("{name} {} {}", POSITIONS[i % POSITIONS.len()], i + 1),
                shooting: rating(),
                speed: rating(),
                passing: rating(),
                dribbling: rating(),
                defense: rating(),
                strength: rating(),
            }
        })
        .collect();

    Team {
        name: name.to_string(),
        players,
        formation,
        team_spirit: rng.gen_range(50..=100) as f64,
    }
}

pub fn random_match<R: Rng + ?Sized>(rng: &mut R, roster_size: usize) -> MatchInput {
    MatchInput {
        team1: random_team(rng, "Home XI", roster_size),
        team2: random_team(rng, "Away XI", roster_size),
    }
}

/// Fixed eleven-a-side fixture.
pub fn sample_match() -> MatchInput {
    let squad = |name: &str, base: f64, formation: &str, spirit: f64| Team {
        name: name.to_string(),
        players: (0..11)
            .map(|i| {
                let step = i as f64;
                PlayerStats {
                    name: format!("{name} {}", i + 1),
                    shooting: base + step,
                    speed: base - step,
                    passing: base + step / 2.0,
                    dribbling: base,
                    defense: base - step / 2.0,
                    strength: base + 1.0,
                }
            })
            .collect(),
        formation: formation.to_string(),
        team_spirit: spirit,
    };

    MatchInput {
        team1: squad("Garuda", 78.0, "4-3-3", 90.0),
        team2: squad("Harimau", 74.0, "3-5-2", 85.0),
    }
}
