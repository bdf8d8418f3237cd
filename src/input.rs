use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::model::{
    MatchInput, PlayerStats, RATING_MAX, RATING_MIN, Team, is_known_formation, known_formations,
};

/// Reads one trimmed line. End of input is an error so prompt loops can't spin.
fn read_line<R: BufRead, W: Write>(reader: &mut R, writer: &mut W, prompt: &str) -> Result<String> {
    write!(writer, "{prompt}")?;
    writer.flush()?;
    let mut line = String::new();
    let n = reader.read_line(&mut line).context("read input")?;
    if n == 0 {
        bail!("input closed while waiting for: {}", prompt.trim());
    }
    Ok(line.trim().to_string())
}

/// Re-prompts until the line is a number inside `[min, max]`.
pub fn prompt_rating<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
    min: f64,
    max: f64,
) -> Result<f64> {
    loop {
        let raw = read_line(reader, writer, prompt)?;
        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() && (min..=max).contains(&value) => return Ok(value),
            Ok(_) => writeln!(writer, "Enter a number between {min} and {max}")?,
            Err(_) => writeln!(writer, "Enter a valid number")?,
        }
    }
}

pub fn prompt_formation<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<String> {
    let options = known_formations().collect::<Vec<_>>().join("/");
    let prompt = format!("Formation ({options}): ");
    loop {
        let raw = read_line(reader, writer, &prompt)?;
        if is_known_formation(&raw) {
            return Ok(raw);
        }
        writeln!(writer, "Invalid formation. Choose one of the listed options.")?;
    }
}

pub fn prompt_player<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    number: usize,
) -> Result<PlayerStats> {
    writeln!(writer, "\nStats for player {number}:")?;
    let name = read_line(reader, writer, "Player name: ")?;
    let mut rating = |label: &str| {
        prompt_rating(
            reader,
            writer,
            &format!("{label} rating (0-100): "),
            RATING_MIN,
            RATING_MAX,
        )
    };
    Ok(PlayerStats {
        name,
        shooting: rating("Shooting")?,
        speed: rating("Speed")?,
        passing: rating("Passing")?,
        dribbling: rating("Dribbling")?,
        defense: rating("Defense")?,
        strength: rating("Strength")?,
    })
}

pub fn prompt_team<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    roster_size: usize,
) -> Result<Team> {
    writeln!(writer, "\n=== Team data ===")?;
    let name = read_line(reader, writer, "Team name: ")?;
    let formation = prompt_formation(reader, writer)?;
    let team_spirit = prompt_rating(
        reader,
        writer,
        "Team spirit (0-100): ",
        RATING_MIN,
        RATING_MAX,
    )?;

    writeln!(writer, "\nEnter stats for {roster_size} players:")?;
    let mut players = Vec::with_capacity(roster_size);
    for number in 1..=roster_size {
        players.push(prompt_player(reader, writer, number)?);
    }

    Ok(Team {
        name,
        players,
        formation,
        team_spirit,
    })
}

pub fn prompt_yes_no<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> Result<bool> {
    let raw = read_line(reader, writer, prompt)?;
    Ok(raw.eq_ignore_ascii_case("y"))
}

pub fn parse_teams_json(raw: &str, roster_size: usize) -> Result<MatchInput> {
    let input: MatchInput = serde_json::from_str(raw).context("parse teams json")?;
    validate_team(&input.team1, roster_size).context("team1")?;
    validate_team(&input.team2, roster_size).context("team2")?;
    Ok(input)
}

pub fn load_teams_file(path: &Path, roster_size: usize) -> Result<MatchInput> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read teams file {}", path.display()))?;
    parse_teams_json(&raw, roster_size)
        .with_context(|| format!("load teams from {}", path.display()))
}

/// Checks for teams that did not come through the prompts: the roster must
/// hold exactly `roster_size` players and every rating must be in range.
/// Formations are not checked; unknown tags play at the default multiplier.
pub fn validate_team(team: &Team, roster_size: usize) -> Result<()> {
    if team.players.is_empty() {
        bail!("{} has no players", team.name);
    }
    if team.players.len() != roster_size {
        bail!(
            "{} has {} players, expected {roster_size}",
            team.name,
            team.players.len()
        );
    }
    check_range(&format!("{} team spirit", team.name), team.team_spirit)?;
    for player in &team.players {
        for (label, value) in player.ratings() {
            check_range(&format!("{} {label}", player.name), value)?;
        }
    }
    Ok(())
}

fn check_range(what: &str, value: f64) -> Result<()> {
    if !value.is_finite() || !(RATING_MIN..=RATING_MAX).contains(&value) {
        bail!("{what} must be between {RATING_MIN} and {RATING_MAX}, got {value}");
    }
    Ok(())
}
