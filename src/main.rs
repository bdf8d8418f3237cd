use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use crossterm::style::Stylize;
use log::{error, info};

use pes_predictor::config::{AppConfig, TeamSource};
use pes_predictor::demo;
use pes_predictor::input::{load_teams_file, prompt_team, prompt_yes_no};
use pes_predictor::model::MatchInput;
use pes_predictor::predictor::MatchPredictor;
use pes_predictor::report;

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    env_logger::Builder::from_env(env_logger::Env::new().filter_or("PES_LOG", "info"))
        .format_timestamp(None)
        .init();

    let cfg = AppConfig::from_env_and_args(std::env::args().skip(1));
    info!("config: {cfg:?}");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut stdout = io::stdout();
    run(&cfg, &mut reader, &mut stdout)
}

fn run<R: BufRead, W: Write>(cfg: &AppConfig, reader: &mut R, out: &mut W) -> Result<()> {
    let predictor = MatchPredictor::new();

    loop {
        writeln!(out, "{}", "=== PES Match Prediction ===".bold())?;

        let teams = obtain_teams(cfg, reader, out)?;

        writeln!(out, "\n{}", "=== Analysis ===".bold())?;
        match predictor.compare(&teams.team1, &teams.team2) {
            Ok(cmp) => {
                write!(out, "{}", report::render_comparison(&cmp))?;
                if let Some(path) = &cfg.export_path {
                    report::export_json(path, &cmp)
                        .with_context(|| format!("export to {}", path.display()))?;
                    info!("comparison written to {}", path.display());
                }
            }
            Err(err) => {
                error!("prediction failed: {err}");
                writeln!(out, "{}", format!("Prediction failed: {err}").red())?;
            }
        }

        if !cfg.is_interactive() {
            break;
        }
        if !prompt_yes_no(reader, out, "\nPredict again? (y/n): ")? {
            writeln!(out, "Thanks for using the PES match predictor!")?;
            break;
        }
    }
    Ok(())
}

fn obtain_teams<R: BufRead, W: Write>(
    cfg: &AppConfig,
    reader: &mut R,
    out: &mut W,
) -> Result<MatchInput> {
    match &cfg.source {
        TeamSource::File(path) => load_teams_file(path, cfg.roster_size),
        TeamSource::Demo => Ok(demo::random_match(
            &mut rand::thread_rng(),
            cfg.roster_size,
        )),
        TeamSource::Prompt => {
            writeln!(out, "Enter data for both teams.")?;
            writeln!(out, "\nTeam 1:")?;
            let team1 = prompt_team(reader, out, cfg.roster_size)?;
            writeln!(out, "\nTeam 2:")?;
            let team2 = prompt_team(reader, out, cfg.roster_size)?;
            Ok(MatchInput { team1, team2 })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn script_team(name: &str, players: usize, rating: u32) -> String {
        let mut s = format!("{name}\n4-3-3\n100\n");
        for i in 0..players {
            s.push_str(&format!("{name}{i}\n"));
            for _ in 0..6 {
                s.push_str(&format!("{rating}\n"));
            }
        }
        s
    }

    #[test]
    fn interactive_round_prints_table_and_quits() {
        let cfg = AppConfig {
            roster_size: 2,
            source: TeamSource::Prompt,
            export_path: None,
        };
        let script = format!("{}{}n\n", script_team("A", 2, 100), script_team("B", 2, 50));
        let mut reader = Cursor::new(script.into_bytes());
        let mut out = Vec::new();
        run(&cfg, &mut reader, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Predicted score (iterative): 6-3"));
        assert!(text.contains("Predicted score (recursive): 6-3"));
        assert!(text.contains("Thanks for using"));
    }

    #[test]
    fn zero_strength_match_is_reported_not_fatal() {
        let cfg = AppConfig {
            roster_size: 1,
            source: TeamSource::Prompt,
            export_path: None,
        };
        let script = format!("{}{}n\n", script_team("A", 1, 0), script_team("B", 1, 0));
        let mut reader = Cursor::new(script.into_bytes());
        let mut out = Vec::new();
        run(&cfg, &mut reader, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Undefined win probability"));
    }

    #[test]
    fn demo_round_runs_once_without_prompting() {
        let cfg = AppConfig {
            roster_size: 11,
            source: TeamSource::Demo,
            export_path: None,
        };
        let mut reader = Cursor::new(Vec::new());
        let mut out = Vec::new();
        run(&cfg, &mut reader, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Predicted score (iterative): "));
        assert!(text.contains("Players processed: 22 (iterative), 22 (recursive)"));
        assert!(!text.contains("Predict again"));
    }
}
