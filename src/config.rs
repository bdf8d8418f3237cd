use std::env;
use std::path::PathBuf;

use crate::model::DEFAULT_ROSTER_SIZE;

const MAX_ROSTER_SIZE: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamSource {
    Prompt,
    File(PathBuf),
    Demo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub roster_size: usize,
    pub source: TeamSource,
    pub export_path: Option<PathBuf>,
}

impl AppConfig {
    /// Environment first, then command-line arguments on top.
    pub fn from_env_and_args(args: impl IntoIterator<Item = String>) -> Self {
        Self::resolve(|key| env::var(key).ok(), args)
    }

    fn resolve(
        lookup: impl Fn(&str) -> Option<String>,
        args: impl IntoIterator<Item = String>,
    ) -> Self {
        let opt = |key: &str| lookup(key).filter(|val| !val.trim().is_empty());

        let roster_size = opt("PES_ROSTER_SIZE")
            .and_then(|val| val.trim().parse::<usize>().ok())
            .unwrap_or(DEFAULT_ROSTER_SIZE)
            .clamp(1, MAX_ROSTER_SIZE);

        let mut source = match opt("PES_TEAMS_FILE") {
            Some(path) => TeamSource::File(PathBuf::from(path)),
            None => TeamSource::Prompt,
        };
        for arg in args {
            if arg == "--demo" {
                source = TeamSource::Demo;
            } else if !arg.starts_with('-') {
                source = TeamSource::File(PathBuf::from(arg));
            }
        }

        Self {
            roster_size,
            source,
            export_path: opt("PES_EXPORT_FILE").map(PathBuf::from),
        }
    }

    pub fn is_interactive(&self) -> bool {
        self.source == TeamSource::Prompt
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn resolve(vars: &[(&str, &str)], args: &[&str]) -> AppConfig {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::resolve(
            |key| map.get(key).cloned(),
            args.iter().map(|a| a.to_string()),
        )
    }

    #[test]
    fn defaults_to_prompting_eleven_players() {
        let cfg = resolve(&[], &[]);
        assert_eq!(cfg.roster_size, 11);
        assert_eq!(cfg.source, TeamSource::Prompt);
        assert!(cfg.export_path.is_none());
        assert!(cfg.is_interactive());
    }

    #[test]
    fn roster_size_is_clamped() {
        assert_eq!(resolve(&[("PES_ROSTER_SIZE", "0")], &[]).roster_size, 1);
        assert_eq!(resolve(&[("PES_ROSTER_SIZE", "500")], &[]).roster_size, 30);
        assert_eq!(resolve(&[("PES_ROSTER_SIZE", "5")], &[]).roster_size, 5);
        assert_eq!(resolve(&[("PES_ROSTER_SIZE", "five")], &[]).roster_size, 11);
    }

    #[test]
    fn argument_overrides_teams_file_env() {
        let cfg = resolve(&[("PES_TEAMS_FILE", "env.json")], &["cli.json"]);
        assert_eq!(cfg.source, TeamSource::File(PathBuf::from("cli.json")));

        let cfg = resolve(&[("PES_TEAMS_FILE", "env.json")], &[]);
        assert_eq!(cfg.source, TeamSource::File(PathBuf::from("env.json")));
    }

    #[test]
    fn demo_flag_and_blank_values() {
        let cfg = resolve(&[("PES_TEAMS_FILE", "  "), ("PES_EXPORT_FILE", "out.json")], &["--demo"]);
        assert_eq!(cfg.source, TeamSource::Demo);
        assert_eq!(cfg.export_path, Some(PathBuf::from("out.json")));
    }
}
