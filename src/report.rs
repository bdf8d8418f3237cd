use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::model::Comparison;

const COL_WIDTHS: [usize; 7] = [6, 14, 10, 22, 22, 22, 22];
const HEADERS: [&str; 7] = [
    "No.",
    "Team",
    "Strength",
    "Win % (iterative)",
    "Win % (recursive)",
    "Time iterative (s)",
    "Time recursive (s)",
];

fn border() -> String {
    let mut line = String::from("+");
    for w in COL_WIDTHS {
        line.push_str(&"-".repeat(w + 2));
        line.push('+');
    }
    line
}

fn row(cells: &[String; 7]) -> String {
    let mut line = String::from("|");
    for (cell, w) in cells.iter().zip(COL_WIDTHS) {
        line.push_str(&format!(" {cell:<w$} |"));
    }
    line
}

/// Side-by-side table of both algorithms' predictions, then the scores.
pub fn render_comparison(cmp: &Comparison) -> String {
    let it = &cmp.iterative;
    let rec = &cmp.recursive;
    let time_it = format!("{:.8}", it.execution_time);
    let time_rec = format!("{:.8}", rec.execution_time);

    let rows = [
        [
            "1".to_string(),
            it.team1_name.clone(),
            format!("{:.2}", it.team1_strength),
            format!("{:.2}%", it.team1_win_prob),
            format!("{:.2}%", rec.team1_win_prob),
            time_it.clone(),
            time_rec.clone(),
        ],
        [
            "2".to_string(),
            it.team2_name.clone(),
            format!("{:.2}", it.team2_strength),
            format!("{:.2}%", it.team2_win_prob()),
            format!("{:.2}%", rec.team2_win_prob()),
            time_it,
            time_rec,
        ],
    ];

    let border = border();
    let mut lines = vec![border.clone(), row(&HEADERS.map(str::to_string)), border.clone()];
    lines.extend(rows.iter().map(row));
    lines.push(border);
    lines.push(String::new());
    lines.push(format!("Predicted score (iterative): {}", it.predicted_score));
    lines.push(format!("Predicted score (recursive): {}", rec.predicted_score));
    lines.push(format!(
        "Players processed: {} (iterative), {} (recursive)",
        it.iterations, rec.iterations
    ));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[derive(Serialize)]
struct ComparisonExport<'a> {
    generated_at: String,
    #[serde(flatten)]
    comparison: &'a Comparison,
}

pub fn comparison_json(cmp: &Comparison) -> Result<String> {
    let export = ComparisonExport {
        generated_at: Utc::now().to_rfc3339(),
        comparison: cmp,
    };
    serde_json::to_string_pretty(&export).context("serialize comparison")
}

/// Writes via a temp file and rename so readers never see a partial file.
pub fn export_json(path: &Path, cmp: &Comparison) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
    }
    let json = comparison_json(cmp)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).context("write comparison export")?;
    fs::rename(&tmp, path).context("swap comparison export")?;
    Ok(())
}
