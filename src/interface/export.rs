use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::ScoredMenuItem;

/// Round a float to n decimal places.
fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Write ranked results to a CSV file.
pub fn write_csv(results: &[ScoredMenuItem], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["rank", "id", "name", "category", "score", "reason"])?;

    for (i, scored) in results.iter().enumerate() {
        wtr.write_record([
            (i + 1).to_string(),
            scored.item.id.clone(),
            scored.item.name.clone(),
            scored.item.category.clone(),
            format!("{:.2}", scored.score),
            scored.reason.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write ranked results to a JSON file with rounded scores.
pub fn write_json(results: &[ScoredMenuItem], path: &Path) -> Result<()> {
    let rows: Vec<serde_json::Value> = results
        .iter()
        .enumerate()
        .map(|(i, scored)| {
            serde_json::json!({
                "rank": i + 1,
                "id": scored.item.id,
                "name": scored.item.name,
                "emoji": scored.item.emoji,
                "category": scored.item.category,
                "score": round_to(scored.score, 2),
                "reason": scored.reason,
            })
        })
        .collect();

    fs::write(path, serde_json::to_string_pretty(&rows)?)?;
    Ok(())
}
