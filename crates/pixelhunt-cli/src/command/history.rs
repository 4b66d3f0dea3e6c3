use std::path::PathBuf;

use anyhow::Context as _;
use pixelhunt_catalog::{HistoryStore, SessionRecord};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct HistoryArg {
    /// Path to the session history file
    #[clap(long, default_value = "./data/history.json")]
    history: PathBuf,
}

impl Default for HistoryArg {
    fn default() -> Self {
        Self {
            history: PathBuf::from("./data/history.json"),
        }
    }
}

pub(crate) fn run(arg: &HistoryArg) -> anyhow::Result<()> {
    let store = HistoryStore::new(arg.history.clone());
    let records = store
        .load()
        .with_context(|| format!("failed to load history from {}", arg.history.display()))?;

    if records.is_empty() {
        println!("No past sessions in {}", arg.history.display());
        return Ok(());
    }

    // Descending by score; the stable sort keeps arrival order for ties.
    // Sessions without a winning score sink to the bottom.
    let mut ranked: Vec<&SessionRecord> = records.iter().collect();
    ranked.sort_by_key(|record| std::cmp::Reverse(record.score().unwrap_or(i32::MIN)));

    for (position, record) in ranked.iter().enumerate() {
        let score = record
            .score()
            .map_or_else(|| "fail".to_owned(), |points| points.to_string());
        println!(
            "{:>3}. {:<20} {:>6}  {}",
            position + 1,
            record.player_name,
            score,
            record.recorded_at.format("%Y-%m-%d %H:%M"),
        );
    }
    Ok(())
}
