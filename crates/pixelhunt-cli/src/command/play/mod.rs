use std::path::PathBuf;

use anyhow::Context as _;
use pixelhunt_engine::RoundTimer;

use crate::{command::play::app::PlayApp, tui::Tui};

mod app;
mod screens;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Path to the round catalog file
    #[clap(long, default_value = "./data/catalog.json")]
    catalog: PathBuf,
    /// Path to the session history file
    #[clap(long, default_value = "./data/history.json")]
    history: PathBuf,
    /// Seconds on the clock for each round
    #[clap(long, default_value_t = 30)]
    round_seconds: i64,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self {
            catalog: PathBuf::from("./data/catalog.json"),
            history: PathBuf::from("./data/history.json"),
            round_seconds: 30,
        }
    }
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        catalog,
        history,
        round_seconds,
    } = arg;

    let round_timer = RoundTimer::try_from_secs(*round_seconds)
        .context("invalid --round-seconds value")?;

    let mut app = PlayApp::new(catalog.clone(), history.clone(), round_timer.remaining());
    Tui::new().run(&mut app)?;
    Ok(())
}
