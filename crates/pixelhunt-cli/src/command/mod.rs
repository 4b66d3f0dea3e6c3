use clap::{Parser, Subcommand};

use self::{history::HistoryArg, play::PlayArg};

mod history;
mod play;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play a quiz session (the default)
    Play(#[clap(flatten)] PlayArg),
    /// Print past results ranked by score
    History(#[clap(flatten)] HistoryArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Play(PlayArg::default())) {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::History(arg) => history::run(&arg)?,
    }
    Ok(())
}
