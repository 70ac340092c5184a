use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tracing::{Level, debug};
use tracing_subscriber::{filter::LevelFilter, prelude::*};

use self::{autoplay::AutoplayArg, hint::HintArg};

mod autoplay;
mod hint;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Increase log verbosity (-v = INFO, -vv = DEBUG, -vvv = TRACE)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play a headless game steered by the hint engine
    Autoplay(#[clap(flatten)] AutoplayArg),
    /// Suggest placements for a piece on a board read from an ASCII file
    Hint(#[clap(flatten)] HintArg),
}

/// How results are written.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human readable board and counters
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(LevelFilter::from_level(level))
        .init();
    debug!(%level, "logging initialized");
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_logging(args.verbose);
    match args.mode {
        Mode::Autoplay(arg) => autoplay::run(&arg)?,
        Mode::Hint(arg) => hint::run(&arg)?,
    }
    Ok(())
}
