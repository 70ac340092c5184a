use std::{
    fmt::{self, Write as _},
    path::PathBuf,
    time::Duration,
};

use hintris_engine::{GameSession, GameSnapshot};
use hintris_evaluator::{
    autoplay::{Autoplay, AutoplaySummary},
    hint_engine::HintEngine,
};
use serde::Serialize;
use tracing::info;

use super::OutputFormat;
use crate::util::Output;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct AutoplayArg {
    /// Stop after this many pieces have been locked
    #[arg(long, default_value_t = 500)]
    pieces: usize,
    /// Simulated time between placements, in milliseconds
    #[arg(long, default_value_t = 16)]
    frame_ms: u64,
    /// Output format
    #[arg(long, value_enum, default_value_t)]
    format: OutputFormat,
    /// Output file path (stdout if omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct AutoplayReport {
    summary: AutoplaySummary,
    final_state: GameSnapshot,
}

pub(crate) fn run(arg: &AutoplayArg) -> anyhow::Result<()> {
    let AutoplayArg {
        pieces,
        frame_ms,
        format,
        output,
    } = arg;

    let engine = HintEngine::default();
    let autoplay = Autoplay::new(&engine, Duration::from_millis(*frame_ms));
    let mut session = GameSession::new();
    let summary = autoplay.run(&mut session, *pieces);
    info!(
        pieces = summary.pieces,
        score = summary.score,
        lines = summary.lines,
        "autoplay complete"
    );

    let report = AutoplayReport {
        summary,
        final_state: session.snapshot(),
    };
    let mut output = Output::from_output_path(output.as_deref())?;
    match format {
        OutputFormat::Json => output.write_json(&report)?,
        OutputFormat::Text => output.write_text(&render_text(&report)?)?,
    }
    Ok(())
}

fn render_text(report: &AutoplayReport) -> Result<String, fmt::Error> {
    let AutoplaySummary {
        pieces,
        score,
        lines,
        level,
        game_over,
    } = report.summary;
    let result = if game_over {
        "game over"
    } else {
        "piece limit reached"
    };
    let mut text = report.final_state.board.to_string();
    writeln!(text)?;
    writeln!(text, "pieces: {pieces}")?;
    writeln!(text, "score:  {score}")?;
    writeln!(text, "lines:  {lines}")?;
    writeln!(text, "level:  {level}")?;
    writeln!(text, "result: {result}")?;
    Ok(text)
}
