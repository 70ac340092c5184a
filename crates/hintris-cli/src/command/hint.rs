use std::{
    fmt::{self, Write as _},
    path::PathBuf,
};

use anyhow::bail;
use hintris_engine::{Board, PieceKind};
use hintris_evaluator::{
    board_evaluator::{EvaluationBreakdown, HeuristicEvaluator},
    hint_engine::{HintEngine, ScoredPlacement},
    placement_analysis::PlacementAnalysis,
};
use serde::Serialize;
use tracing::debug;

use super::OutputFormat;
use crate::util::{self, Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct HintArg {
    /// Board file: 10 columns per line, `.` empty, `#` or a piece letter filled
    board: PathBuf,
    /// Piece to place (I, O, T, L, J, S or Z)
    #[arg(long, value_parser = util::parse_piece_kind)]
    piece: PieceKind,
    /// Number of ranked placements to report
    #[arg(long, default_value_t = 1)]
    top: usize,
    /// Output format
    #[arg(long, value_enum, default_value_t)]
    format: OutputFormat,
    /// Output file path (stdout if omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct RankedHint {
    rank: usize,
    #[serde(flatten)]
    scored: ScoredPlacement,
    breakdown: EvaluationBreakdown,
    board: Board,
}

pub(crate) fn run(arg: &HintArg) -> anyhow::Result<()> {
    let HintArg {
        board,
        piece,
        top,
        format,
        output,
    } = arg;

    let board = util::read_board_file(board)?;
    let engine = HintEngine::default();
    let ranked = engine.rank(&board, *piece);
    if ranked.is_empty() {
        bail!("{piece:?} piece fits nowhere on this board");
    }
    debug!(candidates = ranked.len(), "placements ranked");

    let hints: Vec<_> = ranked
        .into_iter()
        .take(*top)
        .enumerate()
        .map(|(i, scored)| {
            let analysis = PlacementAnalysis::from_board(&board, scored.placement.to_piece(*piece));
            RankedHint {
                rank: i + 1,
                scored,
                breakdown: HeuristicEvaluator.breakdown(analysis.board_analysis()),
                board: analysis.board_analysis().board().clone(),
            }
        })
        .collect();

    let mut output = Output::from_output_path(output.as_deref())?;
    match format {
        OutputFormat::Json => output.write_json(&hints)?,
        OutputFormat::Text => output.write_text(&render_text(&hints)?)?,
    }
    Ok(())
}

fn render_text(hints: &[RankedHint]) -> Result<String, fmt::Error> {
    let mut text = String::new();
    for hint in hints {
        let ScoredPlacement { placement, score } = hint.scored;
        let EvaluationBreakdown {
            height,
            holes,
            completed_rows,
            bumpiness,
            contacts,
        } = hint.breakdown;
        writeln!(
            text,
            "#{} x={} y={} rotation={} score={score}",
            hint.rank,
            placement.x,
            placement.y,
            placement.rotation.index(),
        )?;
        writeln!(
            text,
            "  height={height} holes={holes} completed_rows={completed_rows} \
             bumpiness={bumpiness} contacts={contacts}"
        )?;
        writeln!(text, "{}", hint.board)?;
    }
    Ok(text)
}
