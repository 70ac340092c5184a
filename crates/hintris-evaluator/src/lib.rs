//! Placement search behind the hint system.
//!
//! # Architecture
//!
//! ```text
//! Autoplay (drive a session headlessly)
//!     ↓ uses
//! HintEngine (search every landing spot, keep the best)
//!     ↓ uses
//! BoardEvaluator (score one board)
//!     ↓ reads
//! BoardAnalysis (lazy board metrics)
//! ```
//!
//! - [`board_analysis`] - heights, holes, bumpiness, completed rows and
//!   contacts, computed on demand
//! - [`placement_analysis`] - a board with a candidate piece stamped in
//! - [`board_evaluator`] - the [`BoardEvaluator`](board_evaluator::BoardEvaluator)
//!   trait and the five-term [`HeuristicEvaluator`](board_evaluator::HeuristicEvaluator)
//! - [`hint_engine`] - [`HintEngine`](hint_engine::HintEngine), which
//!   implements [`hintris_engine::HintProvider`] for sessions
//! - [`autoplay`] - steers pieces to the engine's placements
//!
//! # Example
//!
//! ```
//! use hintris_engine::GameSession;
//! use hintris_evaluator::hint_engine::HintEngine;
//!
//! let engine = HintEngine::default();
//! let mut session = GameSession::new();
//! session.start();
//!
//! let placement = session.request_hint(&engine).unwrap();
//! assert!(placement.is_some());
//! assert_eq!(session.hints_remaining(), 4);
//! ```

pub mod autoplay;
pub mod board_analysis;
pub mod board_evaluator;
pub mod hint_engine;
pub mod placement_analysis;
