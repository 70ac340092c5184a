pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("piece colliding when setting falling piece")]
pub struct PieceCollisionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum HoldError {
    #[display("piece colliding when holding piece")]
    PieceCollision(PieceCollisionError),
    #[display("hold already used in this turn")]
    HoldAlreadyUsed,
    #[display("no falling piece to hold")]
    NoFallingPiece,
}

/// Why a player command was not applied.
///
/// Rejections are ordinary outcomes: the session state is left untouched and
/// the caller may simply treat the command as a no-op.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum ActionError {
    #[display("session is not playing")]
    NotPlaying,
    #[display("line clear in progress")]
    LineClearInProgress,
    #[display("no falling piece")]
    NoFallingPiece,
    #[display("hold already used in this turn")]
    HoldAlreadyUsed,
    #[display("{_0}")]
    Collision(PieceCollisionError),
}

impl From<PieceCollisionError> for ActionError {
    fn from(err: PieceCollisionError) -> Self {
        Self::Collision(err)
    }
}

impl From<HoldError> for ActionError {
    fn from(err: HoldError) -> Self {
        match err {
            HoldError::PieceCollision(err) => Self::Collision(err),
            HoldError::HoldAlreadyUsed => Self::HoldAlreadyUsed,
            HoldError::NoFallingPiece => Self::NoFallingPiece,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum HintError {
    #[display("session is not playing")]
    NotPlaying,
    #[display("line clear in progress")]
    LineClearInProgress,
    #[display("no falling piece")]
    NoFallingPiece,
    #[display("no hints remaining")]
    NoHintsRemaining,
}
