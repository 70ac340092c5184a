use crate::{
    ActionError, HoldError, PieceCollisionError,
    core::{
        board::Board,
        piece::{Piece, PieceKind},
    },
};

use super::piece_queue::PieceQueue;

/// Board, falling piece, upcoming pieces and the hold slot.
///
/// `GameField` applies the piece rules but knows nothing about scoring or
/// session state. Every mutation is validated against the board with
/// [`Board::is_colliding`]; a rejected command leaves the field unchanged.
///
/// The falling piece is absent between a lock and the next spawn, and after
/// a spawn collided (block-out).
#[derive(Debug, Clone)]
pub struct GameField {
    board: Board,
    falling_piece: Option<Piece>,
    queue: PieceQueue,
    can_hold: bool,
}

impl Default for GameField {
    fn default() -> Self {
        Self::new()
    }
}

impl GameField {
    /// Creates an empty field with the first piece already spawned.
    #[must_use]
    pub fn new() -> Self {
        Self::with_queue(PieceQueue::new())
    }

    #[cfg(test)]
    pub(crate) fn scripted(kinds: &[PieceKind]) -> Self {
        Self::with_queue(PieceQueue::scripted(kinds))
    }

    fn with_queue(queue: PieceQueue) -> Self {
        let mut field = Self {
            board: Board::EMPTY,
            falling_piece: None,
            queue,
            can_hold: true,
        };
        // the first piece always fits on an empty board
        let _ = field.spawn();
        field
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[must_use]
    pub fn falling_piece(&self) -> Option<Piece> {
        self.falling_piece
    }

    #[must_use]
    pub fn held_piece(&self) -> Option<PieceKind> {
        self.queue.held_piece()
    }

    pub fn next_pieces(&self) -> impl Iterator<Item = PieceKind> + '_ {
        self.queue.next_pieces()
    }

    /// Whether hold may still be used during the current piece-life.
    #[must_use]
    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    /// Row the falling piece would land on if hard-dropped.
    #[must_use]
    pub fn ghost_y(&self) -> Option<i32> {
        self.falling_piece
            .map(|piece| piece.simulate_drop_position(&self.board).position().y())
    }

    /// Spawns the front of the queue at the spawn position and re-enables hold.
    ///
    /// On collision the field is left without a falling piece (block-out).
    pub fn spawn(&mut self) -> Result<(), PieceCollisionError> {
        let piece = Piece::new(self.queue.pop_next());
        self.can_hold = true;
        if self.board.is_colliding(piece) {
            self.falling_piece = None;
            return Err(PieceCollisionError);
        }
        self.falling_piece = Some(piece);
        Ok(())
    }

    fn current(&self) -> Result<Piece, ActionError> {
        self.falling_piece.ok_or(ActionError::NoFallingPiece)
    }

    /// Replaces the falling piece if the new one fits.
    pub fn set_falling_piece(&mut self, piece: Piece) -> Result<(), PieceCollisionError> {
        if self.board.is_colliding(piece) {
            return Err(PieceCollisionError);
        }
        self.falling_piece = Some(piece);
        Ok(())
    }

    pub fn try_move(&mut self, dx: i32) -> Result<(), ActionError> {
        let piece = self.current()?.shifted(dx, 0);
        Ok(self.set_falling_piece(piece)?)
    }

    /// Rotates one step, trying the right and left kicks before giving up.
    pub fn try_rotate(&mut self) -> Result<(), ActionError> {
        let piece = self
            .current()?
            .rotated_with_kick(&self.board)
            .ok_or(PieceCollisionError)?;
        self.falling_piece = Some(piece);
        Ok(())
    }

    /// Moves the falling piece one row down.
    ///
    /// Fails with [`ActionError::Collision`] when the piece rests on
    /// something; the caller then locks it.
    pub fn try_soft_drop(&mut self) -> Result<(), ActionError> {
        let piece = self.current()?.down();
        Ok(self.set_falling_piece(piece)?)
    }

    /// Moves the falling piece to its landing row and returns the rows travelled.
    pub fn drop_to_bottom(&mut self) -> Result<usize, ActionError> {
        let piece = self.current()?;
        let dropped = piece.simulate_drop_position(&self.board);
        self.falling_piece = Some(dropped);
        let rows = dropped.position().y() - piece.position().y();
        Ok(usize::try_from(rows).unwrap_or_default())
    }

    /// Sets the falling piece aside.
    ///
    /// With an empty hold slot the current kind is stored and the next piece
    /// spawns; hold stays used for that new piece. Otherwise the kinds are
    /// swapped and the held kind restarts in its spawn state. A swapped piece
    /// that would collide at spawn rejects the hold. A spawned piece that
    /// collides is a block-out and leaves the field without a falling piece.
    pub fn try_hold(&mut self) -> Result<(), HoldError> {
        if !self.can_hold {
            return Err(HoldError::HoldAlreadyUsed);
        }
        let current = self.falling_piece.ok_or(HoldError::NoFallingPiece)?;

        if let Some(held) = self.queue.held_piece() {
            let swapped = Piece::new(held);
            if self.board.is_colliding(swapped) {
                return Err(HoldError::PieceCollision(PieceCollisionError));
            }
            self.queue.swap_held(current.kind());
            self.falling_piece = Some(swapped);
            self.can_hold = false;
            return Ok(());
        }

        self.queue.swap_held(current.kind());
        let spawned = self.spawn();
        self.can_hold = false;
        spawned.map_err(HoldError::PieceCollision)
    }

    /// Writes the falling piece into the board and returns it.
    ///
    /// Cells above the top of the board are discarded.
    pub fn lock_falling_piece(&mut self) -> Option<Piece> {
        let piece = self.falling_piece.take()?;
        self.board.fill_piece(piece);
        Some(piece)
    }
}
