#[cfg(test)]
use std::collections::VecDeque;

use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;

use crate::PieceKind;

/// Number of upcoming pieces visible in the queue.
pub const NEXT_PIECES_LEN: usize = 3;

/// Upcoming pieces and the hold slot.
///
/// # Randomization
///
/// Every kind is drawn independently and uniformly at random; there is no
/// bag system, so droughts and repeats are possible. The generator is seeded
/// from the thread RNG and cannot be seeded by callers.
///
/// # Hold
///
/// - At most one kind is held at a time
/// - [`Self::swap_held`] exchanges a kind with the hold slot
///
/// # Example
///
/// ```
/// use hintris_engine::engine::{NEXT_PIECES_LEN, PieceQueue};
///
/// let mut queue = PieceQueue::new();
/// let first = queue.pop_next();
/// assert_eq!(queue.next_pieces().count(), NEXT_PIECES_LEN);
/// ```
#[derive(Debug, Clone)]
pub struct PieceQueue {
    rng: Pcg32,
    next: [PieceKind; NEXT_PIECES_LEN],
    held: Option<PieceKind>,
    #[cfg(test)]
    scripted: VecDeque<PieceKind>,
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl PieceQueue {
    /// Creates a queue filled with three random kinds and an empty hold slot.
    #[must_use]
    pub fn new() -> Self {
        let mut rng = Pcg32::from_rng(&mut rand::rng());
        let next = [rng.random(), rng.random(), rng.random()];
        Self {
            rng,
            next,
            held: None,
            #[cfg(test)]
            scripted: VecDeque::new(),
        }
    }

    /// Creates a queue that yields `kinds` in order before falling back to
    /// random kinds.
    #[cfg(test)]
    pub(crate) fn scripted(kinds: &[PieceKind]) -> Self {
        let mut queue = Self::new();
        queue.scripted.extend(kinds.iter().copied());
        for slot in 0..NEXT_PIECES_LEN {
            queue.next[slot] = queue.draw();
        }
        queue
    }

    fn draw(&mut self) -> PieceKind {
        #[cfg(test)]
        if let Some(kind) = self.scripted.pop_front() {
            return kind;
        }
        self.rng.random()
    }

    /// Takes the front of the queue and appends a freshly drawn kind.
    pub fn pop_next(&mut self) -> PieceKind {
        let front = self.next[0];
        self.next.rotate_left(1);
        self.next[NEXT_PIECES_LEN - 1] = self.draw();
        front
    }

    /// Returns the upcoming kinds, front first.
    pub fn next_pieces(&self) -> impl Iterator<Item = PieceKind> + '_ {
        self.next.iter().copied()
    }

    #[must_use]
    pub fn held_piece(&self) -> Option<PieceKind> {
        self.held
    }

    /// Puts `current` into the hold slot and returns the kind that was there.
    pub fn swap_held(&mut self, current: PieceKind) -> Option<PieceKind> {
        self.held.replace(current)
    }
}
