use std::fmt;

use rand::{Rng, distr::StandardUniform, prelude::Distribution};
use serde::{Serialize, Serializer};

use super::{BOARD_WIDTH, board::Board};

/// Column of the shape matrix origin for a freshly spawned piece.
#[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub const PIECE_SPAWN_X: i32 = (BOARD_WIDTH / 2) as i32 - 2;
/// Row of the shape matrix origin for a freshly spawned piece.
pub const PIECE_SPAWN_Y: i32 = 0;

/// A falling piece: kind, rotation state and grid position.
///
/// Pieces are plain values. Movement and rotation return new `Piece`s and
/// never look at the board; validity is checked separately with
/// [`Board::is_colliding`].
///
/// # Coordinate System
///
/// - Position is the top-left corner of the piece's 4×4 shape matrix
/// - X increases rightward (columns), Y increases downward (rows)
/// - Coordinates are signed: empty leading columns of a shape may hang over
///   the left wall, and rows above the board are negative
///
/// # Example
///
/// ```
/// use hintris_engine::{Piece, PieceKind};
///
/// let piece = Piece::new(PieceKind::T);
/// let moved = piece.right();
/// let rotated = moved.rotated();
/// assert_eq!(rotated.position().x(), piece.position().x() + 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    position: PiecePosition,
    rotation: PieceRotation,
    kind: PieceKind,
}

impl Serialize for Piece {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Format: "kind#rotation@x,y" (e.g., "S#1@4,18")
        serializer.collect_str(self)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}#{}@{},{}",
            self.kind.as_char(),
            self.rotation.0,
            self.position.x,
            self.position.y
        )
    }
}

impl Piece {
    /// Creates a piece of the given kind in its spawn state.
    #[must_use]
    pub fn new(kind: PieceKind) -> Self {
        Self {
            position: PiecePosition::SPAWN_POSITION,
            rotation: PieceRotation::default(),
            kind,
        }
    }

    #[must_use]
    pub fn with_state(kind: PieceKind, rotation: PieceRotation, position: PiecePosition) -> Self {
        Self {
            position,
            rotation: rotation.normalized(kind),
            kind,
        }
    }

    #[must_use]
    pub fn position(&self) -> PiecePosition {
        self.position
    }

    #[must_use]
    pub fn rotation(&self) -> PieceRotation {
        self.rotation
    }

    #[must_use]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Absolute board coordinates of the piece's occupied cells.
    pub fn occupied_positions(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.kind
            .occupied_positions(self.rotation)
            .map(move |(dx, dy)| (self.position.x + dx, self.position.y + dy))
    }

    #[must_use]
    pub fn shifted(&self, dx: i32, dy: i32) -> Self {
        Self {
            position: self.position.shifted(dx, dy),
            ..*self
        }
    }

    #[must_use]
    pub fn left(&self) -> Self {
        self.shifted(-1, 0)
    }

    #[must_use]
    pub fn right(&self) -> Self {
        self.shifted(1, 0)
    }

    #[must_use]
    pub fn down(&self) -> Self {
        self.shifted(0, 1)
    }

    /// Advances to the next rotation state, wrapping at the kind's state count.
    #[must_use]
    pub fn rotated(&self) -> Self {
        Self {
            rotation: self.rotation.next(self.kind),
            ..*self
        }
    }

    /// Rotates and, if the result collides, tries the wall kicks.
    ///
    /// Returns `None` when the rotated piece collides at every kick offset.
    #[must_use]
    pub fn rotated_with_kick(self, board: &Board) -> Option<Self> {
        let piece = self.rotated();
        if !board.is_colliding(piece) {
            return Some(piece);
        }
        wall_kick(board, piece)
    }

    /// Returns the piece moved straight down as far as it can go.
    #[must_use]
    pub fn simulate_drop_position(&self, board: &Board) -> Self {
        let mut dropped = *self;
        while !board.is_colliding(dropped.down()) {
            dropped = dropped.down();
        }
        dropped
    }
}

/// Attempts a simplified wall kick after a failed rotation.
///
/// This is **not** the Super Rotation System. Only two offsets are tried, in
/// order: one column right, then one column left. There are no per-piece or
/// per-rotation kick tables and no vertical kicks.
fn wall_kick(board: &Board, piece: Piece) -> Option<Piece> {
    [piece.right(), piece.left()]
        .into_iter()
        .find(|kicked| !board.is_colliding(*kicked))
}

/// Position of a piece's 4×4 shape matrix on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PiecePosition {
    x: i32,
    y: i32,
}

impl PiecePosition {
    pub const SPAWN_POSITION: Self = Self::new(PIECE_SPAWN_X, PIECE_SPAWN_Y);

    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn x(self) -> i32 {
        self.x
    }

    #[must_use]
    pub const fn y(self) -> i32 {
        self.y
    }

    #[must_use]
    pub const fn shifted(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Rotation state index of a piece.
///
/// The number of states depends on the piece kind (4 for most pieces, 1 for
/// the O piece); advancing wraps modulo that count.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct PieceRotation(u8);

impl PieceRotation {
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub fn next(self, kind: PieceKind) -> Self {
        Self((self.0 + 1) % kind.rotation_count())
    }

    #[must_use]
    pub fn normalized(self, kind: PieceKind) -> Self {
        Self(self.0 % kind.rotation_count())
    }
}

/// The seven piece kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum PieceKind {
    /// I-piece.
    I = 0,
    /// O-piece.
    O = 1,
    /// T-piece.
    T = 2,
    /// L-piece.
    L = 3,
    /// J-piece.
    J = 4,
    /// S-piece.
    S = 5,
    /// Z-piece.
    Z = 6,
}

impl Distribution<PieceKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceKind {
        PieceKind::ALL[rng.random_range(0..PieceKind::LEN)]
    }
}

impl PieceKind {
    /// Number of piece types (7).
    pub const LEN: usize = 7;

    pub const ALL: [Self; Self::LEN] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

    fn shapes(self) -> &'static [PieceShape] {
        match self {
            PieceKind::I => &I_SHAPES,
            PieceKind::O => &O_SHAPES,
            PieceKind::T => &T_SHAPES,
            PieceKind::L => &L_SHAPES,
            PieceKind::J => &J_SHAPES,
            PieceKind::S => &S_SHAPES,
            PieceKind::Z => &Z_SHAPES,
        }
    }

    /// Number of distinct rotation states of this kind.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn rotation_count(self) -> u8 {
        self.shapes().len() as u8
    }

    /// All rotation states of this kind, in order.
    pub fn rotations(self) -> impl Iterator<Item = PieceRotation> {
        (0..self.rotation_count()).map(PieceRotation)
    }

    /// 4×4 occupancy matrix for the given rotation (taken modulo the state count).
    #[must_use]
    pub fn shape(self, rotation: PieceRotation) -> &'static PieceShape {
        let shapes = self.shapes();
        &shapes[rotation.index() % shapes.len()]
    }

    /// Returns an iterator of occupied `(dx, dy)` offsets within the shape matrix.
    pub fn occupied_positions(self, rotation: PieceRotation) -> impl Iterator<Item = (i32, i32)> {
        self.shape(rotation)
            .iter()
            .zip(0..)
            .flat_map(|(row, dy)| {
                row.iter()
                    .zip(0..)
                    .filter_map(move |(&cell, dx)| cell.then_some((dx, dy)))
            })
    }

    /// Returns the single character representation of this piece kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use hintris_engine::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.as_char(), 'I');
    /// assert_eq!(PieceKind::T.as_char(), 'T');
    /// ```
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::L => 'L',
            PieceKind::J => 'J',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
        }
    }

    /// Parses a piece kind from a single character.
    ///
    /// # Examples
    ///
    /// ```
    /// use hintris_engine::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_char('I'), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_char('X'), None);
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(PieceKind::I),
            'O' => Some(PieceKind::O),
            'T' => Some(PieceKind::T),
            'L' => Some(PieceKind::L),
            'J' => Some(PieceKind::J),
            'S' => Some(PieceKind::S),
            'Z' => Some(PieceKind::Z),
            _ => None,
        }
    }
}

/// Occupancy of a piece within its 4×4 bounding box, indexed `[row][col]`.
pub type PieceShape = [[bool; 4]; 4];

const X: bool = true;
const E: bool = false;
const EEEE: [bool; 4] = [E; 4];

const I_SHAPES: [PieceShape; 4] = [
    [EEEE, [X, X, X, X], EEEE, EEEE],
    [[E, E, X, E], [E, E, X, E], [E, E, X, E], [E, E, X, E]],
    [EEEE, EEEE, [X, X, X, X], EEEE],
    [[E, X, E, E], [E, X, E, E], [E, X, E, E], [E, X, E, E]],
];

const O_SHAPES: [PieceShape; 1] = [[[E, X, X, E], [E, X, X, E], EEEE, EEEE]];

const T_SHAPES: [PieceShape; 4] = [
    [[E, X, E, E], [X, X, X, E], EEEE, EEEE],
    [[E, X, E, E], [E, X, X, E], [E, X, E, E], EEEE],
    [EEEE, [X, X, X, E], [E, X, E, E], EEEE],
    [[E, X, E, E], [X, X, E, E], [E, X, E, E], EEEE],
];

const L_SHAPES: [PieceShape; 4] = [
    [[E, E, X, E], [X, X, X, E], EEEE, EEEE],
    [[E, X, E, E], [E, X, E, E], [E, X, X, E], EEEE],
    [EEEE, [X, X, X, E], [X, E, E, E], EEEE],
    [[X, X, E, E], [E, X, E, E], [E, X, E, E], EEEE],
];

const J_SHAPES: [PieceShape; 4] = [
    [[X, E, E, E], [X, X, X, E], EEEE, EEEE],
    [[E, X, X, E], [E, X, E, E], [E, X, E, E], EEEE],
    [EEEE, [X, X, X, E], [E, E, X, E], EEEE],
    [[E, X, E, E], [E, X, E, E], [X, X, E, E], EEEE],
];

const S_SHAPES: [PieceShape; 4] = [
    [[E, X, X, E], [X, X, E, E], EEEE, EEEE],
    [[E, X, E, E], [E, X, X, E], [E, E, X, E], EEEE],
    [EEEE, [E, X, X, E], [X, X, E, E], EEEE],
    [[X, E, E, E], [X, X, E, E], [E, X, E, E], EEEE],
];

const Z_SHAPES: [PieceShape; 4] = [
    [[X, X, E, E], [E, X, X, E], EEEE, EEEE],
    [[E, E, X, E], [E, X, X, E], [E, X, E, E], EEEE],
    [EEEE, [X, X, E, E], [E, X, X, E], EEEE],
    [[E, X, E, E], [X, X, E, E], [X, E, E, E], EEEE],
];
