use std::{fmt, str::FromStr};

use arrayvec::ArrayVec;
use serde::{Serialize, Serializer, ser::SerializeSeq as _};

use super::{
    BOARD_HEIGHT, BOARD_WIDTH, collision,
    piece::{Piece, PieceKind},
};

/// A single cell of the board.
///
/// The piece kind of a filled cell is only a color tag for renderers; all
/// game rules treat any non-empty cell the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Block {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell filled by a locked piece of a specific type.
    Piece(PieceKind),
}

impl Block {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Block::Empty
    }

    #[must_use]
    pub fn is_filled(self) -> bool {
        !self.is_empty()
    }

    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Block::Empty => '.',
            Block::Piece(kind) => kind.as_char(),
        }
    }
}

/// A single row of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardRow {
    cells: [Block; BOARD_WIDTH],
}

impl BoardRow {
    pub const EMPTY: Self = BoardRow {
        cells: [Block::Empty; BOARD_WIDTH],
    };

    #[must_use]
    pub fn cells(&self) -> &[Block; BOARD_WIDTH] {
        &self.cells
    }

    /// A row is full when every cell is filled.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(|b| b.is_filled())
    }

    #[must_use]
    pub fn is_cell_occupied(&self, x: usize) -> bool {
        self.cells[x].is_filled()
    }
}

/// Row indices of full rows, listed bottom to top.
pub type FullRows = ArrayVec<usize, BOARD_HEIGHT>;

/// The 20×10 playfield.
///
/// Row 0 is the top of the board and row `HEIGHT - 1` the bottom. The
/// dimensions never change; rows are only ever replaced whole.
///
/// # Example
///
/// ```
/// use hintris_engine::{Board, Piece, PieceKind};
///
/// let mut board = Board::EMPTY;
/// let piece = Piece::new(PieceKind::O).simulate_drop_position(&board);
/// board.fill_piece(piece);
/// assert_eq!(board.occupied_count(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: [BoardRow; BOARD_HEIGHT],
}

impl Default for Board {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Board {
    pub const WIDTH: usize = BOARD_WIDTH;
    pub const HEIGHT: usize = BOARD_HEIGHT;

    pub const EMPTY: Self = Self {
        rows: [BoardRow::EMPTY; BOARD_HEIGHT],
    };

    /// Converts signed coordinates into grid indices, if they lie on the board.
    #[must_use]
    pub fn cell_index(x: i32, y: i32) -> Option<(usize, usize)> {
        let x = usize::try_from(x).ok().filter(|x| *x < Self::WIDTH)?;
        let y = usize::try_from(y).ok().filter(|y| *y < Self::HEIGHT)?;
        Some((x, y))
    }

    /// Returns an iterator over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &BoardRow> {
        self.rows.iter()
    }

    #[must_use]
    pub fn block(&self, x: usize, y: usize) -> Block {
        self.rows[y].cells[x]
    }

    #[must_use]
    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        self.rows[y].is_cell_occupied(x)
    }

    pub fn set_block(&mut self, x: usize, y: usize, block: Block) {
        self.rows[y].cells[x] = block;
    }

    /// Number of filled cells on the board.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.cells.iter())
            .filter(|b| b.is_filled())
            .count()
    }

    /// Checks whether the piece overlaps filled cells or leaves the board.
    ///
    /// See [`collision::collides`] for the exact rule.
    #[must_use]
    pub fn is_colliding(&self, piece: Piece) -> bool {
        let position = piece.position();
        collision::collides(
            self,
            piece.kind(),
            piece.rotation(),
            position.x(),
            position.y(),
        )
    }

    /// Writes the piece's cells into the board, tagged with its kind.
    ///
    /// Cells outside the grid (typically rows above the top) are dropped.
    pub fn fill_piece(&mut self, piece: Piece) {
        for (x, y) in piece.occupied_positions() {
            if let Some((x, y)) = Self::cell_index(x, y) {
                self.rows[y].cells[x] = Block::Piece(piece.kind());
            }
        }
    }

    /// Indices of all full rows, scanned from the bottom row upward.
    #[must_use]
    pub fn full_rows(&self) -> FullRows {
        (0..Self::HEIGHT)
            .rev()
            .filter(|y| self.rows[*y].is_filled())
            .collect()
    }

    /// Removes the given rows and inserts as many empty rows at the top.
    ///
    /// The relative order of all remaining rows is preserved. Indices may be
    /// given in any order; out-of-range indices are ignored.
    pub fn remove_rows(&mut self, rows: &[usize]) {
        let mut write = Self::HEIGHT;
        for read in (0..Self::HEIGHT).rev() {
            if rows.contains(&read) {
                continue;
            }
            write -= 1;
            self.rows[write] = self.rows[read];
        }
        self.rows[..write].fill(BoardRow::EMPTY);
    }

    /// Creates a board from ASCII art, for fixtures and tests.
    ///
    /// See the [`FromStr`] implementation for the accepted format.
    ///
    /// # Panics
    ///
    /// Panics if the art is malformed.
    #[must_use]
    pub fn from_ascii(art: &str) -> Self {
        match art.parse() {
            Ok(board) => board,
            Err(e) => panic!("invalid board art: {e}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    #[display("row {row} has {len} cells, expected {}", Board::WIDTH)]
    RowWidth { row: usize, len: usize },
    #[display("board has {rows} rows, at most {} allowed", Board::HEIGHT)]
    TooManyRows { rows: usize },
    #[display("invalid cell {cell:?} in row {row}")]
    InvalidCell { row: usize, cell: char },
}

/// Parses ASCII art such as:
///
/// ```text
/// ..........
/// .#....T...
/// ##IIII###.
/// ```
///
/// `.` is an empty cell, `#` a filled cell (tagged as an I piece), and a
/// piece letter a filled cell of that kind. Whitespace is ignored and blank
/// lines are skipped. When fewer than 20 rows are given they are aligned to
/// the bottom of the board.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(art: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = art
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.len() > Self::HEIGHT {
            return Err(ParseBoardError::TooManyRows { rows: lines.len() });
        }

        let mut board = Self::EMPTY;
        let offset = Self::HEIGHT - lines.len();
        for (i, line) in lines.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != Self::WIDTH {
                return Err(ParseBoardError::RowWidth {
                    row: i,
                    len: cells.len(),
                });
            }
            for (x, &cell) in cells.iter().enumerate() {
                let block = match cell {
                    '.' => Block::Empty,
                    '#' => Block::Piece(PieceKind::I),
                    c => PieceKind::from_char(c)
                        .map(Block::Piece)
                        .ok_or(ParseBoardError::InvalidCell { row: i, cell: c })?,
                };
                board.rows[offset + i].cells[x] = block;
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for cell in &row.cells {
                write!(f, "{}", cell.as_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Format: one string per row, top to bottom (e.g., "....TT....")
        let mut seq = serializer.serialize_seq(Some(Self::HEIGHT))?;
        for row in &self.rows {
            let line: String = row.cells.iter().map(|b| b.as_char()).collect();
            seq.serialize_element(&line)?;
        }
        seq.end()
    }
}
