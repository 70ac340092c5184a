use std::{cell::OnceCell, iter};

use hintris_engine::Board;

const WIDTH: usize = Board::WIDTH;

/// Lazily computed metrics of a board.
///
/// Each metric is computed on first access and cached, so evaluators only
/// pay for what they read.
#[derive(Debug)]
pub struct BoardAnalysis {
    board: Board,
    column_heights: OnceCell<[u8; WIDTH]>,
    column_occupied_cells: OnceCell<[u8; WIDTH]>,
    max_height: OnceCell<u8>,
    total_height: OnceCell<u16>,
    num_holes: OnceCell<u16>,
    bumpiness: OnceCell<u16>,
    completed_rows: OnceCell<u16>,
    contacts: OnceCell<u16>,
}

impl BoardAnalysis {
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            column_heights: OnceCell::new(),
            column_occupied_cells: OnceCell::new(),
            max_height: OnceCell::new(),
            total_height: OnceCell::new(),
            num_holes: OnceCell::new(),
            bumpiness: OnceCell::new(),
            completed_rows: OnceCell::new(),
            contacts: OnceCell::new(),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Height of each column: rows from the topmost filled cell to the
    /// floor, 0 for an empty column.
    #[must_use]
    pub fn column_heights(&self) -> &[u8; WIDTH] {
        self.column_heights.get_or_init(|| {
            let mut column_heights = [0; WIDTH];
            for (x, h) in column_heights.iter_mut().enumerate() {
                let top = self.board.rows().position(|row| row.is_cell_occupied(x));
                let Some(top) = top else {
                    continue;
                };
                *h = u8::try_from(Board::HEIGHT - top).unwrap_or(u8::MAX);
            }
            column_heights
        })
    }

    #[must_use]
    pub fn column_occupied_cells(&self) -> &[u8; WIDTH] {
        self.column_occupied_cells.get_or_init(|| {
            let mut column_occupied_cells = [0; WIDTH];
            for row in self.board.rows() {
                for (x, o) in column_occupied_cells.iter_mut().enumerate() {
                    if row.is_cell_occupied(x) {
                        *o += 1;
                    }
                }
            }
            column_occupied_cells
        })
    }

    #[must_use]
    pub fn max_height(&self) -> u8 {
        *self
            .max_height
            .get_or_init(|| self.column_heights().iter().copied().max().unwrap_or(0))
    }

    #[must_use]
    pub fn total_height(&self) -> u16 {
        *self
            .total_height
            .get_or_init(|| self.column_heights().iter().copied().map(u16::from).sum())
    }

    /// Empty cells lying below the topmost filled cell of their column.
    #[must_use]
    pub fn num_holes(&self) -> u16 {
        *self.num_holes.get_or_init(|| {
            iter::zip(self.column_heights(), self.column_occupied_cells())
                .map(|(h, occ)| u16::from(h - occ))
                .sum()
        })
    }

    /// Sum of absolute height differences between adjacent columns.
    #[must_use]
    pub fn bumpiness(&self) -> u16 {
        *self.bumpiness.get_or_init(|| {
            self.column_heights()
                .windows(2)
                .map(|w| u16::from(w[0].abs_diff(w[1])))
                .sum()
        })
    }

    /// Rows that are entirely filled (not yet cleared).
    #[must_use]
    pub fn completed_rows(&self) -> u16 {
        *self.completed_rows.get_or_init(|| {
            let full = self.board.rows().filter(|row| row.is_filled()).count();
            u16::try_from(full).unwrap_or(u16::MAX)
        })
    }

    /// Number of filled-cell faces resting against something.
    ///
    /// For each filled cell, one contact each for: the cell below is filled
    /// or is the floor, the cell to the left is filled or is the wall, the
    /// cell to the right is filled or is the wall.
    #[must_use]
    pub fn contacts(&self) -> u16 {
        *self.contacts.get_or_init(|| {
            let filled = |x: usize, y: usize| self.board.is_occupied(x, y);
            let mut contacts = 0;
            for y in 0..Board::HEIGHT {
                for x in 0..WIDTH {
                    if !filled(x, y) {
                        continue;
                    }
                    if y + 1 == Board::HEIGHT || filled(x, y + 1) {
                        contacts += 1;
                    }
                    if x == 0 || filled(x - 1, y) {
                        contacts += 1;
                    }
                    if x + 1 == WIDTH || filled(x + 1, y) {
                        contacts += 1;
                    }
                }
            }
            contacts
        })
    }
}
