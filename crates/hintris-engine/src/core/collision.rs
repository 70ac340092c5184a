//! The collision rule shared by movement, rotation, drops and the hint search.

use super::{
    board::Board,
    piece::{PieceKind, PieceRotation},
};

#[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
const WIDTH: i32 = Board::WIDTH as i32;
#[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
const HEIGHT: i32 = Board::HEIGHT as i32;

/// Tests whether a piece with its shape origin at `(x, y)` is illegal.
///
/// A cell collides when it lies outside `0..WIDTH` horizontally, at or below
/// the floor (`y >= HEIGHT`), or on a filled board cell. Cells above the top
/// of the board (`y < 0`) are only checked against the side walls, so pieces
/// may hang partially above the visible grid.
#[must_use]
pub fn collides(board: &Board, kind: PieceKind, rotation: PieceRotation, x: i32, y: i32) -> bool {
    kind.occupied_positions(rotation).any(|(dx, dy)| {
        let (cx, cy) = (x + dx, y + dy);
        if !(0..WIDTH).contains(&cx) || cy >= HEIGHT {
            return true;
        }
        Board::cell_index(cx, cy).is_some_and(|(cx, cy)| board.is_occupied(cx, cy))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board::Block;

    /// Reference rule written against raw cell coordinates.
    fn expected_collision(board: &Board, kind: PieceKind, rotation: PieceRotation, x: i32, y: i32) -> bool {
        let shape = kind.shape(rotation);
        for (row, cells) in shape.iter().enumerate() {
            for (col, &occupied) in cells.iter().enumerate() {
                if !occupied {
                    continue;
                }
                let cx = x + i32::try_from(col).unwrap();
                let cy = y + i32::try_from(row).unwrap();
                if cx < 0 || cx >= WIDTH || cy >= HEIGHT {
                    return true;
                }
                if cy >= 0
                    && board.block(usize::try_from(cx).unwrap(), usize::try_from(cy).unwrap())
                        != Block::Empty
                {
                    return true;
                }
            }
        }
        false
    }

    fn sample_boards() -> Vec<Board> {
        vec![
            Board::EMPTY,
            Board::from_ascii(
                "
                .....#....
                ..#..#..#.
                #.#.###.##
                ##########
                ",
            ),
            Board::from_ascii(
                "
                #.........
                #........#
                ##......##
                ###....###
                ####..####
                ",
            ),
        ]
    }

    #[test]
    fn test_collides_matches_cell_rule_exhaustively() {
        for board in sample_boards() {
            for kind in PieceKind::ALL {
                for rotation in kind.rotations() {
                    for x in -4..=WIDTH + 1 {
                        for y in -4..=HEIGHT + 1 {
                            assert_eq!(
                                collides(&board, kind, rotation, x, y),
                                expected_collision(&board, kind, rotation, x, y),
                                "{kind:?} rotation {rotation:?} at ({x}, {y})",
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_cells_above_top_still_hit_side_walls() {
        let board = Board::EMPTY;
        // vertical I occupies column x + 2
        let vertical = PieceRotation::new(1);
        assert!(!collides(&board, PieceKind::I, vertical, 0, -3));
        assert!(collides(&board, PieceKind::I, vertical, -3, -3));
        assert!(collides(&board, PieceKind::I, vertical, 8, -3));
    }

    #[test]
    fn test_cells_above_top_ignore_filled_cells() {
        let board = Board::from_ascii(&"##########\n".repeat(Board::HEIGHT));
        let vertical = PieceRotation::new(1);
        assert!(!collides(&board, PieceKind::I, vertical, 0, -4));
        assert!(collides(&board, PieceKind::I, vertical, 0, -3));
    }

    #[test]
    fn test_floor() {
        let board = Board::EMPTY;
        // O occupies rows y and y + 1
        assert!(!collides(&board, PieceKind::O, PieceRotation::default(), 0, 18));
        assert!(collides(&board, PieceKind::O, PieceRotation::default(), 0, 19));
    }
}
