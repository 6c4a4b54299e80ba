// This file is part of the checkora engine.
// Copyright (C) 2026 The checkora developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

//! Movement patterns of each piece type.
//!
//! Each rule only answers whether the displacement from `from` to `to` is
//! one the piece can make on the given board. Turn order and the color of
//! a piece on `to` are checked by [`legality`](crate::legality).

use crate::{
    attacks::{self, Lines},
    board::Board,
    color::Color,
    role::Role,
    square::Square,
    types::Piece,
};

/// Single step onto an empty square, double step from the start row
/// across two empty squares, or a diagonal step onto an occupied square.
/// En passant and promotion are not modeled.
pub fn pawn_move(board: &Board, color: Color, from: Square, to: Square) -> bool {
    let delta = from.delta_to(to);
    let push = attacks::pawn_push(color);

    if delta == push {
        !board.is_occupied(to)
    } else if delta == push * 2 {
        from.row() == color.pawn_start_row()
            && from.offset(push).is_some_and(|mid| !board.is_occupied(mid))
            && !board.is_occupied(to)
    } else if attacks::pawn_captures(color).contains(&delta) {
        board.is_occupied(to)
    } else {
        false
    }
}

pub fn knight_move(from: Square, to: Square) -> bool {
    attacks::KNIGHT.contains(&from.delta_to(to))
}

/// One square in any direction. Castling is not modeled.
pub fn king_move(from: Square, to: Square) -> bool {
    attacks::KING.contains(&from.delta_to(to))
}

pub fn rook_move(board: &Board, from: Square, to: Square) -> bool {
    slide(board, Lines::ORTHOGONAL, from, to)
}

pub fn bishop_move(board: &Board, from: Square, to: Square) -> bool {
    slide(board, Lines::DIAGONAL, from, to)
}

pub fn queen_move(board: &Board, from: Square, to: Square) -> bool {
    rook_move(board, from, to) || bishop_move(board, from, to)
}

fn slide(board: &Board, lines: Lines, from: Square, to: Square) -> bool {
    attacks::ray(from, to).is_some_and(|(line, _)| lines.contains(line))
        && attacks::path_clear(board, from, to)
}

/// Dispatches to the rule for the type of `piece`.
pub fn is_pattern_move(board: &Board, piece: Piece, from: Square, to: Square) -> bool {
    match piece.role {
        Role::Pawn => pawn_move(board, piece.color, from, to),
        Role::Knight => knight_move(from, to),
        Role::Bishop => bishop_move(board, from, to),
        Role::Rook => rook_move(board, from, to),
        Role::Queen => queen_move(board, from, to),
        Role::King => king_move(from, to),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::from_coords(row, col).expect("on board")
    }

    fn targets<F>(rule: F) -> Vec<Square>
    where
        F: Fn(Square) -> bool,
    {
        Square::all().filter(|&to| rule(to)).collect()
    }

    #[test]
    fn test_pawn_pushes() {
        let board = Board::default();
        assert!(pawn_move(&board, Color::White, sq(6, 4), sq(5, 4)));
        assert!(pawn_move(&board, Color::White, sq(6, 4), sq(4, 4)));
        assert!(!pawn_move(&board, Color::White, sq(6, 4), sq(3, 4)));
        assert!(!pawn_move(&board, Color::White, sq(6, 4), sq(7, 4)));
        assert!(pawn_move(&board, Color::Black, sq(1, 3), sq(3, 3)));
        assert!(!pawn_move(&board, Color::Black, sq(1, 3), sq(0, 3)));
    }

    #[test]
    fn test_pawn_double_step_needs_start_row() {
        let mut board = Board::empty();
        board.set_piece_at(sq(5, 4), Color::White.pawn());
        assert!(pawn_move(&board, Color::White, sq(5, 4), sq(4, 4)));
        assert!(!pawn_move(&board, Color::White, sq(5, 4), sq(3, 4)));
    }

    #[test]
    fn test_pawn_blocked() {
        let mut board = Board::default();
        board.set_piece_at(sq(5, 4), Color::Black.knight());
        assert!(!pawn_move(&board, Color::White, sq(6, 4), sq(5, 4)));
        assert!(!pawn_move(&board, Color::White, sq(6, 4), sq(4, 4)));

        let mut board = Board::default();
        board.set_piece_at(sq(4, 4), Color::Black.knight());
        assert!(pawn_move(&board, Color::White, sq(6, 4), sq(5, 4)));
        assert!(!pawn_move(&board, Color::White, sq(6, 4), sq(4, 4)));
    }

    #[test]
    fn test_pawn_captures_need_occupant() {
        let mut board = Board::empty();
        board.set_piece_at(sq(4, 4), Color::Black.pawn());
        board.set_piece_at(sq(5, 3), Color::White.rook());
        assert!(pawn_move(&board, Color::Black, sq(4, 4), sq(5, 3)));
        assert!(!pawn_move(&board, Color::Black, sq(4, 4), sq(5, 5)));
        // Backwards diagonals are never pawn moves.
        board.set_piece_at(sq(3, 3), Color::White.rook());
        assert!(!pawn_move(&board, Color::Black, sq(4, 4), sq(3, 3)));
    }

    #[test]
    fn test_knight() {
        let from = sq(7, 1);
        assert_eq!(
            targets(|to| knight_move(from, to)),
            [sq(5, 0), sq(5, 2), sq(6, 3)]
        );
        assert_eq!(targets(|to| knight_move(sq(4, 4), to)).len(), 8);
    }

    #[test]
    fn test_king() {
        assert_eq!(targets(|to| king_move(sq(4, 4), to)).len(), 8);
        assert_eq!(targets(|to| king_move(sq(0, 0), to)), [sq(0, 1), sq(1, 0), sq(1, 1)]);
        assert!(!king_move(sq(4, 4), sq(4, 4)));
        assert!(!king_move(sq(7, 4), sq(7, 6)));
    }

    #[test]
    fn test_rook_on_empty_board() {
        let board = Board::empty();
        let reachable = targets(|to| rook_move(&board, sq(7, 0), to));
        assert_eq!(reachable.len(), 14);
        assert!(reachable.iter().all(|to| to.row() == 7 || to.col() == 0));
    }

    #[test]
    fn test_sliders_stop_at_blockers() {
        let mut board = Board::empty();
        board.set_piece_at(sq(4, 4), Color::White.queen());
        board.set_piece_at(sq(4, 6), Color::Black.pawn());
        board.set_piece_at(sq(2, 2), Color::White.pawn());

        assert!(queen_move(&board, sq(4, 4), sq(4, 6)));
        assert!(!queen_move(&board, sq(4, 4), sq(4, 7)));
        assert!(queen_move(&board, sq(4, 4), sq(2, 2)));
        assert!(!queen_move(&board, sq(4, 4), sq(1, 1)));
        assert!(!queen_move(&board, sq(4, 4), sq(2, 3)));
        assert_eq!(targets(|to| queen_move(&board, sq(4, 4), to)).len(), 24);

        assert!(!rook_move(&board, sq(4, 4), sq(2, 2)));
        assert!(!bishop_move(&board, sq(4, 4), sq(4, 6)));
    }

    #[test]
    fn test_starting_position_sliders_are_boxed_in() {
        let board = Board::default();
        for (from, piece) in board.pieces() {
            if piece.role.is_slider() {
                assert!(
                    targets(|to| board.piece_at(to).is_none_or(|p| p.color != piece.color)
                        && is_pattern_move(&board, piece, from, to))
                    .is_empty(),
                    "{piece} on {from}"
                );
            }
        }
    }
}
