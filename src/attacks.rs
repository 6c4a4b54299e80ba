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

//! Offset and ray tables, path clearance and attack detection.
//!
//! Every movement pattern of the engine is defined here exactly once. The
//! [`rules`](crate::rules) module asks whether a displacement appears in
//! these tables, while [`is_attacked`] walks the same tables outward from
//! the attacked square.
//!
//! # Examples
//!
//! ```
//! use checkora::{attacks, Board, Color, Square};
//!
//! let board = Board::default();
//! let f3 = Square::from_coords(5, 5).expect("on board");
//! let e4 = Square::from_coords(4, 4).expect("on board");
//!
//! // The g1 knight and the e2 and g2 pawns cover f3.
//! assert!(attacks::is_attacked(&board, f3, Color::White));
//! assert!(!attacks::is_attacked(&board, e4, Color::White));
//! assert!(!attacks::is_attacked(&board, f3, Color::Black));
//! ```

use bitflags::bitflags;

use crate::{
    board::Board,
    color::Color,
    role::Role,
    square::{Delta, Square},
};

bitflags! {
    /// Families of rays a sliding piece can move along.
    #[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
    pub struct Lines: u8 {
        /// Along a row or a column.
        const ORTHOGONAL = 1 << 0;
        /// Along a diagonal.
        const DIAGONAL = 1 << 1;
    }
}

impl Lines {
    /// Unit steps of every ray in these families, orthogonal rays first.
    pub fn rays(self) -> impl Iterator<Item = (Lines, Delta)> {
        let orthogonal = ORTHOGONAL
            .into_iter()
            .filter(move |_| self.contains(Lines::ORTHOGONAL))
            .map(|step| (Lines::ORTHOGONAL, step));
        let diagonal = DIAGONAL
            .into_iter()
            .filter(move |_| self.contains(Lines::DIAGONAL))
            .map(|step| (Lines::DIAGONAL, step));
        orthogonal.chain(diagonal)
    }
}

/// Unit steps along rows and columns.
pub const ORTHOGONAL: [Delta; 4] = [
    Delta::new(-1, 0),
    Delta::new(1, 0),
    Delta::new(0, -1),
    Delta::new(0, 1),
];

/// Unit steps along diagonals.
pub const DIAGONAL: [Delta; 4] = [
    Delta::new(-1, -1),
    Delta::new(-1, 1),
    Delta::new(1, -1),
    Delta::new(1, 1),
];

pub const KNIGHT: [Delta; 8] = [
    Delta::new(-2, -1),
    Delta::new(-2, 1),
    Delta::new(-1, -2),
    Delta::new(-1, 2),
    Delta::new(1, -2),
    Delta::new(1, 2),
    Delta::new(2, -1),
    Delta::new(2, 1),
];

pub const KING: [Delta; 8] = [
    Delta::new(-1, -1),
    Delta::new(-1, 0),
    Delta::new(-1, 1),
    Delta::new(0, -1),
    Delta::new(0, 1),
    Delta::new(1, -1),
    Delta::new(1, 0),
    Delta::new(1, 1),
];

/// Single pawn advance for `color`.
#[inline]
pub const fn pawn_push(color: Color) -> Delta {
    Delta::new(color.forward(), 0)
}

/// Displacements of the two diagonal pawn captures for `color`.
#[inline]
pub const fn pawn_captures(color: Color) -> [Delta; 2] {
    [
        Delta::new(color.forward(), -1),
        Delta::new(color.forward(), 1),
    ]
}

/// Fixed offsets of a stepping or jumping piece. Sliders and pawns have
/// none.
pub const fn step_offsets(role: Role) -> &'static [Delta] {
    match role {
        Role::Knight => &KNIGHT,
        Role::King => &KING,
        Role::Pawn | Role::Bishop | Role::Rook | Role::Queen => &[],
    }
}

/// Ray family and unit step of the straight line from `from` to `to`, or
/// `None` if the squares are equal or share no row, column or diagonal.
///
/// # Examples
///
/// ```
/// use checkora::{attacks::{self, Lines}, square::Delta, Square};
///
/// let a1 = "a1".parse::<Square>()?;
/// let h8 = "h8".parse::<Square>()?;
/// let b3 = "b3".parse::<Square>()?;
///
/// assert_eq!(attacks::ray(a1, h8), Some((Lines::DIAGONAL, Delta::new(-1, 1))));
/// assert_eq!(attacks::ray(a1, b3), None);
/// # Ok::<_, checkora::ParseSquareError>(())
/// ```
pub const fn ray(from: Square, to: Square) -> Option<(Lines, Delta)> {
    let delta = from.delta_to(to);
    if delta.is_zero() {
        None
    } else if delta.rows == 0 || delta.cols == 0 {
        Some((Lines::ORTHOGONAL, delta.signum()))
    } else if delta.rows.abs() == delta.cols.abs() {
        Some((Lines::DIAGONAL, delta.signum()))
    } else {
        None
    }
}

/// Tests that every square strictly between `from` and `to` is empty.
///
/// The squares must share a row, column or diagonal; otherwise there is no
/// path and the result is `false`. Adjacent squares have nothing in
/// between and are always clear.
pub fn path_clear(board: &Board, from: Square, to: Square) -> bool {
    let Some((_, step)) = ray(from, to) else {
        return false;
    };

    let mut sq = from;
    while let Some(next) = sq.offset(step) {
        if next == to {
            return true;
        }
        if board.is_occupied(next) {
            return false;
        }
        sq = next;
    }

    false
}

/// Tests whether any piece of `attacker` could capture on `target` with
/// its next move.
///
/// Whose turn it is and whether the capture would expose a king are not
/// considered, and neither is the piece on `target`, if any.
pub fn is_attacked(board: &Board, target: Square, attacker: Color) -> bool {
    stepper_attacks(board, target, attacker)
        || slider_attacks(board, target, attacker)
        || pawn_attacks(board, target, attacker)
}

fn stepper_attacks(board: &Board, target: Square, attacker: Color) -> bool {
    // Knight and king offsets are symmetric, so the squares reached from
    // the target are exactly the squares the target is reached from.
    [Role::Knight, Role::King].into_iter().any(|role| {
        step_offsets(role).iter().any(|&delta| {
            target
                .offset(delta)
                .is_some_and(|sq| board.piece_at(sq) == Some(role.of(attacker)))
        })
    })
}

fn slider_attacks(board: &Board, target: Square, attacker: Color) -> bool {
    Lines::all().rays().any(|(lines, step)| {
        let mut sq = target;
        while let Some(next) = sq.offset(step) {
            if let Some(piece) = board.piece_at(next) {
                return piece.color == attacker && piece.role.lines().contains(lines);
            }
            sq = next;
        }
        false
    })
}

fn pawn_attacks(board: &Board, target: Square, attacker: Color) -> bool {
    pawn_captures(attacker).into_iter().any(|delta| {
        target
            .offset(-delta)
            .is_some_and(|sq| board.piece_at(sq) == Some(attacker.pawn()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::from_coords(row, col).expect("on board")
    }

    fn board_with(pieces: &[(u8, u8, char)]) -> Board {
        let mut board = Board::empty();
        for &(row, col, ch) in pieces {
            board.set_piece_at(sq(row, col), crate::Piece::from_char(ch).expect("piece letter"));
        }
        board
    }

    #[test]
    fn test_tables() {
        assert!(KNIGHT.iter().all(|d| d.norm_sq() == 5));
        assert!(KING.iter().all(|d| !d.is_zero() && d.rows.abs() <= 1 && d.cols.abs() <= 1));
        for table in [&ORTHOGONAL[..], &DIAGONAL[..], &KNIGHT[..], &KING[..]] {
            assert!(table.iter().all(|d| table.contains(&-*d)));
        }
        assert_eq!(Lines::all().rays().count(), 8);
        assert_eq!(Lines::ORTHOGONAL.rays().count(), 4);
        assert_eq!(Lines::empty().rays().count(), 0);
    }

    #[test]
    fn test_ray() {
        assert_eq!(ray(sq(7, 0), sq(7, 0)), None);
        assert_eq!(ray(sq(7, 0), sq(0, 0)), Some((Lines::ORTHOGONAL, Delta::new(-1, 0))));
        assert_eq!(ray(sq(7, 0), sq(7, 5)), Some((Lines::ORTHOGONAL, Delta::new(0, 1))));
        assert_eq!(ray(sq(2, 2), sq(5, 5)), Some((Lines::DIAGONAL, Delta::new(1, 1))));
        assert_eq!(ray(sq(7, 1), sq(5, 2)), None);
    }

    #[test]
    fn test_path_clear() {
        let board = board_with(&[(4, 3, 'p')]);
        assert!(path_clear(&board, sq(4, 0), sq(4, 3)));
        assert!(!path_clear(&board, sq(4, 0), sq(4, 7)));
        assert!(path_clear(&board, sq(4, 2), sq(4, 3)));
        assert!(path_clear(&board, sq(0, 0), sq(7, 7)));
        assert!(!path_clear(&board, sq(7, 0), sq(1, 6)));
        assert!(path_clear(&board, sq(7, 0), sq(5, 2)));
        assert!(!path_clear(&board, sq(7, 1), sq(5, 2)));
    }

    #[test]
    fn test_black_pawn_attacks() {
        let board = board_with(&[(4, 4, 'p')]);
        assert!(is_attacked(&board, sq(5, 3), Color::Black));
        assert!(is_attacked(&board, sq(5, 5), Color::Black));
        assert!(!is_attacked(&board, sq(5, 4), Color::Black));
        assert!(!is_attacked(&board, sq(3, 3), Color::Black));
        assert!(!is_attacked(&board, sq(3, 5), Color::Black));
        assert!(!is_attacked(&board, sq(5, 3), Color::White));

        let attacked: Vec<Square> = Square::all()
            .filter(|&target| is_attacked(&board, target, Color::Black))
            .collect();
        assert_eq!(attacked, [sq(5, 3), sq(5, 5)]);
    }

    #[test]
    fn test_white_pawn_attacks() {
        let board = board_with(&[(6, 0, 'P')]);
        let attacked: Vec<Square> = Square::all()
            .filter(|&target| is_attacked(&board, target, Color::White))
            .collect();
        assert_eq!(attacked, [sq(5, 1)]);
    }

    #[test]
    fn test_slider_blocked() {
        let board = board_with(&[(7, 0, 'R'), (4, 0, 'p'), (0, 7, 'b')]);
        assert!(is_attacked(&board, sq(5, 0), Color::White));
        assert!(is_attacked(&board, sq(4, 0), Color::White));
        assert!(!is_attacked(&board, sq(3, 0), Color::White));
        assert!(is_attacked(&board, sq(7, 7), Color::White));
        // The bishop sees down its diagonal until the rook.
        assert!(is_attacked(&board, sq(7, 0), Color::Black));
        assert!(!is_attacked(&board, sq(0, 6), Color::White));
    }

    #[test]
    fn test_own_piece_blocks_ray() {
        let board = board_with(&[(0, 0, 'Q'), (0, 2, 'N')]);
        assert!(is_attacked(&board, sq(0, 1), Color::White));
        assert!(is_attacked(&board, sq(0, 2), Color::White));
        // Behind the knight, which does not cover d8 itself.
        assert!(!is_attacked(&board, sq(0, 3), Color::White));
    }

    #[test]
    fn test_wrong_family_does_not_attack() {
        let board = board_with(&[(3, 3, 'r'), (5, 5, 'B')]);
        // A rook on a diagonal does not attack, a bishop on a file does not.
        assert!(!is_attacked(&board, sq(4, 4), Color::Black));
        assert!(!is_attacked(&board, sq(3, 5), Color::White));
        assert!(is_attacked(&board, sq(4, 4), Color::White));
    }

    #[test]
    fn test_king_and_knight() {
        let board = board_with(&[(0, 4, 'k'), (7, 6, 'N')]);
        assert!(is_attacked(&board, sq(1, 3), Color::Black));
        assert!(!is_attacked(&board, sq(2, 4), Color::Black));
        assert!(is_attacked(&board, sq(5, 5), Color::White));
        assert!(is_attacked(&board, sq(6, 4), Color::White));
        assert!(!is_attacked(&board, sq(6, 6), Color::White));
    }
}
