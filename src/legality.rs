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

//! Move validation.
//!
//! Legality here means: the side to move owns the piece, the piece goes
//! somewhere else, does not capture its own side and follows its movement
//! pattern. Whether the move leaves the own king attacked is not checked.
//!
//! # Examples
//!
//! ```
//! use checkora::{legality::{self, IllegalMove, MoveRequest}, Board, Color, Role, Square};
//!
//! let board = Board::default();
//! let sq = |row, col| Square::from_coords(row, col).expect("on board");
//!
//! // e2e4
//! let request = MoveRequest::new(Color::White, sq(6, 4), sq(4, 4));
//! assert_eq!(legality::validate(&board, &request), Ok(()));
//!
//! // e2e5
//! let request = MoveRequest::new(Color::White, sq(6, 4), sq(3, 4));
//! assert_eq!(
//!     legality::validate(&board, &request),
//!     Err(IllegalMove::IllegalPattern(Role::Pawn))
//! );
//! ```

use std::{error::Error, fmt};

use crate::{
    board::Board,
    color::Color,
    movelist::{Destination, DestinationList},
    role::Role,
    rules,
    square::Square,
};

/// A proposed move by the side `turn`.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct MoveRequest {
    pub turn: Color,
    pub from: Square,
    pub to: Square,
}

impl MoveRequest {
    pub const fn new(turn: Color, from: Square, to: Square) -> MoveRequest {
        MoveRequest { turn, from, to }
    }
}

impl fmt::Display for MoveRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}{}", self.turn, self.from, self.to)
    }
}

/// Reason for rejecting a [`MoveRequest`], in the order the checks are made.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum IllegalMove {
    /// There is no piece on the source square.
    EmptySource,
    /// The piece on the source square belongs to the other side.
    NotYourTurn,
    /// Source and destination are the same square.
    NullMove,
    /// The destination holds a piece of the side to move.
    SelfCapture,
    /// The piece cannot move like that.
    IllegalPattern(Role),
}

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            IllegalMove::EmptySource => "No piece on source square.",
            IllegalMove::NotYourTurn => "Not your turn.",
            IllegalMove::NullMove => "Must move to a different square.",
            IllegalMove::SelfCapture => "Cannot capture your own piece.",
            IllegalMove::IllegalPattern(_) => "Illegal move for this piece.",
        })
    }
}

impl Error for IllegalMove {}

/// Validates a move.
///
/// The result is a pure function of the arguments.
pub fn validate(board: &Board, request: &MoveRequest) -> Result<(), IllegalMove> {
    let piece = board
        .piece_at(request.from)
        .ok_or(IllegalMove::EmptySource)?;

    if piece.color != request.turn {
        return Err(IllegalMove::NotYourTurn);
    }

    if request.from == request.to {
        return Err(IllegalMove::NullMove);
    }

    if board.color_at(request.to) == Some(request.turn) {
        return Err(IllegalMove::SelfCapture);
    }

    if rules::is_pattern_move(board, piece, request.from, request.to) {
        Ok(())
    } else {
        Err(IllegalMove::IllegalPattern(piece.role))
    }
}

pub fn is_legal(board: &Board, request: &MoveRequest) -> bool {
    validate(board, request).is_ok()
}

/// All squares the piece on `from` may move to, in row-major order.
///
/// Empty if `from` is empty or holds a piece of the other side.
pub fn legal_destinations(board: &Board, turn: Color, from: Square) -> DestinationList {
    Square::all()
        .filter(|&to| is_legal(board, &MoveRequest::new(turn, from, to)))
        .map(|to| Destination {
            to,
            capture: board.is_occupied(to),
        })
        .collect()
}
