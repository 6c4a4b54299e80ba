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

//! Board snapshots.
//!
//! A snapshot is a 64 character string listing the squares in row-major
//! order, starting with the `a8` corner. `.` marks an empty square and a
//! piece letter (`p`, `n`, `b`, `r`, `q`, `k`) an occupied one, uppercase
//! for white and lowercase for black.
//!
//! # Examples
//!
//! ```
//! use checkora::{Board, Color, Square};
//!
//! let board: Board = "rnbqkbnrpppppppp................................PPPPPPPPRNBQKBNR"
//!     .parse()
//!     .expect("valid snapshot");
//!
//! let e1 = Square::from_coords(7, 4).expect("on board");
//! assert_eq!(board.piece_at(e1), Some(Color::White.king()));
//! assert_eq!(board, Board::default());
//! ```

use std::{error::Error, fmt, str::FromStr};

use crate::{color::Color, role::Role, square::Square, types::Piece};

/// Number of characters in a snapshot.
pub const SNAPSHOT_LEN: usize = 64;

/// Snapshot of the standard starting position.
pub const STARTING_SNAPSHOT: &str =
    "rnbqkbnrpppppppp................................PPPPPPPPRNBQKBNR";

/// Piece positions on a board.
///
/// The board is accepted as given: nothing checks the number of kings or
/// any other property of a legal chess position.
#[derive(Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Board {
    squares: [Option<Piece>; SNAPSHOT_LEN],
}

impl Board {
    /// A board without any pieces.
    pub const fn empty() -> Board {
        Board {
            squares: [None; SNAPSHOT_LEN],
        }
    }

    /// Parses a snapshot given as bytes.
    ///
    /// The bytes are decoded as UTF-8 and parsed like a string, so lengths
    /// are counted in characters. Undecodable bytes become
    /// `char::REPLACEMENT_CHARACTER` and are rejected as invalid characters.
    pub fn from_ascii(snapshot: &[u8]) -> Result<Board, ParseBoardError> {
        String::from_utf8_lossy(snapshot).parse()
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.to_usize()]
    }

    #[inline]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|piece| piece.color)
    }

    #[inline]
    pub fn role_at(&self, sq: Square) -> Option<Role> {
        self.piece_at(sq).map(|piece| piece.role)
    }

    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.squares[sq.to_usize()].is_some()
    }

    pub fn set_piece_at(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.to_usize()] = Some(piece);
    }

    pub fn remove_piece_at(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.to_usize()].take()
    }

    /// Occupied squares with their pieces, in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Renders the board back into a snapshot.
    pub fn snapshot(&self) -> String {
        self.to_string()
    }
}

fn decode(index: usize, ch: char) -> Result<Option<Piece>, ParseBoardError> {
    if ch == '.' {
        Ok(None)
    } else {
        Piece::from_char(ch)
            .map(Some)
            .ok_or(ParseBoardError::InvalidChar { index, ch })
    }
}

impl Default for Board {
    /// The standard starting position.
    fn default() -> Board {
        let mut board = Board::empty();
        for (index, ch) in STARTING_SNAPSHOT.chars().enumerate() {
            board.squares[index] = Piece::from_char(ch);
        }
        board
    }
}

/// Error when parsing an invalid snapshot.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseBoardError {
    /// The snapshot does not have exactly 64 characters.
    WrongLength { found: usize },
    /// A character is neither `.` nor a piece letter.
    InvalidChar { index: usize, ch: char },
}

impl fmt::Display for ParseBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ParseBoardError::WrongLength { found } => write!(
                f,
                "snapshot must have {SNAPSHOT_LEN} characters, found {found}"
            ),
            ParseBoardError::InvalidChar { index, ch } => {
                write!(f, "unexpected character {ch:?} at index {index}")
            }
        }
    }
}

impl Error for ParseBoardError {}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(snapshot: &str) -> Result<Board, ParseBoardError> {
        let found = snapshot.chars().count();
        if found != SNAPSHOT_LEN {
            return Err(ParseBoardError::WrongLength { found });
        }

        let mut board = Board::empty();
        for (index, ch) in snapshot.chars().enumerate() {
            board.squares[index] = decode(index, ch)?;
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for piece in &self.squares {
            fmt::Write::write_char(f, piece.map_or('.', Piece::char))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("   a b c d e f g h\n")?;
        for row in 0..8 {
            write!(f, "{}  ", 8 - row)?;
            for col in 0..8 {
                let ch = Square::from_coords(row, col)
                    .and_then(|sq| self.piece_at(sq))
                    .map_or('.', Piece::char);
                write!(f, "{ch}")?;
                if col < 7 {
                    f.write_str(" ")?;
                }
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
