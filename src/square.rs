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

use std::{error::Error, fmt, ops, str::FromStr};

/// A square of the board, addressed by row and column.
///
/// Row 0 is the first row of a snapshot (rank 8 in algebraic notation),
/// column 0 is the `a` file. Squares are indexed row-major from 0 to 63,
/// which is also their position in a snapshot.
///
/// # Examples
///
/// ```
/// use checkora::Square;
///
/// let sq = Square::from_coords(6, 4).expect("on the board");
/// assert_eq!(sq.row(), 6);
/// assert_eq!(sq.col(), 4);
/// assert_eq!(sq.to_usize(), 52);
/// assert_eq!(sq.to_string(), "e2");
///
/// assert_eq!(Square::from_coords(8, 0), None);
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Square(u8);

impl Square {
    /// Gets the square on `row` and `col`, or `None` if either is not
    /// in `0..8`.
    #[inline]
    pub const fn from_coords(row: u8, col: u8) -> Option<Square> {
        if row < 8 && col < 8 {
            Some(Square(row * 8 + col))
        } else {
            None
        }
    }

    /// Gets the square with the given row-major index, or `None` if the
    /// index is not in `0..64`.
    #[inline]
    pub const fn from_index(index: usize) -> Option<Square> {
        if index < 64 {
            Some(Square(index as u8))
        } else {
            None
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.0 >> 3
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.0 & 7
    }

    #[inline]
    pub const fn to_usize(self) -> usize {
        self.0 as usize
    }

    /// Steps by `delta`, or `None` when that leaves the board.
    #[inline]
    pub const fn offset(self, delta: Delta) -> Option<Square> {
        let row = self.row() as i8 + delta.rows;
        let col = self.col() as i8 + delta.cols;
        if row < 0 || col < 0 {
            None
        } else {
            Square::from_coords(row as u8, col as u8)
        }
    }

    /// Displacement that leads from `self` to `other`.
    #[inline]
    pub const fn delta_to(self, other: Square) -> Delta {
        Delta::new(
            other.row() as i8 - self.row() as i8,
            other.col() as i8 - self.col() as i8,
        )
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl DoubleEndedIterator<Item = Square> + ExactSizeIterator {
        (0..64).map(Square)
    }

    /// Parses algebraic notation such as `e2`.
    pub fn from_ascii(s: &[u8]) -> Result<Square, ParseSquareError> {
        match *s {
            [file @ b'a'..=b'h', rank @ b'1'..=b'8'] => {
                Ok(Square((b'8' - rank) * 8 + (file - b'a')))
            }
            _ => Err(ParseSquareError),
        }
    }

    pub const fn file_char(self) -> char {
        (b'a' + self.col()) as char
    }

    pub const fn rank_char(self) -> char {
        (b'8' - self.row()) as char
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {})", self, self.row(), self.col())
    }
}

impl From<Square> for usize {
    #[inline]
    fn from(sq: Square) -> usize {
        sq.to_usize()
    }
}

/// Error when parsing an invalid square name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseSquareError;

impl fmt::Display for ParseSquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid square name")
    }
}

impl Error for ParseSquareError {}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Square, ParseSquareError> {
        Square::from_ascii(s.as_bytes())
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for Square {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Square> {
        Ok(Square(u.int_in_range(0..=63)?))
    }

    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        <u8 as arbitrary::Arbitrary>::size_hint(depth)
    }
}

/// A displacement on the board, in rows and columns.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Delta {
    pub rows: i8,
    pub cols: i8,
}

impl Delta {
    #[inline]
    pub const fn new(rows: i8, cols: i8) -> Delta {
        Delta { rows, cols }
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.rows == 0 && self.cols == 0
    }

    /// Unit step in the same direction, with each component reduced to
    /// -1, 0 or 1.
    #[inline]
    pub const fn signum(self) -> Delta {
        Delta::new(self.rows.signum(), self.cols.signum())
    }

    /// Squared euclidean length.
    #[inline]
    pub const fn norm_sq(self) -> i32 {
        let rows = self.rows as i32;
        let cols = self.cols as i32;
        rows * rows + cols * cols
    }
}

impl ops::Neg for Delta {
    type Output = Delta;

    #[inline]
    fn neg(self) -> Delta {
        Delta::new(-self.rows, -self.cols)
    }
}

impl ops::Mul<i8> for Delta {
    type Output = Delta;

    #[inline]
    fn mul(self, k: i8) -> Delta {
        Delta::new(self.rows * k, self.cols * k)
    }
}
