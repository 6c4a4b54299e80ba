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

use std::fmt;

use arrayvec::ArrayVec;

use crate::square::Square;

/// A square a piece may move to.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Destination {
    pub to: Square,
    /// Whether an opposing piece stands on `to`.
    pub capture: bool,
}

impl fmt::Display for Destination {
    /// Renders the `<row> <col> <capture>` triple of a `MOVES` response.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.to.row(),
            self.to.col(),
            u8::from(self.capture)
        )
    }
}

/// A container for destinations that can be stored inline on the stack.
///
/// No piece can reach more than 27 squares, so the capacity is never
/// exceeded even for malformed boards.
pub type DestinationList = ArrayVec<Destination, 64>;
