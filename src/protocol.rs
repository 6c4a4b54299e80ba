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

//! Parse requests and write responses of the line protocol.
//!
//! Each request is one line of whitespace separated fields:
//!
//! | Request | Response |
//! |---|---|
//! | `VALIDATE <board> <turn> <fr> <fc> <tr> <tc>` | `VALID` or `INVALID <reason>` |
//! | `MOVES <board> <turn> <row> <col>` | `MOVES` followed by `<row> <col> <capture>` triples |
//! | `ATTACKED <board> <color> <row> <col>` | `YES` or `NO` |
//!
//! Malformed requests are answered with `ERROR <reason>`.
//!
//! # Examples
//!
//! ```
//! use checkora::protocol;
//!
//! let line = "VALIDATE rnbqkbnrpppppppp................................PPPPPPPPRNBQKBNR white 6 4 4 4";
//! let response = protocol::respond(line).expect("not a blank line");
//! assert_eq!(response.to_string(), "VALID");
//!
//! let response = protocol::respond("PING").expect("not a blank line");
//! assert_eq!(response.to_string(), "ERROR unknown command: PING");
//!
//! assert!(protocol::respond("   ").is_none());
//! ```

use std::{error::Error, fmt, str::FromStr};

use log::trace;

use crate::{
    attacks,
    board::{Board, ParseBoardError},
    color::Color,
    legality::{self, IllegalMove, MoveRequest},
    movelist::DestinationList,
    square::Square,
};

/// Request kinds.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Command {
    Validate,
    Moves,
    Attacked,
}

impl Command {
    pub const fn name(self) -> &'static str {
        match self {
            Command::Validate => "VALIDATE",
            Command::Moves => "MOVES",
            Command::Attacked => "ATTACKED",
        }
    }

    /// Number of fields after the command name.
    pub const fn arity(self) -> usize {
        match self {
            Command::Validate => 6,
            Command::Moves | Command::Attacked => 4,
        }
    }

    pub fn from_name(name: &str) -> Option<Command> {
        Some(match name {
            "VALIDATE" => Command::Validate,
            "MOVES" => Command::Moves,
            "ATTACKED" => Command::Attacked,
            _ => return None,
        })
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parsed request. Every request carries its own board.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Request {
    Validate {
        board: Board,
        request: MoveRequest,
    },
    Moves {
        board: Board,
        turn: Color,
        from: Square,
    },
    Attacked {
        board: Board,
        attacker: Color,
        target: Square,
    },
}

impl Request {
    /// Parses a request line. Blank lines yield `Ok(None)`.
    ///
    /// Fields are separated by ASCII whitespace only.
    pub fn parse(line: &str) -> Result<Option<Request>, ProtocolError> {
        let fields: Vec<&str> = line
            .split(|ch: char| ch.is_ascii_whitespace())
            .filter(|field| !field.is_empty())
            .collect();
        let Some((&name, args)) = fields.split_first() else {
            return Ok(None);
        };

        let command =
            Command::from_name(name).ok_or_else(|| ProtocolError::UnknownCommand(name.to_owned()))?;

        if args.len() != command.arity() {
            return Err(ProtocolError::ArgumentCount {
                command,
                expected: command.arity(),
                found: args.len(),
            });
        }

        let board = parse_board(args[0])?;
        let color = parse_color(args[1])?;
        let first = parse_square(args[2], args[3])?;

        Ok(Some(match command {
            Command::Validate => Request::Validate {
                board,
                request: MoveRequest::new(color, first, parse_square(args[4], args[5])?),
            },
            Command::Moves => Request::Moves {
                board,
                turn: color,
                from: first,
            },
            Command::Attacked => Request::Attacked {
                board,
                attacker: color,
                target: first,
            },
        }))
    }

    pub fn command(&self) -> Command {
        match self {
            Request::Validate { .. } => Command::Validate,
            Request::Moves { .. } => Command::Moves,
            Request::Attacked { .. } => Command::Attacked,
        }
    }

    pub fn board(&self) -> &Board {
        match self {
            Request::Validate { board, .. }
            | Request::Moves { board, .. }
            | Request::Attacked { board, .. } => board,
        }
    }

    /// Answers the request.
    pub fn execute(&self) -> Response {
        match self {
            Request::Validate { board, request } => match legality::validate(board, request) {
                Ok(()) => Response::Valid,
                Err(illegal) => Response::Invalid(illegal),
            },
            Request::Moves { board, turn, from } => {
                Response::Moves(legality::legal_destinations(board, *turn, *from))
            }
            Request::Attacked {
                board,
                attacker,
                target,
            } => Response::Attacked(attacks::is_attacked(board, *target, *attacker)),
        }
    }
}

impl FromStr for Request {
    type Err = ProtocolError;

    /// Like [`Request::parse`], but a blank line is an error.
    fn from_str(line: &str) -> Result<Request, ProtocolError> {
        Request::parse(line)?.ok_or(ProtocolError::Empty)
    }
}

fn parse_board(field: &str) -> Result<Board, ProtocolError> {
    field.parse().map_err(ProtocolError::InvalidBoard)
}

fn parse_color(field: &str) -> Result<Color, ProtocolError> {
    field
        .parse()
        .map_err(|_| ProtocolError::InvalidColor(field.to_owned()))
}

fn parse_coordinate(field: &str) -> Result<u8, ProtocolError> {
    let value: u8 = btoi::btou(field.as_bytes())
        .map_err(|_| ProtocolError::InvalidCoordinate(field.to_owned()))?;
    if value < 8 {
        Ok(value)
    } else {
        Err(ProtocolError::CoordinateOutOfRange(value))
    }
}

fn parse_square(row: &str, col: &str) -> Result<Square, ProtocolError> {
    let row = parse_coordinate(row)?;
    let col = parse_coordinate(col)?;
    Square::from_coords(row, col).ok_or(ProtocolError::CoordinateOutOfRange(row.max(col)))
}

/// A single response line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Response {
    Valid,
    Invalid(IllegalMove),
    Moves(DestinationList),
    Attacked(bool),
    Error(ProtocolError),
}

impl Response {
    pub fn is_error(&self) -> bool {
        matches!(self, Response::Error(_))
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Valid => f.write_str("VALID"),
            Response::Invalid(illegal) => write!(f, "INVALID {illegal}"),
            Response::Moves(destinations) => {
                f.write_str("MOVES")?;
                for destination in destinations {
                    write!(f, " {destination}")?;
                }
                Ok(())
            }
            Response::Attacked(attacked) => f.write_str(if *attacked { "YES" } else { "NO" }),
            Response::Error(err) => write!(f, "ERROR {err}"),
        }
    }
}

impl From<ProtocolError> for Response {
    fn from(err: ProtocolError) -> Response {
        Response::Error(err)
    }
}

/// Answers one request line, or returns `None` for a blank line.
pub fn respond(line: &str) -> Option<Response> {
    match Request::parse(line) {
        Ok(Some(request)) => {
            trace!("{} on board\n{:?}", request.command(), request.board());
            Some(request.execute())
        }
        Ok(None) => None,
        Err(err) => Some(Response::Error(err)),
    }
}

/// Error when a request line is malformed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProtocolError {
    /// The line contains no fields.
    Empty,
    /// The first field is not a known command.
    UnknownCommand(String),
    /// The command has too few or too many fields.
    ArgumentCount {
        command: Command,
        expected: usize,
        found: usize,
    },
    /// The board field is not a valid snapshot.
    InvalidBoard(ParseBoardError),
    /// The color field is neither `white` nor `black`.
    InvalidColor(String),
    /// A coordinate field is not a non-negative integer.
    InvalidCoordinate(String),
    /// A coordinate is not in `0..8`.
    CoordinateOutOfRange(u8),
    /// The line exceeds the given number of bytes.
    LineTooLong(usize),
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::Empty => f.write_str("empty request"),
            ProtocolError::UnknownCommand(name) => write!(f, "unknown command: {name}"),
            ProtocolError::ArgumentCount {
                command,
                expected,
                found,
            } => write!(f, "{command} expects {expected} arguments, got {found}"),
            ProtocolError::InvalidBoard(err) => write!(f, "invalid board: {err}"),
            ProtocolError::InvalidColor(field) => write!(f, "invalid color: {field}"),
            ProtocolError::InvalidCoordinate(field) => write!(f, "invalid coordinate: {field}"),
            ProtocolError::CoordinateOutOfRange(value) => {
                write!(f, "coordinate out of range: {value}")
            }
            ProtocolError::LineTooLong(limit) => {
                write!(f, "line too long (limit {limit} bytes)")
            }
        }
    }
}

impl Error for ProtocolError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ProtocolError::InvalidBoard(err) => Some(err),
            _ => None,
        }
    }
}
