//! Stateless chess move-legality checks for an external game backend.
//!
//! Every query brings its own board snapshot, is answered from that
//! snapshot alone and leaves nothing behind. The engine decides whether a
//! piece may move to a square, which squares it may move to, and whether a
//! square is attacked. It does not play chess and does not track game
//! history, so check, checkmate, castling, en passant, promotion and draw
//! rules are left to the caller.
//!
//! # Examples
//!
//! Validate a move:
//!
//! ```
//! use checkora::{legality::{self, MoveRequest}, Board, Color, Square};
//!
//! let board = Board::default();
//! let b1 = Square::from_coords(7, 1).expect("on board");
//! let c3 = Square::from_coords(5, 2).expect("on board");
//!
//! assert!(legality::is_legal(&board, &MoveRequest::new(Color::White, b1, c3)));
//! ```
//!
//! List destinations:
//!
//! ```
//! use checkora::{legality, Board, Color, Square};
//!
//! let board: Board = "........................................................R......."
//!     .parse()
//!     .expect("valid snapshot");
//! let a1 = Square::from_coords(7, 0).expect("on board");
//!
//! assert_eq!(legality::legal_destinations(&board, Color::White, a1).len(), 14);
//! ```
//!
//! Answer a protocol line, as the `checkora-engine` binary does for each
//! line of its standard input:
//!
//! ```
//! let line = "ATTACKED ....................................p........................... black 5 3";
//! let response = checkora::protocol::respond(line).expect("not a blank line");
//! assert_eq!(response.to_string(), "YES");
//! ```
//!
//! # Feature flags
//!
//! * `serde`: Implements [`serde::Serialize`](https://docs.rs/serde/1/serde/trait.Serialize.html)
//!   and [`serde::Deserialize`](https://docs.rs/serde/1/serde/trait.Deserialize.html) for
//!   [`Color`] and [`Role`].
//! * `nohash-hasher`: Implements
//!   [`nohash_hasher::IsEnabled`](https://docs.rs/nohash-hasher/0.2/nohash_hasher/trait.IsEnabled.html)
//!   for [`Square`], [`Role`] and [`Color`].
//! * `arbitrary`: Implements
//!   [`arbitrary::Arbitrary`](https://docs.rs/arbitrary/1/arbitrary/trait.Arbitrary.html)
//!   for the board types, for fuzzing.

#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]
#![cfg_attr(docs_rs, feature(doc_auto_cfg))]

mod color;
mod role;
mod types;

pub mod attacks;
pub mod board;
pub mod legality;
pub mod movelist;
pub mod protocol;
pub mod rules;
pub mod service;
pub mod square;

pub use board::{Board, ParseBoardError};
pub use color::{Color, ParseColorError};
pub use legality::{IllegalMove, MoveRequest};
pub use movelist::{Destination, DestinationList};
pub use role::Role;
pub use square::{ParseSquareError, Square};
pub use types::Piece;

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Square {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Role {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Color {}
