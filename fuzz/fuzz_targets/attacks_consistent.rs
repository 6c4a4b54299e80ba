#![no_main]

use arbitrary::Arbitrary;
use checkora::{attacks, legality, rules, Board, Color, Square};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Data {
    board: Board,
    color: Color,
    square: Square,
}

fuzz_target!(|data: Data| {
    let Data { mut board, color, square } = data;

    for dest in legality::legal_destinations(&board, color, square) {
        assert_ne!(board.color_at(dest.to), Some(color));
        assert_eq!(dest.capture, board.is_occupied(dest.to));
    }

    // Pawns only capture diagonally, so give them something to capture.
    if board.color_at(square) == Some(color) {
        board.remove_piece_at(square);
    }
    if !board.is_occupied(square) {
        board.set_piece_at(square, (!color).knight());
    }
    let by_rules = board.pieces().any(|(from, piece)| {
        piece.color == color && from != square && rules::is_pattern_move(&board, piece, from, square)
    });
    assert_eq!(attacks::is_attacked(&board, square, color), by_rules);
});
