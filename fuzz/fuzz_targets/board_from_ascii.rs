#![no_main]

use checkora::Board;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(board) = Board::from_ascii(data) else {
        return;
    };
    let roundtripped = Board::from_ascii(board.to_string().as_bytes()).expect("roundtrip");
    assert_eq!(board, roundtripped);
});
