#![no_main]

use checkora::protocol;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let line = String::from_utf8_lossy(data);
    let Some(line) = line.lines().next() else {
        return;
    };
    if let Some(response) = protocol::respond(line) {
        assert!(!response.to_string().contains('\n'));
    }
});
