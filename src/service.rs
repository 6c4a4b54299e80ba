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

//! The request loop.

use std::io::{self, BufRead, Read, Write};

use log::{debug, trace, warn};

use crate::protocol::{self, ProtocolError};

/// Longest request line, in bytes, not counting the line terminator.
/// Requests are well below this. Longer lines are answered with an error
/// and skipped without being buffered.
pub const MAX_LINE_LEN: usize = 1024;

/// Counts of a finished [`serve`] run.
#[derive(Copy, Clone, Default, Eq, PartialEq, Debug)]
pub struct Summary {
    /// Lines answered with a response.
    pub requests: u64,
    /// Responses that were `ERROR`.
    pub errors: u64,
}

enum Line {
    Complete,
    TooLong,
}

/// Reads the next line into `buf`, or returns `None` at the end of input.
fn read_line<R: BufRead>(input: &mut R, buf: &mut Vec<u8>) -> io::Result<Option<Line>> {
    buf.clear();
    let limit = MAX_LINE_LEN as u64 + 1;
    if input.by_ref().take(limit).read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }
    if buf.len() <= MAX_LINE_LEN || buf.ends_with(b"\n") {
        return Ok(Some(Line::Complete));
    }

    loop {
        let available = input.fill_buf()?;
        if available.is_empty() {
            break;
        }
        match available.iter().position(|&byte| byte == b'\n') {
            Some(end) => {
                input.consume(end + 1);
                break;
            }
            None => {
                let len = available.len();
                input.consume(len);
            }
        }
    }
    Ok(Some(Line::TooLong))
}

/// Reads request lines from `input` until the end of the stream and writes
/// one response line per request to `output`, flushing after each.
///
/// Malformed requests are answered and do not stop the loop. Only I/O
/// errors do.
pub fn serve<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<Summary> {
    let mut summary = Summary::default();
    let mut buf = Vec::new();

    while let Some(line) = read_line(&mut input, &mut buf)? {
        let response = match line {
            Line::Complete => {
                // Undecodable bytes become replacement characters, which the
                // parser then rejects like any other bad field.
                let line = String::from_utf8_lossy(&buf);
                trace!("<< {}", line.trim_end());
                match protocol::respond(&line) {
                    Some(response) => response,
                    None => continue,
                }
            }
            Line::TooLong => {
                trace!("<< line of more than {MAX_LINE_LEN} bytes");
                ProtocolError::LineTooLong(MAX_LINE_LEN).into()
            }
        };

        summary.requests += 1;
        if response.is_error() {
            summary.errors += 1;
            warn!("rejected request {}: {}", summary.requests, response);
        }

        debug!(">> {response}");
        writeln!(output, "{response}")?;
        output.flush()?;
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::STARTING_SNAPSHOT;

    fn run(input: &str) -> (String, Summary) {
        let mut output = Vec::new();
        let summary = serve(input.as_bytes(), &mut output).expect("in-memory io");
        (String::from_utf8(output).expect("utf-8 output"), summary)
    }

    #[test]
    fn test_one_line_per_request() {
        let input = format!(
            "VALIDATE {s} white 6 4 4 4\n\nMOVES {s} black 0 1\nATTACKED {s} white 5 5\nHELLO\n",
            s = STARTING_SNAPSHOT
        );
        let (output, summary) = run(&input);
        assert_eq!(
            output,
            "VALID\nMOVES 2 0 0 2 2 0\nYES\nERROR unknown command: HELLO\n"
        );
        assert_eq!(summary, Summary { requests: 4, errors: 1 });
    }

    #[test]
    fn test_last_line_without_newline() {
        let input = format!("ATTACKED {STARTING_SNAPSHOT} black 5 5");
        let (output, summary) = run(&input);
        assert_eq!(output, "NO\n");
        assert_eq!(summary.requests, 1);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(run(""), (String::new(), Summary::default()));
    }

    #[test]
    fn test_invalid_utf8() {
        let mut input = b"MOVES ".to_vec();
        input.extend_from_slice(&[0xff; 64]);
        input.extend_from_slice(b" white 0 0\nATTACKED ");
        input.extend_from_slice(STARTING_SNAPSHOT.as_bytes());
        input.extend_from_slice(b" white 5 0\n");

        let mut output = Vec::new();
        let summary = serve(&input[..], &mut output).expect("in-memory io");
        let output = String::from_utf8(output).expect("utf-8 output");
        let mut lines = output.lines();
        assert!(lines.next().is_some_and(|l| l.starts_with("ERROR invalid board:")));
        assert_eq!(lines.next(), Some("YES"));
        assert_eq!(summary, Summary { requests: 2, errors: 1 });
    }

    #[test]
    fn test_line_too_long() {
        let attacked = format!("ATTACKED {STARTING_SNAPSHOT} white 5 0");
        let padded = format!("{attacked}{}", " ".repeat(MAX_LINE_LEN - attacked.len()));
        assert_eq!(padded.len(), MAX_LINE_LEN);

        let input = format!(
            "{}\n{padded}\n{attacked}\n{}",
            "x".repeat(3 * MAX_LINE_LEN),
            "y".repeat(MAX_LINE_LEN + 1),
        );
        let (output, summary) = run(&input);
        assert_eq!(
            output,
            "ERROR line too long (limit 1024 bytes)\nYES\nYES\nERROR line too long (limit 1024 bytes)\n"
        );
        assert_eq!(summary, Summary { requests: 4, errors: 2 });
    }
}
