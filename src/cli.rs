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

use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "CHECKORA_LOG";

#[derive(Parser, Debug)]
#[command(
    name = "checkora-engine",
    version,
    about = "Answers chess move-legality requests, one per line of standard input",
    after_help = "Requests: VALIDATE, MOVES, ATTACKED. Logs go to standard error and are \
                  filtered by the CHECKORA_LOG environment variable."
)]
pub struct Cli {
    /// Read requests from a file instead of standard input.
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Log more (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log filter used when the environment does not set one.
    pub fn default_log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity() {
        let cli = Cli::parse_from(["checkora-engine"]);
        assert_eq!(cli.default_log_filter(), "warn");
        assert!(cli.input.is_none());

        let cli = Cli::parse_from(["checkora-engine", "-vv", "--input", "session.txt"]);
        assert_eq!(cli.default_log_filter(), "debug");
        assert_eq!(cli.input, Some(PathBuf::from("session.txt")));
    }
}
