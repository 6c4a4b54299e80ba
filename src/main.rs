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

mod cli;

use std::{
    fs::File,
    io::{self, BufReader},
    process::ExitCode,
};

use checkora::service::{self, Summary};
use clap::Parser;
use env_logger::Env;
use log::{error, info};

fn run(cli: &cli::Cli) -> io::Result<Summary> {
    let stdout = io::stdout().lock();
    match cli.input {
        Some(ref path) => {
            info!("serving requests from {}", path.display());
            let file = File::open(path)
                .map_err(|err| io::Error::new(err.kind(), format!("{}: {err}", path.display())))?;
            service::serve(BufReader::new(file), stdout)
        }
        None => {
            info!("serving requests from standard input");
            service::serve(io::stdin().lock(), stdout)
        }
    }
}

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    let env = Env::default().filter_or(cli::LOG_ENV, cli.default_log_filter());
    env_logger::Builder::from_env(env).init();

    match run(&cli) {
        Ok(summary) => {
            info!(
                "end of input after {} requests ({} errors)",
                summary.requests, summary.errors
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("i/o error: {err}");
            ExitCode::FAILURE
        }
    }
}
