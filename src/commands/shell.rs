// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

use crate::cli;
use crate::commands::dispatch;
use crate::config::Settings;
use crate::store::Store;

const PROMPT: &str = "subscribe> ";

pub fn handle(store: &mut Store, settings: &Settings) -> Result<()> {
    let stdin = io::stdin();
    run(store, settings, stdin.lock())
}

/// Reads one command per line and dispatches it against `store` until
/// `quit`, `exit` or end of input. Bad lines are reported and skipped.
pub fn run<R: BufRead>(store: &mut Store, settings: &Settings, input: R) -> Result<()> {
    info!(records = store.records().len(), "shell session started");
    println!("Type a command (dashboard, list, add, rm, search, filter, ...) or 'quit'.");
    prompt()?;
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            prompt()?;
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }
        let Some(words) = shlex::split(line) else {
            eprintln!("error: unbalanced quotes in '{}'", line);
            prompt()?;
            continue;
        };
        debug!(?words, "shell command");
        let argv = std::iter::once("subscribe".to_string()).chain(words);
        match cli::build_cli().try_get_matches_from(argv) {
            Ok(m) => match m.subcommand() {
                Some(("shell", _)) => println!("Already in a shell session"),
                _ => {
                    if let Err(err) = dispatch(store, settings, &m) {
                        eprintln!("error: {:#}", err);
                    }
                }
            },
            Err(err) => err.print()?,
        }
        prompt()?;
    }
    info!(revision = store.revision(), "shell session ended");
    Ok(())
}

fn prompt() -> Result<()> {
    print!("{}", PROMPT);
    io::stdout().flush()?;
    Ok(())
}
