// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::io::{BufRead, Write};

use log::{debug, info};

use crate::config::ExpandConfig;
use crate::errors::ExpandError;
use crate::expand::expand;
use crate::output::format_columns;

pub const BANNER: &str = "Degenerate DNA sequence expander";
pub const PROMPT: &str = "Enter a sequence with degenerate bases ('quit' or 'q' to exit): ";

#[derive(Debug, PartialEq, Eq)]
pub enum ShellInput {
    Quit,
    Empty,
    Sequence(String),
}

// The quit sentinel is checked before spaces are removed, so "q u i t" is a (bad) sequence, not
// a request to quit.
pub fn parse_input(line: &str) -> ShellInput {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("q") {
        return ShellInput::Quit;
    }
    let sequence: String = trimmed.chars().filter(|&c| c != ' ').collect();
    if sequence.is_empty() {
        ShellInput::Empty
    } else {
        ShellInput::Sequence(sequence)
    }
}

/// Read-expand-print loop. Returns when the user quits or when input runs out (which is what an
/// interrupted terminal looks like from here). Expansion errors are reported and the loop goes
/// on; only I/O errors end it early.
pub fn run_shell<R: BufRead, W: Write>(
    mut input: R,
    out: &mut W,
    config: &ExpandConfig,
) -> Result<(), ExpandError> {
    writeln!(out, "{}", BANNER)?;
    writeln!(out, "{}", "=".repeat(30))?;

    let mut line = String::new();
    loop {
        write!(out, "\n{}", PROMPT)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            info!("End of input");
            writeln!(out, "\n\nInterrupted by user.")?;
            break;
        }

        match parse_input(&line) {
            ShellInput::Quit => {
                writeln!(out, "Bye.")?;
                break;
            }
            ShellInput::Empty => {
                writeln!(out, "Input cannot be empty, please try again.")?;
            }
            ShellInput::Sequence(sequence) => {
                debug!("Expanding {}", sequence);
                match show_expansion(out, &sequence, config) {
                    Ok(()) => {}
                    Err(ExpandError::Io(e)) => return Err(ExpandError::Io(e)),
                    Err(e) => writeln!(out, "Error: {}", e)?,
                }
            }
        }
    }
    Ok(())
}

fn show_expansion<W: Write>(
    out: &mut W,
    sequence: &str,
    config: &ExpandConfig,
) -> Result<(), ExpandError> {
    config.check_size(sequence)?;
    let combinations = expand(sequence)?;
    writeln!(out, "\nInput sequence: {}", sequence)?;
    writeln!(out, "Number of combinations: {}", combinations.len())?;
    writeln!(out, "All combinations:")?;
    write!(
        out,
        "{}",
        format_columns(&combinations, config.columns, config.field_width)
    )?;
    Ok(())
}
