// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fmt;

use clap::ValueEnum;
use itertools::Itertools;
use serde::Serialize;

use crate::config::ExpandConfig;
use crate::errors::ExpandError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[clap(name = "columns")]
    #[clap(alias = "c")]
    Columns,
    #[clap(name = "lines")]
    #[clap(alias = "l")]
    Lines,
    #[clap(name = "json")]
    #[clap(alias = "j")]
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutputFormat::Columns => "columns",
            OutputFormat::Lines => "lines",
            OutputFormat::Json => "json",
        };
        write!(f, "{}", s)
    }
}

// One input sequence together with its expansion.
#[derive(Debug, Serialize)]
pub struct Expansion {
    pub sequence: String,
    pub count: usize,
    pub combinations: Vec<String>,
}

impl Expansion {
    pub fn new(sequence: &str, combinations: Vec<String>) -> Self {
        Expansion {
            sequence: sequence.to_string(),
            count: combinations.len(),
            combinations,
        }
    }
}

/// Lays out `combinations` `columns` per line, each right-aligned in a field at least
/// `field_width` wide and followed by a space. Every line, including an incomplete last one, ends
/// with a newline.
pub fn format_columns(combinations: &[String], columns: usize, field_width: usize) -> String {
    let mut out = String::new();
    for chunk in combinations.chunks(columns.max(1)) {
        for combination in chunk {
            out.push_str(&format!("{:>width$} ", combination, width = field_width));
        }
        out.push('\n');
    }
    out
}

pub fn format_lines(combinations: &[String]) -> String {
    combinations.iter().map(|c| format!("{}\n", c)).join("")
}

pub fn render(
    expansions: &[Expansion],
    format: OutputFormat,
    config: &ExpandConfig,
) -> Result<String, ExpandError> {
    let text = match format {
        OutputFormat::Columns => expansions
            .iter()
            .map(|exp| {
                format!(
                    "{}: {} combination{}\n{}",
                    exp.sequence,
                    exp.count,
                    if exp.count == 1 { "" } else { "s" },
                    format_columns(&exp.combinations, config.columns, config.field_width)
                )
            })
            .join(""),
        OutputFormat::Lines => expansions
            .iter()
            .map(|exp| format_lines(&exp.combinations))
            .join(""),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(expansions)?;
            json.push('\n');
            json
        }
    };
    Ok(text)
}
