// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{
    io::{stdin, stdout, Write},
    path::Path,
};

use log::{info, warn};

use clap::Parser;

use crate::config::{find_config, ExpandConfig};
use crate::errors::ExpandError;
use crate::expand::{count_combinations, expand};
use crate::output::{render, Expansion, OutputFormat};
use crate::seq::fasta::{expand_record, read_fasta_file, write_fasta};
use crate::seq::file::SeqFile;
use crate::seq::record::SeqRecord;
use crate::shell::run_shell;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None) ]
struct Cli {
    /// Sequences to expand (interactive mode if none given)
    sequences: Vec<String>,

    /// Expand every record of a FastA file
    #[arg(short, long, conflicts_with = "sequences")]
    fasta: Option<String>,

    /// Output format
    #[arg(short, long = "output-format", default_value_t = OutputFormat::Columns,
        help = "Output format [columns|lines|json] (or just c|l|j); default: columns",
        hide_default_value = true,
        hide_possible_values = true,
    )]
    output_format: OutputFormat,

    /// Only print the number of combinations
    #[arg(short, long)]
    count: bool,

    /// Refuse to expand past this many combinations (0: no limit)
    #[arg(short, long = "max-combinations")]
    max_combinations: Option<usize>,

    /// Combinations per line (columns format)
    #[arg(long)]
    columns: Option<usize>,

    /// Minimum field width (columns format)
    #[arg(short = 'w', long = "field-width")]
    field_width: Option<usize>,

    /// Config file (default: ~/.iupacexpandconfig or ./.iupacexpandconfig)
    #[arg(long)]
    config: Option<String>,
}

fn load_config(cli: &Cli) -> Result<ExpandConfig, ExpandError> {
    let mut config = match &cli.config {
        Some(path) => ExpandConfig::from_file(Path::new(path))?,
        None => match find_config() {
            Some(path) => ExpandConfig::from_file(&path)?,
            None => ExpandConfig::default(),
        },
    };
    // Command-line values win over the config file.
    if let Some(max) = cli.max_combinations {
        config.max_combinations = max;
    }
    if let Some(columns) = cli.columns {
        config.columns = columns;
    }
    if let Some(width) = cli.field_width {
        config.field_width = width;
    }
    config.validate()?;
    Ok(config)
}

fn count_line(name: &str, count: Option<usize>) -> String {
    match count {
        Some(n) => format!("{}\t{}", name, n),
        None => format!("{}\toverflow", name),
    }
}

fn run_batch<W: Write>(
    out: &mut W,
    sequences: &[String],
    format: OutputFormat,
    count_only: bool,
    config: &ExpandConfig,
) -> Result<(), ExpandError> {
    if count_only {
        let lines = sequences
            .iter()
            .map(|seq| count_combinations(seq).map(|n| count_line(seq, n)))
            .collect::<Result<Vec<String>, ExpandError>>()?;
        for line in lines {
            writeln!(out, "{}", line)?;
        }
        return Ok(());
    }
    let mut expansions: Vec<Expansion> = Vec::with_capacity(sequences.len());
    for seq in sequences {
        config.check_size(seq)?;
        expansions.push(Expansion::new(seq, expand(seq)?));
    }
    write!(out, "{}", render(&expansions, format, config)?)?;
    Ok(())
}

fn run_fasta<W: Write>(
    out: &mut W,
    path: &str,
    format: OutputFormat,
    count_only: bool,
    config: &ExpandConfig,
) -> Result<(), ExpandError> {
    let records = read_fasta_file(path)?;
    info!("{}: {} records", path, records.len());
    if format != OutputFormat::Columns {
        warn!("--output-format is ignored in FastA mode");
    }
    expand_fasta(out, &records, count_only, config)
}

// Nothing is written unless every record expands.
fn expand_fasta<W: Write>(
    out: &mut W,
    records: &[SeqRecord],
    count_only: bool,
    config: &ExpandConfig,
) -> Result<(), ExpandError> {
    if count_only {
        let lines = records
            .iter()
            .map(|rec| count_combinations(&rec.sequence).map(|n| count_line(&rec.header, n)))
            .collect::<Result<Vec<String>, ExpandError>>()?;
        for line in lines {
            writeln!(out, "{}", line)?;
        }
        return Ok(());
    }
    let expanded = records
        .iter()
        .map(|rec| expand_record(rec, config))
        .collect::<Result<Vec<SeqFile>, ExpandError>>()?;
    for recs in &expanded {
        write_fasta(out, recs)?;
    }
    Ok(())
}

pub fn run() -> Result<(), ExpandError> {
    env_logger::init();
    info!("Starting log");

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let stdout = stdout();
    let mut out = stdout.lock();

    if let Some(path) = &cli.fasta {
        run_fasta(&mut out, path, cli.output_format, cli.count, &config)
    } else if cli.sequences.is_empty() {
        info!("No sequences given, running interactively.");
        run_shell(stdin().lock(), &mut out, &config)
    } else {
        run_batch(
            &mut out,
            &cli.sequences,
            cli.output_format,
            cli.count,
            &config,
        )
    }
}
