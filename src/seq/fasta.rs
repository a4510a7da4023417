// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use log::debug;

use crate::config::ExpandConfig;
use crate::errors::ExpandError;
use crate::expand::combinations;
use crate::seq::file::SeqFile;
use crate::seq::record::SeqRecord;

pub fn read_fasta_file<P: AsRef<Path>>(path: P) -> Result<SeqFile, ExpandError> {
    let file = File::open(path)?;
    read_fasta(BufReader::new(file))
}

// Blank lines are skipped and whitespace inside sequence lines is dropped. Sequence data before
// the first header is an error.
pub fn read_fasta<R: BufRead>(reader: R) -> Result<SeqFile, ExpandError> {
    let mut result: SeqFile = Vec::new();
    let mut current_record: Option<SeqRecord> = None;

    for (lineno, line) in reader.lines().enumerate() {
        let l: String = line?;
        if let Some(hdr) = l.strip_prefix('>') {
            if let Some(rec) = current_record.take() {
                result.push(rec);
            }
            current_record = Some(SeqRecord::new(hdr.trim(), String::new()));
        } else if !l.trim().is_empty() {
            match current_record.as_mut() {
                // append line to current record's sequence
                Some(rec) => rec.sequence.extend(l.split_whitespace()),
                None => {
                    return Err(ExpandError::Format(format!(
                        "sequence data before first header (line {})",
                        lineno + 1
                    )))
                }
            }
        }
    }
    if let Some(rec) = current_record {
        result.push(rec);
    }
    debug!("Read {} FastA records", result.len());
    Ok(result)
}

pub fn write_fasta<W: Write>(out: &mut W, records: &[SeqRecord]) -> std::io::Result<()> {
    for rec in records {
        writeln!(out, ">{}", rec.header)?;
        writeln!(out, "{}", rec.sequence)?;
    }
    Ok(())
}

/// Expands a record into one record per combination. Headers get a 1-based `_<n>` suffix, unless
/// there is only one combination, in which case the original header is kept.
pub fn expand_record(record: &SeqRecord, config: &ExpandConfig) -> Result<SeqFile, ExpandError> {
    let count = config
        .check_size(&record.sequence)
        .map_err(|e| match e {
            ExpandError::InvalidSymbol(c) => ExpandError::Format(format!(
                "record '{}': invalid symbol: '{}'",
                record.header, c
            )),
            other => other,
        })?;
    let combos = combinations(&record.sequence)?;
    if count == 1 {
        return Ok(combos
            .map(|seq| SeqRecord::new(record.header.clone(), seq))
            .collect());
    }
    Ok(combos
        .enumerate()
        .map(|(i, seq)| SeqRecord::new(format!("{}_{}", record.header, i + 1), seq))
        .collect())
}
