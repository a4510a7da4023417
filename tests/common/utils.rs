// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::path::PathBuf;

use iupac_expand::{
    config::ExpandConfig,
    shell::{run_shell, PROMPT},
};

#[allow(dead_code)]
pub fn run_session(input: &str) -> String {
    run_session_with(input, &ExpandConfig::default())
}

#[allow(dead_code)]
pub fn run_session_with(input: &str, config: &ExpandConfig) -> String {
    let mut out: Vec<u8> = Vec::new();
    run_shell(input.as_bytes(), &mut out, config).expect("shell session");
    String::from_utf8(out).expect("utf-8 output")
}

// Splits a session transcript at each prompt; element 0 is the banner. Newlines at the end of
// each piece are dropped.
#[allow(dead_code)]
pub fn exchanges(transcript: &str) -> Vec<String> {
    transcript
        .split(PROMPT)
        .map(|piece| piece.trim_end_matches('\n').to_string())
        .collect()
}

#[allow(dead_code)]
pub fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}
