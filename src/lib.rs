// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

mod runner;
pub mod config;
pub mod errors;
pub mod expand;
pub mod iupac;
pub mod output;
pub mod seq;
pub mod shell;

pub use crate::errors::ExpandError;
pub use crate::expand::{combinations, count_combinations, expand, Combinations};

pub fn run() -> Result<(), ExpandError> {
    runner::run()
}
