// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{fmt, io};

#[derive(Debug)]
pub enum ExpandError {
    // Carries the offending character as it appeared in the input, i.e. before upper-casing.
    InvalidSymbol(char),
    // Raised by callers that guard against combinatorial blow-up, never by expand() itself. A
    // count of None means the product overflowed usize; a limit of None means no limit was set.
    TooManyCombinations {
        count: Option<usize>,
        limit: Option<usize>,
    },
    Io(io::Error),
    Format(String),
    Json(serde_json::Error),
}

// These allow conversion to ExpandError, required for main() to return Result<()> and for '?' to
// work.

impl From<io::Error> for ExpandError {
    fn from(e: io::Error) -> Self {
        ExpandError::Io(e)
    }
}

impl From<serde_json::Error> for ExpandError {
    fn from(e: serde_json::Error) -> Self {
        ExpandError::Json(e)
    }
}

impl fmt::Display for ExpandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpandError::InvalidSymbol(c) => write!(f, "invalid symbol: '{}'", c),
            ExpandError::TooManyCombinations { count, limit } => {
                match count {
                    Some(n) => write!(f, "too many combinations: {}", n)?,
                    None => write!(f, "too many combinations: count overflows usize")?,
                }
                match limit {
                    Some(l) => write!(f, " (limit is {})", l),
                    None => Ok(()),
                }
            }
            ExpandError::Io(e) => write!(f, "I/O error: {}", e),
            ExpandError::Format(msg) => write!(f, "Format error: {}", msg),
            ExpandError::Json(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for ExpandError {}
