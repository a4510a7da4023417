// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

//! Expansion of degenerate sequences into all the concrete sequences they stand for.
//!
//! Output order is that of the Cartesian product of the per-position base sets, taken in input
//! order: the last position varies fastest, the first one slowest. Within a position, bases come
//! in the order given by [`crate::iupac::concrete_bases`].
//!
//! Nothing here limits the size of the output, which is the product of the per-position set
//! sizes and thus grows exponentially with the number of degenerate positions. Callers that
//! handle untrusted input should check [`count_combinations`] first.

use itertools::Itertools;
use log::debug;

use crate::errors::ExpandError;
use crate::iupac::{concrete_bases, is_degenerate};

// Looks up every position, stopping at the first character that is not a known code. The error
// carries the character as found in the input. Only ASCII letters are upper-cased: a non-ASCII
// character never resolves, even one whose Unicode upper case is a code (e.g. 'ſ' -> 'S').
fn resolve(sequence: &str) -> Result<Vec<&'static [char]>, ExpandError> {
    sequence
        .chars()
        .map(|c| concrete_bases(c.to_ascii_uppercase()).ok_or(ExpandError::InvalidSymbol(c)))
        .collect()
}

/// Returns every concrete sequence consistent with `sequence`, which may mix upper and lower
/// case. The empty sequence expands to a single empty string.
pub fn expand(sequence: &str) -> Result<Vec<String>, ExpandError> {
    let sets = resolve(sequence)?;
    let mut combinations = vec![String::new()];
    for bases in sets {
        combinations = combinations
            .iter()
            .cartesian_product(bases.iter())
            .map(|(prefix, base)| {
                let mut combination = String::with_capacity(prefix.len() + 1);
                combination.push_str(prefix);
                combination.push(*base);
                combination
            })
            .collect();
    }
    debug!(
        "{} ({} degenerate positions) -> {} combinations",
        sequence,
        sequence
            .chars()
            .filter(|c| is_degenerate(c.to_ascii_uppercase()))
            .count(),
        combinations.len()
    );
    Ok(combinations)
}

/// Number of combinations `expand(sequence)` would return, without producing them. `Ok(None)`
/// means the number does not fit in a `usize`.
pub fn count_combinations(sequence: &str) -> Result<Option<usize>, ExpandError> {
    let sets = resolve(sequence)?;
    Ok(sets
        .iter()
        .try_fold(1usize, |count, bases| count.checked_mul(bases.len())))
}

/// Lazy counterpart of [`expand`]: validates `sequence` up front, then yields the same
/// combinations in the same order, one at a time.
pub fn combinations(sequence: &str) -> Result<Combinations, ExpandError> {
    let sets = resolve(sequence)?;
    let indices = vec![0; sets.len()];
    Ok(Combinations {
        sets,
        indices,
        done: false,
    })
}

// Works like an odometer over the base sets: the rightmost index turns fastest, and the
// iterator is exhausted once the leftmost one wraps around.
pub struct Combinations {
    sets: Vec<&'static [char]>,
    indices: Vec<usize>,
    done: bool,
}

impl Combinations {
    fn advance(&mut self) {
        for pos in (0..self.indices.len()).rev() {
            self.indices[pos] += 1;
            if self.indices[pos] < self.sets[pos].len() {
                return;
            }
            self.indices[pos] = 0;
        }
        self.done = true;
    }
}

impl Iterator for Combinations {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        let combination: String = self
            .sets
            .iter()
            .zip(&self.indices)
            .map(|(bases, &i)| bases[i])
            .collect();
        self.advance();
        Some(combination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concrete_only_is_identity() {
        assert_eq!(expand("GAATTC").unwrap(), vec!["GAATTC"]);
        assert_eq!(expand("gaAttc").unwrap(), vec!["GAATTC"]);
    }

    #[test]
    fn test_empty() {
        assert_eq!(expand("").unwrap(), vec![String::new()]);
        assert_eq!(count_combinations("").unwrap(), Some(1));
    }

    #[test]
    fn test_ry_order() {
        assert_eq!(expand("RY").unwrap(), vec!["AC", "AT", "GC", "GT"]);
    }

    #[test]
    fn test_n() {
        assert_eq!(expand("N").unwrap(), vec!["A", "C", "G", "T"]);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(expand("r").unwrap(), expand("R").unwrap());
        assert_eq!(expand("nGs").unwrap(), expand("NGS").unwrap());
    }

    #[test]
    fn test_invalid_symbol() {
        match expand("AXG") {
            Err(ExpandError::InvalidSymbol(c)) => assert_eq!('X', c),
            other => panic!("expected InvalidSymbol, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_symbol_keeps_case() {
        match expand("ax") {
            Err(ExpandError::InvalidSymbol(c)) => assert_eq!('x', c),
            other => panic!("expected InvalidSymbol, got {:?}", other),
        }
    }

    #[test]
    fn test_non_ascii_is_invalid() {
        // 'ſ' (long s) upper-cases to 'S' under Unicode rules, but is not a code
        match expand("Aſ") {
            Err(ExpandError::InvalidSymbol(c)) => assert_eq!('ſ', c),
            other => panic!("expected InvalidSymbol, got {:?}", other),
        }
        assert!(matches!(
            count_combinations("ｎ"),
            Err(ExpandError::InvalidSymbol('ｎ'))
        ));
    }

    #[test]
    fn test_first_invalid_symbol_wins() {
        match expand("A-Z") {
            Err(ExpandError::InvalidSymbol(c)) => assert_eq!('-', c),
            other => panic!("expected InvalidSymbol, got {:?}", other),
        }
        assert!(matches!(
            count_combinations("NN.U"),
            Err(ExpandError::InvalidSymbol('.'))
        ));
        assert!(matches!(
            combinations("NN.U"),
            Err(ExpandError::InvalidSymbol('.'))
        ));
    }

    #[test]
    fn test_count_is_product() {
        // B (3) x D (3) x N (4) x R (2) x A (1)
        let seq = "BDNRA";
        assert_eq!(count_combinations(seq).unwrap(), Some(72));
        assert_eq!(expand(seq).unwrap().len(), 72);
    }

    #[test]
    fn test_count_overflow() {
        let seq = "N".repeat(64);
        assert_eq!(count_combinations(&seq).unwrap(), None);
    }

    #[test]
    fn test_combination_lengths() {
        for combination in expand("ACGTRYSWKMBDHVN").unwrap() {
            assert_eq!(15, combination.len());
            assert!(combination.chars().all(|c| "ACGT".contains(c)));
        }
    }

    #[test]
    fn test_reinvocation_is_stable() {
        let first = expand("WSKM").unwrap();
        let second = expand("WSKM").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_lazy_matches_eager() {
        for seq in ["", "A", "RY", "nsw", "ACGTBDHV", "GGNNCC"] {
            let lazy: Vec<String> = combinations(seq).unwrap().collect();
            assert_eq!(expand(seq).unwrap(), lazy, "mismatch for {:?}", seq);
        }
    }

    #[test]
    fn test_lazy_is_fused() {
        let mut iter = combinations("R").unwrap();
        assert_eq!(Some(String::from("A")), iter.next());
        assert_eq!(Some(String::from("G")), iter.next());
        assert_eq!(None, iter.next());
        assert_eq!(None, iter.next());
    }

    #[test]
    fn test_lazy_can_start_on_huge_expansion() {
        let seq = "N".repeat(40);
        let first: Vec<String> = combinations(&seq).unwrap().take(2).collect();
        assert_eq!(first[0], "A".repeat(40));
        assert_eq!(first[1], format!("{}C", "A".repeat(39)));
    }
}
