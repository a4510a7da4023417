// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

// IUPAC single-base degeneracy codes. The order of the bases within each set is significant: it
// determines the order in which expansions are produced.

pub const SYMBOLS: [char; 15] = [
    'A', 'T', 'C', 'G', 'R', 'Y', 'S', 'W', 'K', 'M', 'B', 'D', 'H', 'V', 'N',
];

/// Returns the concrete bases denoted by `symbol`, or `None` if `symbol` is not one of the 15
/// recognized (uppercase) codes. Callers are expected to upper-case first.
pub fn concrete_bases(symbol: char) -> Option<&'static [char]> {
    let bases: &'static [char] = match symbol {
        'A' => &['A'],
        'T' => &['T'],
        'C' => &['C'],
        'G' => &['G'],
        'R' => &['A', 'G'],      // purine
        'Y' => &['C', 'T'],      // pyrimidine
        'S' => &['G', 'C'],
        'W' => &['A', 'T'],
        'K' => &['G', 'T'],
        'M' => &['A', 'C'],
        'B' => &['C', 'G', 'T'], // not A
        'D' => &['A', 'G', 'T'], // not C
        'H' => &['A', 'C', 'T'], // not G
        'V' => &['A', 'C', 'G'], // not T
        'N' => &['A', 'C', 'G', 'T'],
        _ => return None,
    };
    Some(bases)
}

/// True for the codes that stand for more than one base; false for A, C, G, T and for anything
/// that is not a code.
pub fn is_degenerate(symbol: char) -> bool {
    concrete_bases(symbol).is_some_and(|bases| bases.len() > 1)
}
