// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use iupac_expand::errors::ExpandError;

fn main() -> Result<(), ExpandError> {
    iupac_expand::run()
}
