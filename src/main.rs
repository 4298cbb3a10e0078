// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use fastkit::errors::FastkitError;

fn main() -> Result<(), FastkitError> {
    fastkit::run()
}
