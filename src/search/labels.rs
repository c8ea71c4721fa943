// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Placemark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Placemark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smol_str::SmolStr;

/// Rank label for the zero-based `index`: `A`..`Z`, then `AA`, `AB`, ... like spreadsheet columns.
pub fn rank_label(index: usize) -> SmolStr {
    let mut letters = [0u8; 16];
    let mut start = letters.len();
    let mut n = index + 1;
    while n > 0 {
        n -= 1;
        start -= 1;
        letters[start] = b'A' + (n % 26) as u8;
        n /= 26;
    }
    // Only ASCII capitals were written.
    SmolStr::new(std::str::from_utf8(&letters[start..]).unwrap_or_default())
}
