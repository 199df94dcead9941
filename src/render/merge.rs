// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Termgantt and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Overlaying rows.
//!
//! Two rows merge column by column: the longer row's glyph is kept unless it is filler
//! (filler glyph or space), in which case the shorter row's glyph at that column shows through,
//! or the filler glyph past its end. The result is as long as the longer input. On equal lengths
//! the second argument counts as the longer one.
//!
//! Merging is symmetric as long as the rows never carry two different non-filler glyphs in the
//! same column. Bars of one schedule only ever collide with identical bar glyphs, so folding any
//! number of rows is order-independent.

use super::text::char_len;
use super::ChartGlyphs;

pub fn merge_rows(a: &str, b: &str, glyphs: &ChartGlyphs) -> String {
    let (short, long) = if char_len(a) > char_len(b) {
        (b, a)
    } else {
        (a, b)
    };

    let mut under = short.chars();
    long.chars()
        .map(|ch| {
            let below = under.next();
            if glyphs.is_filler(ch) {
                below.unwrap_or(glyphs.filler)
            } else {
                ch
            }
        })
        .collect()
}

/// Left fold of [`merge_rows`]; `None` when there is nothing to fold.
pub fn fold_rows<I>(rows: I, glyphs: &ChartGlyphs) -> Option<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut rows = rows.into_iter();
    let first = rows.next()?.as_ref().to_owned();
    Some(rows.fold(first, |acc, row| merge_rows(&acc, row.as_ref(), glyphs)))
}

/// A row of `width` filler glyphs.
pub fn filler_row(width: usize, glyphs: &ChartGlyphs) -> String {
    std::iter::repeat(glyphs.filler).take(width).collect()
}
