// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Termgantt and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smol_str::SmolStr;

const ELLIPSIS: char = '…';

/// Width in chars. Labels and rows are measured this way everywhere.
pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Shortens `label` to at most `max` chars, marking the cut with `…`. `None` keeps it whole.
pub(crate) fn fit_label(label: &str, max: Option<usize>) -> SmolStr {
    let Some(max) = max else {
        return SmolStr::new(label);
    };
    if char_len(label) <= max {
        return SmolStr::new(label);
    }

    let kept = max.saturating_sub(1);
    let mut out = label.chars().take(kept).collect::<String>();
    if max > 0 {
        out.push(ELLIPSIS);
    }
    SmolStr::new(out)
}

/// Right-aligns `text` to `width` chars; longer text is returned unchanged.
pub(crate) fn pad_left(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(char_len(text));
    let mut out = String::with_capacity(text.len() + pad);
    out.extend(std::iter::repeat(' ').take(pad));
    out.push_str(text);
    out
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{char_len, fit_label, pad_left};

    #[rstest]
    #[case("deploy", None, "deploy")]
    #[case("deploy", Some(6), "deploy")]
    #[case("deploy", Some(4), "dep…")]
    #[case("deploy", Some(1), "…")]
    #[case("deploy", Some(0), "")]
    #[case("größenänderung", Some(5), "größ…")]
    fn fit_label_cuts_by_chars(
        #[case] label: &str,
        #[case] max: Option<usize>,
        #[case] expected: &str,
    ) {
        let fitted = fit_label(label, max);
        assert_eq!(fitted, expected);
        if let Some(max) = max {
            assert!(char_len(&fitted) <= max);
        }
    }

    #[test]
    fn pad_left_right_aligns_by_chars() {
        assert_eq!(pad_left("ab", 4), "  ab");
        assert_eq!(pad_left("αβ", 3), " αβ");
        assert_eq!(pad_left("abcdef", 3), "abcdef");
        assert_eq!(pad_left("", 2), "  ");
    }
}
