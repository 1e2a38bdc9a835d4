//! Code Point Classification
//!
//! Maps any Unicode scalar value (and, totally, any `u32`) to its line
//! breaking class via a two-tier lookup: a dense direct-indexed array for
//! the hot low range, a binary search over sorted ranges above it.

use crate::tables::{DENSE_BREAK_CLASS, DENSE_LIMIT, RANGE_BREAK_CLASS};
use crate::types::BreakClass;

/// Unicode Character Database revision the classification tables were
/// generated from, as (major, minor, micro).
///
/// A handful of classes newer than this enumeration are folded during
/// generation; see the notes on [`BreakClass`].
pub const UNICODE_VERSION: (u8, u8, u8) = (8, 0, 0);

/// Returns the line breaking class of a code point.
///
/// Total over all of `u32`: unassigned code points, private use, and values
/// beyond U+10FFFF classify as [`BreakClass::XX`]; unpaired surrogates
/// classify as [`BreakClass::SG`]. Never panics.
pub fn break_class(cp: u32) -> BreakClass {
    if cp < DENSE_LIMIT {
        return DENSE_BREAK_CLASS[cp as usize];
    }
    match RANGE_BREAK_CLASS.binary_search_by(|&(start, end, _)| {
        if end < cp {
            core::cmp::Ordering::Less
        } else if start > cp {
            core::cmp::Ordering::Greater
        } else {
            core::cmp::Ordering::Equal
        }
    }) {
        Ok(idx) => RANGE_BREAK_CLASS[idx].2,
        Err(_) => BreakClass::XX,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BreakClass::*;

    #[test]
    fn ascii_classes() {
        assert_eq!(break_class('a' as u32), AL);
        assert_eq!(break_class('0' as u32), NU);
        assert_eq!(break_class(' ' as u32), SP);
        assert_eq!(break_class('-' as u32), HY);
        assert_eq!(break_class('(' as u32), OP);
        assert_eq!(break_class(')' as u32), CP);
        assert_eq!(break_class('$' as u32), PR);
        assert_eq!(break_class('%' as u32), PO);
        assert_eq!(break_class(',' as u32), IS);
        assert_eq!(break_class('/' as u32), SY);
        assert_eq!(break_class('!' as u32), EX);
        assert_eq!(break_class('"' as u32), QU);
    }

    #[test]
    fn control_classes() {
        assert_eq!(break_class(0x000A), LF);
        assert_eq!(break_class(0x000D), CR);
        assert_eq!(break_class(0x0085), NL);
        assert_eq!(break_class(0x000B), BK);
        assert_eq!(break_class(0x2028), BK);
        assert_eq!(break_class(0x2029), BK);
        assert_eq!(break_class(0x200B), ZW);
        assert_eq!(break_class(0x2060), WJ);
        assert_eq!(break_class(0xFEFF), WJ);
        assert_eq!(break_class(0x00A0), GL);
    }

    #[test]
    fn script_classes() {
        assert_eq!(break_class(0x0301), CM); // combining acute
        assert_eq!(break_class(0x4E2D), ID); // CJK ideograph
        assert_eq!(break_class(0x0E01), SA); // Thai ko kai
        assert_eq!(break_class(0x1100), ID); // Hangul jamo, folded
        assert_eq!(break_class(0xAC00), ID); // Hangul syllable, folded
        assert_eq!(break_class(0x05D0), AL); // Hebrew alef, HL folded
        assert_eq!(break_class(0x30C3), NS); // small tsu, CJ folded
        assert_eq!(break_class(0x0660), NU); // Arabic-Indic zero
        assert_eq!(break_class(0x3001), CL); // ideographic comma
        assert_eq!(break_class(0x00D7), AI); // multiplication sign
        assert_eq!(break_class(0xFFFC), CB); // object replacement
    }

    #[test]
    fn total_over_code_space() {
        // Every code point, surrogates included, must classify without panic.
        for cp in 0..=0x10FFFFu32 {
            let _ = break_class(cp);
        }
        assert_eq!(break_class(0xD800), SG);
        assert_eq!(break_class(0xDFFF), SG);
        assert_eq!(break_class(0xE000), XX); // private use
        assert_eq!(break_class(0x110000), XX); // beyond Unicode
        assert_eq!(break_class(u32::MAX), XX);
    }

    #[test]
    fn range_table_is_sorted_and_disjoint() {
        let mut prev_end = DENSE_LIMIT - 1;
        for &(start, end, _) in RANGE_BREAK_CLASS {
            assert!(start > prev_end, "overlap at {start:#X}");
            assert!(start <= end);
            prev_end = end;
        }
    }
}
