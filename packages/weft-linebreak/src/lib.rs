//! UAX #14 Unicode Line Breaking Algorithm core for Weft
//!
//! This crate decides, for an arbitrary run of Unicode scalar values, which
//! inter-character positions a line may break at, which it must break at,
//! and which are off limits. It provides:
//! - Code point to line breaking class lookup over generated UCD tables
//! - Contextual class resolution (combining marks, ambiguous classes)
//! - The UAX #14 pair table as a dense, total action matrix
//! - A single-pass boundary scanner producing per-boundary verdicts
//! - A delegation seam for dictionary-segmented (SA) scripts
//!
//! The crate is organized into focused modules:
//! - `types`: break classes, actions, and boundary verdicts
//! - `classify`: code point classification over `tables`
//! - `resolve`: contextual class resolution
//! - `matrix`: the pair break matrix
//! - `scanner`: the boundary scanner
//! - `delegate`: the complex-context segmentation contract

pub mod classify;
pub mod delegate;
pub mod error;
pub mod matrix;
pub mod resolve;
pub mod scanner;
mod tables;
pub mod types;

pub use classify::{break_class, UNICODE_VERSION};
pub use delegate::ComplexContextDelegate;
pub use error::SegmentationError;
pub use matrix::PairBreakMatrix;
pub use resolve::{resolve_classes, AmbiguousResolution};
pub use scanner::LineBreakScanner;
pub use types::{BreakAction, BreakClass, BreakKind, BreakOpportunity};

/// Scans `text` with a default [`LineBreakScanner`], yielding every
/// boundary verdict. Offsets count code points.
pub fn scan_text(text: &str) -> Vec<BreakOpportunity> {
    LineBreakScanner::new().scan_str(text)
}

/// Like [`scan_text`], filtered to the boundaries a line fill actually
/// uses: the allowed and mandatory ones.
pub fn break_opportunities(text: &str) -> Vec<BreakOpportunity> {
    scan_text(text)
        .into_iter()
        .filter(|b| b.kind != BreakKind::Prohibited)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filtered_view_keeps_breakable_boundaries_only() {
        let breaks = break_opportunities("ab cd");
        assert_eq!(breaks.len(), 2);
        assert_eq!((breaks[0].offset, breaks[0].kind), (3, BreakKind::Allowed));
        assert_eq!((breaks[1].offset, breaks[1].kind), (5, BreakKind::Mandatory));
    }
}
