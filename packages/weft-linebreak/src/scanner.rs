//! Break Opportunity Scanner
//!
//! Walks a run of code points once and classifies every inter-character
//! boundary as prohibited, allowed, or mandatory. Hard breaks, space runs,
//! combining marks, numeric expressions, and complex-context runs are
//! handled here; everything else defers to the pair matrix.

use log::{debug, warn};

use crate::classify::break_class;
use crate::delegate::ComplexContextDelegate;
use crate::matrix::PairBreakMatrix;
use crate::resolve::{resolve_classes, AmbiguousResolution};
use crate::types::{BreakAction, BreakClass, BreakKind, BreakOpportunity};

/// Stateless line break scanner.
///
/// Holds only configuration: an optional complex-context delegate and the
/// ambiguous-class policy. One scanner can serve any number of concurrent
/// scans; it is `Send + Sync` because the delegate is required to be.
#[derive(Default)]
pub struct LineBreakScanner {
    delegate: Option<Box<dyn ComplexContextDelegate>>,
    ambiguous: AmbiguousResolution,
}

impl LineBreakScanner {
    /// Scanner with no delegate and the default ambiguous-class policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a segmenter for complex-context (SA) script runs.
    pub fn with_delegate(mut self, delegate: Box<dyn ComplexContextDelegate>) -> Self {
        self.delegate = Some(delegate);
        self
    }

    /// Sets the policy for the ambiguous (AI) class.
    pub fn with_ambiguous_resolution(mut self, ambiguous: AmbiguousResolution) -> Self {
        self.ambiguous = ambiguous;
        self
    }

    /// Classifies every boundary of `text`.
    ///
    /// For n code points the result has exactly n + 1 entries, offsets 0
    /// through n in increasing order. Boundary 0 is always prohibited and,
    /// for non-empty input, boundary n is always mandatory; empty input
    /// yields the single prohibited boundary 0. Deterministic and
    /// infallible: delegate errors are logged and degrade to the
    /// no-delegate fallback.
    pub fn scan(&self, text: &[char]) -> Vec<BreakOpportunity> {
        let n = text.len();
        let mut out = Vec::with_capacity(n + 1);
        out.push(BreakOpportunity { offset: 0, kind: BreakKind::Prohibited });
        if n == 0 {
            return out;
        }

        let raw: Vec<BreakClass> = text.iter().map(|&c| break_class(c as u32)).collect();
        let resolved = resolve_classes(&raw, self.ambiguous);
        let attached = attachment_mask(&raw);
        let numeric = numeric_run_mask(&resolved);
        let sa_interior = self.delegate_sa_runs(text, &resolved);
        let matrix = PairBreakMatrix::global();

        for i in 1..n {
            let kind = match raw[i - 1] {
                BreakClass::BK | BreakClass::NL | BreakClass::LF => BreakKind::Mandatory,
                BreakClass::CR => {
                    if raw[i] == BreakClass::LF {
                        BreakKind::Prohibited
                    } else {
                        BreakKind::Mandatory
                    }
                }
                _ => match raw[i] {
                    // Never break before a hard break or a space.
                    BreakClass::BK | BreakClass::CR | BreakClass::LF | BreakClass::NL
                    | BreakClass::SP => BreakKind::Prohibited,
                    BreakClass::CM if attached[i] => BreakKind::Prohibited,
                    _ => {
                        if let Some(kind) = sa_interior[i] {
                            kind
                        } else if numeric[i] {
                            BreakKind::Prohibited
                        } else if resolved[i - 1] == BreakClass::SP {
                            space_run_verdict(&resolved, i, matrix)
                        } else {
                            match matrix.lookup(resolved[i - 1], resolved[i]) {
                                BreakAction::DirectAllowed => BreakKind::Allowed,
                                BreakAction::Mandatory => BreakKind::Mandatory,
                                // Indirect with no space in between stays glued.
                                BreakAction::IndirectAllowed | BreakAction::Prohibited => {
                                    BreakKind::Prohibited
                                }
                            }
                        }
                    }
                },
            };
            out.push(BreakOpportunity { offset: i, kind });
        }

        out.push(BreakOpportunity { offset: n, kind: BreakKind::Mandatory });
        out
    }

    /// Convenience wrapper over [`scan`](Self::scan) for `&str` input.
    /// Offsets count code points, not bytes.
    pub fn scan_str(&self, text: &str) -> Vec<BreakOpportunity> {
        let chars: Vec<char> = text.chars().collect();
        self.scan(&chars)
    }

    /// Resolves interior boundaries of every maximal SA run. `None` for
    /// boundaries not interior to any run.
    fn delegate_sa_runs(
        &self,
        text: &[char],
        resolved: &[BreakClass],
    ) -> Vec<Option<BreakKind>> {
        let n = text.len();
        let mut verdicts = vec![None; n + 1];
        let mut i = 0;
        while i < n {
            if resolved[i] != BreakClass::SA {
                i += 1;
                continue;
            }
            let start = i;
            while i < n && resolved[i] == BreakClass::SA {
                i += 1;
            }
            let run = &text[start..i];
            let allowed: Vec<usize> = match &self.delegate {
                Some(delegate) => match delegate.segment(run) {
                    Ok(offsets) => offsets,
                    Err(err) => {
                        warn!(
                            "complex-context segmentation failed for {} code points: {err}; \
                             treating run as unbreakable",
                            run.len()
                        );
                        Vec::new()
                    }
                },
                None => {
                    debug!(
                        "no complex-context delegate; treating {} code point run as unbreakable",
                        run.len()
                    );
                    Vec::new()
                }
            };
            for boundary in start + 1..i {
                verdicts[boundary] = Some(BreakKind::Prohibited);
            }
            for offset in allowed {
                if offset > 0 && offset < run.len() {
                    verdicts[start + offset] = Some(BreakKind::Allowed);
                }
            }
        }
        verdicts
    }
}

/// Verdict for a boundary whose left neighbor is SP: consult the matrix
/// with the last non-space class before the run. Indirect actions become
/// breaks here, that is what the intervening space buys.
fn space_run_verdict(
    resolved: &[BreakClass],
    boundary: usize,
    matrix: &PairBreakMatrix,
) -> BreakKind {
    let mut before = boundary - 1;
    loop {
        if resolved[before] != BreakClass::SP {
            break;
        }
        if before == 0 {
            // Spaces reach start of text.
            return BreakKind::Allowed;
        }
        before -= 1;
    }
    match matrix.lookup(resolved[before], resolved[boundary]) {
        BreakAction::Prohibited => BreakKind::Prohibited,
        _ => BreakKind::Allowed,
    }
}

/// `attached[i]` is true when code point `i` is a CM bound to a base:
/// directly or through a run of marks whose base is not a hard break,
/// space, or zero width space.
fn attachment_mask(raw: &[BreakClass]) -> Vec<bool> {
    let mut attached = vec![false; raw.len()];
    for i in 1..raw.len() {
        if raw[i] != BreakClass::CM {
            continue;
        }
        attached[i] = if raw[i - 1] == BreakClass::CM {
            attached[i - 1]
        } else {
            !raw[i - 1].is_mandatory()
                && !matches!(raw[i - 1], BreakClass::SP | BreakClass::ZW)
        };
    }
    attached
}

/// Marks boundaries interior to maximal numeric runs of the shape
/// `(PR|PO)? NU (NU|SY|IS)* (CL|CP)? (PR|PO)?`, which must stay whole.
/// `mask[i]` refers to the boundary before code point `i`.
fn numeric_run_mask(resolved: &[BreakClass]) -> Vec<bool> {
    let n = resolved.len();
    let mut mask = vec![false; n + 1];
    let mut i = 0;
    while i < n {
        let start = i;
        let mut j = i;
        if matches!(resolved[j], BreakClass::PR | BreakClass::PO)
            && j + 1 < n
            && resolved[j + 1] == BreakClass::NU
        {
            j += 1;
        }
        if resolved[j] != BreakClass::NU {
            i += 1;
            continue;
        }
        j += 1;
        while j < n && matches!(resolved[j], BreakClass::NU | BreakClass::SY | BreakClass::IS) {
            j += 1;
        }
        if j < n && matches!(resolved[j], BreakClass::CL | BreakClass::CP) {
            j += 1;
        }
        if j < n && matches!(resolved[j], BreakClass::PR | BreakClass::PO) {
            j += 1;
        }
        for boundary in start + 1..j {
            mask[boundary] = true;
        }
        i = j;
    }
    mask
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SegmentationError;

    fn kinds(text: &str) -> Vec<BreakKind> {
        LineBreakScanner::new()
            .scan_str(text)
            .into_iter()
            .map(|b| b.kind)
            .collect()
    }

    #[test]
    fn empty_text_has_one_prohibited_boundary() {
        let breaks = LineBreakScanner::new().scan(&[]);
        assert_eq!(breaks, vec![BreakOpportunity { offset: 0, kind: BreakKind::Prohibited }]);
    }

    #[test]
    fn boundary_offsets_cover_the_text() {
        let breaks = LineBreakScanner::new().scan_str("hello world");
        assert_eq!(breaks.len(), 12);
        for (i, b) in breaks.iter().enumerate() {
            assert_eq!(b.offset, i);
        }
    }

    #[test]
    fn space_separated_words() {
        use BreakKind::*;
        // "ab cd": break allowed only after the space run.
        assert_eq!(
            kinds("ab cd"),
            vec![Prohibited, Prohibited, Prohibited, Allowed, Prohibited, Mandatory]
        );
    }

    #[test]
    fn no_break_inside_a_word() {
        for b in LineBreakScanner::new().scan_str("word").iter().take(4) {
            assert_eq!(b.kind, BreakKind::Prohibited);
        }
    }

    #[test]
    fn crlf_is_atomic() {
        use BreakKind::*;
        // Boundary inside CR LF is prohibited, after LF mandatory.
        assert_eq!(
            kinds("a\r\nb"),
            vec![Prohibited, Prohibited, Prohibited, Mandatory, Mandatory]
        );
        // Lone CR still forces a break.
        assert_eq!(kinds("a\rb"), vec![Prohibited, Prohibited, Mandatory, Mandatory]);
    }

    #[test]
    fn numeric_expression_is_atomic() {
        let breaks = LineBreakScanner::new().scan_str("$12,345.67");
        for b in &breaks[1..10] {
            assert_eq!(b.kind, BreakKind::Prohibited, "boundary {}", b.offset);
        }
        assert_eq!(breaks[10].kind, BreakKind::Mandatory);
    }

    #[test]
    fn ideographs_break_directly() {
        use BreakKind::*;
        assert_eq!(kinds("\u{4E2D}\u{6587}"), vec![Prohibited, Allowed, Mandatory]);
    }

    #[test]
    fn hyphen_allows_break_after_but_not_before() {
        use BreakKind::*;
        // "co-op" may break after the hyphen only.
        assert_eq!(
            kinds("co-op"),
            vec![Prohibited, Prohibited, Prohibited, Allowed, Prohibited, Mandatory]
        );
        // But a hyphen glued to a number stays put: "-1".
        assert_eq!(kinds("-1"), vec![Prohibited, Prohibited, Mandatory]);
    }

    #[test]
    fn zero_width_space_permits_break() {
        use BreakKind::*;
        assert_eq!(kinds("a\u{200B}b"), vec![Prohibited, Prohibited, Allowed, Mandatory]);
    }

    #[test]
    fn combining_mark_glues_to_base() {
        use BreakKind::*;
        // e + combining acute + space + b
        assert_eq!(
            kinds("e\u{0301} b"),
            vec![Prohibited, Prohibited, Prohibited, Allowed, Mandatory]
        );
    }

    #[test]
    fn sa_run_without_delegate_is_unbreakable() {
        // Thai "sawasdee" fragment; all interior boundaries prohibited.
        let breaks = LineBreakScanner::new().scan_str("\u{0E2A}\u{0E27}\u{0E31}\u{0E2A}");
        for b in &breaks[..4] {
            assert_eq!(b.kind, BreakKind::Prohibited);
        }
    }

    struct EveryOther;

    impl ComplexContextDelegate for EveryOther {
        fn segment(&self, run: &[char]) -> Result<Vec<usize>, SegmentationError> {
            Ok((1..run.len()).step_by(2).collect())
        }
    }

    struct AlwaysFails;

    impl ComplexContextDelegate for AlwaysFails {
        fn segment(&self, _run: &[char]) -> Result<Vec<usize>, SegmentationError> {
            Err(SegmentationError::DictionaryUnavailable)
        }
    }

    #[test]
    fn sa_run_splices_delegate_offsets() {
        let scanner = LineBreakScanner::new().with_delegate(Box::new(EveryOther));
        let breaks = scanner.scan_str("\u{0E2A}\u{0E27}\u{0E31}\u{0E2A}");
        assert_eq!(breaks[1].kind, BreakKind::Allowed);
        assert_eq!(breaks[2].kind, BreakKind::Prohibited);
        assert_eq!(breaks[3].kind, BreakKind::Allowed);
    }

    #[test]
    fn failing_delegate_degrades_to_unbreakable() {
        let scanner = LineBreakScanner::new().with_delegate(Box::new(AlwaysFails));
        let breaks = scanner.scan_str("\u{0E2A}\u{0E27}\u{0E31}\u{0E2A}");
        for b in &breaks[..4] {
            assert_eq!(b.kind, BreakKind::Prohibited);
        }
    }

    #[test]
    fn ambiguous_policy_changes_breaks() {
        // U+00D7 is AI: glued to a preceding letter as AL, a direct break
        // target as ID.
        let alphabetic = LineBreakScanner::new();
        let ideographic =
            LineBreakScanner::new().with_ambiguous_resolution(AmbiguousResolution::Ideographic);
        let text = "a\u{00D7}";
        assert_eq!(alphabetic.scan_str(text)[1].kind, BreakKind::Prohibited);
        assert_eq!(ideographic.scan_str(text)[1].kind, BreakKind::Allowed);
    }
}
