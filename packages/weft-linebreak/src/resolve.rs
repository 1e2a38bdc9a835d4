//! Contextual Class Resolution
//!
//! Rewrites raw per-code-point break classes into the effective classes the
//! pair matrix operates on: combining marks inherit their base, ambiguous
//! and unknown classes collapse to concrete ones.

use crate::types::BreakClass;

/// Policy for the AI (ambiguous East Asian width) class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AmbiguousResolution {
    /// Treat AI as alphabetic (non-East-Asian context).
    #[default]
    Alphabetic,
    /// Treat AI as ideographic (East Asian context).
    Ideographic,
}

/// Resolves raw classes into effective classes, index for index.
///
/// Rules applied, in order per position:
/// - CM following an eligible base (anything except BK, CR, LF, NL, SP, ZW)
///   inherits the base's resolved class; CM runs chain through the first
///   mark. An unattached CM, including one at the start of text, resolves
///   to AL.
/// - AI resolves to AL or ID per `ambiguous`.
/// - SG and XX resolve to AL so malformed input still breaks reasonably.
/// - SA passes through; complex-context runs are segmented downstream.
///
/// Infallible; the output is the same length as the input.
pub fn resolve_classes(
    raw: &[BreakClass],
    ambiguous: AmbiguousResolution,
) -> Vec<BreakClass> {
    let mut out: Vec<BreakClass> = Vec::with_capacity(raw.len());
    for (i, &class) in raw.iter().enumerate() {
        let resolved = match class {
            BreakClass::CM => {
                if i == 0 {
                    BreakClass::AL
                } else {
                    let base = out[i - 1];
                    if base.is_mandatory() || matches!(base, BreakClass::SP | BreakClass::ZW) {
                        BreakClass::AL
                    } else {
                        base
                    }
                }
            }
            BreakClass::AI => match ambiguous {
                AmbiguousResolution::Alphabetic => BreakClass::AL,
                AmbiguousResolution::Ideographic => BreakClass::ID,
            },
            BreakClass::SG | BreakClass::XX => BreakClass::AL,
            other => other,
        };
        out.push(resolved);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BreakClass::*;

    #[test]
    fn combining_mark_inherits_base() {
        let resolved = resolve_classes(&[NU, CM, CM], AmbiguousResolution::default());
        assert_eq!(resolved, vec![NU, NU, NU]);
    }

    #[test]
    fn mark_chain_reads_previously_resolved_output() {
        // Each CM resolves off the already-resolved predecessor, so a chain
        // behind an ineligible base stays AL throughout.
        let resolved = resolve_classes(&[ZW, CM, CM, CM], AmbiguousResolution::default());
        assert_eq!(resolved, vec![ZW, AL, AL, AL]);
    }

    #[test]
    fn combining_mark_after_space_is_alphabetic() {
        let resolved = resolve_classes(&[SP, CM], AmbiguousResolution::default());
        assert_eq!(resolved, vec![SP, AL]);
        let resolved = resolve_classes(&[CM, AL], AmbiguousResolution::default());
        assert_eq!(resolved, vec![AL, AL]);
        let resolved = resolve_classes(&[LF, CM], AmbiguousResolution::default());
        assert_eq!(resolved, vec![LF, AL]);
    }

    #[test]
    fn ambiguous_policy() {
        let resolved = resolve_classes(&[AI], AmbiguousResolution::Alphabetic);
        assert_eq!(resolved, vec![AL]);
        let resolved = resolve_classes(&[AI], AmbiguousResolution::Ideographic);
        assert_eq!(resolved, vec![ID]);
    }

    #[test]
    fn unknown_and_surrogate_resolve_to_alphabetic() {
        let resolved = resolve_classes(&[XX, SG, SA], AmbiguousResolution::default());
        assert_eq!(resolved, vec![AL, AL, SA]);
    }
}
