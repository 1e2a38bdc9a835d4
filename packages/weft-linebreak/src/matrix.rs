//! Pair Break Matrix
//!
//! Encodes the ordered UAX #14 pair rules (LB11 through LB31) as a dense
//! action table indexed by (class before boundary, class after boundary).
//! The 23-class core below transcribes the published pair table; rows and
//! columns for the classes the scanner handles out of band (hard breaks,
//! spaces) are filled with fixed, documented actions so lookups are total.

use once_cell::sync::Lazy;

use crate::types::{BreakAction, BreakClass};

/// Core pair-table class order. Indexes [`CORE_PAIRS`] on both axes.
const CORE_ORDER: [BreakClass; 23] = [
    BreakClass::OP,
    BreakClass::CL,
    BreakClass::CP,
    BreakClass::QU,
    BreakClass::GL,
    BreakClass::NS,
    BreakClass::EX,
    BreakClass::SY,
    BreakClass::IS,
    BreakClass::PR,
    BreakClass::PO,
    BreakClass::NU,
    BreakClass::AL,
    BreakClass::ID,
    BreakClass::IN,
    BreakClass::HY,
    BreakClass::BA,
    BreakClass::BB,
    BreakClass::B2,
    BreakClass::ZW,
    BreakClass::CM,
    BreakClass::WJ,
    BreakClass::CB,
];

const P: BreakAction = BreakAction::Prohibited;
const D: BreakAction = BreakAction::DirectAllowed;
const I: BreakAction = BreakAction::IndirectAllowed;

/// The published pair table. Row: class before the boundary; column: class
/// after it, both in [`CORE_ORDER`]. The CM row and column carry the AL
/// actions since marks reach the matrix already resolved to their base.
#[rustfmt::skip]
const CORE_PAIRS: [[BreakAction; 23]; 23] = [
    //        OP CL CP QU GL NS EX SY IS PR PO NU AL ID IN HY BA BB B2 ZW CM WJ CB
    /* OP */ [P, P, P, P, P, P, P, P, P, P, P, P, P, P, P, P, P, P, P, P, P, P, P],
    /* CL */ [D, P, P, I, I, P, P, P, P, I, I, D, D, D, D, I, I, D, D, P, D, P, D],
    /* CP */ [D, P, P, I, I, P, P, P, P, I, I, I, I, D, D, I, I, D, D, P, I, P, D],
    /* QU */ [P, P, P, I, I, I, P, P, P, I, I, I, I, I, I, I, I, I, I, P, I, P, I],
    /* GL */ [I, P, P, I, I, I, P, P, P, I, I, I, I, I, I, I, I, I, I, P, I, P, I],
    /* NS */ [D, P, P, I, I, I, P, P, P, D, D, D, D, D, D, I, I, D, D, P, D, P, D],
    /* EX */ [D, P, P, I, I, I, P, P, P, D, D, D, D, D, I, I, I, D, D, P, D, P, D],
    /* SY */ [D, P, P, I, I, I, P, P, P, D, D, I, D, D, D, I, I, D, D, P, D, P, D],
    /* IS */ [D, P, P, I, I, I, P, P, P, D, D, I, I, D, D, I, I, D, D, P, I, P, D],
    /* PR */ [I, P, P, I, I, I, P, P, P, D, D, I, I, I, D, I, I, D, D, P, I, P, D],
    /* PO */ [I, P, P, I, I, I, P, P, P, D, D, I, I, D, D, I, I, D, D, P, I, P, D],
    /* NU */ [I, P, P, I, I, I, P, P, P, I, I, I, I, D, I, I, I, D, D, P, I, P, D],
    /* AL */ [I, P, P, I, I, I, P, P, P, D, D, I, I, D, I, I, I, D, D, P, I, P, D],
    /* ID */ [D, P, P, I, I, I, P, P, P, D, I, D, D, D, I, I, I, D, D, P, D, P, D],
    /* IN */ [D, P, P, I, I, I, P, P, P, D, D, D, D, D, I, I, I, D, D, P, D, P, D],
    /* HY */ [D, P, P, I, D, I, P, P, P, D, D, I, D, D, D, I, I, D, D, P, D, P, D],
    /* BA */ [D, P, P, I, D, I, P, P, P, D, D, D, D, D, D, I, I, D, D, P, D, P, D],
    /* BB */ [I, P, P, I, I, I, P, P, P, I, I, I, I, I, I, I, I, I, I, P, I, P, D],
    /* B2 */ [D, P, P, I, I, I, P, P, P, D, D, D, D, D, D, I, I, D, P, P, D, P, D],
    /* ZW */ [D, D, D, D, D, D, D, D, D, D, D, D, D, D, D, D, D, D, D, P, D, D, D],
    /* CM */ [I, P, P, I, I, I, P, P, P, D, D, I, I, D, I, I, I, D, D, P, I, P, D],
    /* WJ */ [I, P, P, I, I, I, P, P, P, I, I, I, I, I, I, I, I, I, I, P, I, P, I],
    /* CB */ [D, P, P, I, I, D, P, P, P, D, D, D, D, D, D, D, D, D, D, P, D, P, D],
];

/// Dense action table over the full [`BreakClass`] enum.
pub struct PairBreakMatrix {
    actions: [[BreakAction; BreakClass::COUNT]; BreakClass::COUNT],
}

static MATRIX: Lazy<PairBreakMatrix> = Lazy::new(PairBreakMatrix::build);

impl PairBreakMatrix {
    /// Shared process-wide matrix, built on first use.
    pub fn global() -> &'static PairBreakMatrix {
        &MATRIX
    }

    fn build() -> PairBreakMatrix {
        let mut actions = [[BreakAction::DirectAllowed; BreakClass::COUNT]; BreakClass::COUNT];

        // Core pairs first, then the out-of-band rows and columns on top.
        for (ri, &row) in CORE_ORDER.iter().enumerate() {
            for (ci, &col) in CORE_ORDER.iter().enumerate() {
                actions[row as usize][col as usize] = CORE_PAIRS[ri][ci];
            }
        }

        const HARD: [BreakClass; 4] =
            [BreakClass::BK, BreakClass::CR, BreakClass::LF, BreakClass::NL];

        for after in 0..BreakClass::COUNT {
            for hard in HARD {
                actions[hard as usize][after] = BreakAction::Mandatory;
            }
            actions[BreakClass::SP as usize][after] = BreakAction::DirectAllowed;
        }
        for before in 0..BreakClass::COUNT {
            if HARD.iter().any(|&h| h as usize == before) {
                continue;
            }
            for hard in HARD {
                actions[before][hard as usize] = BreakAction::Prohibited;
            }
            actions[before][BreakClass::SP as usize] = BreakAction::Prohibited;
        }
        // CR LF stays one unit.
        actions[BreakClass::CR as usize][BreakClass::LF as usize] = BreakAction::Prohibited;

        PairBreakMatrix { actions }
    }

    /// Action for a (before, after) class pair. Total: SA, AI, SG, and XX
    /// fold to AL on both axes, so even unresolved classes get an answer.
    pub fn lookup(&self, before: BreakClass, after: BreakClass) -> BreakAction {
        self.actions[Self::fold(before) as usize][Self::fold(after) as usize]
    }

    fn fold(class: BreakClass) -> BreakClass {
        match class {
            BreakClass::SA | BreakClass::AI | BreakClass::SG | BreakClass::XX => BreakClass::AL,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BreakAction::*;
    use crate::types::BreakClass::{self, *};

    fn lookup(before: BreakClass, after: BreakClass) -> BreakAction {
        PairBreakMatrix::global().lookup(before, after)
    }

    #[test]
    fn published_pair_samples() {
        // No break after open or before close punctuation.
        assert_eq!(lookup(OP, AL), Prohibited);
        assert_eq!(lookup(OP, ID), Prohibited);
        assert_eq!(lookup(AL, CL), Prohibited);
        assert_eq!(lookup(NU, CP), Prohibited);
        // Quotes glue to what follows; nonstarters refuse a break before.
        assert_eq!(lookup(QU, OP), Prohibited);
        assert_eq!(lookup(CL, NS), Prohibited);
        assert_eq!(lookup(ID, NS), IndirectAllowed);
        // Em-dash pairs never split.
        assert_eq!(lookup(B2, B2), Prohibited);
        // Ordinary text breaks only across spaces.
        assert_eq!(lookup(AL, AL), IndirectAllowed);
        assert_eq!(lookup(NU, NU), IndirectAllowed);
        assert_eq!(lookup(AL, NU), IndirectAllowed);
        assert_eq!(lookup(HY, NU), IndirectAllowed);
        // Ideographs break directly.
        assert_eq!(lookup(ID, ID), DirectAllowed);
        assert_eq!(lookup(AL, ID), DirectAllowed);
        // Zero width space permits a break after itself.
        assert_eq!(lookup(ZW, AL), DirectAllowed);
        assert_eq!(lookup(ZW, ID), DirectAllowed);
        // Glue and word joiner prohibit breaks on both sides.
        assert_eq!(lookup(GL, AL), IndirectAllowed);
        assert_eq!(lookup(AL, GL), IndirectAllowed);
        assert_eq!(lookup(AL, WJ), Prohibited);
        assert_eq!(lookup(WJ, AL), IndirectAllowed);
    }

    #[test]
    fn out_of_band_rows_and_columns() {
        for &after in &all_classes() {
            assert_eq!(lookup(BK, after), Mandatory);
            assert_eq!(lookup(LF, after), Mandatory);
            assert_eq!(lookup(NL, after), Mandatory);
        }
        assert_eq!(lookup(CR, LF), Prohibited);
        assert_eq!(lookup(CR, AL), Mandatory);
        assert_eq!(lookup(AL, BK), Prohibited);
        assert_eq!(lookup(AL, CR), Prohibited);
        assert_eq!(lookup(AL, SP), Prohibited);
        assert_eq!(lookup(SP, AL), DirectAllowed);
    }

    #[test]
    fn lookup_is_total() {
        for &before in &all_classes() {
            for &after in &all_classes() {
                let _ = lookup(before, after);
            }
        }
        // Unresolved classes fold to AL.
        assert_eq!(lookup(SA, SA), lookup(AL, AL));
        assert_eq!(lookup(XX, ID), lookup(AL, ID));
    }

    fn all_classes() -> [BreakClass; BreakClass::COUNT] {
        [
            BK, CR, LF, NL, SP, ZW, WJ, GL, CM, B2, BA, BB, HY, CB, CL, CP, EX, IN, IS, NU, OP,
            PO, PR, QU, SY, AL, AI, ID, NS, SA, SG, XX,
        ]
    }
}
