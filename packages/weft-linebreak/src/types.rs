//! Line Breaking Types and Enums
//!
//! This module defines the types, enums, and data structures used
//! for the Unicode Line Breaking Algorithm implementation.

/// UAX #14 line breaking class.
///
/// A closed enumeration covering every code point: classes present in newer
/// UCD revisions but absent here are folded at table-generation time
/// (HL folds to AL, CJ to NS, ZWJ to CM, Hangul jamo and syllables to ID).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BreakClass {
    // Non-tailorable classes
    BK = 0,  // Mandatory Break
    CR = 1,  // Carriage Return
    LF = 2,  // Line Feed
    NL = 3,  // Next Line
    SP = 4,  // Space
    ZW = 5,  // Zero Width Space
    WJ = 6,  // Word Joiner
    GL = 7,  // Non-breaking Glue
    CM = 8,  // Combining Mark

    // Break opportunities
    B2 = 9,  // Break Opportunity Before and After
    BA = 10, // Break After
    BB = 11, // Break Before
    HY = 12, // Hyphen
    CB = 13, // Contingent Break Opportunity

    // Characters prohibiting certain breaks
    CL = 14, // Close Punctuation
    CP = 15, // Close Parenthesis
    EX = 16, // Exclamation/Interrogation
    IN = 17, // Inseparable
    IS = 18, // Infix Numeric Separator
    NU = 19, // Numeric
    OP = 20, // Open Punctuation
    PO = 21, // Postfix Numeric
    PR = 22, // Prefix Numeric
    QU = 23, // Quotation
    SY = 24, // Symbols Allowing Break After

    // Other characters
    AL = 25, // Alphabetic
    AI = 26, // Ambiguous (Alphabetic or Ideographic)
    ID = 27, // Ideographic
    NS = 28, // Nonstarter
    SA = 29, // Complex Context Dependent (South East Asian)
    SG = 30, // Surrogate
    XX = 31, // Unknown
}

impl BreakClass {
    /// Number of variants, used to size the pair matrix.
    pub const COUNT: usize = 32;

    /// True for the classes that force a break after themselves.
    pub fn is_mandatory(self) -> bool {
        matches!(self, BreakClass::BK | BreakClass::CR | BreakClass::LF | BreakClass::NL)
    }
}

/// Action recorded in the pair break matrix for a (before, after) class pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BreakAction {
    /// Breaking between the pair is never permitted, even across spaces.
    Prohibited = 0,
    /// Breaking between the pair is permitted with no intervening space.
    DirectAllowed = 1,
    /// Breaking is permitted only when one or more SP code points intervene.
    IndirectAllowed = 2,
    /// Breaking between the pair is required.
    Mandatory = 3,
}

/// Final verdict for a single inter-character boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BreakKind {
    /// A line must not break at this boundary.
    Prohibited = 0,
    /// A line is allowed to break at this boundary.
    Allowed = 1,
    /// A line must break at this boundary.
    Mandatory = 2,
}

/// A classified inter-character boundary.
///
/// `offset` indexes the boundary between code point `offset - 1` and code
/// point `offset`; a scan of n code points yields exactly n + 1 of these
/// with strictly increasing offsets from 0 to n.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakOpportunity {
    /// Code point position of the boundary.
    pub offset: usize,
    /// Boundary verdict.
    pub kind: BreakKind,
}
