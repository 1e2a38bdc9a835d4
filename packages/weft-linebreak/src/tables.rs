//! Line break classification data.
//!
//! Generated by `gen/gen_tables.py` from the Unicode Character Database
//! `LineBreak.txt` property file, with the fold map documented there
//! applied. Do not edit by hand; regenerate instead.

use crate::types::BreakClass::{self, *};

/// Code points below this limit index [`DENSE_BREAK_CLASS`] directly.
pub(crate) const DENSE_LIMIT: u32 = 0x800;

/// Direct-indexed break classes for the low range.
#[rustfmt::skip]
pub(crate) static DENSE_BREAK_CLASS: [BreakClass; DENSE_LIMIT as usize] = [
    CM, CM, CM, CM, CM, CM, CM, CM, CM, BA, LF, BK, BK, CR, CM, CM, // 0000
    CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, // 0010
    SP, EX, QU, AL, PR, PO, AL, QU, OP, CP, AL, PR, IS, HY, IS, SY, // 0020
    NU, NU, NU, NU, NU, NU, NU, NU, NU, NU, IS, IS, AL, AL, AL, EX, // 0030
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 0040
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, OP, PR, CP, AL, AL, // 0050
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 0060
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, OP, BA, CL, AL, CM, // 0070
    CM, CM, CM, CM, CM, NL, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, // 0080
    CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, // 0090
    GL, OP, PO, PR, PR, PR, AL, AI, AI, AL, AI, QU, AL, BA, AL, AL, // 00A0
    PO, PR, AI, AI, BB, AL, AI, AI, AI, AI, AI, QU, AI, AI, AI, OP, // 00B0
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 00C0
    AL, AL, AL, AL, AL, AL, AL, AI, AL, AL, AL, AL, AL, AL, AL, AL, // 00D0
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 00E0
    AL, AL, AL, AL, AL, AL, AL, AI, AL, AL, AL, AL, AL, AL, AL, AL, // 00F0
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 0100
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 0110
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 0120
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 0130
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 0140
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 0150
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 0160
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 0170
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 0180
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 0190
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 01A0
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 01B0
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 01C0
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 01D0
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 01E0
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 01F0
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 0200
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 0210
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 0220
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 0230
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 0240
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 0250
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 0260
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 0270
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 0280
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 0290
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 02A0
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 02B0
    AL, AL, AL, AL, AL, AL, AL, AI, BB, AI, AI, AI, BB, AI, AL, AL, // 02C0
    AI, AL, AL, AL, AL, AL, AL, AL, AI, AI, AI, AI, AL, AI, AL, AL, // 02D0
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 02E0
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 02F0
    CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, // 0300
    CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, // 0310
    CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, // 0320
    CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, // 0330
    CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, GL, // 0340
    CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, // 0350
    CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, // 0360
    AL, AL, AL, AL, AL, AL, AL, AL, XX, XX, AL, AL, AL, AL, IS, XX, // 0370
    XX, XX, XX, XX, AL, AL, AL, AL, AL, AL, AL, XX, AL, XX, AL, AL, // 0380
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 0390
    AL, AL, XX, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 03A0
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 03B0
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 03C0
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 03D0
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 03E0
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 03F0
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 0400
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 0410
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 0420
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 0430
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 0440
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 0450
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 0460
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 0470
    AL, AL, AL, CM, CM, CM, CM, CM, CM, CM, AL, AL, AL, AL, AL, AL, // 0480
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 0490
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 04A0
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 04B0
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 04C0
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 04D0
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 04E0
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 04F0
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 0500
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 0510
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 0520
    XX, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 0530
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 0540
    AL, AL, AL, AL, AL, AL, AL, XX, XX, AL, AL, AL, AL, AL, AL, AL, // 0550
    XX, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 0560
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 0570
    AL, AL, AL, AL, AL, AL, AL, AL, XX, IS, BA, XX, XX, AL, AL, PR, // 0580
    XX, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, // 0590
    CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, // 05A0
    CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, BA, CM, // 05B0
    AL, CM, CM, AL, CM, CM, EX, CM, XX, XX, XX, XX, XX, XX, XX, XX, // 05C0
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 05D0
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, XX, XX, XX, XX, XX, // 05E0
    AL, AL, AL, AL, AL, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, // 05F0
    AL, AL, AL, AL, AL, AL, AL, AL, AL, PO, PO, PO, IS, IS, AL, AL, // 0600
    CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, EX, CM, XX, EX, EX, // 0610
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 0620
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 0630
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, CM, CM, CM, CM, CM, // 0640
    CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, // 0650
    NU, NU, NU, NU, NU, NU, NU, NU, NU, NU, PO, NU, NU, AL, AL, AL, // 0660
    CM, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 0670
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 0680
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 0690
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 06A0
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 06B0
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 06C0
    AL, AL, AL, AL, EX, AL, CM, CM, CM, CM, CM, CM, CM, AL, AL, CM, // 06D0
    CM, CM, CM, CM, CM, AL, AL, CM, CM, AL, CM, CM, CM, CM, AL, AL, // 06E0
    NU, NU, NU, NU, NU, NU, NU, NU, NU, NU, AL, AL, AL, AL, AL, AL, // 06F0
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, XX, AL, // 0700
    AL, CM, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 0710
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 0720
    CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, // 0730
    CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, XX, XX, AL, AL, AL, // 0740
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 0750
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 0760
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 0770
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 0780
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 0790
    AL, AL, AL, AL, AL, AL, CM, CM, CM, CM, CM, CM, CM, CM, CM, CM, // 07A0
    CM, AL, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, // 07B0
    NU, NU, NU, NU, NU, NU, NU, NU, NU, NU, AL, AL, AL, AL, AL, AL, // 07C0
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, // 07D0
    AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, AL, CM, CM, CM, CM, CM, // 07E0
    CM, CM, CM, CM, AL, AL, AL, AL, IS, EX, AL, XX, XX, XX, XX, XX, // 07F0
];

/// Sorted, non-overlapping break class ranges above [`DENSE_LIMIT`].
/// Gaps classify as `XX`.
#[rustfmt::skip]
pub(crate) static RANGE_BREAK_CLASS: &[(u32, u32, BreakClass)] = &[
    (0x0800, 0x0815, AL),
    (0x0816, 0x082D, CM),
    (0x082E, 0x08D3, AL),
    (0x08D4, 0x08FF, CM),
    (0x0900, 0x0903, CM),
    (0x0904, 0x0939, AL),
    (0x093A, 0x093C, CM),
    (0x093D, 0x093D, AL),
    (0x093E, 0x094F, CM),
    (0x0950, 0x0950, AL),
    (0x0951, 0x0957, CM),
    (0x0958, 0x0961, AL),
    (0x0962, 0x0963, CM),
    (0x0964, 0x0965, BA),
    (0x0966, 0x096F, NU),
    (0x0970, 0x097F, AL),
    (0x0980, 0x0980, AL),
    (0x0981, 0x0983, CM),
    (0x0984, 0x09BB, AL),
    (0x09BC, 0x09CD, CM),
    (0x09CE, 0x09E1, AL),
    (0x09E2, 0x09E3, CM),
    (0x09E6, 0x09EF, NU),
    (0x09F0, 0x09F1, AL),
    (0x09F2, 0x09F3, PO),
    (0x09F4, 0x09FF, AL),
    (0x0A01, 0x0A03, CM),
    (0x0A04, 0x0A3B, AL),
    (0x0A3C, 0x0A4D, CM),
    (0x0A4E, 0x0A65, AL),
    (0x0A66, 0x0A6F, NU),
    (0x0A70, 0x0A71, CM),
    (0x0A72, 0x0A80, AL),
    (0x0A81, 0x0A83, CM),
    (0x0A84, 0x0ABB, AL),
    (0x0ABC, 0x0ACD, CM),
    (0x0ACE, 0x0AE5, AL),
    (0x0AE6, 0x0AEF, NU),
    (0x0AF0, 0x0AF0, AL),
    (0x0AF1, 0x0AF1, PR),
    (0x0AF2, 0x0B00, AL),
    (0x0B01, 0x0B03, CM),
    (0x0B04, 0x0B3B, AL),
    (0x0B3C, 0x0B57, CM),
    (0x0B58, 0x0B65, AL),
    (0x0B66, 0x0B6F, NU),
    (0x0B70, 0x0B81, AL),
    (0x0B82, 0x0B82, CM),
    (0x0B83, 0x0BBD, AL),
    (0x0BBE, 0x0BCD, CM),
    (0x0BCE, 0x0BE5, AL),
    (0x0BE6, 0x0BEF, NU),
    (0x0BF0, 0x0BF8, AL),
    (0x0BF9, 0x0BF9, PR),
    (0x0BFA, 0x0C00, AL),
    (0x0C01, 0x0C03, CM),
    (0x0C04, 0x0C3D, AL),
    (0x0C3E, 0x0C56, CM),
    (0x0C57, 0x0C65, AL),
    (0x0C66, 0x0C6F, NU),
    (0x0C70, 0x0C81, AL),
    (0x0C82, 0x0C83, CM),
    (0x0C84, 0x0CBB, AL),
    (0x0CBC, 0x0CD6, CM),
    (0x0CD7, 0x0CE5, AL),
    (0x0CE6, 0x0CEF, NU),
    (0x0CF0, 0x0D01, AL),
    (0x0D02, 0x0D03, CM),
    (0x0D04, 0x0D3D, AL),
    (0x0D3E, 0x0D57, CM),
    (0x0D58, 0x0D65, AL),
    (0x0D66, 0x0D6F, NU),
    (0x0D70, 0x0D81, AL),
    (0x0D82, 0x0D83, CM),
    (0x0D84, 0x0DC9, AL),
    (0x0DCA, 0x0DF3, CM),
    (0x0DF4, 0x0DFF, AL),
    (0x0E01, 0x0E3A, SA),
    (0x0E3F, 0x0E3F, PR),
    (0x0E40, 0x0E4E, SA),
    (0x0E4F, 0x0E4F, AL),
    (0x0E50, 0x0E59, NU),
    (0x0E5A, 0x0E5B, BA),
    (0x0E81, 0x0ECD, SA),
    (0x0ED0, 0x0ED9, NU),
    (0x0EDC, 0x0EDF, SA),
    (0x0F00, 0x0F0A, AL),
    (0x0F0B, 0x0F0B, BA),
    (0x0F0C, 0x0F0C, GL),
    (0x0F0D, 0x0F11, EX),
    (0x0F12, 0x0F17, AL),
    (0x0F18, 0x0F19, CM),
    (0x0F1A, 0x0F1F, AL),
    (0x0F20, 0x0F33, NU),
    (0x0F34, 0x0F34, BA),
    (0x0F35, 0x0F35, CM),
    (0x0F36, 0x0F36, AL),
    (0x0F37, 0x0F37, CM),
    (0x0F38, 0x0F38, AL),
    (0x0F39, 0x0F39, CM),
    (0x0F3A, 0x0F3A, OP),
    (0x0F3B, 0x0F3B, CL),
    (0x0F3C, 0x0F3C, OP),
    (0x0F3D, 0x0F3D, CL),
    (0x0F3E, 0x0F3F, CM),
    (0x0F40, 0x0F6C, AL),
    (0x0F71, 0x0F84, CM),
    (0x0F85, 0x0F85, BA),
    (0x0F86, 0x0F87, CM),
    (0x0F88, 0x0F8C, AL),
    (0x0F8D, 0x0F97, CM),
    (0x0F99, 0x0FBC, CM),
    (0x0FBE, 0x0FBF, BA),
    (0x0FC0, 0x0FCF, AL),
    (0x0FD0, 0x0FD1, BB),
    (0x0FD2, 0x0FD2, BA),
    (0x0FD3, 0x0FDA, AL),
    (0x1000, 0x103F, SA),
    (0x1040, 0x1049, NU),
    (0x104A, 0x104B, BA),
    (0x104C, 0x104F, AL),
    (0x1050, 0x109F, SA),
    (0x10A0, 0x10FF, AL),
    (0x1100, 0x11FF, ID),
    (0x1200, 0x1360, AL),
    (0x1361, 0x1361, BA),
    (0x1362, 0x137C, AL),
    (0x1380, 0x1399, AL),
    (0x13A0, 0x13FD, AL),
    (0x1400, 0x1400, BA),
    (0x1401, 0x167F, AL),
    (0x1680, 0x1680, BA),
    (0x1681, 0x169A, AL),
    (0x169B, 0x169B, OP),
    (0x169C, 0x169C, CL),
    (0x16A0, 0x16F8, AL),
    (0x1700, 0x177F, AL),
    (0x1780, 0x17D3, SA),
    (0x17D4, 0x17D6, BA),
    (0x17D7, 0x17DA, SA),
    (0x17DB, 0x17DB, PR),
    (0x17DC, 0x17DD, SA),
    (0x17E0, 0x17E9, NU),
    (0x17F0, 0x17F9, AL),
    (0x1800, 0x1801, AL),
    (0x1802, 0x1805, EX),
    (0x1806, 0x1806, BB),
    (0x1807, 0x180A, AL),
    (0x180B, 0x180D, CM),
    (0x180E, 0x180E, GL),
    (0x1810, 0x1819, NU),
    (0x1820, 0x18AF, AL),
    (0x18B0, 0x18F5, AL),
    (0x1900, 0x191E, AL),
    (0x1920, 0x193B, CM),
    (0x1940, 0x1940, AL),
    (0x1944, 0x1945, EX),
    (0x1946, 0x194F, NU),
    (0x1950, 0x19C9, SA),
    (0x19D0, 0x19D9, NU),
    (0x19DA, 0x19DA, SA),
    (0x19DE, 0x19FF, AL),
    (0x1A00, 0x1A1F, AL),
    (0x1A20, 0x1A7F, SA),
    (0x1A80, 0x1A99, NU),
    (0x1AA0, 0x1AAD, SA),
    (0x1AB0, 0x1AFF, CM),
    (0x1B00, 0x1B04, CM),
    (0x1B05, 0x1B33, AL),
    (0x1B34, 0x1B44, CM),
    (0x1B45, 0x1B4B, AL),
    (0x1B50, 0x1B59, NU),
    (0x1B5A, 0x1B60, BA),
    (0x1B61, 0x1B7C, AL),
    (0x1B80, 0x1B82, CM),
    (0x1B83, 0x1BA0, AL),
    (0x1BA1, 0x1BAD, CM),
    (0x1BAE, 0x1BAF, AL),
    (0x1BB0, 0x1BB9, NU),
    (0x1BBA, 0x1BE5, AL),
    (0x1BE6, 0x1BF3, CM),
    (0x1BF4, 0x1C23, AL),
    (0x1C24, 0x1C37, CM),
    (0x1C38, 0x1C3A, AL),
    (0x1C3B, 0x1C3F, BA),
    (0x1C40, 0x1C49, NU),
    (0x1C4A, 0x1C4F, AL),
    (0x1C50, 0x1C59, NU),
    (0x1C5A, 0x1C7D, AL),
    (0x1C7E, 0x1C7F, BA),
    (0x1C80, 0x1CFF, AL),
    (0x1D00, 0x1DBF, AL),
    (0x1DC0, 0x1DFF, CM),
    (0x1E00, 0x1FFE, AL),
    (0x2000, 0x2006, BA),
    (0x2007, 0x2007, GL),
    (0x2008, 0x200A, BA),
    (0x200B, 0x200B, ZW),
    (0x200C, 0x200F, CM),
    (0x2010, 0x2010, BA),
    (0x2011, 0x2011, GL),
    (0x2012, 0x2013, BA),
    (0x2014, 0x2014, B2),
    (0x2015, 0x2016, AI),
    (0x2017, 0x2017, AL),
    (0x2018, 0x2019, QU),
    (0x201A, 0x201A, OP),
    (0x201B, 0x201D, QU),
    (0x201E, 0x201E, OP),
    (0x201F, 0x201F, QU),
    (0x2020, 0x2021, AI),
    (0x2022, 0x2023, AL),
    (0x2024, 0x2026, IN),
    (0x2027, 0x2027, BA),
    (0x2028, 0x2029, BK),
    (0x202A, 0x202E, CM),
    (0x202F, 0x202F, GL),
    (0x2030, 0x2037, PO),
    (0x2038, 0x2038, AL),
    (0x2039, 0x203A, QU),
    (0x203B, 0x203B, AI),
    (0x203C, 0x203D, NS),
    (0x203E, 0x2043, AL),
    (0x2044, 0x2044, IS),
    (0x2045, 0x2045, OP),
    (0x2046, 0x2046, CL),
    (0x2047, 0x2049, NS),
    (0x204A, 0x2055, AL),
    (0x2056, 0x2056, BA),
    (0x2057, 0x2057, AL),
    (0x2058, 0x205B, BA),
    (0x205C, 0x205C, AL),
    (0x205D, 0x205F, BA),
    (0x2060, 0x2060, WJ),
    (0x2061, 0x2064, AL),
    (0x2066, 0x206F, CM),
    (0x2070, 0x207C, AL),
    (0x207D, 0x207D, OP),
    (0x207E, 0x207E, CL),
    (0x207F, 0x208C, AL),
    (0x208D, 0x208D, OP),
    (0x208E, 0x208E, CL),
    (0x2090, 0x209C, AL),
    (0x20A0, 0x20A6, PR),
    (0x20A7, 0x20A7, PO),
    (0x20A8, 0x20BD, PR),
    (0x20D0, 0x20F0, CM),
    (0x2100, 0x2102, AL),
    (0x2103, 0x2103, PO),
    (0x2104, 0x2108, AL),
    (0x2109, 0x2109, PO),
    (0x210A, 0x2115, AL),
    (0x2116, 0x2116, PR),
    (0x2117, 0x2120, AL),
    (0x2121, 0x2122, AI),
    (0x2123, 0x212A, AL),
    (0x212B, 0x212B, AI),
    (0x212C, 0x214F, AL),
    (0x2150, 0x217F, AI),
    (0x2180, 0x2188, AL),
    (0x2189, 0x2199, AI),
    (0x219A, 0x21D1, AL),
    (0x21D2, 0x21D2, AI),
    (0x21D3, 0x21D3, AL),
    (0x21D4, 0x21D4, AI),
    (0x21D5, 0x21FF, AL),
    (0x2200, 0x2211, AL),
    (0x2212, 0x2213, PR),
    (0x2214, 0x2247, AL),
    (0x2248, 0x2248, AI),
    (0x2249, 0x225F, AL),
    (0x2260, 0x2261, AI),
    (0x2262, 0x2263, AL),
    (0x2264, 0x2267, AI),
    (0x2268, 0x22FF, AL),
    (0x2300, 0x2307, AL),
    (0x2308, 0x2308, OP),
    (0x2309, 0x2309, CL),
    (0x230A, 0x230A, OP),
    (0x230B, 0x230B, CL),
    (0x230C, 0x2311, AL),
    (0x2312, 0x2312, AI),
    (0x2313, 0x2319, AL),
    (0x231A, 0x231B, ID),
    (0x231C, 0x245F, AL),
    (0x2460, 0x24FF, AI),
    (0x2500, 0x259F, AI),
    (0x25A0, 0x25FF, AI),
    (0x2600, 0x26FF, AI),
    (0x2700, 0x27BF, AL),
    (0x27C0, 0x27C4, AL),
    (0x27C5, 0x27C5, OP),
    (0x27C6, 0x27C6, CL),
    (0x27C7, 0x27E5, AL),
    (0x27E6, 0x27E6, OP),
    (0x27E7, 0x27E7, CL),
    (0x27E8, 0x27E8, OP),
    (0x27E9, 0x27E9, CL),
    (0x27EA, 0x27EA, OP),
    (0x27EB, 0x27EB, CL),
    (0x27EC, 0x27EC, OP),
    (0x27ED, 0x27ED, CL),
    (0x27EE, 0x27EE, OP),
    (0x27EF, 0x27EF, CL),
    (0x27F0, 0x2982, AL),
    (0x2983, 0x2983, OP),
    (0x2984, 0x2984, CL),
    (0x2985, 0x2985, OP),
    (0x2986, 0x2986, CL),
    (0x2987, 0x2987, OP),
    (0x2988, 0x2988, CL),
    (0x2989, 0x2989, OP),
    (0x298A, 0x298A, CL),
    (0x298B, 0x298B, OP),
    (0x298C, 0x298C, CL),
    (0x298D, 0x298D, OP),
    (0x298E, 0x298E, CL),
    (0x298F, 0x298F, OP),
    (0x2990, 0x2990, CL),
    (0x2991, 0x2991, OP),
    (0x2992, 0x2992, CL),
    (0x2993, 0x2993, OP),
    (0x2994, 0x2994, CL),
    (0x2995, 0x2995, OP),
    (0x2996, 0x2996, CL),
    (0x2997, 0x2997, OP),
    (0x2998, 0x2998, CL),
    (0x2999, 0x29D7, AL),
    (0x29D8, 0x29D8, OP),
    (0x29D9, 0x29D9, CL),
    (0x29DA, 0x29DA, OP),
    (0x29DB, 0x29DB, CL),
    (0x29DC, 0x29FB, AL),
    (0x29FC, 0x29FC, OP),
    (0x29FD, 0x29FD, CL),
    (0x29FE, 0x2B73, AL),
    (0x2B76, 0x2BFF, AL),
    (0x2C00, 0x2CEE, AL),
    (0x2CEF, 0x2CF1, CM),
    (0x2CF2, 0x2CFF, AL),
    (0x2D00, 0x2D6F, AL),
    (0x2D70, 0x2D70, BA),
    (0x2D7F, 0x2D7F, CM),
    (0x2D80, 0x2DDF, AL),
    (0x2DE0, 0x2DFF, CM),
    (0x2E00, 0x2E16, AL),
    (0x2E17, 0x2E17, BA),
    (0x2E18, 0x2E21, AL),
    (0x2E22, 0x2E22, OP),
    (0x2E23, 0x2E23, CL),
    (0x2E24, 0x2E24, OP),
    (0x2E25, 0x2E25, CL),
    (0x2E26, 0x2E26, OP),
    (0x2E27, 0x2E27, CL),
    (0x2E28, 0x2E28, OP),
    (0x2E29, 0x2E29, CL),
    (0x2E2A, 0x2E2D, BA),
    (0x2E2E, 0x2E2E, EX),
    (0x2E2F, 0x2E2F, AL),
    (0x2E30, 0x2E31, BA),
    (0x2E32, 0x2E44, AL),
    (0x2E80, 0x2FDF, ID),
    (0x2FF0, 0x2FFB, ID),
    (0x3000, 0x3000, BA),
    (0x3001, 0x3002, CL),
    (0x3003, 0x3004, ID),
    (0x3005, 0x3005, NS),
    (0x3006, 0x3007, ID),
    (0x3008, 0x3008, OP),
    (0x3009, 0x3009, CL),
    (0x300A, 0x300A, OP),
    (0x300B, 0x300B, CL),
    (0x300C, 0x300C, OP),
    (0x300D, 0x300D, CL),
    (0x300E, 0x300E, OP),
    (0x300F, 0x300F, CL),
    (0x3010, 0x3010, OP),
    (0x3011, 0x3011, CL),
    (0x3012, 0x3013, ID),
    (0x3014, 0x3014, OP),
    (0x3015, 0x3015, CL),
    (0x3016, 0x3016, OP),
    (0x3017, 0x3017, CL),
    (0x3018, 0x3018, OP),
    (0x3019, 0x3019, CL),
    (0x301A, 0x301A, OP),
    (0x301B, 0x301B, CL),
    (0x301C, 0x301C, NS),
    (0x301D, 0x301D, OP),
    (0x301E, 0x301F, CL),
    (0x3020, 0x3029, ID),
    (0x302A, 0x302F, CM),
    (0x3030, 0x3034, ID),
    (0x3035, 0x3035, CM),
    (0x3036, 0x303A, ID),
    (0x303B, 0x303C, NS),
    (0x303D, 0x303F, ID),
    (0x3041, 0x3041, NS),
    (0x3042, 0x3042, ID),
    (0x3043, 0x3043, NS),
    (0x3044, 0x3044, ID),
    (0x3045, 0x3045, NS),
    (0x3046, 0x3046, ID),
    (0x3047, 0x3047, NS),
    (0x3048, 0x3048, ID),
    (0x3049, 0x3049, NS),
    (0x304A, 0x3062, ID),
    (0x3063, 0x3063, NS),
    (0x3064, 0x3082, ID),
    (0x3083, 0x3083, NS),
    (0x3084, 0x3084, ID),
    (0x3085, 0x3085, NS),
    (0x3086, 0x3086, ID),
    (0x3087, 0x3087, NS),
    (0x3088, 0x308D, ID),
    (0x308E, 0x308E, NS),
    (0x308F, 0x3094, ID),
    (0x3095, 0x3096, NS),
    (0x3099, 0x309A, CM),
    (0x309B, 0x309E, NS),
    (0x309F, 0x309F, ID),
    (0x30A0, 0x30A1, NS),
    (0x30A2, 0x30A2, ID),
    (0x30A3, 0x30A3, NS),
    (0x30A4, 0x30A4, ID),
    (0x30A5, 0x30A5, NS),
    (0x30A6, 0x30A6, ID),
    (0x30A7, 0x30A7, NS),
    (0x30A8, 0x30A8, ID),
    (0x30A9, 0x30A9, NS),
    (0x30AA, 0x30C2, ID),
    (0x30C3, 0x30C3, NS),
    (0x30C4, 0x30E2, ID),
    (0x30E3, 0x30E3, NS),
    (0x30E4, 0x30E4, ID),
    (0x30E5, 0x30E5, NS),
    (0x30E6, 0x30E6, ID),
    (0x30E7, 0x30E7, NS),
    (0x30E8, 0x30ED, ID),
    (0x30EE, 0x30EE, NS),
    (0x30EF, 0x30F4, ID),
    (0x30F5, 0x30F6, NS),
    (0x30F7, 0x30FA, ID),
    (0x30FB, 0x30FE, NS),
    (0x30FF, 0x30FF, ID),
    (0x3105, 0x312D, ID),
    (0x3131, 0x318E, ID),
    (0x3190, 0x31BA, ID),
    (0x31C0, 0x31E3, ID),
    (0x31F0, 0x31FF, NS),
    (0x3200, 0x33FF, ID),
    (0x3400, 0x4DBF, ID),
    (0x4DC0, 0x4DFF, AL),
    (0x4E00, 0x9FFF, ID),
    (0xA000, 0xA48C, ID),
    (0xA490, 0xA4C6, ID),
    (0xA4D0, 0xA4FD, AL),
    (0xA4FE, 0xA4FF, BA),
    (0xA500, 0xA60C, AL),
    (0xA60D, 0xA60D, BA),
    (0xA60E, 0xA60E, EX),
    (0xA60F, 0xA60F, BA),
    (0xA610, 0xA66E, AL),
    (0xA66F, 0xA672, CM),
    (0xA673, 0xA673, AL),
    (0xA674, 0xA67D, CM),
    (0xA67E, 0xA6EF, AL),
    (0xA6F0, 0xA6F1, CM),
    (0xA6F2, 0xA6F7, AL),
    (0xA700, 0xA801, AL),
    (0xA802, 0xA802, CM),
    (0xA803, 0xA805, AL),
    (0xA806, 0xA806, CM),
    (0xA807, 0xA80A, AL),
    (0xA80B, 0xA80B, CM),
    (0xA80C, 0xA824, AL),
    (0xA825, 0xA826, CM),
    (0xA827, 0xA837, AL),
    (0xA838, 0xA838, PO),
    (0xA839, 0xA8C3, AL),
    (0xA8C4, 0xA8C4, CM),
    (0xA8CE, 0xA8CF, BA),
    (0xA8D0, 0xA8D9, NU),
    (0xA8E0, 0xA8F1, CM),
    (0xA8F2, 0xA8FF, AL),
    (0xA900, 0xA909, NU),
    (0xA90A, 0xA925, AL),
    (0xA926, 0xA92D, CM),
    (0xA92E, 0xA92F, BA),
    (0xA930, 0xA946, AL),
    (0xA947, 0xA953, CM),
    (0xA95F, 0xA95F, AL),
    (0xA960, 0xA97C, ID),
    (0xA980, 0xA983, CM),
    (0xA984, 0xA9B2, AL),
    (0xA9B3, 0xA9C0, CM),
    (0xA9C1, 0xA9CD, AL),
    (0xA9CF, 0xA9CF, AL),
    (0xA9D0, 0xA9D9, NU),
    (0xA9DE, 0xA9DF, AL),
    (0xAA00, 0xAA28, AL),
    (0xAA29, 0xAA36, CM),
    (0xAA40, 0xAA4D, AL),
    (0xAA50, 0xAA59, NU),
    (0xAA5C, 0xAA5F, BA),
    (0xAA60, 0xAA7B, SA),
    (0xAA80, 0xAAC2, SA),
    (0xAADB, 0xAADF, SA),
    (0xAAE0, 0xAAEA, AL),
    (0xAAEB, 0xAAEF, CM),
    (0xAAF0, 0xAAF1, BA),
    (0xAAF2, 0xAAF4, AL),
    (0xAAF5, 0xAAF6, CM),
    (0xAB01, 0xABE2, AL),
    (0xABE3, 0xABEA, CM),
    (0xABEB, 0xABEB, BA),
    (0xABEC, 0xABED, CM),
    (0xABF0, 0xABF9, NU),
    (0xAC00, 0xD7A3, ID),
    (0xD7B0, 0xD7FB, ID),
    (0xD800, 0xDFFF, SG),
    (0xE000, 0xF8FF, XX),
    (0xF900, 0xFAFF, ID),
    (0xFB00, 0xFB17, AL),
    (0xFB1D, 0xFB1D, AL),
    (0xFB1E, 0xFB1E, CM),
    (0xFB1F, 0xFB36, AL),
    (0xFB38, 0xFBC1, AL),
    (0xFBD3, 0xFD3D, AL),
    (0xFD3E, 0xFD3E, CL),
    (0xFD3F, 0xFD3F, OP),
    (0xFD50, 0xFDFB, AL),
    (0xFDFC, 0xFDFC, PO),
    (0xFDFD, 0xFDFD, AL),
    (0xFE00, 0xFE0F, CM),
    (0xFE10, 0xFE10, IS),
    (0xFE11, 0xFE12, CL),
    (0xFE13, 0xFE14, IS),
    (0xFE15, 0xFE16, EX),
    (0xFE17, 0xFE17, OP),
    (0xFE18, 0xFE18, CL),
    (0xFE19, 0xFE19, IN),
    (0xFE20, 0xFE2F, CM),
    (0xFE30, 0xFE34, ID),
    (0xFE35, 0xFE35, OP),
    (0xFE36, 0xFE36, CL),
    (0xFE37, 0xFE37, OP),
    (0xFE38, 0xFE38, CL),
    (0xFE39, 0xFE39, OP),
    (0xFE3A, 0xFE3A, CL),
    (0xFE3B, 0xFE3B, OP),
    (0xFE3C, 0xFE3C, CL),
    (0xFE3D, 0xFE3D, OP),
    (0xFE3E, 0xFE3E, CL),
    (0xFE3F, 0xFE3F, OP),
    (0xFE40, 0xFE40, CL),
    (0xFE41, 0xFE41, OP),
    (0xFE42, 0xFE42, CL),
    (0xFE43, 0xFE43, OP),
    (0xFE44, 0xFE44, CL),
    (0xFE45, 0xFE46, ID),
    (0xFE47, 0xFE47, OP),
    (0xFE48, 0xFE48, CL),
    (0xFE49, 0xFE4F, ID),
    (0xFE50, 0xFE50, CL),
    (0xFE51, 0xFE51, ID),
    (0xFE52, 0xFE52, CL),
    (0xFE54, 0xFE55, NS),
    (0xFE56, 0xFE57, EX),
    (0xFE58, 0xFE58, ID),
    (0xFE59, 0xFE59, OP),
    (0xFE5A, 0xFE5A, CL),
    (0xFE5B, 0xFE5B, OP),
    (0xFE5C, 0xFE5C, CL),
    (0xFE5D, 0xFE5D, OP),
    (0xFE5E, 0xFE5E, CL),
    (0xFE5F, 0xFE66, ID),
    (0xFE68, 0xFE68, ID),
    (0xFE69, 0xFE69, PR),
    (0xFE6A, 0xFE6A, PO),
    (0xFE6B, 0xFE6B, ID),
    (0xFE70, 0xFEFC, AL),
    (0xFEFF, 0xFEFF, WJ),
    (0xFF01, 0xFF01, EX),
    (0xFF02, 0xFF03, ID),
    (0xFF04, 0xFF04, PR),
    (0xFF05, 0xFF05, PO),
    (0xFF06, 0xFF07, ID),
    (0xFF08, 0xFF08, OP),
    (0xFF09, 0xFF09, CL),
    (0xFF0A, 0xFF0B, ID),
    (0xFF0C, 0xFF0C, CL),
    (0xFF0D, 0xFF0D, ID),
    (0xFF0E, 0xFF0E, CL),
    (0xFF0F, 0xFF19, ID),
    (0xFF1A, 0xFF1B, NS),
    (0xFF1C, 0xFF1E, ID),
    (0xFF1F, 0xFF1F, EX),
    (0xFF20, 0xFF3A, ID),
    (0xFF3B, 0xFF3B, OP),
    (0xFF3C, 0xFF3C, ID),
    (0xFF3D, 0xFF3D, CL),
    (0xFF3E, 0xFF5A, ID),
    (0xFF5B, 0xFF5B, OP),
    (0xFF5C, 0xFF5C, ID),
    (0xFF5D, 0xFF5D, CL),
    (0xFF5E, 0xFF5E, ID),
    (0xFF5F, 0xFF5F, OP),
    (0xFF60, 0xFF61, CL),
    (0xFF62, 0xFF62, OP),
    (0xFF63, 0xFF64, CL),
    (0xFF65, 0xFF65, NS),
    (0xFF66, 0xFF66, AL),
    (0xFF67, 0xFF70, NS),
    (0xFF71, 0xFF9D, AL),
    (0xFF9E, 0xFF9F, NS),
    (0xFFA0, 0xFFDC, AL),
    (0xFFE0, 0xFFE0, PO),
    (0xFFE1, 0xFFE1, PR),
    (0xFFE2, 0xFFE4, ID),
    (0xFFE5, 0xFFE6, PR),
    (0xFFE8, 0xFFEE, AL),
    (0xFFF9, 0xFFFB, CM),
    (0xFFFC, 0xFFFC, CB),
    (0xFFFD, 0xFFFD, AI),
    (0x10000, 0x100FA, AL),
    (0x10100, 0x10102, BA),
    (0x10107, 0x10133, AL),
    (0x10137, 0x1018C, AL),
    (0x10190, 0x101FC, AL),
    (0x101FD, 0x101FD, CM),
    (0x10280, 0x1056F, AL),
    (0x10600, 0x109FF, AL),
    (0x10A00, 0x10A00, AL),
    (0x10A01, 0x10A0F, CM),
    (0x10A10, 0x10A33, AL),
    (0x10A38, 0x10A3F, CM),
    (0x10A40, 0x10A47, NU),
    (0x10A50, 0x10A58, BA),
    (0x10A60, 0x10FFF, AL),
    (0x11000, 0x11002, CM),
    (0x11003, 0x11037, AL),
    (0x11038, 0x11046, CM),
    (0x11047, 0x11049, BA),
    (0x1104A, 0x1104D, AL),
    (0x11052, 0x1106F, NU),
    (0x11070, 0x110C1, AL),
    (0x110D0, 0x11135, AL),
    (0x11136, 0x1113F, NU),
    (0x11140, 0x111CF, AL),
    (0x111D0, 0x111D9, NU),
    (0x111DA, 0x114CF, AL),
    (0x114D0, 0x114D9, NU),
    (0x114DA, 0x1164F, AL),
    (0x11650, 0x11659, NU),
    (0x1165A, 0x116BF, AL),
    (0x116C0, 0x116C9, NU),
    (0x116CA, 0x11FFF, AL),
    (0x12000, 0x1254F, AL),
    (0x13000, 0x1342E, AL),
    (0x14400, 0x14646, AL),
    (0x16800, 0x16A38, AL),
    (0x16A40, 0x16A5E, AL),
    (0x16A60, 0x16A69, NU),
    (0x16A6E, 0x16AF5, AL),
    (0x16B00, 0x16B36, AL),
    (0x16B37, 0x16B39, BA),
    (0x16B3A, 0x16B4F, AL),
    (0x16B50, 0x16B59, NU),
    (0x16B5B, 0x16F9F, AL),
    (0x17000, 0x187EC, ID),
    (0x18800, 0x18AF2, ID),
    (0x1B000, 0x1B001, ID),
    (0x1BC00, 0x1BC99, AL),
    (0x1BCA0, 0x1BCA3, CM),
    (0x1D000, 0x1D1FF, AL),
    (0x1D200, 0x1D245, AL),
    (0x1D300, 0x1D7CD, AL),
    (0x1D7CE, 0x1D7FF, NU),
    (0x1E000, 0x1E02A, CM),
    (0x1E800, 0x1E8C4, AL),
    (0x1E8D0, 0x1E8D6, CM),
    (0x1E900, 0x1E943, AL),
    (0x1E944, 0x1E94A, CM),
    (0x1E950, 0x1E959, NU),
    (0x1EE00, 0x1EEBB, AL),
    (0x1F000, 0x1F0FF, ID),
    (0x1F100, 0x1F10C, AI),
    (0x1F110, 0x1F12D, AI),
    (0x1F130, 0x1F169, AI),
    (0x1F170, 0x1F1AC, AI),
    (0x1F1E6, 0x1F1FF, ID),
    (0x1F200, 0x1F2FF, ID),
    (0x1F300, 0x1FAFF, ID),
    (0x1FB00, 0x1FBCA, AL),
    (0x1FBF0, 0x1FBF9, NU),
    (0x20000, 0x2FFFD, ID),
    (0x30000, 0x3FFFD, ID),
    (0xE0001, 0xE0001, CM),
    (0xE0020, 0xE007F, CM),
    (0xE0100, 0xE01EF, CM),
    (0xF0000, 0xFFFFD, XX),
    (0x100000, 0x10FFFD, XX),
];
