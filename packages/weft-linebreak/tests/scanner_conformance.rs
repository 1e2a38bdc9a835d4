use weft_linebreak::{
    break_opportunities, scan_text, AmbiguousResolution, BreakKind, ComplexContextDelegate,
    LineBreakScanner, SegmentationError,
};

/// Helper: the verdict at a single boundary.
fn kind_at(text: &str, boundary: usize) -> BreakKind {
    scan_text(text)[boundary].kind
}

#[test]
fn scan_is_deterministic() {
    let text = "The qui\u{0301}ck \u{4E2D}\u{6587} $12,345.67 end.\r\nnext";
    let first = scan_text(text);
    for _ in 0..10 {
        assert_eq!(scan_text(text), first);
    }
}

#[test]
fn boundaries_cover_zero_through_n() {
    for text in ["", "a", "hello world", "\u{4E2D}\u{6587}\u{3001}", "a\r\nb"] {
        let n = text.chars().count();
        let breaks = scan_text(text);
        assert_eq!(breaks.len(), n + 1);
        for (i, b) in breaks.iter().enumerate() {
            assert_eq!(b.offset, i);
        }
        assert_eq!(breaks[0].kind, BreakKind::Prohibited);
        if n > 0 {
            assert_eq!(breaks[n].kind, BreakKind::Mandatory);
        }
    }
}

#[test]
fn empty_text_yields_single_prohibited_boundary() {
    let breaks = scan_text("");
    assert_eq!(breaks.len(), 1);
    assert_eq!(breaks[0].offset, 0);
    assert_eq!(breaks[0].kind, BreakKind::Prohibited);
}

#[test]
fn crlf_counts_as_one_break() {
    let breaks = scan_text("one\r\ntwo");
    // No break between CR and LF.
    assert_eq!(breaks[4].kind, BreakKind::Prohibited);
    // Forced break after the pair.
    assert_eq!(breaks[5].kind, BreakKind::Mandatory);
    // Exactly one mandatory boundary besides end of text.
    let mandatory = breaks[..8].iter().filter(|b| b.kind == BreakKind::Mandatory).count();
    assert_eq!(mandatory, 1);
}

#[test]
fn unicode_line_and_paragraph_separators_force_breaks() {
    assert_eq!(kind_at("a\u{2028}b", 2), BreakKind::Mandatory);
    assert_eq!(kind_at("a\u{2029}b", 2), BreakKind::Mandatory);
    assert_eq!(kind_at("a\u{0085}b", 2), BreakKind::Mandatory);
    // Never break before the separator itself.
    assert_eq!(kind_at("a\u{2028}b", 1), BreakKind::Prohibited);
}

#[test]
fn currency_amount_is_atomic() {
    let breaks = scan_text("$12,345.67");
    for b in &breaks[1..10] {
        assert_eq!(b.kind, BreakKind::Prohibited, "boundary {}", b.offset);
    }
}

#[test]
fn numeric_run_in_running_text() {
    // "pay $12,345.67 now": breakable at the two space runs only.
    let allowed: Vec<usize> = scan_text("pay $12,345.67 now")
        .iter()
        .filter(|b| b.kind == BreakKind::Allowed)
        .map(|b| b.offset)
        .collect();
    assert_eq!(allowed, vec![4, 15]);
}

#[test]
fn combining_marks_inherit_their_base() {
    // "é" as e + U+0301, twice over: no break within either cluster.
    let breaks = scan_text("e\u{0301}e\u{0301}");
    assert_eq!(breaks[1].kind, BreakKind::Prohibited);
    assert_eq!(breaks[2].kind, BreakKind::Prohibited);
    assert_eq!(breaks[3].kind, BreakKind::Prohibited);
    // A mark on a numeric base keeps the run numeric.
    let breaks = scan_text("1\u{0301}2");
    assert_eq!(breaks[1].kind, BreakKind::Prohibited);
    assert_eq!(breaks[2].kind, BreakKind::Prohibited);
}

#[test]
fn ideographic_text_breaks_between_characters() {
    let breaks = scan_text("\u{4E2D}\u{6587}\u{7EC4}");
    assert_eq!(breaks[1].kind, BreakKind::Allowed);
    assert_eq!(breaks[2].kind, BreakKind::Allowed);
    // But not before a closing ideographic comma.
    assert_eq!(kind_at("\u{4E2D}\u{3001}\u{6587}", 1), BreakKind::Prohibited);
    // And not before a small kana nonstarter.
    assert_eq!(kind_at("\u{30C4}\u{30C3}", 1), BreakKind::Prohibited);
}

#[test]
fn quotes_and_parens_glue_to_content() {
    // No break after an opening paren or before a closing one.
    assert_eq!(kind_at("(ab)", 1), BreakKind::Prohibited);
    assert_eq!(kind_at("(ab)", 3), BreakKind::Prohibited);
    // Space before an open paren is a break point; a quote holds on.
    assert_eq!(kind_at("a (b)", 2), BreakKind::Allowed);
    assert_eq!(kind_at("a \"b\"", 2), BreakKind::Allowed);
    assert_eq!(kind_at("\"(a)\"", 1), BreakKind::Prohibited);
}

#[test]
fn glue_characters_hold_both_sides() {
    // No-break space joins the words around it.
    let breaks = scan_text("a\u{00A0}b");
    assert_eq!(breaks[1].kind, BreakKind::Prohibited);
    assert_eq!(breaks[2].kind, BreakKind::Prohibited);
    // Word joiner likewise, even after a space.
    assert_eq!(kind_at("a \u{2060}b", 2), BreakKind::Prohibited);
}

#[test]
fn sa_runs_fall_back_to_unbreakable_without_delegate() {
    // Thai phrase embedded in Latin text: breakable at the space edges,
    // nowhere inside the Thai run.
    let text = "go \u{0E44}\u{0E1B}\u{0E14}\u{0E35} now";
    let allowed: Vec<usize> = scan_text(text)
        .iter()
        .filter(|b| b.kind == BreakKind::Allowed)
        .map(|b| b.offset)
        .collect();
    assert_eq!(allowed, vec![3, 8]);
}

struct BreakAfterTwo;

impl ComplexContextDelegate for BreakAfterTwo {
    fn segment(&self, run: &[char]) -> Result<Vec<usize>, SegmentationError> {
        Ok((1..run.len()).filter(|o| o % 2 == 0).collect())
    }
}

#[test]
fn delegate_offsets_splice_into_the_scan() {
    let scanner = LineBreakScanner::new().with_delegate(Box::new(BreakAfterTwo));
    let breaks = scanner.scan_str("\u{0E44}\u{0E1B}\u{0E14}\u{0E35}");
    assert_eq!(breaks[1].kind, BreakKind::Prohibited);
    assert_eq!(breaks[2].kind, BreakKind::Allowed);
    assert_eq!(breaks[3].kind, BreakKind::Prohibited);
}

#[test]
fn delegate_errors_never_reach_the_caller() {
    struct Broken;
    impl ComplexContextDelegate for Broken {
        fn segment(&self, _run: &[char]) -> Result<Vec<usize>, SegmentationError> {
            Err(SegmentationError::SegmentationFailed("model load".into()))
        }
    }
    let scanner = LineBreakScanner::new().with_delegate(Box::new(Broken));
    let breaks = scanner.scan_str("\u{0E44}\u{0E1B}\u{0E14}");
    assert_eq!(breaks.len(), 4);
    assert_eq!(breaks[1].kind, BreakKind::Prohibited);
    assert_eq!(breaks[2].kind, BreakKind::Prohibited);
}

#[test]
fn ambiguous_resolution_is_a_scanner_knob() {
    let text = "a\u{00D7}";
    let default = LineBreakScanner::new().scan_str(text);
    let east_asian = LineBreakScanner::new()
        .with_ambiguous_resolution(AmbiguousResolution::Ideographic)
        .scan_str(text);
    assert_eq!(default[1].kind, BreakKind::Prohibited);
    assert_eq!(east_asian[1].kind, BreakKind::Allowed);
}

#[test]
fn filtered_helper_matches_full_scan() {
    let text = "lorem ipsum\ndolor";
    let full = scan_text(text);
    let filtered = break_opportunities(text);
    let expected: Vec<_> = full
        .iter()
        .copied()
        .filter(|b| b.kind != BreakKind::Prohibited)
        .collect();
    assert_eq!(filtered, expected);
}

#[test]
fn scanner_is_shareable_across_threads() {
    use std::sync::Arc;
    use std::thread;

    let scanner = Arc::new(LineBreakScanner::new().with_delegate(Box::new(BreakAfterTwo)));
    let mut handles = Vec::new();
    for _ in 0..4 {
        let scanner = Arc::clone(&scanner);
        handles.push(thread::spawn(move || {
            scanner.scan_str("shared \u{0E44}\u{0E1B} text").len()
        }));
    }
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 15);
    }
}
