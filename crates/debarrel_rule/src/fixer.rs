use log::{trace, warn};

use crate::rule::Fix;

/// Applies non-overlapping fixes to `source`. Later fixes that overlap an
/// earlier one are dropped.
pub fn apply_fixes(source: &str, fixes: &[Fix]) -> String {
    let mut sorted: Vec<&Fix> = fixes.iter().collect();
    sorted.sort_by_key(|fix| (fix.span.start, fix.span.end));

    let mut accepted: Vec<&Fix> = Vec::with_capacity(sorted.len());
    let mut last_end = 0u32;
    for fix in sorted {
        if !accepted.is_empty() && fix.span.start < last_end {
            warn!("Skipping overlapping fix at {}..{}", fix.span.start, fix.span.end);
            continue;
        }
        last_end = fix.span.end;
        accepted.push(fix);
    }

    // Back to front so earlier offsets stay valid
    let mut out = source.to_string();
    for fix in accepted.iter().rev() {
        trace!("Applying fix at {}..{}", fix.span.start, fix.span.end);
        out.replace_range(fix.span.start as usize..fix.span.end as usize, &fix.replacement);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use debarrel_core::Span;

    fn fix(start: u32, end: u32, replacement: &str) -> Fix {
        Fix { span: Span::new(start, end), replacement: replacement.to_string() }
    }

    #[test]
    fn test_no_fixes() {
        assert_eq!(apply_fixes("abc", &[]), "abc");
    }

    #[test]
    fn test_single_fix() {
        assert_eq!(apply_fixes("hello world", &[fix(6, 11, "there")]), "hello there");
    }

    #[test]
    fn test_multiple_fixes_any_order() {
        let src = "aaa bbb ccc";
        let out = apply_fixes(src, &[fix(8, 11, "3"), fix(0, 3, "1"), fix(4, 7, "2")]);
        assert_eq!(out, "1 2 3");
    }

    #[test]
    fn test_replacement_can_grow() {
        let out = apply_fixes("x;y;", &[fix(0, 2, "first;\nsecond;"), fix(2, 4, "third;")]);
        assert_eq!(out, "first;\nsecond;third;");
    }

    #[test]
    fn test_overlapping_fix_is_skipped() {
        let out = apply_fixes("0123456789", &[fix(0, 5, "A"), fix(3, 7, "B")]);
        assert_eq!(out, "A56789");
    }
}
