//! Range Policy — a request may cover between `MIN_SPAN` and `MAX_SPAN` verses.
//!
//! Checked before any upstream fetch, and authoritative even for ranges that
//! did not come from the parser.

use thiserror::Error;

use crate::verses::models::VerseRange;

pub const MIN_SPAN: i64 = 1;
pub const MAX_SPAN: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PolicyViolation {
    #[error(
        "requested {span} verses; at most {} verses may be requested at a time",
        MAX_SPAN
    )]
    RangeTooLarge { span: i64 },

    #[error(
        "requested range covers {span} verses; at least {} is required",
        MIN_SPAN
    )]
    RangeInvalid { span: i64 },
}

/// Returns the span when it lies within `MIN_SPAN..=MAX_SPAN`.
pub fn check_span(range: &VerseRange) -> Result<u32, PolicyViolation> {
    let span = range.span();
    if span < MIN_SPAN {
        Err(PolicyViolation::RangeInvalid { span })
    } else if span > MAX_SPAN {
        Err(PolicyViolation::RangeTooLarge { span })
    } else {
        Ok(span as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_spans_one_through_five() {
        for to in 255..=259 {
            let range = VerseRange::new(2, 255, to);
            assert_eq!(check_span(&range), Ok(to - 254));
        }
    }

    #[test]
    fn test_rejects_span_six_as_too_large() {
        let range = VerseRange::new(2, 1, 6);
        assert_eq!(
            check_span(&range),
            Err(PolicyViolation::RangeTooLarge { span: 6 })
        );
    }

    #[test]
    fn test_rejects_span_zero_as_invalid() {
        let range = VerseRange::new(2, 5, 4);
        assert_eq!(
            check_span(&range),
            Err(PolicyViolation::RangeInvalid { span: 0 })
        );
    }

    #[test]
    fn test_ten_verse_range_reports_span() {
        let err = check_span(&VerseRange::new(2, 1, 10)).unwrap_err();
        assert_eq!(err, PolicyViolation::RangeTooLarge { span: 10 });
        assert!(err.to_string().contains("10"));
    }

    #[test]
    fn test_messages_name_the_bounds() {
        let too_large = PolicyViolation::RangeTooLarge { span: 6 }.to_string();
        assert!(too_large.contains(&format!("at most {MAX_SPAN}")));
        let invalid = PolicyViolation::RangeInvalid { span: 0 }.to_string();
        assert!(invalid.contains(&format!("at least {MIN_SPAN}")));
    }
}
