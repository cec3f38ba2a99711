//! Length alignment of label sequences.
//!
//! A shorter sequence is padded at its end with `Label::Negative`, modelling
//! "nothing was detected" for the missing trailing positions. The longer
//! sequence is never touched.

use core_types::Label;
use std::borrow::Cow;

/// Number of padding labels `align` appends to each side, as `(first, second)`.
pub fn padding(first_len: usize, second_len: usize) -> (usize, usize) {
    (
        second_len.saturating_sub(first_len),
        first_len.saturating_sub(second_len),
    )
}

/// Makes two sequences the same length by appending negatives to the shorter one.
///
/// Sequences that need no padding are returned borrowed; only the shorter
/// sequence is copied. The inputs are never modified.
pub fn align<'a>(first: &'a [Label], second: &'a [Label]) -> (Cow<'a, [Label]>, Cow<'a, [Label]>) {
    let (pad_first, pad_second) = padding(first.len(), second.len());

    if pad_first == 0 && pad_second == 0 {
        tracing::debug!(len = first.len(), "Sequences are already the same length.");
        return (Cow::Borrowed(first), Cow::Borrowed(second));
    }

    tracing::debug!(
        first_len = first.len(),
        second_len = second.len(),
        pad_first,
        pad_second,
        "Padding shorter sequence with negatives."
    );

    (pad(first, pad_first), pad(second, pad_second))
}

fn pad(labels: &[Label], extra: usize) -> Cow<'_, [Label]> {
    if extra == 0 {
        return Cow::Borrowed(labels);
    }
    let mut padded = Vec::with_capacity(labels.len() + extra);
    padded.extend_from_slice(labels);
    padded.resize(labels.len() + extra, Label::Negative);
    Cow::Owned(padded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::parse_labels;

    fn labels(text: &str) -> Vec<Label> {
        parse_labels(text).unwrap()
    }

    #[test]
    fn pads_shorter_second_sequence() {
        let a = labels("1,1,1");
        let b = labels("1");
        let (a2, b2) = align(&a, &b);

        assert_eq!(a2.as_ref(), labels("1,1,1").as_slice());
        assert_eq!(b2.as_ref(), labels("1,0,0").as_slice());
        assert!(matches!(a2, Cow::Borrowed(_)));
        assert!(matches!(b2, Cow::Owned(_)));
    }

    #[test]
    fn pads_shorter_first_sequence() {
        let (a, b) = (labels("1"), labels("1,1,1,1,1"));
        let (a2, b2) = align(&a, &b);
        assert_eq!(a2.as_ref(), labels("1,0,0,0,0").as_slice());
        assert_eq!(b2.as_ref(), b.as_slice());

        let (a, b) = (labels("0,1"), labels("0,0,0,0,1"));
        let (a2, _) = align(&a, &b);
        assert_eq!(a2.as_ref(), labels("0,1,0,0,0").as_slice());
    }

    #[test]
    fn equal_lengths_are_borrowed_unchanged() {
        let a = labels("1");
        let b = labels("0");
        let (a2, b2) = align(&a, &b);

        assert!(matches!(a2, Cow::Borrowed(_)));
        assert!(matches!(b2, Cow::Borrowed(_)));
        assert_eq!(a2.as_ref(), a.as_slice());
        assert_eq!(b2.as_ref(), b.as_slice());
    }

    #[test]
    fn inputs_are_left_untouched() {
        let a = labels("0,0,0,0,0");
        let b = labels("0");
        let before = (a.clone(), b.clone());

        let (a2, b2) = align(&a, &b);
        assert_eq!(a2.len(), b2.len());
        assert_eq!(&a, &before.0);
        assert_eq!(&b, &before.1);
    }

    #[test]
    fn padding_counts() {
        assert_eq!(padding(3, 1), (0, 2));
        assert_eq!(padding(1, 3), (2, 0));
        assert_eq!(padding(4, 4), (0, 0));
        assert_eq!(padding(0, 0), (0, 0));
    }
}
