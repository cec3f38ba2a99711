use crate::enums::Label;
use crate::error::CoreError;

/// Parses a textual label sequence such as `"1,0,1"`, `"1 0 1"` or `"[1, 0, 1]"`.
///
/// Tokens may be separated by commas, whitespace, or both. Surrounding square
/// brackets are ignored. A blank input yields an empty sequence.
///
/// # Errors
///
/// Returns `CoreError::InvalidLabel` naming the first token that is not `0` or `1`.
pub fn parse_labels(text: &str) -> Result<Vec<Label>, CoreError> {
    let trimmed = text.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(trimmed);

    inner
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(position, token)| {
            token.parse::<Label>().map_err(|_| CoreError::InvalidLabel {
                position,
                value: token.to_string(),
            })
        })
        .collect()
}

/// Number of positive labels in a sequence.
pub fn count_positives(labels: &[Label]) -> usize {
    labels.iter().filter(|label| label.is_positive()).count()
}

/// Renders a sequence the way it is accepted on the command line, e.g. `1,0,1`.
pub fn format_labels(labels: &[Label]) -> String {
    labels
        .iter()
        .map(Label::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use Label::{Negative as N, Positive as P};

    #[test]
    fn parses_common_separators() {
        assert_eq!(parse_labels("1,0,1").unwrap(), vec![P, N, P]);
        assert_eq!(parse_labels("1 0  1").unwrap(), vec![P, N, P]);
        assert_eq!(parse_labels("[1, 0, 1]").unwrap(), vec![P, N, P]);
        assert_eq!(parse_labels("  ").unwrap(), Vec::<Label>::new());
    }

    #[test]
    fn reports_position_of_invalid_token() {
        let err = parse_labels("1,0,2,1").unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidLabel {
                position: 2,
                value: "2".to_string()
            }
        );
    }

    #[test]
    fn counts_and_formats() {
        let labels = [P, N, P, P];
        assert_eq!(count_positives(&labels), 3);
        assert_eq!(format_labels(&labels), "1,0,1,1");
    }
}
