//! Parsing and validation of the user's drive-bay slot selection.
//!
//! Two forms are accepted: a dash range (`"3-7"`, expanded to every slot in
//! between) and a comma list (`"1,4,9"`). An empty input clears the filter.

use std::collections::HashSet;

use log::debug;

use crate::plugin::constants::{MAX_SLOT_COUNT, MIN_SLOT_SUM};

/// The syntactic form of a slot input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotSpec {
    Empty,
    /// Contains a `-`. Takes precedence over the list form.
    Range,
    /// Contains a `,` and no `-`.
    List,
    Unrecognized,
}

impl SlotSpec {
    pub fn classify(value: &str) -> Self {
        if value.is_empty() {
            SlotSpec::Empty
        } else if value.contains('-') {
            SlotSpec::Range
        } else if value.contains(',') {
            SlotSpec::List
        } else {
            SlotSpec::Unrecognized
        }
    }
}

/// Parses the slot input into slot-number strings.
///
/// Returns `Some(vec![])` for an empty input, which clears the slot filter,
/// and `None` when the input is invalid and no update should be sent.
pub fn parse_slot_range(value: &str) -> Option<Vec<String>> {
    let spec = SlotSpec::classify(value);
    let parsed = match spec {
        SlotSpec::Empty => Some(Vec::new()),
        SlotSpec::Range => parse_range(value),
        SlotSpec::List => parse_list(value),
        SlotSpec::Unrecognized => None,
    };
    if parsed.is_none() {
        debug!("Rejected slot input {:?} ({:?})", value, spec);
    }
    parsed
}

/// Numeric value of one segment: blank counts as 0, anything that is not a
/// plain decimal number is NaN.
fn segment_value(segment: &str) -> f64 {
    let trimmed = segment.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    let numeric = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !numeric {
        return f64::NAN;
    }
    trimmed.parse().unwrap_or(f64::NAN)
}

fn is_plausible_sum(sum: f64) -> bool {
    !sum.is_nan() && sum > MIN_SLOT_SUM as f64
}

/// Range bounds are whole slot numbers; `"2.5"` or `"1e3"` is not a bound.
fn range_bound(token: &str) -> Option<i64> {
    token.trim().parse().ok()
}

fn parse_range(value: &str) -> Option<Vec<String>> {
    let tokens: Vec<&str> = value.split('-').filter(|s| !s.is_empty()).collect();
    let [first, second] = tokens[..] else {
        return None;
    };

    let (a, b) = (range_bound(first)?, range_bound(second)?);
    if a.checked_add(b)? <= MIN_SLOT_SUM {
        return None;
    }
    let (low, high) = if a <= b { (a, b) } else { (b, a) };

    // Widened so the span of two extreme bounds cannot overflow.
    let count = i128::from(high) - i128::from(low) + 1;
    if count > MAX_SLOT_COUNT as i128 {
        debug!("Slot range {}..={} spans {} slots", low, high, count);
        return None;
    }
    Some((low..=high).map(|slot| slot.to_string()).collect())
}

fn parse_list(value: &str) -> Option<Vec<String>> {
    let segments: Vec<&str> = value.split(',').collect();
    let distinct: HashSet<&str> = segments.iter().copied().collect();
    if distinct.len() < segments.len() {
        return None;
    }

    let sum: f64 = segments.iter().map(|s| segment_value(s)).sum();
    if !is_plausible_sum(sum) {
        return None;
    }

    Some(
        segments
            .into_iter()
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected(items: &[&str]) -> Option<Vec<String>> {
        Some(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_empty_clears_filter() {
        assert_eq!(parse_slot_range(""), Some(vec![]));
    }

    #[test]
    fn test_range_expands_inclusively() {
        assert_eq!(parse_slot_range("3-5"), expected(&["3", "4", "5"]));
        assert_eq!(parse_slot_range("1-3"), expected(&["1", "2", "3"]));
    }

    #[test]
    fn test_range_is_sorted_before_expanding() {
        assert_eq!(parse_slot_range("5-3"), expected(&["3", "4", "5"]));
        assert_eq!(parse_slot_range("12-10"), expected(&["10", "11", "12"]));
    }

    #[test]
    fn test_range_sum_threshold() {
        // 1 + 2 is above the minimum sum, 1 + 1 is not.
        assert_eq!(parse_slot_range("1-2"), expected(&["1", "2"]));
        assert_eq!(parse_slot_range("1-1"), None);
        assert_eq!(parse_slot_range("0-2"), None);
        assert_eq!(parse_slot_range("2-1"), expected(&["1", "2"]));
    }

    #[test]
    fn test_range_bounds_must_be_integers() {
        assert_eq!(parse_slot_range("2.5-5"), None);
        assert_eq!(parse_slot_range("3-5.0"), None);
        assert_eq!(parse_slot_range("1-1e3"), None);
        assert_eq!(parse_slot_range(" 3 - 5 "), expected(&["3", "4", "5"]));
    }

    #[test]
    fn test_range_size_is_capped() {
        assert_eq!(parse_slot_range("9007199254740992-9007199254740994"), None);
        assert_eq!(parse_slot_range("1-1000000000"), None);
        assert_eq!(parse_slot_range("9223372036854775807-1"), None);
        assert_eq!(parse_slot_range("99999999999999999999-1"), None);

        let widest = format!("1-{}", MAX_SLOT_COUNT);
        assert_eq!(parse_slot_range(&widest).map(|s| s.len()), Some(MAX_SLOT_COUNT));
        let too_wide = format!("1-{}", MAX_SLOT_COUNT + 1);
        assert_eq!(parse_slot_range(&too_wide), None);
    }

    #[test]
    fn test_range_rejections() {
        assert_eq!(parse_slot_range("3-"), None); // one token
        assert_eq!(parse_slot_range("1-2-3"), None); // three tokens
        assert_eq!(parse_slot_range("a-b"), None);
        assert_eq!(parse_slot_range("-"), None);
    }

    #[test]
    fn test_range_ignores_empty_segments() {
        assert_eq!(parse_slot_range("3--5"), expected(&["3", "4", "5"]));
    }

    #[test]
    fn test_range_takes_precedence_over_list() {
        // Treated as the range "3,4" .. "6", whose first bound is not a number.
        assert_eq!(parse_slot_range("3,4-6"), None);
        assert_eq!(SlotSpec::classify("3,4-6"), SlotSpec::Range);
    }

    #[test]
    fn test_list_keeps_order() {
        assert_eq!(parse_slot_range("3,4,5"), expected(&["3", "4", "5"]));
        assert_eq!(parse_slot_range("9,1,4"), expected(&["9", "1", "4"]));
    }

    #[test]
    fn test_list_drops_empty_segments() {
        assert_eq!(parse_slot_range("3,,4"), expected(&["3", "4"]));
        assert_eq!(parse_slot_range("7,"), expected(&["7"]));
    }

    #[test]
    fn test_list_rejections() {
        assert_eq!(parse_slot_range("3,3"), None); // duplicate
        assert_eq!(parse_slot_range("3,,4,"), None); // duplicate empty segment
        assert_eq!(parse_slot_range("1,1"), None);
        assert_eq!(parse_slot_range("1,"), None); // sum not above 2
        assert_eq!(parse_slot_range("3,x"), None);
    }

    #[test]
    fn test_plain_text_is_rejected() {
        assert_eq!(parse_slot_range("abc"), None);
        assert_eq!(parse_slot_range("5"), None);
        assert_eq!(SlotSpec::classify("5"), SlotSpec::Unrecognized);
    }
}
