//! Defensive id parsing for backend-provided references.
//!
//! Backend ids arrive as opaque strings. Numeric identity is derived here and
//! malformed input collapses to [`INVALID_ID`] instead of failing.

/// Sentinel for ids that could not be parsed.
pub const INVALID_ID: i64 = -1;

/// Parses a session id into its numeric identity.
///
/// Returns [`INVALID_ID`] for empty, non-numeric or out-of-range input.
pub fn parse_event_id(raw: &str) -> i64 {
    raw.trim().parse::<i64>().unwrap_or(INVALID_ID)
}

/// Parses a day reference into its ordinal.
///
/// Returns [`INVALID_ID`] (as `i32`) for anything that is not a decimal `i32`.
pub fn parse_day_ordinal(raw: &str) -> i32 {
    raw.trim().parse::<i32>().unwrap_or(INVALID_ID as i32)
}

/// Returns whether a parsed id is usable for identity comparisons.
pub fn is_valid_id(id: i64) -> bool {
    id != INVALID_ID
}

#[cfg(test)]
mod tests {
    use super::{is_valid_id, parse_day_ordinal, parse_event_id, INVALID_ID};

    #[test]
    fn numeric_ids_round_trip() {
        for value in [0_i64, 1, 42, 9_007_199_254_740_993, i64::MAX] {
            assert_eq!(parse_event_id(&value.to_string()), value);
        }
        assert_eq!(parse_day_ordinal("3"), 3);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(parse_event_id(" 17 "), 17);
        assert_eq!(parse_day_ordinal("\t2\n"), 2);
    }

    #[test]
    fn malformed_ids_yield_sentinel() {
        for raw in ["", "   ", "abc", "d1", "1.5", "12abc", "99999999999999999999"] {
            assert_eq!(parse_event_id(raw), INVALID_ID, "input `{raw}`");
        }
        assert_eq!(parse_day_ordinal("4294967296"), -1);
        assert_eq!(parse_day_ordinal("day-two"), -1);
    }

    #[test]
    fn validity_check_rejects_only_sentinel() {
        assert!(is_valid_id(0));
        assert!(!is_valid_id(INVALID_ID));
    }
}
