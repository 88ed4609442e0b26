// src/shared/api/path_id.rs

/// Parses a path segment as a strictly positive `i32` id.
///
/// Anything else (signs, decimals, trailing garbage, overflow) is rejected.
pub fn parse_positive_id(raw: &str) -> Option<i32> {
    raw.parse::<i32>().ok().filter(|id| *id > 0)
}
