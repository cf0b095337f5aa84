// Cell text cleanup.

/// Strip leading and trailing whitespace (any Unicode `White_Space`, so
/// non-breaking spaces from `&nbsp;` go too). Interior whitespace is kept.
pub fn normalize_cell(text: &str) -> String {
    text.trim().to_string()
}
