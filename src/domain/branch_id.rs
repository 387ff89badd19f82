/// Maps a branch name to an identifier-safe token.
///
/// Every character outside `[A-Za-z0-9._-]` becomes `-`.
pub fn normalize(value: &str) -> String {
    value
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '-'
            }
        })
        .collect()
}
