//! URL encoding for Distance Matrix query parameters

/// Percent-encode a string for use as a query parameter value
///
/// Keeps the RFC 3986 unreserved characters (`A-Z`, `a-z`, `0-9`, `-`,
/// `_`, `.`, `~`) and encodes every other byte, so spaces become `%20`.
pub fn encode(input: &str) -> String {
    let mut result = String::with_capacity(input.len() * 3);
    for b in input.bytes() {
        match b {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                result.push(char::from(b));
            },
            _ => result.push_str(&format!("%{b:02X}")),
        }
    }
    result
}
