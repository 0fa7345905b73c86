//! Query-string assembly for in-app navigation targets.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use std::fmt::Write;

/// Percent-encode one query component. Unreserved characters pass through
/// unchanged; everything else, spaces included, is encoded byte-wise.
pub fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(char::from(byte));
            }
            _ => {
                let _ = write!(out, "%{byte:02X}");
            }
        }
    }
    out
}

/// Route to the contact page carrying the originating course and marketing
/// action as query parameters.
pub fn contact_href(course_name: &str, action: &str) -> String {
    format!(
        "/contact?course={}&action={}",
        encode_component(course_name),
        encode_component(action)
    )
}
