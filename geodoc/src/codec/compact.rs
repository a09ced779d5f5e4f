//! Whitespace stripping and key lookup for raw JSON slices.
//!
//! The input is expected to be valid JSON, which is checked by the document scanner before any
//! slice gets here. Member values are copied byte for byte otherwise, so number literals and key
//! order inside nested objects are kept as written.

/// Appends `raw` to `dst` without the insignificant whitespace.
pub(crate) fn compact_into(dst: &mut String, raw: &str) {
    let mut in_string = false;
    let mut escaped = false;
    for c in raw.chars() {
        if in_string {
            dst.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
        } else if c == '"' {
            in_string = true;
            dst.push(c);
        } else if !matches!(c, ' ' | '\t' | '\n' | '\r') {
            dst.push(c);
        }
    }
}

/// Raw literals of the top-level member keys of a JSON object, quotes included, in document
/// order. Escapes inside the keys are left as written.
pub(crate) fn member_keys(raw: &str) -> Vec<&str> {
    let mut keys = Vec::new();
    let mut depth = 0usize;
    let mut expect_key = false;
    let mut string_start = None;
    let mut escaped = false;
    for (i, b) in raw.bytes().enumerate() {
        if let Some(start) = string_start {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                string_start = None;
                if expect_key {
                    keys.push(&raw[start..=i]);
                    expect_key = false;
                }
            }
            continue;
        }

        match b {
            b'"' => string_start = Some(i),
            b'{' | b'[' => {
                depth += 1;
                expect_key = depth == 1 && b == b'{';
            }
            b'}' | b']' => depth = depth.saturating_sub(1),
            b',' => expect_key = depth == 1,
            _ => {}
        }
    }

    keys
}
