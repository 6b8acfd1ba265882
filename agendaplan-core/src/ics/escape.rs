//! Content-line text escaping (RFC 5545 §3.3.11).

/// Escape free text for use after a property name and colon.
///
/// Backslash is escaped first so the escapes introduced by the later steps
/// survive untouched.
pub fn escape_text(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace(';', "\\;")
        .replace(',', "\\,")
        .replace('\n', "\\n")
}

/// Inverse of [`escape_text`].
///
/// Unknown escape sequences and a trailing lone backslash pass through
/// unchanged so foreign feeds don't lose content.
pub fn unescape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') | Some('N') => out.push('\n'),
            Some(escaped @ ('\\' | ';' | ',')) => out.push(escaped),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}
