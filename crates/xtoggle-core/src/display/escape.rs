//! String escaping for rendering commands to the user.

/// Escape a string for use in shell commands (single-quoted).
pub fn shell_escape(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\"'\"'"))
}

/// Quote an argument only if the shell would otherwise split or expand it.
pub fn shell_quote(s: &str) -> String {
    let is_plain = !s.is_empty()
        && s.chars().all(|c| {
            c.is_ascii_alphanumeric()
                || matches!(c, '-' | '_' | '.' | '/' | ':' | '=' | '+' | ',' | '@' | '%')
        });
    if is_plain {
        s.to_string()
    } else {
        shell_escape(s)
    }
}
