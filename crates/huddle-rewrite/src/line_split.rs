//! Line terminator handling shared by the line-oriented rewriters.

/// Split a `split_inclusive('\n')` line into its body and terminator.
///
/// The terminator is `"\r\n"`, `"\n"`, or `""` for a final unterminated
/// line, so rewritten lines can keep whatever ending they came with.
pub(crate) fn split_terminator(raw: &str) -> (&str, &str) {
    if let Some(body) = raw.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = raw.strip_suffix('\n') {
        (body, "\n")
    } else {
        (raw, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_terminator() {
        assert_eq!(split_terminator("a\r\n"), ("a", "\r\n"));
        assert_eq!(split_terminator("a\n"), ("a", "\n"));
        assert_eq!(split_terminator("a"), ("a", ""));
        assert_eq!(split_terminator("\n"), ("", "\n"));
    }
}
