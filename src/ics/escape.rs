const ESCAPES: [(&str, &str); 3] = [("\\n", "\n"), ("\\t", "\t"), ("\\,", ",")];

/// Expands the `\n`, `\t` and `\,` escapes, in that order. Anything else is left alone.
pub fn decode(raw: &str) -> String {
    ESCAPES
        .iter()
        .fold(raw.to_string(), |text, (escape, literal)| {
            text.replace(escape, literal)
        })
}
