/// Lowercases `string` and joins its words with hyphens.
///
/// Non-ASCII characters are transliterated first. Every run of characters that
/// isn't an ASCII alphanumeric or `_` becomes a single `-`; leading and
/// trailing runs are dropped entirely.
pub fn slugify(string: &str) -> String {
    let mut output = String::with_capacity(string.len());

    let mut need_dash = false;
    for ch in string.chars() {
        for b in deunicode::deunicode_char(ch).unwrap_or("-").bytes() {
            match b {
                b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_' => {
                    if need_dash {
                        output.push('-');
                        need_dash = false;
                    }

                    output.push(b.to_ascii_lowercase() as char);
                }
                _ => need_dash = !output.is_empty(),
            }
        }
    }

    output
}
