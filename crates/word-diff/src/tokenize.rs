/// Split a string into word and whitespace tokens.
///
/// Every maximal run of whitespace characters becomes its own token, as does
/// every maximal run of non-whitespace characters, so concatenating the
/// tokens reproduces the input exactly. The empty string produces no tokens.
pub fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_whitespace: Option<bool> = None;

    for (idx, ch) in text.char_indices() {
        let is_whitespace = ch.is_whitespace();
        match in_whitespace {
            Some(current) if current == is_whitespace => {}
            Some(_) => {
                tokens.push(&text[start..idx]);
                start = idx;
                in_whitespace = Some(is_whitespace);
            }
            None => {
                in_whitespace = Some(is_whitespace);
            }
        }
    }

    if start < text.len() {
        tokens.push(&text[start..]);
    }

    tokens
}
