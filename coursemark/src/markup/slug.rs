//! Heading anchors

/// Derive an anchor id from heading text.
///
/// Lowercases, drops every character that is neither an ASCII word character (`a-z`,
/// `0-9`, `_`) nor whitespace, then turns each whitespace run into a single `-`. Dropped
/// punctuation does not split a whitespace run, so `"a - b"` becomes `"a-b"`.
/// Identical texts give identical ids; no de-duplication happens here.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut in_whitespace = false;

    for c in text.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
                in_whitespace = true;
            }
        } else if c.is_ascii_alphanumeric() || c == '_' {
            slug.push(c);
            in_whitespace = false;
        }
    }

    slug
}
