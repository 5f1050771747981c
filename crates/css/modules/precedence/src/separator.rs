//! Separator density: a cheap proxy for how compound a token is.

/// Count of `-`, `:` and `,` characters in `text`.
#[inline]
pub fn separator_count(text: &str) -> u32 {
    let mut count = 0u32;
    for character in text.chars() {
        if matches!(character, '-' | ':' | ',') {
            count = count.saturating_add(1);
        }
    }
    count
}
