//! Splitting a token into its variant chain and utility name.

use css_core::Variant;

use crate::options::Screens;

/// Split `sm:group-hover:focus:text-center` into variants and the utility name.
///
/// Segments naming a screen become `@media` breakpoints, `group-*` segments become group
/// variants, anything else a pseudo variant. Colons inside brackets (`bg-[url(a:b)]`) do
/// not split.
pub fn split<'token>(token: &'token str, screens: &Screens) -> (Vec<Variant>, &'token str) {
    let mut variants = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (index, character) in token.char_indices() {
        match character {
            '[' | '(' => depth += 1,
            ']' | ')' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => {
                let segment = token.get(start..index).unwrap_or_default();
                variants.push(variant_for(segment, screens));
                start = index + 1;
            }
            _ => {}
        }
    }
    (variants, token.get(start..).unwrap_or_default())
}

fn variant_for(segment: &str, screens: &Screens) -> Variant {
    if let Some(query) = screens.query(segment) {
        Variant::media(query)
    } else if segment.starts_with("group-") {
        Variant::group(segment)
    } else {
        Variant::pseudo(segment)
    }
}
