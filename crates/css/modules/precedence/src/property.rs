//! Property precedence classification.
//!
//! The baseline rank of a property is its separator density: `border-left-width` is more
//! specific than `border-width`, which is more specific than `border`. Two small families
//! are corrected by one step:
//!
//! - `+1`: `border-*-{width,color,style}` longhands, short `top`/`left`/`bottom`/`right`
//!   shaped names, and `continue`-shaped names.
//! - `-1`: `flex-flow`/`line-clamp` shaped names, `grid-area`, and `place-*`.
//!
//! Reference: <https://github.com/kripod/otion/blob/main/packages/otion/src/propertyMatchers.ts>

use crate::separator::separator_count;

/// Strip a vendor prefix (`-webkit-appearance` → `appearance`).
///
/// Custom properties lose their leading `--`. A name starting with `-` but without a
/// second dash is returned unchanged.
pub fn unprefixed_property(property: &str) -> &str {
    if !property.starts_with('-') {
        return property;
    }
    property
        .get(1..)
        .and_then(|rest| rest.find('-'))
        .and_then(|offset| property.get(offset + 2..))
        .unwrap_or(property)
}

/// Precedence of a property name, `0..=15` for every realistic name.
pub fn property_rank(property: &str) -> u32 {
    let unprefixed = unprefixed_property(property);
    let baseline = separator_count(unprefixed).saturating_add(1);
    baseline.saturating_add_signed(correction(unprefixed))
}

/// Precedence a declaration's property contributes to the key.
///
/// Vendor-prefixed and custom properties never influence ordering.
#[inline]
pub fn declaration_property_rank(property: &str) -> u32 {
    if property.starts_with('-') {
        0
    } else {
        property_rank(property)
    }
}

/// `+1`, `-1` or `0` depending on which correction family `name` falls into.
fn correction(name: &str) -> i32 {
    let chars: Vec<char> = name.chars().collect();
    if is_border_longhand(&chars) || is_edge_shaped(&chars) || is_continue_shaped(&chars) {
        1
    } else if is_grouped_shorthand(&chars) {
        -1
    } else {
        0
    }
}

/// `border-` followed by an optional `[tlbr]` side of 3 to 5 chars and `-`, then `w`, `c` or `sty`.
fn is_border_longhand(chars: &[char]) -> bool {
    let Some(rest) = strip_prefix(chars, "border-") else {
        return false;
    };
    if starts_with_part(rest) {
        return true;
    }
    if !rest.first().is_some_and(|first| is_side_initial(*first)) {
        return false;
    }
    (2..=4).any(|middle| {
        rest.get(middle + 1) == Some(&'-')
            && rest.get(middle + 2..).is_some_and(starts_with_part)
    })
}

/// Names like `top`, `left`, `right`, `bottom`.
fn is_edge_shaped(chars: &[char]) -> bool {
    let Some(first) = chars.first() else {
        return false;
    };
    if !is_side_initial(*first) {
        return false;
    }
    let len = chars.len();
    (3..=5).contains(&len) || (len == 6 && chars.last() == Some(&'m'))
}

/// Eight-character names starting with `c`.
fn is_continue_shaped(chars: &[char]) -> bool {
    chars.len() == 8 && chars.first() == Some(&'c')
}

/// `flex-flow`, `line-clamp`, `grid-area`, `place-*`.
fn is_grouped_shorthand(chars: &[char]) -> bool {
    match chars.first() {
        Some('f' | 'l') => chars.get(6) == Some(&'l'),
        Some('g') => chars.len() == 9,
        Some('p') => chars.get(1) == Some(&'l'),
        _ => false,
    }
}

const fn is_side_initial(character: char) -> bool {
    matches!(character, 't' | 'l' | 'b' | 'r')
}

fn starts_with_part(chars: &[char]) -> bool {
    matches!(chars.first(), Some('w' | 'c')) || strip_prefix(chars, "sty").is_some()
}

fn strip_prefix<'chars>(chars: &'chars [char], prefix: &str) -> Option<&'chars [char]> {
    let mut rest = chars;
    for expected in prefix.chars() {
        let (first, tail) = rest.split_first()?;
        if *first != expected {
            return None;
        }
        rest = tail;
    }
    Some(rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_vendor_prefixes() {
        assert_eq!(unprefixed_property("-webkit-appearance"), "appearance");
        assert_eq!(unprefixed_property("-moz-tab-size"), "tab-size");
        assert_eq!(unprefixed_property("--tw-ring"), "tw-ring");
        assert_eq!(unprefixed_property("-x"), "-x");
        assert_eq!(unprefixed_property("color"), "color");
    }

    #[test]
    fn baseline_follows_separator_density() {
        assert_eq!(property_rank("display"), 1);
        assert_eq!(property_rank("padding-top"), 2);
        assert_eq!(property_rank("text-align"), 2);
        assert_eq!(property_rank("grid-template-columns"), 3);
    }

    #[test]
    fn directional_families_win() {
        assert_eq!(property_rank("border-left-width"), 4);
        assert_eq!(property_rank("border-width"), 3);
        assert_eq!(property_rank("border-color"), 3);
        assert_eq!(property_rank("border-style"), 3);
        assert_eq!(property_rank("border-top-style"), 4);
        assert_eq!(property_rank("top"), 2);
        assert_eq!(property_rank("left"), 2);
        assert_eq!(property_rank("right"), 2);
        assert_eq!(property_rank("bottom"), 2);
        assert_eq!(property_rank("continue"), 2);
    }

    #[test]
    fn grouped_shorthands_lose() {
        assert_eq!(property_rank("flex-flow"), 1);
        assert_eq!(property_rank("line-clamp"), 1);
        assert_eq!(property_rank("grid-area"), 1);
        assert_eq!(property_rank("place-content"), 1);
        assert_eq!(property_rank("place-items"), 1);
        assert_eq!(property_rank("place-self"), 1);
    }

    #[test]
    fn longhand_outranks_shorthand() {
        assert!(property_rank("border-right-width") > property_rank("border"));
        assert!(property_rank("padding-top") > property_rank("padding"));
    }

    #[test]
    fn prefixed_properties_are_ignored_for_declarations() {
        assert_eq!(declaration_property_rank("-webkit-appearance"), 0);
        assert_eq!(declaration_property_rank("--tw-ring-opacity"), 0);
        assert_eq!(property_rank("-webkit-appearance"), 1);
        assert_eq!(declaration_property_rank("appearance"), 1);
    }
}
