//! Ordering of pseudo-class and group variants.
//!
//! Reference:
//! - <https://bitsofco.de/when-do-the-hover-focus-and-active-pseudo-classes-apply/>
//! - <https://developer.mozilla.org/docs/Web/CSS/:active#active_links>

use css_core::Variant;

/// Known states in ascending cascade order. The index is the bit position in the
/// pseudo bitset, so the order must not change.
pub const PSEUDO_CLASS_ORDER: [&str; 16] = [
    "first",
    "last",
    "odd",
    "even",
    "link",
    "visited",
    "empty",
    "checked",
    "group-hover",
    "group-focus",
    "focus-within",
    "hover",
    "focus",
    "focus-visible",
    "active",
    "disabled",
];

/// Bucket shared by every state outside [`PSEUDO_CLASS_ORDER`].
pub const UNKNOWN_PSEUDO_RANK: u32 = 16;

/// Rank of a pseudo-class or group variant name. A leading `:` is ignored.
pub fn pseudo_rank(name: &str) -> u32 {
    let bare = name.strip_prefix(':').unwrap_or(name);
    PSEUDO_CLASS_ORDER
        .iter()
        .position(|known| *known == bare)
        .map_or(UNKNOWN_PSEUDO_RANK, |index| index as u32)
}

/// OR of `1 << rank` over the pseudo and group variants of a chain. At-rules contribute nothing.
pub fn pseudo_bitset(variants: &[Variant]) -> u32 {
    variants
        .iter()
        .filter_map(Variant::state_name)
        .fold(0, |bits, name| bits | (1u32 << pseudo_rank(name)))
}
