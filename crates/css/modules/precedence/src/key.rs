//! The 38-bit precedence key.
//!
//! ```text
//! bit 37                           12 11         0
//!     | responsive:5 | at-rules:4 | pseudo:17 | count:4 | property:4 | value:4 |
//! ```
//!
//! The upper 26 bits order rules by variant chain, the lower 12 bits order rules that share
//! a variant chain by their declarations. Lower keys are emitted first.

use css_core::{Declarations, Variant};

use crate::property::declaration_property_rank;
use crate::pseudo::pseudo_bitset;
use crate::separator::separator_count;

/// Multiplier separating the variant half from the declaration half.
const DECLARATION_SPAN: u64 = 1 << 12;

/// Unpacked precedence key. Every field is masked to its width on [`Precedence::pack`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Precedence {
    /// Responsive breakpoint tier, 5 bits.
    pub responsive: u32,
    /// Separator density of the remaining at-rules, 4 bits.
    pub at_rules: u32,
    /// Pseudo and group variant bitset, 17 bits.
    pub pseudo: u32,
    /// `15 - active declaration count`, 4 bits.
    pub declaration_count: u32,
    /// Greatest property rank among active declarations, 4 bits.
    pub property: u32,
    /// Greatest descending value rank among active declarations, 4 bits.
    pub value: u32,
}

impl Precedence {
    /// Score a rule from its variant chain and declarations.
    pub fn of(variants: &[Variant], declarations: &Declarations) -> Self {
        let first_css = variants.first().map(Variant::css).unwrap_or_default();
        let responsive = responsive_rank(&first_css);
        let remaining = if responsive > 0.0 {
            variants.get(1..).unwrap_or_default()
        } else {
            variants
        };
        let at_rules_css = remaining
            .iter()
            .filter(|variant| variant.is_at_rule())
            .map(Variant::css)
            .collect::<Vec<_>>()
            .join(";");

        let mut property = 0u32;
        let mut value = 0u32;
        for (name, text) in declarations.active() {
            property = property.max(declaration_property_rank(name));
            value = value.max(descending(separator_count(text)));
        }

        Self {
            responsive: responsive as u32,
            at_rules: separator_count(&at_rules_css),
            pseudo: pseudo_bitset(variants),
            declaration_count: descending(
                u32::try_from(declarations.active_count()).unwrap_or(u32::MAX),
            ),
            property,
            value,
        }
    }

    /// The 26-bit variant half.
    #[inline]
    pub const fn variant_bits(&self) -> u64 {
        (((self.responsive & 31) << 21) | ((self.at_rules & 15) << 17) | (self.pseudo & 0x1_ffff))
            as u64
    }

    /// The 12-bit declaration half.
    #[inline]
    pub const fn declaration_bits(&self) -> u64 {
        (((self.declaration_count & 15) << 8) | ((self.property & 15) << 4) | (self.value & 15))
            as u64
    }

    /// Pack into the single integer key.
    #[inline]
    pub const fn pack(&self) -> u64 {
        self.variant_bits() * DECLARATION_SPAN + self.declaration_bits()
    }

    /// Split a packed key back into its fields.
    pub const fn unpack(key: u64) -> Self {
        let variant = (key / DECLARATION_SPAN) as u32;
        let declaration = (key % DECLARATION_SPAN) as u32;
        Self {
            responsive: (variant >> 21) & 31,
            at_rules: (variant >> 17) & 15,
            pseudo: variant & 0x1_ffff,
            declaration_count: (declaration >> 8) & 15,
            property: (declaration >> 4) & 15,
            value: declaration & 15,
        }
    }
}

/// Precedence key of a rule. See [`Precedence`] for the layout.
#[inline]
pub fn calculate_precedence(variants: &[Variant], declarations: &Declarations) -> u64 {
    Precedence::of(variants, declarations).pack()
}

/// Responsive tier of an at-rule: the first `(min-width: N` in `css`, scaled so that
/// `576px` and `36rem` map to `3.6` and `1536px`/`96rem` to `9.6`.
///
/// Pixel values are divided by 16 first; any other unit is taken as-is. Returns `0.0` when
/// no breakpoint is present. The caller truncates; a non-zero result below one still marks
/// the first variant as the breakpoint.
pub fn responsive_rank(css: &str) -> f64 {
    let mut search = css;
    while let Some(open) = search.find('(') {
        let after = search.get(open + 1..).unwrap_or_default();
        if let Some(rank) = min_width_after_paren(after) {
            return rank;
        }
        search = after;
    }
    0.0
}

/// Match `\s*min-width:\s*(\d+(?:.\d+)?)(p)?` at the start of `text`.
///
/// The separator between integer and fraction may be any character; anything other than
/// `.` yields a number that does not parse, which ranks as zero.
fn min_width_after_paren(text: &str) -> Option<f64> {
    let rest = text.trim_start().strip_prefix("min-width:")?.trim_start();
    let integer_len = digit_run(rest);
    if integer_len == 0 {
        return None;
    }
    let mut number_len = integer_len;
    let after_integer = rest.get(integer_len..).unwrap_or_default();
    let mut chars = after_integer.chars();
    if let Some(separator) = chars.next() {
        let fraction_len = digit_run(chars.as_str());
        if fraction_len > 0 {
            if separator != '.' {
                return Some(0.0);
            }
            number_len += 1 + fraction_len;
        }
    }
    let number: f64 = rest.get(..number_len)?.parse().unwrap_or(0.0);
    let unit = rest.get(number_len..).unwrap_or_default();
    let divisor = if unit.starts_with('p') { 16.0 } else { 1.0 };
    Some(number / divisor / 10.0)
}

/// Length in bytes of the leading ASCII digit run.
fn digit_run(text: &str) -> usize {
    text.find(|character: char| !character.is_ascii_digit())
        .unwrap_or(text.len())
}

/// `15 - min(15, value)`: higher input sorts earlier.
#[inline]
const fn descending(value: u32) -> u32 {
    15u32.saturating_sub(value)
}
