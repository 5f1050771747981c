//! Precedence scoring for atomic rules.
//!
//! Rules are inserted incrementally and out of source order, so the cascade cannot rely on
//! stylesheet position. Instead every rule gets a 38-bit key computed from its variant chain
//! and declarations; emitting rules in ascending key order reproduces the cascade behavior a
//! utility framework needs (responsive tiers, pseudo-class order, shorthand vs longhand).
//!
//! Reference: <https://github.com/kripod/otion> (precedence model).

#![forbid(unsafe_code)]

mod key;
mod property;
mod pseudo;
mod separator;

pub use key::{Precedence, calculate_precedence, responsive_rank};
pub use property::{declaration_property_rank, property_rank, unprefixed_property};
pub use pseudo::{PSEUDO_CLASS_ORDER, UNKNOWN_PSEUDO_RANK, pseudo_bitset, pseudo_rank};
pub use separator::separator_count;
