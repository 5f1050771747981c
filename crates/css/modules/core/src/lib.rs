//! Shared data model for the atomic CSS engine.
//!
//! A utility token is resolved by an external parser into a [`Rule`]: an ordered
//! [`Variant`] chain plus a [`Declarations`] block. Everything downstream
//! (precedence scoring, identity hashing, rendering) is a pure function of these types.

#![forbid(unsafe_code)]

mod declarations;
mod keyframes;
mod variant;

pub use declarations::{Declarations, is_active_value};
pub use keyframes::Keyframes;
pub use variant::Variant;

/// A resolved utility: what to wrap the declarations in, and the declarations themselves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Rule {
    /// Variant chain in token order. A responsive breakpoint, if any, comes first.
    pub variants: Vec<Variant>,
    /// Declarations of the rule.
    pub declarations: Declarations,
    /// Extra selector text appended after the class, e.g. `>:not([hidden])~:not([hidden])`.
    pub suffix: Option<String>,
}

impl Rule {
    /// Unconditioned rule with the given declarations.
    #[inline]
    pub fn new(declarations: Declarations) -> Self {
        Self {
            variants: Vec::new(),
            declarations,
            suffix: None,
        }
    }

    /// Append a variant to the chain.
    #[must_use]
    #[inline]
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variants.push(variant);
        self
    }

    /// Set the selector suffix.
    #[must_use]
    #[inline]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }
}
