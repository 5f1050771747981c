//! Boundary to the utility parser.

use std::collections::HashMap;

use css_core::{Declarations, Keyframes};

/// What a utility name expands to, before variants are applied.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Utility {
    /// Declarations of the generated rule.
    pub declarations: Declarations,
    /// Selector text appended after the class.
    pub suffix: Option<String>,
    /// Keyframes referenced by name from `animation` declarations.
    pub keyframes: Vec<Keyframes>,
}

impl Utility {
    #[inline]
    pub fn new(declarations: Declarations) -> Self {
        Self {
            declarations,
            suffix: None,
            keyframes: Vec::new(),
        }
    }

    #[must_use]
    #[inline]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    #[must_use]
    #[inline]
    pub fn with_keyframes(mut self, keyframes: Keyframes) -> Self {
        self.keyframes.push(keyframes);
        self
    }
}

/// Result of translating a utility name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Translation {
    /// A style rule.
    Rule(Utility),
    /// A class that only marks an element, such as `group`. Gets a name, emits no CSS.
    Marker,
}

/// Expands utility names (the token without its variant prefixes).
pub trait Translator {
    /// `None` when the name is unknown.
    fn translate(&self, name: &str) -> Option<Translation>;
}

impl<F> Translator for F
where
    F: Fn(&str) -> Option<Translation>,
{
    #[inline]
    fn translate(&self, name: &str) -> Option<Translation> {
        self(name)
    }
}

/// Table-driven translator populated up front.
#[derive(Clone, Debug, Default)]
pub struct StaticTranslator {
    entries: HashMap<String, Translation>,
}

impl StaticTranslator {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a utility.
    #[must_use]
    pub fn utility(mut self, name: impl Into<String>, utility: Utility) -> Self {
        self.entries.insert(name.into(), Translation::Rule(utility));
        self
    }

    /// Register a utility from declaration pairs.
    #[must_use]
    pub fn declare<P, V>(self, name: impl Into<String>, pairs: impl IntoIterator<Item = (P, V)>) -> Self
    where
        P: Into<String>,
        V: Into<String>,
    {
        self.utility(name, Utility::new(pairs.into_iter().collect()))
    }

    /// Register a marker class.
    #[must_use]
    pub fn marker(mut self, name: impl Into<String>) -> Self {
        self.entries.insert(name.into(), Translation::Marker);
        self
    }
}

impl Translator for StaticTranslator {
    fn translate(&self, name: &str) -> Option<Translation> {
        self.entries.get(name).cloned()
    }
}
