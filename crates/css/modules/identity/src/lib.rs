//! Rule identity and short class names.
//!
//! A rule's identity is the canonical string of its variants, selector suffix and rendered
//! declarations. Two tokens that reduce to the same canonical string (`border-x` and
//! `border-lr`) share one identity and therefore one class name.

#![forbid(unsafe_code)]

mod hash;

pub use hash::cyrb32;

use core::fmt;

use css_core::Rule;

/// Digest function producing a CSS-safe identifier.
pub type HashFn = fn(&str) -> String;

/// How class and keyframes names are derived.
#[derive(Clone, Copy)]
pub enum Hashing {
    /// Names are a digest of the canonical string.
    Hashed(HashFn),
    /// Names are the input token itself, for debugging and snapshots.
    Verbatim,
}

impl fmt::Debug for Hashing {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hashed(_) => formatter.write_str("Hashed"),
            Self::Verbatim => formatter.write_str("Verbatim"),
        }
    }
}

impl Default for Hashing {
    #[inline]
    fn default() -> Self {
        Self::Hashed(cyrb32)
    }
}

/// The deduplication key of a rule together with the name assigned to it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Identity {
    /// Key used to decide whether the rule was already emitted.
    pub key: String,
    /// Class name (without the leading `.`).
    pub name: String,
}

impl Hashing {
    /// Whether names are digests.
    #[inline]
    pub const fn is_hashed(&self) -> bool {
        matches!(self, Self::Hashed(_))
    }

    /// Name for a canonical string; `token` is used verbatim when hashing is off.
    pub fn name(&self, token: &str, canonical: &str) -> String {
        match self {
            Self::Hashed(digest) => digest(canonical),
            Self::Verbatim => token.to_owned(),
        }
    }

    /// Identity of `rule` resolved from `token`.
    ///
    /// With hashing the name is a function of the canonical string, so the canonical string
    /// alone is the key. Without it the token is part of the rendered selector and has to be
    /// part of the key as well.
    pub fn identify(&self, token: &str, rule: &Rule) -> Identity {
        let canonical = canonical_rule(rule);
        let name = self.name(token, &canonical);
        let key = match self {
            Self::Hashed(_) => canonical,
            Self::Verbatim => format!("{token}\u{0}{canonical}"),
        };
        Identity { key, name }
    }

    /// Name for a marker class such as `group` that carries no declarations.
    #[inline]
    pub fn marker(&self, token: &str) -> String {
        self.name(token, token)
    }

    /// Name for a keyframes block with the given body; `name` is used verbatim when hashing
    /// is off.
    #[inline]
    pub fn keyframes(&self, name: &str, body: &str) -> String {
        self.name(name, body)
    }
}

/// Canonical string of a rule: variants' CSS, then the suffix, then the declarations.
pub fn canonical_rule(rule: &Rule) -> String {
    let mut out = String::new();
    for variant in &rule.variants {
        out.push_str(&variant.css());
    }
    if let Some(suffix) = &rule.suffix {
        out.push_str(suffix);
    }
    out.push_str(&rule.declarations.to_css());
    out
}
