//! Variant descriptors.

/// A modifier on a rule.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Wraps the rule in an at-rule. Holds the full prelude, e.g. `@media (min-width: 576px)`.
    AtRule(String),
    /// A pseudo-class on the rule's own selector, by name (`hover`, `focus-visible`).
    Pseudo(String),
    /// A state of an ancestor `.group` element, by full name (`group-hover`).
    Group(String),
}

impl Variant {
    /// `@media QUERY` at-rule.
    #[inline]
    pub fn media(query: impl AsRef<str>) -> Self {
        Self::AtRule(format!("@media {}", query.as_ref()))
    }

    /// `@supports CONDITION` at-rule.
    #[inline]
    pub fn supports(condition: impl AsRef<str>) -> Self {
        Self::AtRule(format!("@supports {}", condition.as_ref()))
    }

    /// Pseudo-class variant such as `hover`.
    #[inline]
    pub fn pseudo(name: impl Into<String>) -> Self {
        Self::Pseudo(name.into())
    }

    /// Ancestor state variant such as `group-hover`.
    #[inline]
    pub fn group(name: impl Into<String>) -> Self {
        Self::Group(name.into())
    }

    /// CSS representation used for scoring and identity.
    ///
    /// At-rules are verbatim, pseudo variants gain a leading `:`, group variants keep
    /// their raw name.
    pub fn css(&self) -> String {
        match self {
            Self::AtRule(text) | Self::Group(text) => text.clone(),
            Self::Pseudo(name) => format!(":{name}"),
        }
    }

    /// Whether the variant wraps the rule instead of extending its selector.
    #[inline]
    pub const fn is_at_rule(&self) -> bool {
        matches!(self, Self::AtRule(_))
    }

    /// The state name for pseudo and group variants, `None` for at-rules.
    pub fn state_name(&self) -> Option<&str> {
        match self {
            Self::AtRule(_) => None,
            Self::Pseudo(name) | Self::Group(name) => Some(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_forms() {
        assert_eq!(
            Variant::media("(min-width: 576px)").css(),
            "@media (min-width: 576px)"
        );
        assert_eq!(Variant::pseudo("hover").css(), ":hover");
        assert_eq!(Variant::group("group-focus").css(), "group-focus");
        assert!(Variant::supports("(display: grid)").is_at_rule());
        assert_eq!(Variant::supports("(display: grid)").state_name(), None);
    }
}
