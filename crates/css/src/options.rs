//! Instance configuration.

use css_identity::Hashing;

/// Ordered responsive breakpoints: screen name to `min-width` length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Screens {
    entries: Vec<(String, String)>,
}

impl Default for Screens {
    fn default() -> Self {
        [
            ("sm", "576px"),
            ("md", "768px"),
            ("lg", "992px"),
            ("xl", "1280px"),
            ("2xl", "1536px"),
        ]
        .into_iter()
        .collect()
    }
}

impl Screens {
    /// No breakpoints at all.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add or replace a breakpoint.
    pub fn set(&mut self, name: impl Into<String>, min_width: impl Into<String>) -> &mut Self {
        let name = name.into();
        let min_width = min_width.into();
        if let Some(slot) = self.entries.iter_mut().find(|(known, _)| *known == name) {
            slot.1 = min_width;
        } else {
            self.entries.push((name, min_width));
        }
        self
    }

    /// `min-width` of the named screen.
    pub fn min_width(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(known, _)| known == name)
            .map(|(_, width)| width.as_str())
    }

    /// Media query for the named screen, e.g. `(min-width: 576px)`.
    pub fn query(&self, name: &str) -> Option<String> {
        self.min_width(name)
            .map(|width| format!("(min-width: {width})"))
    }

    /// Screens in definition order as `(name, min-width)`.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, width)| (name.as_str(), width.as_str()))
    }
}

impl<N: Into<String>, W: Into<String>> FromIterator<(N, W)> for Screens {
    fn from_iter<T: IntoIterator<Item = (N, W)>>(iter: T) -> Self {
        let mut screens = Self::empty();
        for (name, width) in iter {
            screens.set(name, width);
        }
        screens
    }
}

/// Options of an [`Instance`](crate::Instance).
#[derive(Clone, Debug, Default)]
pub struct Options {
    /// How class names are derived. Defaults to hashed names.
    pub hashing: Hashing,
    /// Responsive breakpoints recognised as token variants.
    pub screens: Screens,
}

impl Options {
    /// Options with hashing disabled; class names are the tokens themselves.
    #[inline]
    pub fn verbatim() -> Self {
        Self {
            hashing: Hashing::Verbatim,
            screens: Screens::default(),
        }
    }

    #[must_use]
    #[inline]
    pub fn with_screens(mut self, screens: Screens) -> Self {
        self.screens = screens;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_screens() {
        let screens = Screens::default();
        assert_eq!(screens.query("sm").as_deref(), Some("(min-width: 576px)"));
        assert_eq!(screens.min_width("2xl"), Some("1536px"));
        assert_eq!(screens.min_width("3xl"), None);
        assert_eq!(screens.iter().count(), 5);
    }

    #[test]
    fn set_replaces_breakpoint() {
        let mut screens = Screens::default();
        screens.set("sm", "36rem").set("tablet", "640px");
        assert_eq!(screens.min_width("sm"), Some("36rem"));
        assert_eq!(screens.iter().last(), Some(("tablet", "640px")));
    }

    #[test]
    fn verbatim_options() {
        assert!(!Options::verbatim().hashing.is_hashed());
        assert!(Options::default().hashing.is_hashed());
    }
}
