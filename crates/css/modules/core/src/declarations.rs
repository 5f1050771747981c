//! Ordered declaration blocks.

use core::fmt::{self, Write as _};

/// Whether a declaration value takes part in rendering and scoring.
///
/// Disabled (`None`) and empty values are treated as absent.
#[inline]
pub fn is_active_value(value: Option<&str>) -> bool {
    value.is_some_and(|text| !text.is_empty())
}

/// Insertion-ordered map from property name to value.
///
/// A `None` value is the "disabled" sentinel: the property is kept in the block but is
/// skipped everywhere it would otherwise be counted or emitted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Declarations {
    entries: Vec<(String, Option<String>)>,
}

impl Declarations {
    /// Empty block.
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Set `property` to `value`, replacing an existing entry in place.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.put(property.into(), Some(value.into()));
        self
    }

    /// Mark `property` as disabled.
    pub fn disable(&mut self, property: impl Into<String>) -> &mut Self {
        self.put(property.into(), None);
        self
    }

    /// Builder form of [`Declarations::set`].
    #[must_use]
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    /// Builder form of [`Declarations::disable`].
    #[must_use]
    pub fn without(mut self, property: impl Into<String>) -> Self {
        self.disable(property);
        self
    }

    fn put(&mut self, property: String, value: Option<String>) {
        if let Some(slot) = self.entries.iter_mut().find(|(name, _)| *name == property) {
            slot.1 = value;
        } else {
            self.entries.push((property, value));
        }
    }

    /// Value of `property`, if present and not disabled.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == property)
            .and_then(|(_, value)| value.as_deref())
            .filter(|text| is_active_value(Some(text)))
    }

    /// All entries including disabled ones.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_deref()))
    }

    /// Entries that take part in rendering and scoring.
    pub fn active(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().filter_map(|(name, value)| match value.as_deref() {
            Some(text) if is_active_value(Some(text)) => Some((name.as_str(), text)),
            _ => None,
        })
    }

    /// Number of active entries.
    #[inline]
    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    /// Whether the block has no entries at all, disabled ones included.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Mutable access to active values, used to rewrite references such as animation names.
    pub fn values_mut(&mut self) -> impl Iterator<Item = (&str, &mut String)> {
        self.entries
            .iter_mut()
            .filter_map(|(name, value)| value.as_mut().map(|text| (name.as_str(), text)))
    }

    /// Render as `prop:value;prop:value`, skipping disabled entries.
    #[inline]
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Declarations {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (name, value)) in self.active().enumerate() {
            if index > 0 {
                formatter.write_char(';')?;
            }
            write!(formatter, "{name}:{value}")?;
        }
        Ok(())
    }
}

impl<P: Into<String>, V: Into<String>> FromIterator<(P, V)> for Declarations {
    fn from_iter<T: IntoIterator<Item = (P, V)>>(iter: T) -> Self {
        let mut out = Self::new();
        for (property, value) in iter {
            out.set(property, value);
        }
        out
    }
}
