//! Style targets receiving rendered CSS text.

use anyhow::{Result, ensure};

/// A destination for rendered rules: a runtime stylesheet, a captured array, a file.
///
/// Rules are inserted at an explicit index so the target mirrors the store's precedence
/// order. Keyframes blocks are order-independent and are only ever appended.
pub trait Injector {
    /// Insert a style rule at `index` (`0..=number of rules`).
    ///
    /// # Errors
    /// Returns an error if the target rejects the rule or the index is out of range.
    fn insert(&mut self, rule: &str, index: usize) -> Result<()>;

    /// Append an `@keyframes` block.
    ///
    /// # Errors
    /// Returns an error if the target rejects the block.
    fn insert_keyframes(&mut self, rule: &str) -> Result<()>;

    /// Remove everything that was inserted.
    fn clear(&mut self);
}

/// In-memory target that accumulates rule text in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VirtualInjector {
    rules: Vec<String>,
    keyframes: Vec<String>,
}

impl VirtualInjector {
    #[inline]
    pub const fn new() -> Self {
        Self {
            rules: Vec::new(),
            keyframes: Vec::new(),
        }
    }

    /// Style rules in precedence order.
    #[inline]
    pub fn rules(&self) -> &[String] {
        &self.rules
    }

    /// Keyframes blocks in insertion order.
    #[inline]
    pub fn keyframes(&self) -> &[String] {
        &self.keyframes
    }

    /// Full stylesheet contents: style rules followed by keyframes blocks.
    pub fn target(&self) -> Vec<&str> {
        self.rules
            .iter()
            .chain(&self.keyframes)
            .map(String::as_str)
            .collect()
    }
}

impl Injector for VirtualInjector {
    fn insert(&mut self, rule: &str, index: usize) -> Result<()> {
        ensure!(
            index <= self.rules.len(),
            "insertion index {index} out of range for {} rules",
            self.rules.len()
        );
        self.rules.insert(index, rule.to_owned());
        Ok(())
    }

    fn insert_keyframes(&mut self, rule: &str) -> Result<()> {
        self.keyframes.push(rule.to_owned());
        Ok(())
    }

    fn clear(&mut self) {
        self.rules.clear();
        self.keyframes.clear();
    }
}
