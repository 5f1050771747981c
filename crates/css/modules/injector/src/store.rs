//! Deduplicating, precedence-sorted rule store.

use std::collections::HashMap;

use css_core::{Keyframes, Rule};
use css_identity::Hashing;
use css_precedence::calculate_precedence;
use log::{trace, warn};

use crate::render::{render_keyframes, render_rule};
use crate::target::Injector;

/// Emitted rules of one styling instance.
///
/// `precedences[i]` is the key of the i-th rule in the injector, so the target stays sorted
/// ascending by key. The store assumes a single writer; share it behind external
/// synchronization if needed.
#[derive(Debug)]
pub struct RuleStore<I: Injector> {
    injector: I,
    hashing: Hashing,
    /// Keys of the rules in the target, ascending.
    precedences: Vec<u64>,
    /// Rule identity key to assigned class name.
    names: HashMap<String, String>,
    /// Keyframes identity key to assigned animation name and emitted body.
    keyframes: HashMap<String, (String, String)>,
}

impl<I: Injector> RuleStore<I> {
    /// Empty store writing into `injector`.
    #[inline]
    pub fn new(injector: I, hashing: Hashing) -> Self {
        Self {
            injector,
            hashing,
            precedences: Vec::new(),
            names: HashMap::new(),
            keyframes: HashMap::new(),
        }
    }

    /// Class name for `rule`, inserting it into the target on first sight.
    ///
    /// Resolving an already seen identity returns the same name and changes nothing. New
    /// rules go after every existing rule with a lower or equal key, so ties keep
    /// first-seen order.
    pub fn resolve(&mut self, token: &str, rule: &Rule) -> String {
        let identity = self.hashing.identify(token, rule);
        if let Some(name) = self.names.get(&identity.key) {
            return name.clone();
        }

        let precedence = calculate_precedence(&rule.variants, &rule.declarations);
        let css = render_rule(&identity.name, rule);
        let index = self
            .precedences
            .partition_point(|existing| *existing <= precedence);
        match self.injector.insert(&css, index) {
            Ok(()) => {
                trace!("Inserted {css} at {index} with precedence {precedence:#x}");
                self.precedences.insert(index, precedence);
            }
            Err(error) => warn!("Style target rejected {css}: {error:#}"),
        }
        self.names.insert(identity.key, identity.name.clone());
        identity.name
    }

    /// Animation name for `keyframes`, appending the block on first sight.
    pub fn resolve_keyframes(&mut self, keyframes: &Keyframes) -> String {
        self.resolve_keyframes_body(&keyframes.name, &keyframes.body())
    }

    /// Animation name for a keyframes `body` known as `name` before hashing.
    ///
    /// Hashed names are keyed by body. Verbatim names are keyed by name, since two blocks
    /// under one name would override each other: a second body for a known name is logged
    /// and dropped.
    pub fn resolve_keyframes_body(&mut self, name: &str, body: &str) -> String {
        let key = if self.hashing.is_hashed() { body } else { name };
        if let Some((assigned, emitted)) = self.keyframes.get(key) {
            if emitted != body {
                warn!("Keyframes {assigned} already defined as {emitted}, ignoring {body}");
            }
            return assigned.clone();
        }

        let assigned = self.hashing.keyframes(name, body);
        let css = render_keyframes(&assigned, body);
        match self.injector.insert_keyframes(&css) {
            Ok(()) => trace!("Appended keyframes {assigned}"),
            Err(error) => warn!("Style target rejected {css}: {error:#}"),
        }
        self.keyframes
            .insert(key.to_owned(), (assigned.clone(), body.to_owned()));
        assigned
    }

    /// Forget every emitted rule and clear the target.
    pub fn reset(&mut self) {
        self.injector.clear();
        self.precedences.clear();
        self.names.clear();
        self.keyframes.clear();
    }

    /// Switch naming mode. Names already handed out would no longer match, so this resets.
    pub fn set_hashing(&mut self, hashing: Hashing) {
        self.hashing = hashing;
        self.reset();
    }

    /// Current naming mode.
    #[inline]
    pub const fn hashing(&self) -> Hashing {
        self.hashing
    }

    /// Precedence keys of the rules in the target, ascending.
    #[inline]
    pub fn precedences(&self) -> &[u64] {
        &self.precedences
    }

    /// Number of style rules in the target.
    #[inline]
    pub fn len(&self) -> usize {
        self.precedences.len()
    }

    /// Whether no style rule was emitted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.precedences.is_empty()
    }

    /// The target rules are written into.
    #[inline]
    pub const fn injector(&self) -> &I {
        &self.injector
    }

    /// Consume the store, returning its target.
    #[inline]
    pub fn into_injector(self) -> I {
        self.injector
    }
}
