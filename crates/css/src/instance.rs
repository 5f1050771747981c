//! The class-name API.

use css_core::{Declarations, Rule};
use css_injector::{Injector, RuleStore};
use log::{debug, warn};

use crate::options::Options;
use crate::token;
use crate::translate::{Translation, Translator, Utility};

/// A styling instance: one translator, one rule store, one style target.
///
/// Instances share nothing. Calls must not overlap; wrap the instance in a lock to use it
/// from several threads.
#[derive(Debug)]
pub struct Instance<I: Injector, T: Translator> {
    store: RuleStore<I>,
    translator: T,
    options: Options,
}

impl<I: Injector, T: Translator> Instance<I, T> {
    pub fn new(injector: I, translator: T, options: Options) -> Self {
        Self {
            store: RuleStore::new(injector, options.hashing),
            translator,
            options,
        }
    }

    /// Class names for whitespace-separated tokens, space-joined in input order.
    ///
    /// Repeated tokens repeat their name; the rule itself is only inserted once.
    pub fn cx(&mut self, input: &str) -> String {
        input
            .split_whitespace()
            .map(|token| self.resolve(token))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Class name for a single token. Unknown tokens are returned unchanged.
    pub fn resolve(&mut self, token: &str) -> String {
        let (variants, name) = token::split(token, &self.options.screens);
        match self.translator.translate(name) {
            None => {
                warn!("No translation for {token}");
                token.to_owned()
            }
            Some(Translation::Marker) => self.store.hashing().marker(token),
            Some(Translation::Rule(utility)) => {
                let Utility {
                    mut declarations,
                    suffix,
                    keyframes,
                } = utility;
                for frames in &keyframes {
                    let assigned = self.store.resolve_keyframes(frames);
                    rename_animation(&mut declarations, &frames.name, &assigned);
                }
                let rule = Rule {
                    variants,
                    declarations,
                    suffix,
                };
                self.store.resolve(token, &rule)
            }
        }
    }

    /// Replace the options. Emitted rules are dropped since their names may change.
    pub fn setup(&mut self, options: Options) {
        self.store.set_hashing(options.hashing);
        self.options = options;
        debug!("Instance reconfigured");
    }

    /// Drop every emitted rule and keyframes block.
    pub fn reset(&mut self) {
        self.store.reset();
        debug!("Instance reset");
    }

    #[inline]
    pub const fn options(&self) -> &Options {
        &self.options
    }

    #[inline]
    pub const fn store(&self) -> &RuleStore<I> {
        &self.store
    }

    #[inline]
    pub const fn injector(&self) -> &I {
        self.store.injector()
    }

    #[inline]
    pub const fn translator(&self) -> &T {
        &self.translator
    }
}

/// Point `animation`/`animation-name` references of `from` at `to`.
fn rename_animation(declarations: &mut Declarations, from: &str, to: &str) {
    for (property, value) in declarations.values_mut() {
        if matches!(property, "animation" | "animation-name") {
            *value = replace_word(value, from, to);
        }
    }
}

/// Replace whole words equal to `from`; words are delimited by whitespace and commas.
fn replace_word(text: &str, from: &str, to: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word_start = 0usize;
    for (index, character) in text.char_indices() {
        if character.is_whitespace() || character == ',' {
            push_word(&mut out, text.get(word_start..index).unwrap_or_default(), from, to);
            out.push(character);
            word_start = index + character.len_utf8();
        }
    }
    push_word(&mut out, text.get(word_start..).unwrap_or_default(), from, to);
    out
}

fn push_word(out: &mut String, word: &str, from: &str, to: &str) {
    out.push_str(if word == from { to } else { word });
}
