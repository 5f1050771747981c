//! Rule rendering and precedence-ordered injection.
//!
//! [`RuleStore`] is the single point of mutation in the engine. It deduplicates rules by
//! identity, renders new ones, and inserts them into an [`Injector`] at the position given
//! by their precedence key so the target is always sorted.

#![forbid(unsafe_code)]

mod render;
mod store;
mod target;

pub use render::{escape_class, render_keyframes, render_rule, selector_for};
pub use store::RuleStore;
pub use target::{Injector, VirtualInjector};
