//! Atomic CSS engine.
//!
//! Utility tokens such as `pt-4` or `sm:hover:text-center` are translated into
//! declarations, given a short deterministic class name, and inserted into a style target
//! in an order that reproduces the cascade even though rules arrive incrementally.
//!
//! ```text
//! token ── token::split ──> variants + utility name
//!                │
//!       Translator::translate ──> Utility (declarations, keyframes, suffix)
//!                │
//!        RuleStore::resolve ──> class name, rule inserted by precedence key
//! ```

#![forbid(unsafe_code)]

mod instance;
mod options;
pub mod token;
mod translate;

pub use instance::Instance;
pub use options::{Options, Screens};
pub use translate::{StaticTranslator, Translation, Translator, Utility};

pub use css_core::{Declarations, Keyframes, Rule, Variant};
pub use css_identity::{Hashing, cyrb32};
pub use css_injector::{Injector, RuleStore, VirtualInjector};
pub use css_precedence::{Precedence, calculate_precedence};
