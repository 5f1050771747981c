//! Rendering a rule into CSS text.

use core::fmt::Write as _;

use css_core::{Rule, Variant};

/// Render `rule` under class `name`.
///
/// At-rule variants wrap the rule in chain order, the first one outermost:
/// `@media (min-width: 576px){._x:hover{color:red}}`.
pub fn render_rule(name: &str, rule: &Rule) -> String {
    let mut css = format!(
        "{}{{{}}}",
        selector_for(name, rule),
        rule.declarations.to_css()
    );
    for variant in rule.variants.iter().rev() {
        if let Variant::AtRule(prelude) = variant {
            css = format!("{prelude}{{{css}}}");
        }
    }
    css
}

/// Render an `@keyframes` block.
#[inline]
pub fn render_keyframes(name: &str, body: &str) -> String {
    format!("@keyframes {name}{{{body}}}")
}

/// Selector of `rule` under class `name`.
///
/// Group variants become a `.group` ancestor carrying their states, pseudo variants are
/// appended to the class, and the suffix comes last.
pub fn selector_for(name: &str, rule: &Rule) -> String {
    let mut group_states = String::new();
    let mut pseudo_classes = String::new();
    for variant in &rule.variants {
        match variant {
            Variant::AtRule(_) => {}
            Variant::Pseudo(state) => pseudo_classes.push_str(&pseudo_class(state)),
            Variant::Group(state) => group_states.push_str(&pseudo_class(
                state.strip_prefix("group-").unwrap_or(state),
            )),
        }
    }

    let mut out = String::new();
    if !group_states.is_empty() {
        out.push_str(".group");
        out.push_str(&group_states);
        out.push(' ');
    }
    out.push('.');
    out.push_str(&escape_class(name));
    out.push_str(&pseudo_classes);
    if let Some(suffix) = &rule.suffix {
        out.push_str(suffix);
    }
    out
}

/// Pseudo-class selector for a variant state name.
fn pseudo_class(state: &str) -> String {
    match state {
        "first" => ":first-child".to_owned(),
        "last" => ":last-child".to_owned(),
        "odd" => ":nth-child(odd)".to_owned(),
        "even" => ":nth-child(even)".to_owned(),
        other => format!(":{other}"),
    }
}

/// Escape a class name for use in a selector.
///
/// Reference: <https://drafts.csswg.org/cssom/#serialize-an-identifier>
pub fn escape_class(name: &str) -> String {
    if name == "-" {
        return "\\-".to_owned();
    }
    let mut out = String::with_capacity(name.len());
    for (index, character) in name.chars().enumerate() {
        let leading_digit = character.is_ascii_digit()
            && (index == 0 || (index == 1 && name.starts_with('-')));
        if character == '\0' {
            out.push('\u{FFFD}');
        } else if leading_digit || character.is_control() {
            // Hex escapes need a trailing space terminator.
            let _ignored = write!(out, "\\{:x} ", u32::from(character));
        } else if character.is_ascii_alphanumeric()
            || matches!(character, '-' | '_')
            || !character.is_ascii()
        {
            out.push(character);
        } else {
            out.push('\\');
            out.push(character);
        }
    }
    out
}
