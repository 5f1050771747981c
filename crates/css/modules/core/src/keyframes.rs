//! Keyframes blocks referenced from `animation` declarations.

use crate::Declarations;

/// A named set of keyframes, e.g. `pulse`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Keyframes {
    /// Name the declarations refer to before hashing.
    pub name: String,
    /// Frame selectors (`0%,100%`, `from`) with their declarations.
    pub frames: Vec<(String, Declarations)>,
}

impl Keyframes {
    #[inline]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            frames: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_frame(mut self, selector: impl Into<String>, declarations: Declarations) -> Self {
        self.frames.push((selector.into(), declarations));
        self
    }

    /// Body between the braces of `@keyframes NAME{...}`.
    pub fn body(&self) -> String {
        let mut out = String::new();
        for (selector, declarations) in &self.frames {
            out.push_str(selector);
            out.push('{');
            out.push_str(&declarations.to_css());
            out.push('}');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_pulse_body() {
        let pulse = Keyframes::new("pulse")
            .with_frame("0%,100%", Declarations::new().with("opacity", "1"))
            .with_frame("50%", Declarations::new().with("opacity", ".5"));
        assert_eq!(pulse.body(), "0%,100%{opacity:1}50%{opacity:.5}");
    }
}
