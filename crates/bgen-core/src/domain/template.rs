//! Render context for template variable substitution.

use std::collections::HashMap;

/// Variable map for `{{NAME}}` substitution.
///
/// Using `HashMap` (not `BTreeMap`) because order doesn't matter for simple
/// replacement and lookups stay O(1). All variables are set once at
/// construction time via the builder; rendering never mutates the context.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable, consuming self for fluent construction:
    ///
    /// ```rust
    /// use bgen_core::domain::RenderContext;
    /// let ctx = RenderContext::new()
    ///     .with_var("STATE_NAME", "MyToggleState")
    ///     .with_var("PROPS_NAME", "MyToggleProps");
    /// ```
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Substitute every `{{KEY}}` occurrence with its value. Unknown
    /// placeholders are left verbatim in the output.
    pub fn render(&self, source: &str) -> String {
        let mut out = source.to_string();
        for (key, value) in &self.variables {
            out = out.replace(&format!("{{{{{key}}}}}"), value);
        }
        out
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_known_variables() {
        let ctx = RenderContext::new().with_var("NAME", "myToggle");
        assert_eq!(ctx.render("export const {{NAME}} = 1;"), "export const myToggle = 1;");
    }

    #[test]
    fn unknown_placeholders_stay() {
        let ctx = RenderContext::new();
        assert_eq!(ctx.render("{{MISSING}}"), "{{MISSING}}");
    }

    #[test]
    fn repeated_occurrences_all_replaced() {
        let ctx = RenderContext::new().with_var("T", "X");
        assert_eq!(ctx.render("{{T}}<{{T}}>"), "X<X>");
    }
}
