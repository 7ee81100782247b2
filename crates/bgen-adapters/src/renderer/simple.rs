//! Simple variable substitution renderer.

use bgen_core::{
    application::ports::TemplateRenderer, domain::RenderContext, error::BgenResult,
};
use tracing::instrument;

/// Simple renderer using basic variable substitution.
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SimpleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip_all)]
    fn render(&self, source: &str, context: &RenderContext) -> BgenResult<String> {
        Ok(context.render(source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_variables() {
        let renderer = SimpleRenderer::new();
        let ctx = RenderContext::new().with_var("STATE_NAME", "MyToggleState");
        let out = renderer
            .render("interface {{STATE_NAME}} {}", &ctx)
            .unwrap();
        assert_eq!(out, "interface MyToggleState {}");
    }
}
