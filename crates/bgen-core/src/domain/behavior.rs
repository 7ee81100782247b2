//! The behavior aggregate: a validated name plus its three type names.

use crate::domain::names::BehaviorName;

/// Everything the generator needs to know about one new behavior unit.
///
/// The type names default to the derived forms (`MyToggleState`, ...) but
/// the user may override any of them at the prompt, so they are stored as
/// plain strings here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BehaviorSpec {
    name: BehaviorName,
    state_name: String,
    props_name: String,
    options_name: String,
}

impl BehaviorSpec {
    pub fn new(
        name: BehaviorName,
        state_name: impl Into<String>,
        props_name: impl Into<String>,
        options_name: impl Into<String>,
    ) -> Self {
        Self {
            name,
            state_name: state_name.into(),
            props_name: props_name.into(),
            options_name: options_name.into(),
        }
    }

    /// Build a spec with all three type names derived from the behavior name.
    pub fn with_default_type_names(name: BehaviorName) -> Self {
        let state_name = name.default_state_name();
        let props_name = name.default_props_name();
        let options_name = name.default_options_name();
        Self {
            name,
            state_name,
            props_name,
            options_name,
        }
    }

    pub fn name(&self) -> &BehaviorName {
        &self.name
    }

    pub fn state_name(&self) -> &str {
        &self.state_name
    }

    pub fn props_name(&self) -> &str {
        &self.props_name
    }

    pub fn options_name(&self) -> &str {
        &self.options_name
    }

    /// The registry entry text, tab-indented to match the block's style,
    /// carrying no trailing comma (the patcher adds the separator).
    pub fn registry_entry(&self) -> String {
        let mut entry = String::new();
        entry.push_str(&format!("\t'{}': {{\n", self.name));
        entry.push_str(&format!("\t\tstate: {},\n", self.state_name));
        entry.push_str(&format!("\t\tprops: {},\n", self.props_name));
        entry.push_str(&format!("\t\toptions: {},\n", self.options_name));
        entry.push_str("\t}");
        entry
    }

    /// The import statement for the registry file. `rel_path` points from
    /// the registry file's directory to the generated behavior module.
    pub fn import_line(&self, rel_path: &str) -> String {
        format!(
            "import {{ {}, {}, {} }} from \"{}\";",
            self.props_name, self.state_name, self.options_name, rel_path
        )
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn toggle() -> BehaviorSpec {
        BehaviorSpec::with_default_type_names(BehaviorName::new("my-toggle").unwrap())
    }

    #[test]
    fn defaults_derive_from_name() {
        let spec = toggle();
        assert_eq!(spec.state_name(), "MyToggleState");
        assert_eq!(spec.props_name(), "MyToggleProps");
        assert_eq!(spec.options_name(), "MyToggleOptions");
    }

    #[test]
    fn registry_entry_shape() {
        let expected = "\t'my-toggle': {\n\t\tstate: MyToggleState,\n\t\tprops: MyToggleProps,\n\t\toptions: MyToggleOptions,\n\t}";
        assert_eq!(toggle().registry_entry(), expected);
    }

    #[test]
    fn import_line_orders_props_state_options() {
        assert_eq!(
            toggle().import_line("../behaviors/my-toggle"),
            "import { MyToggleProps, MyToggleState, MyToggleOptions } from \"../behaviors/my-toggle\";"
        );
    }

    #[test]
    fn overridden_type_names_are_kept() {
        let spec = BehaviorSpec::new(
            BehaviorName::new("my-toggle").unwrap(),
            "ToggleState",
            "ToggleProps",
            "ToggleOpts",
        );
        assert!(spec.registry_entry().contains("state: ToggleState,"));
        assert!(spec.import_line("x").starts_with("import { ToggleProps, ToggleState, ToggleOpts }"));
    }
}
