//! Built-in templates compiled into the binary.
//!
//! Bgen ships a single template: the behavior module source file. It is a
//! compile-time string rather than an on-disk asset so the installed binary
//! has no runtime template directory to locate.
//!
//! # Template variables
//!
//! | Variable                | Example value                  |
//! |-------------------------|--------------------------------|
//! | `BEHAVIOR_NAME`         | `my-toggle`                    |
//! | `NORMAL_NAME`           | `myToggle`                     |
//! | `STATE_NAME`            | `MyToggleState`                |
//! | `PROPS_NAME`            | `MyToggleProps`                |
//! | `OPTIONS_NAME`          | `MyToggleOptions`              |
//! | `BUILD_ELEMENT_LOC`     | `../build_element/buildElement`|
//! | `DEFAULT_TYPES_LOC`     | `../defaultTypes`              |

use bgen_core::{
    application::{ApplicationError, ports::TemplateStore},
    error::BgenResult,
};
use tracing::debug;

/// Source of the generated behavior module.
const BEHAVIOR_TS: &str = r#"import { buildElement } from "{{BUILD_ELEMENT_LOC}}";
import { DefaultState, DefaultProps, DefaultOptions } from "{{DEFAULT_TYPES_LOC}}";

export interface {{STATE_NAME}} extends DefaultState {
}

export interface {{PROPS_NAME}} extends DefaultProps {
}

export interface {{OPTIONS_NAME}} extends DefaultOptions {
}

export const {{NORMAL_NAME}} = buildElement<{{STATE_NAME}}, {{PROPS_NAME}}, {{OPTIONS_NAME}}>({
	name: "{{BEHAVIOR_NAME}}",
	initialState: {},
	defaultProps: {},
	defaultOptions: {},
});
"#;

/// Template store backed by the compiled-in template table.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplates;

impl BuiltinTemplates {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateStore for BuiltinTemplates {
    fn get(&self, name: &str) -> BgenResult<String> {
        debug!(template = name, "Resolving built-in template");
        match name {
            "behavior.ts" => Ok(BEHAVIOR_TS.to_string()),
            other => Err(ApplicationError::TemplateNotFound { name: other.into() }.into()),
        }
    }
}
