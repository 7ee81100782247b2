//! Interactive prompt sequence for `bgen new`.
//!
//! Questions fire strictly one at a time, in a fixed order; later questions
//! read earlier answers for their defaults (a simple forward data
//! dependency, no cycles):
//!
//! 1. build_element folder        (default from persisted config)
//! 2. behavior name               (validated; re-prompts on failure)
//! 3. state type name             (default derived from 2)
//! 4. props type name             (default derived from 2)
//! 5. options type name           (default derived from 2)
//! 6. behavior output folder      (default from persisted config)
//!
//! Only compiled with the `interactive` feature; the non-interactive
//! `--name --yes` path never touches this module.

use dialoguer::Input;

use bgen_core::domain::{BehaviorName, BehaviorSpec, names};

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
};

/// Everything the prompt sequence collects.
#[derive(Debug, Clone)]
pub struct PromptAnswers {
    pub spec: BehaviorSpec,
    pub build_element_folder: String,
    pub behavior_folder: String,
}

/// Run the full prompt sequence.
///
/// `preset_name` is the `--name` flag value; when given, question 2 is
/// skipped (the caller has already validated it).
pub fn ask(config: &AppConfig, preset_name: Option<&str>) -> CliResult<PromptAnswers> {
    let build_element_folder: String = Input::new()
        .with_prompt("Path to build_element folder")
        .default(config.paths.build_element_folder.clone())
        .interact_text()
        .map_err(prompt_err)?;

    let raw_name: String = match preset_name {
        Some(name) => name.to_string(),
        None => Input::new()
            .with_prompt("Name of the new behavior (ex: my-toggle)")
            .validate_with(|input: &String| -> Result<(), String> {
                names::validate(input).map_err(|e| e.to_string())
            })
            .interact_text()
            .map_err(prompt_err)?,
    };
    let name = BehaviorName::new(raw_name).map_err(|e| CliError::Core(e.into()))?;

    let state_name: String = Input::new()
        .with_prompt("Name of the state type")
        .default(name.default_state_name())
        .interact_text()
        .map_err(prompt_err)?;

    let props_name: String = Input::new()
        .with_prompt("Name of properties type")
        .default(name.default_props_name())
        .interact_text()
        .map_err(prompt_err)?;

    let options_name: String = Input::new()
        .with_prompt("Name of options type")
        .default(name.default_options_name())
        .interact_text()
        .map_err(prompt_err)?;

    let behavior_folder: String = Input::new()
        .with_prompt("Path to where you want the behavior file")
        .default(config.paths.behavior_folder.clone())
        .interact_text()
        .map_err(prompt_err)?;

    Ok(PromptAnswers {
        spec: BehaviorSpec::new(name, state_name, props_name, options_name),
        build_element_folder,
        behavior_folder,
    })
}

fn prompt_err(e: dialoguer::Error) -> CliError {
    CliError::IoError {
        message: "prompt interaction failed".into(),
        source: std::io::Error::other(e),
    }
}
