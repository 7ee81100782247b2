//! Implementation of the `bgen new` command.
//!
//! Responsibility: collect answers (flags or prompts), translate them into
//! a core `GenerateRequest`, call the generate service, and display
//! results. No business logic lives here.

use tracing::{debug, info, instrument};

use bgen_adapters::{BuiltinTemplates, LocalFilesystem, SimpleRenderer};
use bgen_core::{
    application::{GenerateRequest, GenerateService, GeneratorPaths},
    domain::{BehaviorName, BehaviorSpec, DomainError},
};

use crate::{
    cli::{NewArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `bgen new` command.
///
/// Dispatch sequence:
/// 1. Apply flag overrides to the loaded configuration
/// 2. Collect the behavior spec (non-interactive with `--yes`, prompts otherwise)
/// 3. Execute generation via `GenerateService`
/// 4. Report results, surfacing a registry warning when patching was skipped
/// 5. Persist changed stored answers
#[instrument(skip_all)]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Flag overrides are treated exactly like typed answers: they feed
    //    the run and are persisted afterwards.
    let loaded = config.clone();
    let mut config = config;
    apply_overrides(&mut config, &args);

    // 2. Collect the spec.
    let spec = if args.yes {
        let raw = args.name.as_deref().ok_or_else(|| CliError::InvalidInput {
            message: "--yes requires --name (nothing to prompt for)".into(),
            source: None,
        })?;
        BehaviorSpec::with_default_type_names(parse_behavior_name(raw)?)
    } else {
        collect_interactively(&mut config, args.name.as_deref())?
    };

    let paths = GeneratorPaths {
        build_element_folder: config.paths.build_element_folder.clone(),
        default_types_file: config.paths.default_types_file.clone(),
        behavior_folder: config.paths.behavior_folder.clone(),
    };

    debug!(
        behavior = %spec.name(),
        state = spec.state_name(),
        props = spec.props_name(),
        options = spec.options_name(),
        build_element_folder = %paths.build_element_folder,
        behavior_folder = %paths.behavior_folder,
        "Answers resolved"
    );

    // 3. Create adapters and generate.
    let service = GenerateService::new(
        Box::new(BuiltinTemplates::new()),
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );

    output.header(&format!("Generating behavior '{}'...", spec.name()))?;
    info!(behavior = %spec.name(), "Generation started");

    let report = service
        .generate(&GenerateRequest::new(spec, paths))
        .map_err(CliError::Core)?;

    info!(file = %report.behavior_file.display(), "Generation completed");

    // 4. Success + registry status.
    output.success(&format!("Created {}", report.behavior_file.display()))?;
    if report.registry_patched {
        output.success(&format!("Registered in {}", report.registry_file.display()))?;
    } else {
        output.warning(&format!(
            "{} formatted incorrectly: entry not inserted (the import line was still added)",
            report.registry_file.display()
        ))?;
    }

    // 5. Persist stored answers when they changed. A failed save must not
    //    fail the run — the files on disk are already in place.
    if config != loaded {
        match config.save(global.config.as_ref()) {
            Ok(path) => debug!(path = %path.display(), "Configuration persisted"),
            Err(e) => output.warning(&format!("Could not persist configuration: {e}"))?,
        }
    }

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  $EDITOR {}", report.behavior_file.display()))?;
        output.print("  # Fill in the state, props, and options types")?;
    }

    Ok(())
}

// ── Answer collection ─────────────────────────────────────────────────────────

fn apply_overrides(config: &mut AppConfig, args: &NewArgs) {
    if let Some(folder) = &args.build_element_folder {
        config.paths.build_element_folder = folder.clone();
    }
    if let Some(file) = &args.default_types_file {
        config.paths.default_types_file = file.clone();
    }
    if let Some(folder) = &args.behavior_folder {
        config.paths.behavior_folder = folder.clone();
    }
}

fn parse_behavior_name(raw: &str) -> CliResult<BehaviorName> {
    BehaviorName::new(raw).map_err(|e| match e {
        DomainError::InvalidBehaviorName { name, reason } => {
            CliError::InvalidBehaviorName { name, reason }
        }
        other => CliError::Core(other.into()),
    })
}

/// Run the prompt sequence and fold the stored answers back into `config`.
#[cfg(feature = "interactive")]
fn collect_interactively(config: &mut AppConfig, preset: Option<&str>) -> CliResult<BehaviorSpec> {
    if let Some(raw) = preset {
        parse_behavior_name(raw)?;
    }
    let answers = crate::prompt::ask(config, preset)?;
    config.paths.build_element_folder = answers.build_element_folder;
    config.paths.behavior_folder = answers.behavior_folder;
    Ok(answers.spec)
}

#[cfg(not(feature = "interactive"))]
fn collect_interactively(_config: &mut AppConfig, _preset: Option<&str>) -> CliResult<BehaviorSpec> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
