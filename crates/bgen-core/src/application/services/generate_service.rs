//! Generate Service - main application orchestrator.
//!
//! This service coordinates the entire generation workflow:
//! 1. Derive file locations and relative import paths
//! 2. Render the behavior template with context
//! 3. Write the new behavior file
//! 4. Patch the registry file (entry, then import) and write it back
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

use crate::{
    application::ports::{Filesystem, TemplateRenderer, TemplateStore},
    domain::{BehaviorSpec, RegistryPatch, RenderContext, paths, registry},
    error::BgenResult,
};

/// Name of the built-in behavior file template.
pub const BEHAVIOR_TEMPLATE: &str = "behavior.ts";

/// File name of the type registry inside the build-element folder.
pub const REGISTRY_FILE_NAME: &str = "behaviorTypes.ts";

/// Module name of the shared build-element entry point.
const BUILD_ELEMENT_MODULE: &str = "buildElement";

/// The three configured project locations, resolved by the CLI layer from
/// its persisted store and passed down explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorPaths {
    /// Folder holding `buildElement` and the type registry.
    pub build_element_folder: String,
    /// Path to the shared default-types declaration file.
    pub default_types_file: String,
    /// Folder the new behavior file is written into.
    pub behavior_folder: String,
}

/// One generation run's input: the behavior spec plus resolved paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub spec: BehaviorSpec,
    pub paths: GeneratorPaths,
}

impl GenerateRequest {
    pub fn new(spec: BehaviorSpec, paths: GeneratorPaths) -> Self {
        Self { spec, paths }
    }
}

/// What a generation run produced, for CLI display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    /// The newly written behavior source file.
    pub behavior_file: PathBuf,
    /// The registry file that was rewritten in place.
    pub registry_file: PathBuf,
    /// False when the registry block could not be located; the entry was
    /// skipped (the import line is still inserted).
    pub registry_patched: bool,
}

/// Main generation service.
///
/// Orchestrates template rendering, file writing, and registry patching.
pub struct GenerateService {
    store: Box<dyn TemplateStore>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl GenerateService {
    /// Create a new generate service with the given adapters.
    pub fn new(
        store: Box<dyn TemplateStore>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            store,
            renderer,
            filesystem,
        }
    }

    /// Generate one behavior module.
    ///
    /// This is the main use case - writes the rendered behavior file and
    /// splices the new entry and import into the registry.
    #[instrument(skip_all, fields(behavior = %request.spec.name()))]
    pub fn generate(&self, request: &GenerateRequest) -> BgenResult<GenerateReport> {
        let spec = &request.spec;
        let paths_cfg = &request.paths;

        let behavior_dir = Path::new(&paths_cfg.behavior_folder);
        let behavior_file = behavior_dir.join(format!("{}.ts", spec.name()));
        let registry_file = Path::new(&paths_cfg.build_element_folder).join(REGISTRY_FILE_NAME);

        info!(
            file = %behavior_file.display(),
            registry = %registry_file.display(),
            "Generating behavior module"
        );

        // 1. Render the behavior file.
        let rendered = self.render_behavior(spec, paths_cfg, behavior_dir)?;

        // 2. Write it, creating the target folder as needed.
        if let Some(parent) = behavior_file.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(&behavior_file, &rendered)?;
        info!(file = %behavior_file.display(), "Behavior file written");

        // 3. Patch the registry in place.
        let registry_patched = self.patch_registry(&registry_file, spec, behavior_dir)?;

        Ok(GenerateReport {
            behavior_file,
            registry_file,
            registry_patched,
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Render the behavior template with all derived variables.
    fn render_behavior(
        &self,
        spec: &BehaviorSpec,
        paths_cfg: &GeneratorPaths,
        behavior_dir: &Path,
    ) -> BgenResult<String> {
        // Import targets are relative to the generated file's own folder.
        let build_element_loc = paths::relative_from(
            behavior_dir,
            &Path::new(&paths_cfg.build_element_folder).join(BUILD_ELEMENT_MODULE),
        );
        let default_types_loc = paths::relative_from(
            behavior_dir,
            Path::new(&paths::strip_extension(&paths::strip_extension(
                &paths_cfg.default_types_file,
            ))),
        );

        let context = RenderContext::new()
            .with_var("BEHAVIOR_NAME", spec.name().as_str())
            .with_var("NORMAL_NAME", spec.name().normalized())
            .with_var("STATE_NAME", spec.state_name())
            .with_var("PROPS_NAME", spec.props_name())
            .with_var("OPTIONS_NAME", spec.options_name())
            .with_var("BUILD_ELEMENT_LOC", build_element_loc)
            .with_var("DEFAULT_TYPES_LOC", default_types_loc);

        let source = self.store.get(BEHAVIOR_TEMPLATE)?;
        self.renderer.render(&source, &context)
    }

    /// Read, patch, and rewrite the registry file.
    ///
    /// A missing registry block downgrades to a warning (the entry is
    /// skipped, the import still goes in). A missing registry *file* is a
    /// real error and aborts the run.
    fn patch_registry(
        &self,
        registry_file: &Path,
        spec: &BehaviorSpec,
        behavior_dir: &Path,
    ) -> BgenResult<bool> {
        let text = self.filesystem.read_to_string(registry_file)?;

        let registry_dir = registry_file.parent().unwrap_or_else(|| Path::new(""));
        let rel_path = paths::relative_from(registry_dir, &behavior_dir.join(spec.name().as_str()));

        let entry = spec.registry_entry();
        let import = spec.import_line(&rel_path);

        let (text, patched) = match registry::insert_entry(&text, &entry) {
            RegistryPatch::Applied(updated) => (updated, true),
            RegistryPatch::BlockMissing => {
                warn!(
                    registry = %registry_file.display(),
                    "registry block not found; entry insertion skipped"
                );
                (text, false)
            }
        };
        let text = registry::insert_import(&text, &import);

        self.filesystem.write_file(registry_file, &text)?;
        info!(registry = %registry_file.display(), patched, "Registry rewritten");
        Ok(patched)
    }
}
