//! Integration tests for bgen-core: the full generation flow against
//! in-memory port implementations.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use bgen_core::{
    application::{
        ApplicationError, GenerateRequest, GenerateService, GeneratorPaths,
        ports::{Filesystem, TemplateRenderer, TemplateStore},
    },
    domain::{BehaviorName, BehaviorSpec, RenderContext},
    error::BgenResult,
};

// ── test doubles ──────────────────────────────────────────────────────────────

#[derive(Default, Clone)]
struct FakeFilesystem {
    files: Arc<RwLock<HashMap<PathBuf, String>>>,
}

impl FakeFilesystem {
    fn seed(self, path: &str, content: &str) -> Self {
        self.files
            .write()
            .unwrap()
            .insert(PathBuf::from(path), content.to_string());
        self
    }

    fn read(&self, path: &str) -> Option<String> {
        self.files.read().unwrap().get(Path::new(path)).cloned()
    }
}

impl Filesystem for FakeFilesystem {
    fn read_to_string(&self, path: &Path) -> BgenResult<String> {
        self.files
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?
            .get(path)
            .cloned()
            .ok_or_else(|| {
                ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "file not found".into(),
                }
                .into()
            })
    }

    fn write_file(&self, path: &Path, content: &str) -> BgenResult<()> {
        self.files
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn create_dir_all(&self, _path: &Path) -> BgenResult<()> {
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.read().unwrap().contains_key(path)
    }
}

struct FakeStore(&'static str);

impl TemplateStore for FakeStore {
    fn get(&self, name: &str) -> BgenResult<String> {
        if name == "behavior.ts" {
            Ok(self.0.to_string())
        } else {
            Err(ApplicationError::TemplateNotFound { name: name.into() }.into())
        }
    }
}

struct PassthroughRenderer;

impl TemplateRenderer for PassthroughRenderer {
    fn render(&self, source: &str, context: &RenderContext) -> BgenResult<String> {
        Ok(context.render(source))
    }
}

// ── fixtures ──────────────────────────────────────────────────────────────────

const TEMPLATE: &str = "\
import { buildElement } from \"{{BUILD_ELEMENT_LOC}}\";
import { DefaultState } from \"{{DEFAULT_TYPES_LOC}}\";

export const {{NORMAL_NAME}} = buildElement<{{STATE_NAME}}, {{PROPS_NAME}}, {{OPTIONS_NAME}}>(\"{{BEHAVIOR_NAME}}\");
";

const REGISTRY: &str = "\
import { DropdownProps, DropdownState, DropdownOptions } from \"../behaviors/dropdown\";

interface BehaviorTypes {
\t'dropdown': {
\t\tstate: DropdownState,
\t\tprops: DropdownProps,
\t\toptions: DropdownOptions,
\t}
}
";

fn default_paths() -> GeneratorPaths {
    GeneratorPaths {
        build_element_folder: "src_ts/build_element".into(),
        default_types_file: "src_ts/defaultTypes.d.ts".into(),
        behavior_folder: "src_ts/behaviors".into(),
    }
}

fn toggle_request() -> GenerateRequest {
    let spec = BehaviorSpec::with_default_type_names(BehaviorName::new("my-toggle").unwrap());
    GenerateRequest::new(spec, default_paths())
}

fn service_with(fs: FakeFilesystem) -> (GenerateService, FakeFilesystem) {
    let service = GenerateService::new(
        Box::new(FakeStore(TEMPLATE)),
        Box::new(PassthroughRenderer),
        Box::new(fs.clone()),
    );
    (service, fs)
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[test]
fn my_toggle_end_to_end() {
    let fs = FakeFilesystem::default().seed("src_ts/build_element/behaviorTypes.ts", REGISTRY);
    let (service, fs) = service_with(fs);

    let report = service.generate(&toggle_request()).unwrap();
    assert!(report.registry_patched);
    assert_eq!(
        report.behavior_file,
        PathBuf::from("src_ts/behaviors/my-toggle.ts")
    );

    // The behavior file imports its collaborators by relative path and
    // exports the folded identifier.
    let behavior = fs.read("src_ts/behaviors/my-toggle.ts").unwrap();
    assert!(behavior.contains("from \"../build_element/buildElement\";"));
    assert!(behavior.contains("from \"../defaultTypes\";"));
    assert!(behavior.contains(
        "export const myToggle = buildElement<MyToggleState, MyToggleProps, MyToggleOptions>(\"my-toggle\");"
    ));

    // The registry gained the entry and the import, in the right spots.
    let registry = fs.read("src_ts/build_element/behaviorTypes.ts").unwrap();
    assert!(registry.contains(
        "import { MyToggleProps, MyToggleState, MyToggleOptions } from \"../behaviors/my-toggle\";"
    ));
    assert!(registry.contains(
        "\t'my-toggle': {\n\t\tstate: MyToggleState,\n\t\tprops: MyToggleProps,\n\t\toptions: MyToggleOptions,\n\t}"
    ));
    assert!(registry.find("'dropdown'").unwrap() < registry.find("'my-toggle'").unwrap());
}

#[test]
fn malformed_registry_still_gets_import() {
    let fs = FakeFilesystem::default()
        .seed("src_ts/build_element/behaviorTypes.ts", "// no block here\n");
    let (service, fs) = service_with(fs);

    let report = service.generate(&toggle_request()).unwrap();
    assert!(!report.registry_patched);

    let registry = fs.read("src_ts/build_element/behaviorTypes.ts").unwrap();
    // Entry skipped, import prepended (no existing import run).
    assert!(!registry.contains("'my-toggle': {"));
    assert!(registry.starts_with("import { MyToggleProps, MyToggleState, MyToggleOptions }"));
    assert!(registry.ends_with("// no block here\n"));
}

#[test]
fn missing_registry_file_aborts() {
    let fs = FakeFilesystem::default();
    let (service, _fs) = service_with(fs);

    let err = service.generate(&toggle_request()).unwrap_err();
    assert!(err.to_string().contains("behaviorTypes.ts"));
}

#[test]
fn custom_type_names_flow_through() {
    let fs = FakeFilesystem::default().seed("src_ts/build_element/behaviorTypes.ts", REGISTRY);
    let (service, fs) = service_with(fs);

    let spec = BehaviorSpec::new(
        BehaviorName::new("slider").unwrap(),
        "SliderInner",
        "SliderConfig",
        "SliderExtras",
    );
    let report = service
        .generate(&GenerateRequest::new(spec, default_paths()))
        .unwrap();
    assert!(report.registry_patched);

    let registry = fs.read("src_ts/build_element/behaviorTypes.ts").unwrap();
    assert!(registry.contains("state: SliderInner,"));
    assert!(registry.contains(
        "import { SliderConfig, SliderInner, SliderExtras } from \"../behaviors/slider\";"
    ));
}
