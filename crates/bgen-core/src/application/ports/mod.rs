//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `bgen-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::RenderContext;
use crate::error::BgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `bgen_adapters::filesystem::LocalFilesystem` (production)
/// - `bgen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - The service hands in project-relative paths; resolution against the
///   working directory is the adapter's concern
/// - Async-ready (can be extended with async-trait later)
pub trait Filesystem: Send + Sync {
    /// Read a file's full contents as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> BgenResult<String>;

    /// Write content to a file, replacing any previous contents.
    fn write_file(&self, path: &Path, content: &str) -> BgenResult<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> BgenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for template storage and retrieval.
///
/// Implemented by:
/// - `bgen_adapters::builtin_templates::BuiltinTemplates` (compiled-in)
pub trait TemplateStore: Send + Sync {
    /// Fetch a template's source text by name.
    fn get(&self, name: &str) -> BgenResult<String>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `bgen_adapters::renderer::SimpleRenderer` (variable substitution)
pub trait TemplateRenderer: Send + Sync {
    /// Render template source with the given variable context.
    fn render(&self, source: &str, context: &RenderContext) -> BgenResult<String>;
}
