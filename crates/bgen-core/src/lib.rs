//! Bgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Bgen
//! behavior-module generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            bgen-cli (CLI)               │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (GenerateService)             │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: Store, Filesystem, Render)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     bgen-adapters (Infrastructure)      │
//! │  (BuiltinTemplates, LocalFilesystem..)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (BehaviorSpec, registry patcher, names)│
//! │         No External I/O                 │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bgen_core::{
//!     application::{GenerateRequest, GenerateService},
//!     domain::{BehaviorName, BehaviorSpec},
//! };
//!
//! // 1. Validate the behavior name and derive type names
//! let name = BehaviorName::new("my-toggle").unwrap();
//! let spec = BehaviorSpec::with_default_type_names(name);
//!
//! // 2. Use the application service (with injected adapters)
//! let service = GenerateService::new(store, renderer, filesystem);
//! service.generate(&GenerateRequest::new(spec, paths)).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateReport, GenerateRequest, GenerateService, GeneratorPaths,
        ports::{Filesystem, TemplateRenderer, TemplateStore},
    };
    pub use crate::domain::{BehaviorName, BehaviorSpec, RegistryPatch, RenderContext};
    pub use crate::error::{BgenError, BgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
