//! Core domain layer for Bgen.
//!
//! This module contains pure business logic with ZERO external I/O.
//! File reading, template rendering, and writing are handled via ports
//! (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Pure transforms**: The registry patcher is text in, text out
//! - **Immutable entities**: All domain objects are Clone + PartialEq

pub mod behavior;
pub mod error;
pub mod names;
pub mod paths;
pub mod registry;
pub mod template;

// Re-exports for convenience
pub use behavior::BehaviorSpec;
pub use error::{DomainError, ErrorCategory};
pub use names::BehaviorName;
pub use registry::RegistryPatch;
pub use template::RenderContext;
