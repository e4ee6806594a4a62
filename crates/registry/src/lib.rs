//! Declarative component registry.
//!
//! Register a domain model once, with a lightweight [`ConfigBuilder`], and the
//! registry derives six artifacts from its attribute metadata on demand: an
//! editor form, a tabular lister, a filter set, a serialization schema, a bulk
//! import/export resource, and a management panel. No per-model boilerplate.
//!
//! # Lifecycle
//!
//! Registration is a start-up phase: [`ComponentRegistry::register`] validates
//! each configuration eagerly (unknown fields fail fast, with fuzzy-matched
//! suggestions) and freezes it. After start-up the registry is read-mostly and
//! safe to share across request threads. Artifacts are built lazily on first
//! access and memoized per configuration; production deployments that prefer
//! start-up failures over first-request failures call
//! [`ComponentRegistry::force_build_all`] before serving traffic.

pub mod artifacts;
pub mod config;
pub mod error;
pub mod registry;
pub mod resolve;
pub mod suggest;
pub mod validate;

#[cfg(test)]
pub(crate) mod testutil;

pub use artifacts::{Artifact, ArtifactKind, CustomArtifact};
pub use config::{ConfigBuilder, ModelConfig};
pub use error::RegistryError;
pub use registry::{ComponentRegistry, ModelKey};
pub use resolve::resolve;
