//! Model metadata and attribute introspection.
//!
//! This crate is the capability interface the component registry consumes:
//! a domain entity declares a `static` [`ModelMeta`] describing its typed
//! attributes, and the registry reads that metadata through [`describe`]
//! without ever touching the entity's storage representation.
//!
//! Models that belong to a polymorphic family (one base type, many leaf
//! variants sharing a physical representation) declare a [`FamilyMeta`]
//! pointing at the base model; [`describe`] folds inherited attributes in.

pub mod describe;
pub mod meta;
pub mod vocab;

pub use describe::{AttributeDescriptor, PathError, ResolvedRelation, describe, resolve_path};
pub use meta::{AttributeMeta, FamilyMeta, ModelHandle, ModelMeta, RelationMeta, SemanticType};
pub use vocab::{EmptyVocabulary, StaticVocabulary, VocabularyProvider};
