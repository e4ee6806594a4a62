//! Serializer factory: resolved fields → read/write schema.

use armature_model::{ModelMeta, SemanticType, describe};
use serde::Serialize;

use super::{ArtifactKind, descriptor};
use crate::error::RegistryError;

/// A serialization schema for one model.
#[derive(Debug, Clone, Serialize)]
pub struct SerializerSchema {
	pub model: &'static str,
	pub fields: Vec<FieldSchema>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldSchema {
	pub name: String,
	pub semantic_type: SemanticType,
	/// Internal/audit fields are read-only regardless of configuration.
	pub read_only: bool,
	/// For to-one relations: the identity is emitted alongside this nested
	/// summary of the target.
	pub nested: Option<NestedSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NestedSummary {
	pub target: &'static str,
	pub fields: Vec<String>,
}

pub(crate) fn build(
	model: &'static ModelMeta,
	fields: &[String],
) -> Result<SerializerSchema, RegistryError> {
	let mut schema = Vec::with_capacity(fields.len());
	for field in fields {
		let attr = descriptor(model, ArtifactKind::Serializer, field)?;

		let nested = attr
			.relation
			.filter(|_| attr.is_to_one())
			.map(|rel| NestedSummary {
				target: rel.target.qualified_name,
				fields: summary_fields(rel.target),
			});

		schema.push(FieldSchema {
			name: field.clone(),
			semantic_type: attr.semantic_type,
			read_only: attr.is_internal || !attr.is_editable,
			nested,
		});
	}

	Ok(SerializerSchema {
		model: model.qualified_name,
		fields: schema,
	})
}

/// Scalar, non-internal attribute names of the target: the shape of the
/// nested summary emitted next to a relation's identity.
fn summary_fields(target: &'static ModelMeta) -> Vec<String> {
	describe(target)
		.into_iter()
		.filter(|a| {
			!a.is_internal
				&& !matches!(
					a.semantic_type,
					SemanticType::RelationToOne | SemanticType::RelationToMany
				)
		})
		.map(|a| a.name.to_string())
		.collect()
}
