//! Lister factory: resolved fields → tabular column definitions.

use armature_model::{ModelMeta, SemanticType};
use serde::Serialize;

use super::{ArtifactKind, descriptor, display_attribute, header_for};
use crate::error::RegistryError;

/// A tabular list view description for one model.
#[derive(Debug, Clone, Serialize)]
pub struct Lister {
	pub model: &'static str,
	pub columns: Vec<ColumnSpec>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColumnSpec {
	pub field: String,
	/// Dotted accessor evaluated against a row. For to-one relations this
	/// traverses into the target's display attribute rather than showing the
	/// raw identity.
	pub accessor: String,
	pub header: String,
	pub sortable: bool,
}

pub(crate) fn build(model: &'static ModelMeta, fields: &[String]) -> Result<Lister, RegistryError> {
	let mut columns = Vec::with_capacity(fields.len());
	for field in fields {
		let attr = descriptor(model, ArtifactKind::Lister, field)?;

		let accessor = match attr.relation.filter(|_| attr.is_to_one()) {
			Some(rel) => match display_attribute(rel) {
				Some(display) => format!("{field}.{display}"),
				None => field.clone(),
			},
			None => field.clone(),
		};

		let sortable = !matches!(
			attr.semantic_type,
			SemanticType::LongText | SemanticType::Binary | SemanticType::RelationToMany
		);

		columns.push(ColumnSpec {
			field: field.clone(),
			accessor,
			header: header_for(field),
			sortable,
		});
	}

	Ok(Lister {
		model: model.qualified_name,
		columns,
	})
}
