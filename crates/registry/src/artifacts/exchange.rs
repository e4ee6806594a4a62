//! Exchange resource factory: resolved fields → bulk import/export schema.

use armature_model::ModelMeta;
use serde::Serialize;

use super::{ArtifactKind, descriptor};
use crate::error::RegistryError;

/// A bulk import/export description for one model.
#[derive(Debug, Clone, Serialize)]
pub struct ExchangeResource {
	pub model: &'static str,
	pub columns: Vec<ExchangeColumn>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExchangeColumn {
	pub field: String,
	pub binding: ColumnBinding,
}

/// How an exchange column resolves its value during import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ColumnBinding {
	/// Plain scalar value.
	Scalar,
	/// To-one relation addressed by the target's natural/external key.
	NaturalKey {
		target: &'static str,
		key: &'static str,
	},
	/// To-one relation addressed by internal identity; fallback when the
	/// target exposes no natural key.
	Identity { target: &'static str },
}

pub(crate) fn build(
	model: &'static ModelMeta,
	fields: &[String],
) -> Result<ExchangeResource, RegistryError> {
	let mut columns = Vec::with_capacity(fields.len());
	for field in fields {
		let attr = descriptor(model, ArtifactKind::ExchangeResource, field)?;

		let binding = match attr.relation.filter(|_| attr.is_to_one()) {
			Some(rel) => match rel.natural_key {
				Some(key) => ColumnBinding::NaturalKey {
					target: rel.target.qualified_name,
					key,
				},
				None => ColumnBinding::Identity {
					target: rel.target.qualified_name,
				},
			},
			None => ColumnBinding::Scalar,
		};

		columns.push(ExchangeColumn {
			field: field.clone(),
			binding,
		});
	}

	Ok(ExchangeResource {
		model: model.qualified_name,
		columns,
	})
}
