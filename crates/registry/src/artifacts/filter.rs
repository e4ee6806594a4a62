//! Filter factory: resolved fields → filter operator sets.
//!
//! Field names are re-validated against the model here even though
//! registration already vetted them: downstream filter libraries are strict
//! about field existence, and a stale custom field list should fail at build
//! time rather than query time.

use armature_model::{ModelMeta, SemanticType, VocabularyProvider};
use serde::Serialize;

use super::{ArtifactKind, descriptor};
use crate::error::RegistryError;

/// A filter/query-builder description for one model.
#[derive(Debug, Clone, Serialize)]
pub struct FilterSet {
	pub model: &'static str,
	pub filters: Vec<FilterSpec>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FilterSpec {
	pub field: String,
	pub operators: Vec<FilterOperator>,
	/// Legal values for choice-typed fields, when the vocabulary is known.
	pub choices: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FilterOperator {
	Exact,
	Range,
	Contains,
}

pub(crate) fn build(
	model: &'static ModelMeta,
	fields: &[String],
	vocab: &dyn VocabularyProvider,
) -> Result<FilterSet, RegistryError> {
	let mut filters = Vec::with_capacity(fields.len());
	for field in fields {
		let attr = descriptor(model, ArtifactKind::Filter, field)?;

		let operators = match attr.semantic_type {
			SemanticType::Choice { .. } | SemanticType::Boolean | SemanticType::RelationToOne => {
				vec![FilterOperator::Exact]
			}
			SemanticType::DateTime => vec![FilterOperator::Range],
			SemanticType::Number => vec![FilterOperator::Exact, FilterOperator::Range],
			SemanticType::Text => vec![FilterOperator::Exact, FilterOperator::Contains],
			SemanticType::LongText | SemanticType::Binary | SemanticType::RelationToMany => {
				return Err(RegistryError::ComponentGeneration {
					kind: ArtifactKind::Filter,
					model: model.qualified_name.to_string(),
					reason: format!(
						"'{field}': {:?} attributes do not support filtering",
						attr.semantic_type
					),
				});
			}
		};

		let choices = attr.semantic_type.vocabulary().and_then(|v| vocab.values(v));

		filters.push(FilterSpec {
			field: field.clone(),
			operators,
			choices,
		});
	}

	Ok(FilterSet {
		model: model.qualified_name,
		filters,
	})
}
