//! Management panel factory: grouped administrative surface.

use armature_model::{ModelMeta, SemanticType, VocabularyProvider, describe};
use serde::Serialize;

use super::{ArtifactKind, descriptor};
use crate::error::RegistryError;

/// Fixed headroom added on top of a vocabulary's cardinality when bounding
/// inline sub-editors.
pub const INLINE_SLACK: usize = 3;

/// Default page size for the paginated list surface.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// A grouped, paginated management surface for one model.
#[derive(Debug, Clone, Serialize)]
pub struct ManagementPanel {
	pub model: &'static str,
	pub groups: Vec<FieldGroup>,
	/// Substring search runs over these text-typed fields.
	pub search_fields: Vec<String>,
	/// Discrete sidebar filters over enumerable-typed fields.
	pub list_filters: Vec<String>,
	pub inlines: Vec<InlineSpec>,
	pub page_size: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldGroup {
	pub kind: GroupKind,
	pub fields: Vec<String>,
}

/// Implicit grouping of panel fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GroupKind {
	/// System identity fields.
	Identity,
	/// Audit timestamps and other internal bookkeeping.
	Audit,
	/// Everything the domain actually cares about.
	Domain,
}

/// An inline sub-editor over a to-many relation, bounded by the cardinality
/// of the target's controlled vocabulary.
#[derive(Debug, Clone, Serialize)]
pub struct InlineSpec {
	pub field: String,
	pub target: &'static str,
	pub max_inlines: usize,
}

pub(crate) fn build(
	model: &'static ModelMeta,
	fields: &[String],
	vocab: &dyn VocabularyProvider,
) -> Result<ManagementPanel, RegistryError> {
	let mut identity = Vec::new();
	let mut audit = Vec::new();
	let mut domain = Vec::new();
	let mut search_fields = Vec::new();
	let mut list_filters = Vec::new();
	let mut inlines = Vec::new();

	for field in fields {
		let attr = descriptor(model, ArtifactKind::ManagementPanel, field)?;

		match (attr.is_internal, attr.semantic_type) {
			(true, SemanticType::DateTime) => audit.push(field.clone()),
			(true, _) => identity.push(field.clone()),
			(false, _) => domain.push(field.clone()),
		}

		if !attr.is_internal && attr.semantic_type.is_searchable_text() {
			search_fields.push(field.clone());
		}
		if attr.semantic_type.is_enumerable() {
			list_filters.push(field.clone());
		}

		if let Some(rel) = attr.relation.filter(|_| attr.is_to_many()) {
			inlines.push(InlineSpec {
				field: field.clone(),
				target: rel.target.qualified_name,
				max_inlines: inline_bound(rel.target, vocab),
			});
		}
	}

	let groups = [
		(GroupKind::Identity, identity),
		(GroupKind::Audit, audit),
		(GroupKind::Domain, domain),
	]
	.into_iter()
	.filter(|(_, fields)| !fields.is_empty())
	.map(|(kind, fields)| FieldGroup { kind, fields })
	.collect();

	Ok(ManagementPanel {
		model: model.qualified_name,
		groups,
		search_fields,
		list_filters,
		inlines,
		page_size: DEFAULT_PAGE_SIZE,
	})
}

/// Vocabulary cardinality + slack, where the relevant vocabulary is the one
/// behind the target's first choice-typed attribute. Targets without a known
/// vocabulary get the bare slack.
fn inline_bound(target: &'static ModelMeta, vocab: &dyn VocabularyProvider) -> usize {
	let cardinality = describe(target)
		.iter()
		.find_map(|a| a.semantic_type.vocabulary())
		.and_then(|category| vocab.values(category))
		.map_or(0, |values| values.len());
	cardinality + INLINE_SLACK
}
