//! Attribute introspection.
//!
//! [`describe`] is the single entry point the registry uses to enumerate a
//! model's attributes. It is pure: callers that want memoization cache the
//! result themselves.

use rustc_hash::FxHashSet;

use crate::meta::{AttributeMeta, ModelMeta, RelationMeta, SemanticType};

/// Resolved relation target for an [`AttributeDescriptor`].
#[derive(Debug, Clone, Copy)]
pub struct ResolvedRelation {
	pub target: &'static ModelMeta,
	pub natural_key: Option<&'static str>,
}

impl ResolvedRelation {
	fn from_meta(meta: RelationMeta) -> Self {
		Self {
			target: (meta.target)(),
			natural_key: meta.natural_key,
		}
	}
}

/// The resolved, per-attribute view consumed by field resolution and the
/// artifact factories. Relation handles are dereferenced to their target
/// metadata.
#[derive(Debug, Clone, Copy)]
pub struct AttributeDescriptor {
	pub name: &'static str,
	pub semantic_type: SemanticType,
	pub is_internal: bool,
	pub is_editable: bool,
	pub is_nullable: bool,
	pub relation: Option<ResolvedRelation>,
}

impl AttributeDescriptor {
	/// Returns true for `RelationToOne` attributes.
	pub const fn is_to_one(&self) -> bool {
		matches!(self.semantic_type, SemanticType::RelationToOne)
	}

	/// Returns true for `RelationToMany` attributes.
	pub const fn is_to_many(&self) -> bool {
		matches!(self.semantic_type, SemanticType::RelationToMany)
	}
}

/// Enumerates every attribute reachable on `model`.
///
/// For a model in a polymorphic family, inherited attributes from the family
/// base come first, followed by the model's own; an own attribute shadows an
/// inherited one with the same ident.
pub fn describe(model: &'static ModelMeta) -> Vec<AttributeDescriptor> {
	let own: FxHashSet<&str> = model.attributes.iter().map(|a| a.ident).collect();

	let mut out = Vec::new();
	if let Some(family) = model.family {
		let base = (family.base)();
		out.extend(
			base.attributes
				.iter()
				.filter(|a| !own.contains(a.ident))
				.map(to_descriptor),
		);
	}
	out.extend(model.attributes.iter().map(to_descriptor));
	out
}

fn to_descriptor(attr: &AttributeMeta) -> AttributeDescriptor {
	AttributeDescriptor {
		name: attr.ident,
		semantic_type: attr.semantic_type,
		is_internal: attr.is_internal,
		is_editable: attr.is_editable,
		is_nullable: attr.is_nullable,
		relation: attr.relation.map(ResolvedRelation::from_meta),
	}
}

/// Failure walking a dotted relation path.
#[derive(Debug, Clone)]
pub enum PathError {
	/// A segment names no attribute on the model it was looked up on.
	Unknown {
		model: &'static ModelMeta,
		segment: String,
	},
	/// An intermediate segment exists but is not a to-one relation, so the
	/// path cannot continue through it.
	NotTraversable {
		model: &'static ModelMeta,
		segment: String,
	},
}

/// Resolves a possibly-dotted attribute path (`"supplier.name"`) against a
/// model, walking to-one relation targets one segment at a time.
///
/// Returns the descriptor of the final segment.
pub fn resolve_path(
	model: &'static ModelMeta,
	path: &str,
) -> Result<AttributeDescriptor, PathError> {
	let mut current = model;
	let mut segments = path.split('.').peekable();

	loop {
		let segment = segments.next().unwrap_or_default();
		let attr = describe(current)
			.into_iter()
			.find(|a| a.name == segment)
			.ok_or_else(|| PathError::Unknown {
				model: current,
				segment: segment.to_string(),
			})?;

		if segments.peek().is_none() {
			return Ok(attr);
		}

		match attr.relation.filter(|_| attr.is_to_one()) {
			Some(rel) => current = rel.target,
			None => {
				return Err(PathError::NotTraversable {
					model: current,
					segment: segment.to_string(),
				});
			}
		}
	}
}
