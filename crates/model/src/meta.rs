//! Static model metadata declarations.
//!
//! Everything here is `const`-constructible so that models are plain
//! `static`s. Mutually-referential models (relations, family bases) point at
//! each other through [`ModelHandle`] function pointers rather than direct
//! `&'static` references, which sidesteps static initialization cycles.

use serde::Serialize;

/// Handle to a model's static metadata.
///
/// A function pointer rather than a `&'static ModelMeta` so two models may
/// reference each other without a static initialization cycle.
pub type ModelHandle = fn() -> &'static ModelMeta;

/// The semantic type of an attribute, as seen by artifact generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SemanticType {
	/// Short, single-line text.
	Text,
	/// Multi-line or unbounded text (excluded from tabular defaults).
	LongText,
	/// Integer or decimal numeric value.
	Number,
	Boolean,
	DateTime,
	/// Value drawn from a named controlled vocabulary.
	Choice {
		vocabulary: &'static str,
	},
	/// Opaque binary payload (excluded from tabular defaults).
	Binary,
	RelationToOne,
	RelationToMany,
}

impl SemanticType {
	/// Returns the controlled vocabulary this type draws from, if any.
	pub const fn vocabulary(self) -> Option<&'static str> {
		match self {
			Self::Choice { vocabulary } => Some(vocabulary),
			_ => None,
		}
	}

	/// Returns true for types with a small, enumerable value domain.
	pub const fn is_enumerable(self) -> bool {
		matches!(self, Self::Boolean | Self::Choice { .. })
	}

	/// Returns true for free-text types that support substring search.
	pub const fn is_searchable_text(self) -> bool {
		matches!(self, Self::Text | Self::LongText)
	}
}

/// Relation metadata for `RelationToOne` / `RelationToMany` attributes.
#[derive(Debug, Clone, Copy)]
pub struct RelationMeta {
	/// The related model.
	pub target: ModelHandle,
	/// Target attribute usable as a stable external key (e.g. a unique
	/// `name`), preferred over internal identity by the exchange resource.
	pub natural_key: Option<&'static str>,
}

/// Static metadata for one attribute of a model.
#[derive(Debug, Clone, Copy)]
pub struct AttributeMeta {
	pub ident: &'static str,
	pub semantic_type: SemanticType,
	/// System-managed attribute (identity, audit timestamps). Excluded from
	/// smart defaults and always read-only in generated schemas.
	pub is_internal: bool,
	pub is_editable: bool,
	pub is_nullable: bool,
	pub relation: Option<RelationMeta>,
}

impl AttributeMeta {
	/// Declares a scalar attribute.
	pub const fn new(ident: &'static str, semantic_type: SemanticType) -> Self {
		Self {
			ident,
			semantic_type,
			is_internal: false,
			is_editable: true,
			is_nullable: false,
			relation: None,
		}
	}

	/// Declares a to-one relation attribute.
	pub const fn to_one(ident: &'static str, target: ModelHandle) -> Self {
		let mut attr = Self::new(ident, SemanticType::RelationToOne);
		attr.relation = Some(RelationMeta {
			target,
			natural_key: None,
		});
		attr
	}

	/// Declares a to-many relation attribute.
	pub const fn to_many(ident: &'static str, target: ModelHandle) -> Self {
		let mut attr = Self::new(ident, SemanticType::RelationToMany);
		attr.relation = Some(RelationMeta {
			target,
			natural_key: None,
		});
		attr
	}

	/// Marks the attribute as system-managed. Internal attributes are never
	/// editable.
	pub const fn internal(mut self) -> Self {
		self.is_internal = true;
		self.is_editable = false;
		self
	}

	/// Marks the attribute read-only without making it internal.
	pub const fn readonly(mut self) -> Self {
		self.is_editable = false;
		self
	}

	pub const fn nullable(mut self) -> Self {
		self.is_nullable = true;
		self
	}

	/// Names the target attribute that serves as the relation's natural key.
	///
	/// Panics at `const` evaluation time if the attribute is not a relation.
	pub const fn natural_key(mut self, key: &'static str) -> Self {
		match self.relation {
			Some(rel) => {
				self.relation = Some(RelationMeta {
					target: rel.target,
					natural_key: Some(key),
				});
				self
			}
			None => panic!("natural_key on a non-relation attribute"),
		}
	}
}

/// Polymorphic family membership: ties a leaf model to its base.
#[derive(Debug, Clone, Copy)]
pub struct FamilyMeta {
	/// The family's base model; all leaves share its physical representation.
	pub base: ModelHandle,
	/// Attribute on the base that discriminates which leaf a row is.
	pub discriminator: &'static str,
}

/// Static metadata for one domain model.
#[derive(Debug, Clone, Copy)]
pub struct ModelMeta {
	/// Short type name, e.g. `"Widget"`.
	pub ident: &'static str,
	/// Stable identity used as the registry key, e.g. `"catalog.Widget"`.
	pub qualified_name: &'static str,
	/// Human-readable name; defaults to `ident`.
	pub display_name: &'static str,
	pub family: Option<FamilyMeta>,
	/// Attributes declared directly on this model. Inherited attributes are
	/// folded in by [`crate::describe`], not listed here.
	pub attributes: &'static [AttributeMeta],
}

impl ModelMeta {
	pub const fn new(
		ident: &'static str,
		qualified_name: &'static str,
		attributes: &'static [AttributeMeta],
	) -> Self {
		Self {
			ident,
			qualified_name,
			display_name: ident,
			family: None,
			attributes,
		}
	}

	pub const fn display_name(mut self, name: &'static str) -> Self {
		self.display_name = name;
		self
	}

	/// Places this model in a polymorphic family under `base`.
	pub const fn in_family(mut self, base: ModelHandle, discriminator: &'static str) -> Self {
		self.family = Some(FamilyMeta {
			base,
			discriminator,
		});
		self
	}

	/// Looks up an attribute declared directly on this model.
	pub fn attribute(&self, ident: &str) -> Option<&AttributeMeta> {
		self.attributes.iter().find(|a| a.ident == ident)
	}

	/// The category this model is partitioned under: the family base's
	/// qualified name, or the model's own qualified name when it has no
	/// family.
	pub fn category(&self) -> &'static str {
		match self.family {
			Some(family) => (family.base)().qualified_name,
			None => self.qualified_name,
		}
	}
}
