//! The six generated artifact kinds and their factories.
//!
//! Each factory consumes a resolved field list plus introspected attribute
//! metadata and constructs one artifact description. Factories share no
//! mutable state; memoization lives in the configuration layer, so each
//! factory runs at most once per configuration per kind.

use std::fmt;

use armature_model::{
	AttributeDescriptor, ModelMeta, PathError, ResolvedRelation, SemanticType, VocabularyProvider,
	resolve_path,
};
use serde::Serialize;

use crate::error::RegistryError;

pub mod editor;
pub mod exchange;
pub mod filter;
pub mod lister;
pub mod panel;
pub mod serializer;


pub use editor::{Editor, WidgetKind, WidgetSpec};
pub use exchange::{ColumnBinding, ExchangeColumn, ExchangeResource};
pub use filter::{FilterOperator, FilterSet, FilterSpec};
pub use lister::{ColumnSpec, Lister};
pub use panel::{FieldGroup, GroupKind, InlineSpec, ManagementPanel};
pub use serializer::{FieldSchema, NestedSummary, SerializerSchema};

/// The six derivable artifact kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ArtifactKind {
	Editor,
	Lister,
	Filter,
	Serializer,
	ExchangeResource,
	ManagementPanel,
}

impl ArtifactKind {
	pub const ALL: [Self; 6] = [
		Self::Editor,
		Self::Lister,
		Self::Filter,
		Self::Serializer,
		Self::ExchangeResource,
		Self::ManagementPanel,
	];

	pub const fn label(self) -> &'static str {
		match self {
			Self::Editor => "editor",
			Self::Lister => "lister",
			Self::Filter => "filter",
			Self::Serializer => "serializer",
			Self::ExchangeResource => "exchange resource",
			Self::ManagementPanel => "management panel",
		}
	}
}

impl fmt::Display for ArtifactKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

/// A generated artifact. Owned by the configuration that produced it; the
/// presentation layer consumes it read-only.
#[derive(Debug, Clone, Serialize)]
pub enum Artifact {
	Editor(Editor),
	Lister(Lister),
	Filter(FilterSet),
	Serializer(SerializerSchema),
	ExchangeResource(ExchangeResource),
	ManagementPanel(ManagementPanel),
}

impl Artifact {
	pub const fn kind(&self) -> ArtifactKind {
		match self {
			Self::Editor(_) => ArtifactKind::Editor,
			Self::Lister(_) => ArtifactKind::Lister,
			Self::Filter(_) => ArtifactKind::Filter,
			Self::Serializer(_) => ArtifactKind::Serializer,
			Self::ExchangeResource(_) => ArtifactKind::ExchangeResource,
			Self::ManagementPanel(_) => ArtifactKind::ManagementPanel,
		}
	}

	pub const fn as_editor(&self) -> Option<&Editor> {
		match self {
			Self::Editor(e) => Some(e),
			_ => None,
		}
	}

	pub const fn as_lister(&self) -> Option<&Lister> {
		match self {
			Self::Lister(l) => Some(l),
			_ => None,
		}
	}

	pub const fn as_filter(&self) -> Option<&FilterSet> {
		match self {
			Self::Filter(f) => Some(f),
			_ => None,
		}
	}

	pub const fn as_serializer(&self) -> Option<&SerializerSchema> {
		match self {
			Self::Serializer(s) => Some(s),
			_ => None,
		}
	}

	pub const fn as_exchange_resource(&self) -> Option<&ExchangeResource> {
		match self {
			Self::ExchangeResource(x) => Some(x),
			_ => None,
		}
	}

	pub const fn as_management_panel(&self) -> Option<&ManagementPanel> {
		match self {
			Self::ManagementPanel(p) => Some(p),
			_ => None,
		}
	}
}

/// Fully-authored artifact override. When a configuration carries one for a
/// kind, field resolution and the matching factory are skipped entirely.
pub trait CustomArtifact: Send + Sync {
	/// The artifact kind this override produces. Checked against the slot it
	/// occupies at registration time.
	fn kind(&self) -> ArtifactKind;

	/// Builds the artifact. Invoked at most once per configuration thanks to
	/// memoization.
	fn build(&self, model: &'static ModelMeta) -> Result<Artifact, RegistryError>;
}

/// Dispatches to the factory for `kind`.
pub(crate) fn build_artifact(
	model: &'static ModelMeta,
	kind: ArtifactKind,
	fields: &[String],
	vocab: &dyn VocabularyProvider,
) -> Result<Artifact, RegistryError> {
	match kind {
		ArtifactKind::Editor => editor::build(model, fields).map(Artifact::Editor),
		ArtifactKind::Lister => lister::build(model, fields).map(Artifact::Lister),
		ArtifactKind::Filter => filter::build(model, fields, vocab).map(Artifact::Filter),
		ArtifactKind::Serializer => serializer::build(model, fields).map(Artifact::Serializer),
		ArtifactKind::ExchangeResource => {
			exchange::build(model, fields).map(Artifact::ExchangeResource)
		}
		ArtifactKind::ManagementPanel => {
			panel::build(model, fields, vocab).map(Artifact::ManagementPanel)
		}
	}
}

/// Resolves a field path for a factory, mapping traversal failures to
/// [`RegistryError::ComponentGeneration`]. Validation has already vetted
/// declared names, so a miss here means the factory was handed a field set it
/// cannot realize.
pub(crate) fn descriptor(
	model: &'static ModelMeta,
	kind: ArtifactKind,
	field: &str,
) -> Result<AttributeDescriptor, RegistryError> {
	resolve_path(model, field).map_err(|e| {
		let reason = match e {
			PathError::Unknown { model, segment } => {
				format!("field '{segment}' does not exist on '{}'", model.qualified_name)
			}
			PathError::NotTraversable { model, segment } => format!(
				"'{segment}' on '{}' is not a to-one relation",
				model.qualified_name
			),
		};
		RegistryError::ComponentGeneration {
			kind,
			model: model.qualified_name.to_string(),
			reason,
		}
	})
}

/// The attribute used to display a related row: the relation's natural key if
/// declared, else the target's first non-internal text attribute, else its
/// first attribute.
pub(crate) fn display_attribute(rel: ResolvedRelation) -> Option<&'static str> {
	if let Some(key) = rel.natural_key {
		return Some(key);
	}
	let attrs = armature_model::describe(rel.target);
	attrs
		.iter()
		.find(|a| !a.is_internal && matches!(a.semantic_type, SemanticType::Text))
		.or_else(|| attrs.first())
		.map(|a| a.name)
}

/// Human-readable header from a field path: `"supplier.name"` → `"Supplier name"`.
pub(crate) fn header_for(field: &str) -> String {
	let mut s = field.replace(['_', '.'], " ");
	if let Some(first) = s.get(..1) {
		let upper = first.to_uppercase();
		s.replace_range(..1, &upper);
	}
	s
}
