//! Shared model fixtures for the crate's tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use armature_model::{AttributeMeta, ModelMeta, SemanticType, StaticVocabulary};

use crate::artifacts::{Artifact, ArtifactKind, CustomArtifact, Editor};
use crate::error::RegistryError;
use crate::registry::ComponentRegistry;

static TAG: ModelMeta = ModelMeta::new(
	"Tag",
	"catalog.Tag",
	&[
		AttributeMeta::new("id", SemanticType::Number).internal(),
		AttributeMeta::new(
			"kind",
			SemanticType::Choice {
				vocabulary: "tag-kinds",
			},
		),
		AttributeMeta::new("label", SemanticType::Text),
	],
);

pub(crate) fn tag() -> &'static ModelMeta {
	&TAG
}

static SUPPLIER: ModelMeta = ModelMeta::new(
	"Supplier",
	"catalog.Supplier",
	&[
		AttributeMeta::new("id", SemanticType::Number).internal(),
		AttributeMeta::new("name", SemanticType::Text),
		AttributeMeta::new("active", SemanticType::Boolean),
	],
);

pub(crate) fn supplier() -> &'static ModelMeta {
	&SUPPLIER
}

static WIDGET: ModelMeta = ModelMeta::new(
	"Widget",
	"catalog.Widget",
	&[
		AttributeMeta::new("id", SemanticType::Number).internal(),
		AttributeMeta::new("name", SemanticType::Text),
		AttributeMeta::new(
			"color",
			SemanticType::Choice {
				vocabulary: "colors",
			},
		),
		AttributeMeta::new("created", SemanticType::DateTime).internal(),
	],
);

pub(crate) fn widget() -> &'static ModelMeta {
	&WIDGET
}

static PART: ModelMeta = ModelMeta::new(
	"Part",
	"catalog.Part",
	&[
		AttributeMeta::new("id", SemanticType::Number).internal(),
		AttributeMeta::new("sku", SemanticType::Text),
		AttributeMeta::new("description", SemanticType::LongText).nullable(),
		AttributeMeta::new("photo", SemanticType::Binary).nullable(),
		AttributeMeta::new("price", SemanticType::Number),
		AttributeMeta::to_one("supplier", supplier)
			.natural_key("name")
			.nullable(),
		AttributeMeta::to_many("tags", tag),
		AttributeMeta::new("updated", SemanticType::DateTime).internal(),
	],
);

pub(crate) fn part() -> &'static ModelMeta {
	&PART
}

static ITEM: ModelMeta = ModelMeta::new(
	"Item",
	"library.Item",
	&[
		AttributeMeta::new("id", SemanticType::Number).internal(),
		AttributeMeta::new("title", SemanticType::Text),
		AttributeMeta::new("kind", SemanticType::Text).internal(),
	],
);

pub(crate) fn item() -> &'static ModelMeta {
	&ITEM
}

static BOOK: ModelMeta = ModelMeta::new(
	"Book",
	"library.Book",
	&[AttributeMeta::new("isbn", SemanticType::Text)],
)
.in_family(item, "kind");

pub(crate) fn book() -> &'static ModelMeta {
	&BOOK
}

static FILM: ModelMeta = ModelMeta::new(
	"Film",
	"library.Film",
	&[AttributeMeta::new("runtime", SemanticType::Number)],
)
.in_family(item, "kind");

pub(crate) fn film() -> &'static ModelMeta {
	&FILM
}

/// Registry preloaded with the catalog vocabularies.
pub(crate) fn catalog_registry() -> ComponentRegistry {
	ComponentRegistry::new().with_vocabulary(Arc::new(
		StaticVocabulary::new()
			.define("colors", ["red", "green", "blue"])
			.define("tag-kinds", ["genre", "era", "region", "format", "mood"]),
	))
}

/// Custom artifact override that counts how often it is built.
pub(crate) struct CountingCustom {
	kind: ArtifactKind,
	builds: AtomicUsize,
}

impl CountingCustom {
	pub(crate) fn new(kind: ArtifactKind) -> Arc<Self> {
		Arc::new(Self {
			kind,
			builds: AtomicUsize::new(0),
		})
	}

	pub(crate) fn build_count(&self) -> usize {
		self.builds.load(Ordering::SeqCst)
	}
}

impl CustomArtifact for CountingCustom {
	fn kind(&self) -> ArtifactKind {
		self.kind
	}

	fn build(&self, model: &'static ModelMeta) -> Result<Artifact, RegistryError> {
		self.builds.fetch_add(1, Ordering::SeqCst);
		Ok(Artifact::Editor(Editor {
			model: model.qualified_name,
			widgets: Vec::new(),
		}))
	}
}
