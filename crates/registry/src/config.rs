//! Per-model declarative configuration.
//!
//! Built fluently via [`ConfigBuilder`], frozen at registration, then
//! read-only apart from the explicit artifact cache. Artifact accessors are
//! memoized: first access constructs and caches, later accesses return the
//! same `Arc`. Two racing first-accesses of the same kind may both build; the
//! cache keeps whichever lands first, so callers still observe one stable
//! artifact.

use std::fmt;
use std::sync::Arc;

use armature_model::{ModelHandle, ModelMeta, VocabularyProvider};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::artifacts::{Artifact, ArtifactKind, CustomArtifact, build_artifact};
use crate::error::RegistryError;
use crate::resolve::resolve;

/// Declarative registration input for one model.
pub struct ConfigBuilder {
	model: ModelHandle,
	display_name: Option<String>,
	fields: Vec<String>,
	exclude: Vec<String>,
	kind_fields: FxHashMap<ArtifactKind, Vec<String>>,
	kind_exclude: FxHashMap<ArtifactKind, Vec<String>>,
	custom: FxHashMap<ArtifactKind, Arc<dyn CustomArtifact>>,
}

impl ConfigBuilder {
	pub fn new(model: ModelHandle) -> Self {
		Self {
			model,
			display_name: None,
			fields: Vec::new(),
			exclude: Vec::new(),
			kind_fields: FxHashMap::default(),
			kind_exclude: FxHashMap::default(),
			custom: FxHashMap::default(),
		}
	}

	/// Parent-level default field list. Empty means "use smart defaults".
	pub fn fields<I, S>(mut self, fields: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.fields = fields.into_iter().map(Into::into).collect();
		self
	}

	/// Names removed from every artifact, regardless of inclusion source.
	pub fn exclude<I, S>(mut self, fields: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.exclude = fields.into_iter().map(Into::into).collect();
		self
	}

	/// Per-kind field override; takes precedence over the parent-level list.
	pub fn fields_for<I, S>(mut self, kind: ArtifactKind, fields: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.kind_fields
			.insert(kind, fields.into_iter().map(Into::into).collect());
		self
	}

	/// Per-kind exclusion; cumulative with the parent-level exclusion.
	pub fn exclude_for<I, S>(mut self, kind: ArtifactKind, fields: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.kind_exclude
			.insert(kind, fields.into_iter().map(Into::into).collect());
		self
	}

	/// Fully-authored artifact for `slot`; bypasses field resolution and the
	/// factory for that kind. The override's own declared kind must match the
	/// slot, which registration validates.
	pub fn custom_for(mut self, slot: ArtifactKind, artifact: Arc<dyn CustomArtifact>) -> Self {
		self.custom.insert(slot, artifact);
		self
	}

	pub fn display_name(mut self, name: impl Into<String>) -> Self {
		self.display_name = Some(name.into());
		self
	}

	/// Freezes the builder into an immutable configuration. Called by the
	/// registry; the result is validated before it is stored.
	pub(crate) fn freeze(self, vocab: Arc<dyn VocabularyProvider>) -> ModelConfig {
		let meta = (self.model)();
		ModelConfig {
			model: meta,
			handle: self.model,
			display_name: self
				.display_name
				.unwrap_or_else(|| meta.display_name.to_string()),
			fields: self.fields,
			exclude: self.exclude,
			kind_fields: self.kind_fields,
			kind_exclude: self.kind_exclude,
			custom: self.custom,
			vocab,
			cache: RwLock::new(FxHashMap::default()),
		}
	}
}

/// A validated, frozen configuration for one registered model.
///
/// Exactly one exists per model at any time; the registry enforces this at
/// registration.
pub struct ModelConfig {
	model: &'static ModelMeta,
	handle: ModelHandle,
	display_name: String,
	fields: Vec<String>,
	exclude: Vec<String>,
	kind_fields: FxHashMap<ArtifactKind, Vec<String>>,
	kind_exclude: FxHashMap<ArtifactKind, Vec<String>>,
	custom: FxHashMap<ArtifactKind, Arc<dyn CustomArtifact>>,
	vocab: Arc<dyn VocabularyProvider>,
	cache: RwLock<FxHashMap<ArtifactKind, Arc<Artifact>>>,
}

// Hand-written: the custom-artifact and vocabulary trait objects have no
// `Debug` to derive through.
impl fmt::Debug for ModelConfig {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ModelConfig")
			.field("model", &self.model.qualified_name)
			.field("display_name", &self.display_name)
			.field("fields", &self.fields)
			.field("exclude", &self.exclude)
			.finish_non_exhaustive()
	}
}

impl ModelConfig {
	pub fn model(&self) -> &'static ModelMeta {
		self.model
	}

	pub fn handle(&self) -> ModelHandle {
		self.handle
	}

	pub fn display_name(&self) -> &str {
		&self.display_name
	}

	pub fn fields(&self) -> &[String] {
		&self.fields
	}

	pub fn exclude(&self) -> &[String] {
		&self.exclude
	}

	pub fn fields_for(&self, kind: ArtifactKind) -> Option<&[String]> {
		self.kind_fields.get(&kind).map(Vec::as_slice)
	}

	pub fn exclude_for(&self, kind: ArtifactKind) -> Option<&[String]> {
		self.kind_exclude.get(&kind).map(Vec::as_slice)
	}

	pub fn custom_for(&self, kind: ArtifactKind) -> Option<&Arc<dyn CustomArtifact>> {
		self.custom.get(&kind)
	}

	/// Returns the memoized artifact for `kind`, building it on first access.
	pub fn artifact(&self, kind: ArtifactKind) -> Result<Arc<Artifact>, RegistryError> {
		if let Some(hit) = self.cache.read().get(&kind) {
			return Ok(Arc::clone(hit));
		}

		let built = Arc::new(self.build(kind)?);
		let mut cache = self.cache.write();
		Ok(Arc::clone(cache.entry(kind).or_insert(built)))
	}

	pub fn editor(&self) -> Result<Arc<Artifact>, RegistryError> {
		self.artifact(ArtifactKind::Editor)
	}

	pub fn lister(&self) -> Result<Arc<Artifact>, RegistryError> {
		self.artifact(ArtifactKind::Lister)
	}

	pub fn filter(&self) -> Result<Arc<Artifact>, RegistryError> {
		self.artifact(ArtifactKind::Filter)
	}

	pub fn serializer(&self) -> Result<Arc<Artifact>, RegistryError> {
		self.artifact(ArtifactKind::Serializer)
	}

	pub fn exchange_resource(&self) -> Result<Arc<Artifact>, RegistryError> {
		self.artifact(ArtifactKind::ExchangeResource)
	}

	pub fn management_panel(&self) -> Result<Arc<Artifact>, RegistryError> {
		self.artifact(ArtifactKind::ManagementPanel)
	}

	/// Resets one artifact (or all of them) back to unbuilt.
	pub fn clear_cache(&self, kind: Option<ArtifactKind>) {
		let mut cache = self.cache.write();
		match kind {
			Some(kind) => {
				cache.remove(&kind);
			}
			None => cache.clear(),
		}
	}

	fn build(&self, kind: ArtifactKind) -> Result<Artifact, RegistryError> {
		if let Some(custom) = self.custom.get(&kind) {
			tracing::trace!(model = self.model.qualified_name, %kind, "building custom artifact");
			return custom.build(self.model);
		}

		let fields = resolve(self, kind)?;
		tracing::trace!(
			model = self.model.qualified_name,
			%kind,
			field_count = fields.len(),
			"building artifact"
		);
		build_artifact(self.model, kind, &fields, self.vocab.as_ref())
	}
}
