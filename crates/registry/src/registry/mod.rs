//! The component registry itself.
//!
//! An explicitly constructed, injectable store mapping model identity to its
//! frozen configuration. Two-phase lifecycle: a sequential registration phase
//! during process start-up, then a read-mostly phase where lookups and
//! iteration are safe from any number of threads. `register()` is not
//! hardened against concurrent callers; sequential start-up registration is a
//! documented precondition, not a guarantee.

use std::sync::Arc;

use armature_model::{EmptyVocabulary, ModelHandle, ModelMeta, VocabularyProvider};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::artifacts::ArtifactKind;
use crate::config::{ConfigBuilder, ModelConfig};
use crate::error::RegistryError;
use crate::validate::{ValidationContext, validate};

#[cfg(test)]
mod tests;

/// Lookup key: either a model handle or a fully-qualified name.
#[derive(Clone, Copy)]
pub enum ModelKey<'a> {
	Handle(ModelHandle),
	Name(&'a str),
}

impl ModelKey<'_> {
	fn qualified_name(&self) -> &str {
		match self {
			Self::Handle(handle) => handle().qualified_name,
			Self::Name(name) => name,
		}
	}
}

impl From<ModelHandle> for ModelKey<'static> {
	fn from(handle: ModelHandle) -> Self {
		Self::Handle(handle)
	}
}

impl<'a> From<&'a str> for ModelKey<'a> {
	fn from(name: &'a str) -> Self {
		Self::Name(name)
	}
}

impl<'a> From<&'a ModelMeta> for ModelKey<'a> {
	fn from(meta: &'a ModelMeta) -> Self {
		Self::Name(meta.qualified_name)
	}
}

#[derive(Default)]
struct Store {
	by_name: FxHashMap<&'static str, usize>,
	configs: Vec<Arc<ModelConfig>>,
}

/// Process-scoped store of model configurations.
pub struct ComponentRegistry {
	store: RwLock<Store>,
	required_family: Option<ModelHandle>,
	vocab: Arc<dyn VocabularyProvider>,
}

impl Default for ComponentRegistry {
	fn default() -> Self {
		Self::new()
	}
}

impl ComponentRegistry {
	/// A registry accepting models of any family.
	pub fn new() -> Self {
		Self {
			store: RwLock::new(Store::default()),
			required_family: None,
			vocab: Arc::new(EmptyVocabulary),
		}
	}

	/// A registry restricted to one polymorphic family: every registered
	/// model must be `base` itself or a leaf whose family base is `base`.
	pub fn for_family(base: ModelHandle) -> Self {
		Self {
			required_family: Some(base),
			..Self::new()
		}
	}

	/// Injects the vocabulary provider used for choice-typed filter
	/// generation and panel inline bounds. Call before registering.
	pub fn with_vocabulary(mut self, vocab: Arc<dyn VocabularyProvider>) -> Self {
		self.vocab = vocab;
		self
	}

	/// Validates and stores a configuration. Either fully stored or not
	/// stored at all; the validation error propagates verbatim.
	pub fn register(&self, builder: ConfigBuilder) -> Result<Arc<ModelConfig>, RegistryError> {
		let config = builder.freeze(Arc::clone(&self.vocab));

		{
			let store = self.store.read();
			let ctx = ValidationContext {
				required_family: self.required_family,
				is_registered: &|name| store.by_name.contains_key(name),
			};
			validate(&ctx, &config)?;
		}

		let config = Arc::new(config);
		let mut store = self.store.write();
		let slot = store.configs.len();
		store.by_name.insert(config.model().qualified_name, slot);
		store.configs.push(Arc::clone(&config));

		tracing::debug!(
			model = config.model().qualified_name,
			display_name = config.display_name(),
			"registered model configuration"
		);
		Ok(config)
	}

	pub fn is_registered<'a>(&self, key: impl Into<ModelKey<'a>>) -> bool {
		let key = key.into();
		self.store.read().by_name.contains_key(key.qualified_name())
	}

	/// Returns the configuration for a model, by handle or qualified name.
	pub fn get_for_model<'a>(
		&self,
		key: impl Into<ModelKey<'a>>,
	) -> Result<Arc<ModelConfig>, RegistryError> {
		let key = key.into();
		let name = key.qualified_name();
		let store = self.store.read();
		store
			.by_name
			.get(name)
			.map(|&slot| Arc::clone(&store.configs[slot]))
			.ok_or_else(|| RegistryError::NotFound {
				model: name.to_string(),
			})
	}

	/// All registered models, in registration order.
	pub fn all_models(&self) -> Vec<&'static ModelMeta> {
		self.store.read().configs.iter().map(|c| c.model()).collect()
	}

	/// Registered models whose category (family base, or the model itself
	/// when family-less) matches.
	pub fn models_of_category(&self, category: &str) -> Vec<&'static ModelMeta> {
		self.store
			.read()
			.configs
			.iter()
			.map(|c| c.model())
			.filter(|m| m.category() == category)
			.collect()
	}

	/// All configurations, in registration order.
	pub fn all_configs(&self) -> Vec<Arc<ModelConfig>> {
		self.store.read().configs.clone()
	}

	/// Eagerly builds every artifact of every configuration, converting lazy
	/// construction failures into start-up failures. Returns the first error
	/// after logging it.
	pub fn force_build_all(&self) -> Result<(), RegistryError> {
		for config in self.all_configs() {
			for kind in ArtifactKind::ALL {
				if let Err(e) = config.artifact(kind) {
					tracing::error!(
						model = config.model().qualified_name,
						%kind,
						error = %e,
						"artifact force-build failed"
					);
					return Err(e);
				}
			}
		}
		tracing::debug!(
			configs = self.store.read().configs.len(),
			"all artifacts force-built"
		);
		Ok(())
	}
}
