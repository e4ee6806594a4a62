//! Controlled vocabulary lookup.
//!
//! Choice-typed attributes name the vocabulary their legal values come from.
//! The registry consumes vocabularies through [`VocabularyProvider`] — the
//! surrounding application decides whether they live in memory, come from
//! storage, or are generated.

use rustc_hash::FxHashMap;

/// External collaborator supplying legal values for named vocabularies.
pub trait VocabularyProvider: Send + Sync {
	/// Returns the legal values for `category`, or `None` if the category is
	/// unknown to this provider.
	fn values(&self, category: &str) -> Option<Vec<String>>;
}

/// Provider that knows no vocabularies. The registry default.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmptyVocabulary;

impl VocabularyProvider for EmptyVocabulary {
	fn values(&self, _category: &str) -> Option<Vec<String>> {
		None
	}
}

/// In-memory provider, built up-front. Suitable for tests and deployments
/// whose vocabularies are fixed at compile time.
#[derive(Debug, Default)]
pub struct StaticVocabulary {
	entries: FxHashMap<String, Vec<String>>,
}

impl StaticVocabulary {
	pub fn new() -> Self {
		Self::default()
	}

	/// Defines (or replaces) a vocabulary.
	pub fn define<I, S>(mut self, category: &str, values: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.entries
			.insert(category.to_string(), values.into_iter().map(Into::into).collect());
		self
	}
}

impl VocabularyProvider for StaticVocabulary {
	fn values(&self, category: &str) -> Option<Vec<String>> {
		self.entries.get(category).cloned()
	}
}
