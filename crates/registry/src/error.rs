//! The registry error taxonomy.
//!
//! One enum, distinguished by variant. Validation variants are raised
//! synchronously from registration and are meant to halt process start-up;
//! `ComponentGeneration` surfaces at first artifact access (or at start-up
//! under eager force-building).

use crate::artifacts::ArtifactKind;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegistryError {
	/// Structural problem with a configuration: wrong model family, or a
	/// custom artifact occupying the wrong slot.
	#[error("configuration error for '{model}': {reason}")]
	Configuration { model: String, reason: String },

	/// A declared field name does not exist, or a relation path cannot be
	/// traversed. Carries up to 3 similarity-ranked suggestions.
	#[error("unknown field '{field}' on '{model}'{}", fmt_suggestions(.suggestions))]
	FieldValidation {
		model: String,
		field: String,
		suggestions: Vec<String>,
	},

	/// The model already has a registered configuration.
	#[error("model '{model}' is already registered")]
	DuplicateRegistration { model: String },

	/// A factory failed to build an artifact from an otherwise-valid field
	/// set.
	#[error("cannot generate {kind} for '{model}': {reason}")]
	ComponentGeneration {
		kind: ArtifactKind,
		model: String,
		reason: String,
	},

	/// Internal invariant violation in the precedence algorithm. Should be
	/// unreachable given registration-time validation.
	#[error("field resolution invariant violated for '{model}': {reason}")]
	FieldResolution { model: String, reason: String },

	/// No configuration is registered for the requested model.
	#[error("no configuration registered for '{model}'")]
	NotFound { model: String },
}

fn fmt_suggestions(suggestions: &[String]) -> String {
	if suggestions.is_empty() {
		String::new()
	} else {
		format!(" (did you mean: {}?)", suggestions.join(", "))
	}
}
