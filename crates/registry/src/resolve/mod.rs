//! Field-selection precedence.
//!
//! Four tiers, first match wins: a custom artifact override (handled in the
//! configuration accessor, which never calls into here); a non-empty per-kind
//! field override; the non-empty parent-level `fields` list; smart defaults
//! computed from introspection. Exclusions are then subtracted — the
//! parent-level and per-kind sets are cumulative.

use armature_model::{ModelMeta, SemanticType, describe};
use rustc_hash::FxHashSet;

use crate::artifacts::ArtifactKind;
use crate::config::ModelConfig;
use crate::error::RegistryError;


/// Resolves the field list for one artifact kind of a configuration.
///
/// Assumes the configuration's declared lists already passed registration
/// validation; the only error raised here is the defensive
/// [`RegistryError::FieldResolution`] invariant signal.
pub fn resolve(config: &ModelConfig, kind: ArtifactKind) -> Result<Vec<String>, RegistryError> {
	let inclusion: Vec<String> = match config.fields_for(kind) {
		Some(override_fields) if !override_fields.is_empty() => override_fields.to_vec(),
		_ if !config.fields().is_empty() => config.fields().to_vec(),
		_ => smart_defaults(config.model(), kind),
	};

	let mut seen = FxHashSet::default();
	for name in &inclusion {
		if !seen.insert(name.as_str()) {
			return Err(RegistryError::FieldResolution {
				model: config.model().qualified_name.to_string(),
				reason: format!("field '{name}' selected twice for {kind}"),
			});
		}
	}

	let excluded: FxHashSet<&str> = config
		.exclude()
		.iter()
		.chain(config.exclude_for(kind).unwrap_or_default())
		.map(String::as_str)
		.collect();

	Ok(inclusion
		.into_iter()
		.filter(|name| !excluded.contains(name.as_str()))
		.collect())
}

/// The per-kind fallback field set computed from introspection when no
/// explicit list is configured.
pub fn smart_defaults(model: &'static ModelMeta, kind: ArtifactKind) -> Vec<String> {
	let attrs = describe(model);

	// The management panel shows everything, internals included; they land
	// in its identity/audit groups.
	if kind == ArtifactKind::ManagementPanel {
		return attrs.iter().map(|a| a.name.to_string()).collect();
	}

	attrs
		.iter()
		.filter(|a| !a.is_internal)
		.filter(|a| match kind {
			ArtifactKind::Editor | ArtifactKind::ExchangeResource => a.is_editable,
			ArtifactKind::Lister => !matches!(
				a.semantic_type,
				SemanticType::LongText | SemanticType::Binary
			),
			ArtifactKind::Filter => matches!(
				a.semantic_type,
				SemanticType::DateTime
					| SemanticType::Choice { .. }
					| SemanticType::Boolean
					| SemanticType::RelationToOne
			),
			ArtifactKind::Serializer => true,
			ArtifactKind::ManagementPanel => unreachable!("handled above"),
		})
		.map(|a| a.name.to_string())
		.collect()
}
