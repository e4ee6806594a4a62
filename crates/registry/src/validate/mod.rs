//! Registration-time validation.
//!
//! Runs synchronously inside `register()` and raises on the first violation,
//! in priority order: family membership, duplicate registration, declared
//! field existence (with relation-path traversal and fuzzy suggestions),
//! duplicate declared names, custom-override compatibility. It never touches
//! an artifact cache.

use armature_model::{ModelHandle, ModelMeta, PathError, describe, resolve_path};
use rustc_hash::FxHashSet;

use crate::artifacts::ArtifactKind;
use crate::config::ModelConfig;
use crate::error::RegistryError;
use crate::suggest::suggest;


/// What validation needs to know about the registry performing the
/// registration.
pub(crate) struct ValidationContext<'a> {
	/// Family base every registered model must belong to, if the registry is
	/// restricted.
	pub required_family: Option<ModelHandle>,
	/// Whether a configuration already targets the given qualified name.
	pub is_registered: &'a dyn Fn(&str) -> bool,
}

pub(crate) fn validate(ctx: &ValidationContext<'_>, config: &ModelConfig) -> Result<(), RegistryError> {
	let model = config.model();

	check_family(ctx, model)?;

	if (ctx.is_registered)(model.qualified_name) {
		return Err(RegistryError::DuplicateRegistration {
			model: model.qualified_name.to_string(),
		});
	}

	for name in config.fields().iter().chain(config.exclude()) {
		check_name(model, name)?;
	}
	for kind in ArtifactKind::ALL {
		for name in config
			.fields_for(kind)
			.unwrap_or_default()
			.iter()
			.chain(config.exclude_for(kind).unwrap_or_default())
		{
			check_name(model, name)?;
		}
	}

	check_duplicates(model, config.fields(), None)?;
	for kind in ArtifactKind::ALL {
		if let Some(fields) = config.fields_for(kind) {
			check_duplicates(model, fields, Some(kind))?;
		}
	}

	for kind in ArtifactKind::ALL {
		if let Some(custom) = config.custom_for(kind)
			&& custom.kind() != kind
		{
			return Err(RegistryError::Configuration {
				model: model.qualified_name.to_string(),
				reason: format!(
					"custom artifact in the {kind} slot reports kind {}",
					custom.kind()
				),
			});
		}
	}

	Ok(())
}

fn check_family(ctx: &ValidationContext<'_>, model: &'static ModelMeta) -> Result<(), RegistryError> {
	let Some(required) = ctx.required_family else {
		return Ok(());
	};
	let base = required();

	let belongs = model.qualified_name == base.qualified_name
		|| model
			.family
			.is_some_and(|f| (f.base)().qualified_name == base.qualified_name);
	if belongs {
		Ok(())
	} else {
		Err(RegistryError::Configuration {
			model: model.qualified_name.to_string(),
			reason: format!("model is not part of the '{}' family", base.qualified_name),
		})
	}
}

/// Rejects a name declared twice within one inclusion list. The resolver
/// re-checks this as a defensive invariant, but the failure belongs here, at
/// registration, not at first artifact access.
fn check_duplicates(
	model: &'static ModelMeta,
	fields: &[String],
	kind: Option<ArtifactKind>,
) -> Result<(), RegistryError> {
	let mut seen = FxHashSet::default();
	for name in fields {
		if !seen.insert(name.as_str()) {
			let scope = match kind {
				Some(kind) => format!("the {kind} field list"),
				None => "the field list".to_string(),
			};
			return Err(RegistryError::Configuration {
				model: model.qualified_name.to_string(),
				reason: format!("field '{name}' declared twice in {scope}"),
			});
		}
	}
	Ok(())
}

/// Validates one declared (possibly dotted) field name against the model,
/// attaching fuzzy suggestions from the attributes of whichever model the
/// lookup actually failed on.
fn check_name(model: &'static ModelMeta, name: &str) -> Result<(), RegistryError> {
	match resolve_path(model, name) {
		Ok(_) => Ok(()),
		Err(PathError::Unknown {
			model: failed_on,
			segment,
		}) => Err(RegistryError::FieldValidation {
			model: failed_on.qualified_name.to_string(),
			field: segment.clone(),
			suggestions: suggest(&segment, describe(failed_on).iter().map(|a| a.name)),
		}),
		Err(PathError::NotTraversable {
			model: failed_on,
			segment,
		}) => Err(RegistryError::FieldValidation {
			model: failed_on.qualified_name.to_string(),
			field: format!("{segment} (in '{name}': not a to-one relation)"),
			suggestions: Vec::new(),
		}),
	}
}
