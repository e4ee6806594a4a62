use pretty_assertions::assert_eq;

use super::*;
use crate::testutil::{CountingCustom, book, catalog_registry, film, item, part, widget};

#[test]
fn lister_smart_default_excludes_internals() {
	let registry = catalog_registry();
	let config = registry.register(ConfigBuilder::new(widget)).unwrap();

	let lister = config.lister().unwrap();
	let columns: Vec<_> = lister
		.as_lister()
		.unwrap()
		.columns
		.iter()
		.map(|c| c.field.as_str())
		.collect();
	assert_eq!(columns, vec!["name", "color"]);
}

#[test]
fn per_kind_override_narrows_only_that_artifact() {
	let registry = catalog_registry();
	let config = registry
		.register(
			ConfigBuilder::new(widget)
				.fields(["name", "color"])
				.fields_for(ArtifactKind::Filter, ["color"]),
		)
		.unwrap();

	let filter = config.filter().unwrap();
	let fields: Vec<_> = filter
		.as_filter()
		.unwrap()
		.filters
		.iter()
		.map(|f| f.field.as_str())
		.collect();
	assert_eq!(fields, vec!["color"]);

	let editor = config.editor().unwrap();
	let fields: Vec<_> = editor
		.as_editor()
		.unwrap()
		.widgets
		.iter()
		.map(|w| w.field.as_str())
		.collect();
	assert_eq!(fields, vec!["name", "color"]);
}

#[test]
fn exclusion_removes_from_explicit_fields() {
	let registry = catalog_registry();
	let config = registry
		.register(
			ConfigBuilder::new(widget)
				.fields(["name", "color"])
				.exclude(["color"]),
		)
		.unwrap();

	let editor = config.editor().unwrap();
	let fields: Vec<_> = editor
		.as_editor()
		.unwrap()
		.widgets
		.iter()
		.map(|w| w.field.as_str())
		.collect();
	assert_eq!(fields, vec!["name"]);
}

#[test]
fn registering_a_typo_fails_with_a_suggestion() {
	let registry = catalog_registry();
	let err = registry
		.register(ConfigBuilder::new(widget).fields(["nmae"]))
		.unwrap_err();

	assert!(err.to_string().contains("name"), "{err}");
	assert!(!registry.is_registered("catalog.Widget"));
}

#[test]
fn duplicate_declared_field_fails_at_registration() {
	let registry = catalog_registry();
	let err = registry
		.register(ConfigBuilder::new(widget).fields(["name", "name"]))
		.unwrap_err();

	// Must fail here, not on the first artifact access.
	assert!(matches!(err, RegistryError::Configuration { .. }));
	assert!(!registry.is_registered("catalog.Widget"));
}

#[test]
fn duplicate_registration_leaves_the_original_untouched() {
	let registry = catalog_registry();
	registry
		.register(ConfigBuilder::new(widget).fields(["name"]))
		.unwrap();

	let err = registry
		.register(ConfigBuilder::new(widget).fields(["color"]))
		.unwrap_err();
	assert!(matches!(err, RegistryError::DuplicateRegistration { .. }));

	let original = registry.get_for_model(widget as armature_model::ModelHandle).unwrap();
	assert_eq!(original.fields().to_vec(), vec!["name"]);
}

#[test]
fn config_debug_names_its_model() {
	let registry = catalog_registry();
	let config = registry
		.register(ConfigBuilder::new(widget).fields(["name"]))
		.unwrap();

	let dump = format!("{config:?}");
	assert!(dump.contains("catalog.Widget"), "{dump}");
	assert!(dump.contains("name"), "{dump}");
}

#[test]
fn artifact_accessors_are_memoized() {
	let registry = catalog_registry();
	let config = registry.register(ConfigBuilder::new(widget)).unwrap();

	let first = config.editor().unwrap();
	let second = config.editor().unwrap();
	assert!(Arc::ptr_eq(&first, &second));

	config.clear_cache(Some(ArtifactKind::Editor));
	let rebuilt = config.editor().unwrap();
	assert!(!Arc::ptr_eq(&first, &rebuilt));
}

#[test]
fn custom_artifact_bypasses_the_factory_and_is_memoized() {
	let registry = catalog_registry();
	let custom = CountingCustom::new(ArtifactKind::Editor);
	let config = registry
		.register(ConfigBuilder::new(part).custom_for(ArtifactKind::Editor, custom.clone()))
		.unwrap();

	// Dotted paths would make the editor factory error; the custom override
	// must short-circuit before resolution ever runs.
	let editor = config.editor().unwrap();
	assert!(editor.as_editor().unwrap().widgets.is_empty());

	config.editor().unwrap();
	assert_eq!(custom.build_count(), 1);
}

#[test]
fn lookup_by_name_handle_and_meta_agree() {
	let registry = catalog_registry();
	registry.register(ConfigBuilder::new(widget)).unwrap();

	assert!(registry.is_registered("catalog.Widget"));
	assert!(registry.is_registered(widget as armature_model::ModelHandle));
	assert!(registry.is_registered(widget()));
	assert!(!registry.is_registered("catalog.Nope"));

	assert!(matches!(
		registry.get_for_model("catalog.Nope"),
		Err(RegistryError::NotFound { .. })
	));
}

#[test]
fn models_partition_by_family_category() {
	let registry = catalog_registry();
	registry.register(ConfigBuilder::new(widget)).unwrap();
	registry.register(ConfigBuilder::new(book)).unwrap();
	registry.register(ConfigBuilder::new(film)).unwrap();

	let library: Vec<_> = registry
		.models_of_category("library.Item")
		.iter()
		.map(|m| m.qualified_name)
		.collect();
	assert_eq!(library, vec!["library.Book", "library.Film"]);

	let catalog: Vec<_> = registry
		.models_of_category("catalog.Widget")
		.iter()
		.map(|m| m.qualified_name)
		.collect();
	assert_eq!(catalog, vec!["catalog.Widget"]);
}

#[test]
fn family_restricted_registry_rejects_outsiders() {
	let registry = ComponentRegistry::for_family(item);
	registry.register(ConfigBuilder::new(book)).unwrap();

	assert!(matches!(
		registry.register(ConfigBuilder::new(widget)),
		Err(RegistryError::Configuration { .. })
	));
}

#[test]
fn registration_order_is_preserved() {
	let registry = catalog_registry();
	registry.register(ConfigBuilder::new(widget)).unwrap();
	registry.register(ConfigBuilder::new(part)).unwrap();

	let names: Vec<_> = registry
		.all_models()
		.iter()
		.map(|m| m.qualified_name)
		.collect();
	assert_eq!(names, vec!["catalog.Widget", "catalog.Part"]);
	assert_eq!(registry.all_configs().len(), 2);
}

#[test]
fn force_build_all_materializes_every_artifact() {
	let registry = catalog_registry();
	let config = registry.register(ConfigBuilder::new(widget)).unwrap();

	registry.force_build_all().unwrap();

	// Everything is already cached: accessing again is a pure cache hit.
	let before = config.serializer().unwrap();
	let after = config.serializer().unwrap();
	assert!(Arc::ptr_eq(&before, &after));
}

#[test]
fn force_build_all_surfaces_generation_errors() {
	let registry = catalog_registry();
	// `photo` is binary: the filter factory refuses it at build time, which
	// lazy access would only discover on first use.
	registry
		.register(ConfigBuilder::new(part).fields_for(ArtifactKind::Filter, ["photo"]))
		.unwrap();

	assert!(matches!(
		registry.force_build_all(),
		Err(RegistryError::ComponentGeneration {
			kind: ArtifactKind::Filter,
			..
		})
	));
}
