//! Editor factory: resolved fields → input widget specifications.

use armature_model::{ModelMeta, SemanticType};
use serde::Serialize;

use super::{ArtifactKind, descriptor, header_for};
use crate::error::RegistryError;

/// An editable form description for one model.
#[derive(Debug, Clone, Serialize)]
pub struct Editor {
	pub model: &'static str,
	pub widgets: Vec<WidgetSpec>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WidgetSpec {
	pub field: String,
	pub label: String,
	pub widget: WidgetKind,
	pub required: bool,
	pub read_only: bool,
}

/// Input widget per semantic type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum WidgetKind {
	TextInput,
	TextArea,
	NumberInput,
	Checkbox,
	DateTimePicker,
	/// Dropdown over the named controlled vocabulary.
	Select { vocabulary: &'static str },
	FileUpload,
	/// Searchable picker over the target model's identity.
	RelatedPicker { target: &'static str },
	/// Multi-select picker over the target model's identity.
	MultiRelatedPicker { target: &'static str },
}

pub(crate) fn build(model: &'static ModelMeta, fields: &[String]) -> Result<Editor, RegistryError> {
	let mut widgets = Vec::with_capacity(fields.len());
	for field in fields {
		if field.contains('.') {
			return Err(RegistryError::ComponentGeneration {
				kind: ArtifactKind::Editor,
				model: model.qualified_name.to_string(),
				reason: format!("'{field}': cannot edit through a relation path"),
			});
		}

		let attr = descriptor(model, ArtifactKind::Editor, field)?;
		let widget = match attr.semantic_type {
			SemanticType::Text => WidgetKind::TextInput,
			SemanticType::LongText => WidgetKind::TextArea,
			SemanticType::Number => WidgetKind::NumberInput,
			SemanticType::Boolean => WidgetKind::Checkbox,
			SemanticType::DateTime => WidgetKind::DateTimePicker,
			SemanticType::Choice { vocabulary } => WidgetKind::Select { vocabulary },
			SemanticType::Binary => WidgetKind::FileUpload,
			SemanticType::RelationToOne => WidgetKind::RelatedPicker {
				target: relation_target(&attr),
			},
			SemanticType::RelationToMany => WidgetKind::MultiRelatedPicker {
				target: relation_target(&attr),
			},
		};

		widgets.push(WidgetSpec {
			field: field.clone(),
			label: header_for(field),
			widget,
			required: !attr.is_nullable && attr.is_editable,
			read_only: !attr.is_editable,
		});
	}

	Ok(Editor {
		model: model.qualified_name,
		widgets,
	})
}

fn relation_target(attr: &armature_model::AttributeDescriptor) -> &'static str {
	attr.relation
		.map_or("<unresolved>", |rel| rel.target.qualified_name)
}
