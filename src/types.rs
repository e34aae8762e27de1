//! Protobuf field type to TypeScript type mapping

use crate::GeneratorError;
use prost_types::field_descriptor_proto::Type;
use prost_types::FieldDescriptorProto;

/// Result of mapping a protobuf field type to a TypeScript declared type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedType {
    /// The TypeScript type to declare the field with
    pub ts_type: String,
    /// Whether a comment recording the original protobuf type is emitted
    pub document_original: bool,
    /// Descriptor tag name for the documentation comment, e.g. `TYPE_INT64`
    pub type_tag: &'static str,
}

/// Map a field's protobuf type tag to the TypeScript type it declares.
///
/// Every numeric variant collapses to `number`. `bytes` is declared as
/// `string` because binary payloads are expected to arrive as a text-safe
/// encoding (base64); legacy `group` fields preserve no structural
/// information and fall back to `any`. Message- and enum-typed fields use
/// the referenced type name with the leading scope separator stripped.
///
/// `document_original` is set for every mapping whose declared type does not
/// make the schema type self-evident; the renderer turns it into a
/// `/** TYPE_... */` comment above the field.
pub fn map_field_type(field: &FieldDescriptorProto) -> Result<MappedType, GeneratorError> {
    let tag = field
        .r#type
        .and_then(|t| Type::try_from(t).ok())
        .ok_or_else(|| {
            GeneratorError::UnknownFieldType(format!(
                "field '{}' carries unrecognized type tag {:?}",
                field.name(),
                field.r#type
            ))
        })?;

    let (ts_type, document_original) = match tag {
        Type::Double
        | Type::Float
        | Type::Int64
        | Type::Uint64
        | Type::Int32
        | Type::Fixed64
        | Type::Fixed32
        | Type::Uint32
        | Type::Sfixed32
        | Type::Sfixed64
        | Type::Sint32
        | Type::Sint64 => ("number".to_string(), true),
        Type::Bool => ("boolean".to_string(), false),
        Type::String => ("string".to_string(), false),
        // transported as base64 by the runtime
        Type::Bytes => ("string".to_string(), true),
        Type::Message | Type::Enum => (
            field.type_name().trim_start_matches('.').to_string(),
            false,
        ),
        // no structural information survives for legacy groups
        Type::Group => ("any".to_string(), true),
    };

    Ok(MappedType {
        ts_type,
        document_original,
        type_tag: tag.as_str_name(),
    })
}
