//! Recursive declaration tree renderer
//!
//! Walks enum and message descriptor lists in declaration order and renders
//! them as TypeScript `enum`, `module` and `interface` blocks. The `first`
//! flag tracks whether the next declaration is the first sibling at the
//! current depth; every later sibling is preceded by exactly one blank line.
//!
//! Descriptor trees are finite and acyclic by construction of the schema
//! compiler, so recursion terminates on tree depth alone.

use crate::codegen::render::RenderBuffer;
use crate::converter::ConverterTable;
use crate::types::map_field_type;
use crate::GeneratorError;
use prost_types::field_descriptor_proto::{Label, Type};
use prost_types::{DescriptorProto, EnumDescriptorProto, FieldDescriptorProto};

/// Render a list of enum descriptors at the buffer's current depth.
///
/// Members are emitted in descriptor order as `NAME = value` lines joined by
/// commas, with no trailing comma after the last member.
pub fn render_enums(buf: &mut RenderBuffer, enums: &[EnumDescriptorProto], first: &mut bool) {
    for enum_type in enums {
        if !*first {
            buf.blank_line();
        }

        buf.push_line(&format!("enum {} {{", enum_type.name()));
        buf.indent();
        for (index, value) in enum_type.value.iter().enumerate() {
            let separator = if index + 1 < enum_type.value.len() {
                ","
            } else {
                ""
            };
            buf.push_line(&format!("{} = {}{}", value.name(), value.number(), separator));
        }
        buf.dedent();
        buf.push_line("}");

        *first = false;
    }
}

/// Render a list of message descriptors at the buffer's current depth.
///
/// A message with nested types first gets a `module` block holding the
/// nested declarations (enums before messages, one level deeper), then its
/// own `interface` block; both count as siblings for blank-line spacing at
/// the outer depth. A message without nested types gets no module block.
pub fn render_messages(
    buf: &mut RenderBuffer,
    messages: &[DescriptorProto],
    converters: &ConverterTable,
    first: &mut bool,
) -> Result<(), GeneratorError> {
    for message in messages {
        if !message.nested_type.is_empty() || !message.enum_type.is_empty() {
            if !*first {
                buf.blank_line();
            }

            buf.push_line(&format!("module {} {{", message.name()));
            buf.indent();
            let mut first_nested = true;
            render_enums(buf, &message.enum_type, &mut first_nested);
            render_messages(buf, &message.nested_type, converters, &mut first_nested)?;
            buf.dedent();
            buf.push_line("}");

            *first = false;
        }

        if !*first {
            buf.blank_line();
        }

        buf.push_line(&format!("interface {} {{", message.name()));
        buf.indent();
        for field in &message.field {
            render_field(buf, field, converters)?;
        }
        buf.dedent();
        buf.push_line("}");

        *first = false;
    }

    Ok(())
}

/// Render one interface field, with its optional original-type comment
fn render_field(
    buf: &mut RenderBuffer,
    field: &FieldDescriptorProto,
    converters: &ConverterTable,
) -> Result<(), GeneratorError> {
    let mut mapped = map_field_type(field)?;

    // Converter overrides apply to message-typed fields only and always
    // surface the substitution in the comment
    if field.r#type == Some(Type::Message as i32) {
        if let Some(replacement) = converters.lookup(&mapped.ts_type) {
            mapped.ts_type = replacement.to_string();
            mapped.document_original = true;
        }
    }

    if mapped.document_original {
        match field.type_name.as_deref() {
            Some(type_name) => buf.push_line(&format!(
                "/** {}, TypeName: {} */",
                mapped.type_tag, type_name
            )),
            None => buf.push_line(&format!("/** {} */", mapped.type_tag)),
        }
    }

    let label = field.label.and_then(|l| Label::try_from(l).ok());
    if label == Some(Label::Repeated) {
        buf.push_line(&format!("{}: Array<{}>;", field.name(), mapped.ts_type));
    } else {
        let marker = if label == Some(Label::Required) { "" } else { "?" };
        buf.push_line(&format!("{}{}: {};", field.name(), marker, mapped.ts_type));
    }

    Ok(())
}
