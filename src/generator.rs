//! Request-level file assembly
//!
//! Walks the request's file descriptors in order and renders each requested
//! one, either into its own `.d.ts` file (split mode, the default) or into a
//! single combined output. Descriptors that are present only as
//! type-reference sources for other files produce no output of their own.

use crate::codegen::declaration::{render_enums, render_messages};
use crate::codegen::render::RenderBuffer;
use crate::converter::ConverterTable;
use crate::options::{GeneratorOptions, DEFAULT_OUTPUT_PATH};
use crate::GeneratorError;
use prost::Message;
use prost_types::compiler::code_generator_response::File;
use prost_types::compiler::{CodeGeneratorRequest, CodeGeneratorResponse};
use prost_types::FileDescriptorProto;

/// Extension carried by every generated declaration file
const DTS_EXTENSION: &str = ".d.ts";

/// Schema file extension replaced when deriving split-mode output names
const PROTO_EXTENSION: &str = ".proto";

/// Generate TypeScript declarations for a full code generator request.
///
/// Parses the generation options from the request parameter, loads the
/// converter table, and runs the translation engine. Any error is fatal to
/// the whole run: the caller turns it into the response error and no output
/// files are produced.
pub fn generate(request: CodeGeneratorRequest) -> Result<CodeGeneratorResponse, GeneratorError> {
    let options = GeneratorOptions::from_parameter(request.parameter())?;

    if let Some(path) = options.save_request.as_deref().filter(|p| !p.is_empty()) {
        save_request(&request, path)?;
    }

    let generator = Generator::from_options(options)?;
    let file = generator.generate(&request)?;

    Ok(CodeGeneratorResponse {
        file,
        ..Default::default()
    })
}

/// Write the raw request back out for later replay through the CLI
fn save_request(request: &CodeGeneratorRequest, path: &str) -> Result<(), GeneratorError> {
    std::fs::write(path, request.encode_to_vec()).map_err(|e| {
        GeneratorError::InvalidConfig(format!("Failed to save request to '{}': {}", path, e))
    })
}

/// Descriptor-to-declaration engine for one generation run
///
/// Holds the immutable options and converter table; generation itself is a
/// pure traversal of the request's descriptor trees.
pub struct Generator {
    options: GeneratorOptions,
    converters: ConverterTable,
}

impl Generator {
    /// Create a generator with an explicit converter table (no file I/O)
    pub fn new(options: GeneratorOptions, converters: ConverterTable) -> Self {
        Generator {
            options,
            converters,
        }
    }

    /// Create a generator, loading the converter table the options point at
    pub fn from_options(options: GeneratorOptions) -> Result<Self, GeneratorError> {
        let converters = match options.converter_path.as_deref() {
            Some(path) => ConverterTable::load(path)?,
            None => ConverterTable::default(),
        };
        Ok(Generator::new(options, converters))
    }

    /// Render every requested file descriptor into response files, in
    /// request order
    pub fn generate(&self, request: &CodeGeneratorRequest) -> Result<Vec<File>, GeneratorError> {
        if self.options.combined {
            self.generate_combined(request)
        } else {
            self.generate_split(request)
        }
    }

    fn generate_split(&self, request: &CodeGeneratorRequest) -> Result<Vec<File>, GeneratorError> {
        let mut files = Vec::new();

        for descriptor in &request.proto_file {
            if !is_requested(request, descriptor) {
                continue;
            }

            let mut buf = RenderBuffer::new();
            self.render_header(&mut buf, request);
            buf.blank_line();

            let wrapped = self.open_namespace(&mut buf);
            self.render_file(&mut buf, descriptor)?;
            if wrapped {
                buf.dedent();
                buf.push_line("}");
            }

            files.push(File {
                name: Some(split_output_name(descriptor)),
                content: Some(buf.into_string()),
                ..Default::default()
            });
        }

        Ok(files)
    }

    /// Combined mode: one output file, one header, one namespace wrapper.
    ///
    /// The first descriptor that actually emits output contributes the
    /// header and opens the wrapper; skipped descriptors do not advance that
    /// bookkeeping. Every emitted descriptor gets a section-boundary comment
    /// naming its source; the wrapper is closed once after the loop.
    fn generate_combined(
        &self,
        request: &CodeGeneratorRequest,
    ) -> Result<Vec<File>, GeneratorError> {
        let mut buf = RenderBuffer::new();
        let mut wrapped = false;
        let mut first_emitted = true;

        for descriptor in &request.proto_file {
            if !is_requested(request, descriptor) {
                continue;
            }

            if first_emitted {
                self.render_header(&mut buf, request);
                buf.blank_line();
                wrapped = self.open_namespace(&mut buf);
            } else {
                buf.blank_line();
            }

            buf.push_line(&format!(
                "// Next section generated from \"{}\".",
                descriptor.name()
            ));
            buf.blank_line();
            self.render_file(&mut buf, descriptor)?;

            first_emitted = false;
        }

        if first_emitted {
            // nothing was requested; no output file at all
            return Ok(Vec::new());
        }

        if wrapped {
            buf.dedent();
            buf.push_line("}");
        }

        let output = self
            .options
            .output_path
            .as_deref()
            .unwrap_or(DEFAULT_OUTPUT_PATH);

        Ok(vec![File {
            name: Some(combined_output_name(output)),
            content: Some(buf.into_string()),
            ..Default::default()
        }])
    }

    fn render_header(&self, buf: &mut RenderBuffer, request: &CodeGeneratorRequest) {
        let mut header = String::from("// Generated with protoc-gen-dts.");
        if let Some(parameter) = request.parameter.as_deref().filter(|p| !p.is_empty()) {
            header.push_str(&format!(" Parameters: \"{}\"", parameter));
        }
        header.push_str("  DO NOT EDIT!");
        buf.push_line(&header);
    }

    /// Open the configured namespace wrapper; returns whether one was opened
    fn open_namespace(&self, buf: &mut RenderBuffer) -> bool {
        match self.options.namespace.as_deref().filter(|ns| !ns.is_empty()) {
            Some(namespace) => {
                buf.push_line(&format!("declare module {}", namespace));
                buf.push_line("{");
                buf.indent();
                true
            }
            None => false,
        }
    }

    fn render_file(
        &self,
        buf: &mut RenderBuffer,
        descriptor: &FileDescriptorProto,
    ) -> Result<(), GeneratorError> {
        let mut first = true;
        render_enums(buf, &descriptor.enum_type, &mut first);
        render_messages(buf, &descriptor.message_type, &self.converters, &mut first)
    }
}

fn is_requested(request: &CodeGeneratorRequest, descriptor: &FileDescriptorProto) -> bool {
    request
        .file_to_generate
        .iter()
        .any(|f| f == descriptor.name())
}

/// Replace a trailing `.proto` with `.d.ts` to name a split-mode output file
fn split_output_name(descriptor: &FileDescriptorProto) -> String {
    format!(
        "{}{}",
        strip_suffix_ignore_case(descriptor.name(), PROTO_EXTENSION),
        DTS_EXTENSION
    )
}

/// Normalize the configured combined output name to exactly one `.d.ts` suffix
fn combined_output_name(output: &str) -> String {
    format!(
        "{}{}",
        strip_suffix_ignore_case(output, DTS_EXTENSION),
        DTS_EXTENSION
    )
}

/// Strip `suffix` from the end of `value`, ignoring ASCII case
fn strip_suffix_ignore_case<'a>(value: &'a str, suffix: &str) -> &'a str {
    if value.len() >= suffix.len() {
        let split = value.len() - suffix.len();
        if value.is_char_boundary(split) && value[split..].eq_ignore_ascii_case(suffix) {
            return &value[..split];
        }
    }
    value
}
