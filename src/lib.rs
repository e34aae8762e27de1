//! protoc-gen-dts library
//!
//! This crate provides the code generation logic for converting Protocol Buffer
//! definitions into TypeScript ambient declaration (`.d.ts`) files.

#![deny(warnings)]
#![deny(missing_docs)]

pub mod codegen;
pub mod converter;
pub mod generator;
pub mod options;
pub mod types;

use prost_types::compiler::{CodeGeneratorRequest, CodeGeneratorResponse};
use thiserror::Error;

/// Errors that can occur during code generation
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Invalid plugin configuration or parameters
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Encountered an unknown or unsupported field type
    #[error("Unknown field type: {0}")]
    UnknownFieldType(String),
}

/// Generate TypeScript declarations from a protobuf CodeGeneratorRequest
///
/// This is the main entry point for the code generator.
pub fn generate(request: CodeGeneratorRequest) -> Result<CodeGeneratorResponse, GeneratorError> {
    generator::generate(request)
}
