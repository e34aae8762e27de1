//! Generation-argument parsing for protoc-gen-dts
//!
//! protoc hands the plugin a single free-form parameter string. It is split
//! on spaces and semicolons into arguments of the form `name` or
//! `name=value`, optionally prefixed with `-`, `--` or `/`. Every problem is
//! collected so the caller sees all of them in one validation failure.

use crate::GeneratorError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

/// Combined-mode output name used when neither `output` nor `namespace` is given
pub(crate) const DEFAULT_OUTPUT_PATH: &str = "protobuf.d.ts";

/// Converter file picked up from the working directory when no `converter=`
/// argument is given
const DEFAULT_CONVERTER_PATH: &str = "dtsconverters.yaml";

static ARG_MATCH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:-|--|/)?(?P<name>\w+?)(?:=(?P<value>.*))?$").expect("argument regex")
});

/// Parsed generation options
///
/// Built once per request from the parameter string and immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct GeneratorOptions {
    /// Merge every schema file into one output file instead of one per input
    pub combined: bool,
    /// Output file name in combined mode; ignored in split mode
    pub output_path: Option<String>,
    /// Wrap generated declarations in `declare module <namespace>`
    pub namespace: Option<String>,
    /// Path to the converter YAML file
    pub converter_path: Option<String>,
    /// Write the raw CodeGeneratorRequest to this path for later replay
    pub save_request: Option<String>,
}

impl GeneratorOptions {
    /// Parse and validate the protoc parameter string
    pub fn from_parameter(parameter: &str) -> Result<Self, GeneratorError> {
        let mut options = GeneratorOptions::default();
        let mut reasons = Vec::new();

        for argument in parameter
            .split(|c| c == ' ' || c == ';')
            .filter(|s| !s.is_empty())
        {
            options.parse_argument(argument, &mut reasons);
        }

        options.apply_defaults();

        if !reasons.is_empty() {
            let mut message = String::from("Invalid options:");
            for reason in &reasons {
                message.push('\n');
                message.push_str(reason);
            }
            return Err(GeneratorError::InvalidConfig(message));
        }

        Ok(options)
    }

    fn parse_argument(&mut self, argument: &str, reasons: &mut Vec<String>) {
        let captures = match ARG_MATCH.captures(argument) {
            Some(c) => c,
            None => {
                reasons.push(format!("Unknown argument format '{}'.", argument));
                return;
            }
        };

        let name = captures.name("name").map(|m| m.as_str()).unwrap_or("");
        let value = captures.name("value").map(|m| m.as_str()).unwrap_or("");

        match name.to_ascii_lowercase().as_str() {
            "saverequest" => {
                if value.is_empty() {
                    reasons.push("saverequest needs a filename".to_string());
                }
                self.save_request = Some(value.to_string());
            }
            "output" => self.output_path = Some(value.to_string()),
            // a bare `combined` turns the mode on
            "combined" => self.combined = value.is_empty() || value.eq_ignore_ascii_case("true"),
            "namespace" => self.namespace = Some(value.to_string()),
            "converter" => {
                if !Path::new(value).exists() {
                    reasons.push(format!(
                        "Specified converter file '{}' does not exist.",
                        value
                    ));
                }
                self.converter_path = Some(value.to_string());
            }
            _ => reasons.push(format!("Unknown argument '{}'.", name)),
        }
    }

    fn apply_defaults(&mut self) {
        if self.combined && self.output_path.as_deref().map_or(true, str::is_empty) {
            self.output_path = Some(
                self.namespace
                    .clone()
                    .filter(|ns| !ns.is_empty())
                    .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string()),
            );
        }

        if self.converter_path.is_none() && Path::new(DEFAULT_CONVERTER_PATH).exists() {
            self.converter_path = Some(DEFAULT_CONVERTER_PATH.to_string());
        }
    }
}
