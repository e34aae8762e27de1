//! protoc-gen-dts - A protoc plugin for generating TypeScript declaration files
//!
//! This binary reads a CodeGeneratorRequest from stdin and writes a
//! CodeGeneratorResponse to stdout, following the protoc plugin protocol.
//! A request previously captured with the `saverequest` argument can be
//! replayed by passing its path as the first command-line argument.

use prost::Message;
use prost_types::compiler::{CodeGeneratorRequest, CodeGeneratorResponse};
use std::io::{self, Read, Write};

fn main() {
    if let Err(e) = run() {
        eprintln!("protoc-gen-dts: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let buf = match std::env::args().nth(1) {
        // replay a saved request for debugging
        Some(path) => std::fs::read(path)?,
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            buf
        }
    };

    let request = CodeGeneratorRequest::decode(&buf[..])?;

    // Generation errors are reported through the response, not the exit code
    let response = protoc_gen_dts::generate(request).unwrap_or_else(|e| CodeGeneratorResponse {
        error: Some(e.to_string()),
        ..Default::default()
    });

    if std::env::var("DTS_DEBUG").is_ok() {
        eprintln!("[protoc-gen-dts] Generated {} files", response.file.len());
        for f in &response.file {
            eprintln!(
                "[protoc-gen-dts]   - {}",
                f.name.as_deref().unwrap_or("<unnamed>")
            );
        }
        if let Some(ref err) = response.error {
            eprintln!("[protoc-gen-dts] Error: {}", err);
        }
    }

    // Write CodeGeneratorResponse to stdout
    let mut out = Vec::new();
    response.encode(&mut out)?;
    io::stdout().write_all(&out)?;

    Ok(())
}
