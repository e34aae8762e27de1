//! Declaration rendering for protoc-gen-dts
//!
//! This module turns descriptor trees into TypeScript ambient declaration
//! text: `render` owns the output buffer, `declaration` walks the
//! enum/message trees.

pub mod declaration;
pub mod render;

pub use render::RenderBuffer;
