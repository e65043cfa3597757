//! Quill - multi-cursor editing and Unicode bold/italic styling
//!
//! This crate provides the core types and logic for editing a host text view
//! with several carets at once and for encoding bold and italic directly in
//! the character stream, implementing the Elm Architecture pattern.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod messages;
pub mod model;
pub mod style;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use editable::{CursorSet, MultiCursorEditor, RopeSurface, TextRange, TextSurface};
pub use messages::Msg;
pub use model::EditorModel;
pub use style::StyleBit;
