//! Registry sources: the built-in merchant table and JSON registry files.

pub mod builtin;
pub mod json_file;
