//! File-backed storage primitives.

mod toml_document;

pub use toml_document::TomlDocument;
