//! Word list input
//!
//! The corpus is caller-supplied: any newline-delimited dictionary file
//! works. The published runs used a frozen 44,585-word snapshot.

pub mod loader;

pub use loader::load_from_file;
