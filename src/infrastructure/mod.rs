// Infrastructure implementations for registrar.

pub mod mirror;
pub mod record_reader;

pub use record_reader::{DelimitedFileSource, DelimitedRecords, MemorySource};
