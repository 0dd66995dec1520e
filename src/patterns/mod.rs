mod catalog;
mod grammar;

pub use catalog::{CatalogError, MarkerLiterals, PatternCatalog, PatternName};
pub use grammar::{strip_escapes, tail_offset, ESCAPE_SEQUENCE};
