//! Parsers for module lists and import statements

pub mod import_statement;
pub mod module_list;

pub use import_statement::{ImportStatementParser, parse_import_statement};
pub use module_list::ModuleListParser;
