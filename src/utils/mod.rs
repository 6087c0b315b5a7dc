//! Name resolution utilities

pub mod module_name_mapper;
pub mod relative_resolver;

pub use module_name_mapper::ModuleNameMapper;
pub use relative_resolver::{RelativeImportResolver, resolve_relative_import};
