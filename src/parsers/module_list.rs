//! Module list file parsing
//!
//! A module list is JSON, either a bare array of module records or an object
//! with a `modules` array:
//!
//! ```json
//! {"modules": [{"name": "pkg.main", "path": "pkg/main.py", "imports": ["import os"]}]}
//! ```

use crate::error::{ModgraphError, Result};
use crate::models::module::Module;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum ModuleListFile {
    Bare(Vec<Module>),
    Wrapped { modules: Vec<Module> },
}

impl From<ModuleListFile> for Vec<Module> {
    fn from(file: ModuleListFile) -> Self {
        match file {
            ModuleListFile::Bare(modules) => modules,
            ModuleListFile::Wrapped { modules } => modules,
        }
    }
}

/// Parser for module list files
pub struct ModuleListParser;

impl ModuleListParser {
    /// Read and parse a module list file
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Vec<Module>> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ModgraphError::InputNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path)?;
        Self::parse_str(&content, path)
    }

    /// Parse module list content; `path` is only used for error context
    pub fn parse_str<P: AsRef<Path>>(content: &str, path: P) -> Result<Vec<Module>> {
        let file: ModuleListFile = serde_json::from_str(content)
            .map_err(|e| ModgraphError::json_parse_error(path.as_ref(), e))?;
        Ok(file.into())
    }
}
