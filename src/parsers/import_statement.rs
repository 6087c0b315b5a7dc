//! Import statement parsing
//!
//! Turns one raw statement into dependency records. Two forms are
//! recognised:
//!
//! - `import X[ as x][, Y[ as y] ...]` gives one record per name
//! - `from X import A[ as a][, B ...]` gives one record for `X` carrying the
//!   imported items, optionally wrapped in parentheses
//!
//! Anything else, including statements with malformed names, yields no
//! records. Parsing never fails.

use crate::models::dependency::{DependencyRecord, ImportType};

/// Parser for raw import statement text
#[derive(Debug, Default, Clone, Copy)]
pub struct ImportStatementParser;

impl ImportStatementParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a statement declared by `source_module`
    pub fn parse(&self, statement: &str, source_module: &str) -> Vec<DependencyRecord> {
        parse_import_statement(statement, source_module)
    }
}

/// Parse one import statement into zero or more unclassified records
pub fn parse_import_statement(statement: &str, source_module: &str) -> Vec<DependencyRecord> {
    let cleaned = statement.trim();

    if let Some(rest) = strip_keyword(cleaned, "import") {
        parse_plain_import(rest, cleaned, source_module).unwrap_or_default()
    } else if let Some(rest) = strip_keyword(cleaned, "from") {
        parse_from_import(rest, cleaned, source_module)
            .map(|record| vec![record])
            .unwrap_or_default()
    } else {
        Vec::new()
    }
}

fn parse_plain_import(
    names: &str,
    statement: &str,
    source_module: &str,
) -> Option<Vec<DependencyRecord>> {
    names
        .split(',')
        .map(|spec| {
            let name = strip_alias(spec)?;
            if !is_module_path(name) {
                return None;
            }

            let import_type = if name.starts_with('.') {
                ImportType::Relative
            } else {
                ImportType::Module
            };
            Some(DependencyRecord::new(
                name,
                import_type,
                source_module,
                statement,
                Vec::new(),
            ))
        })
        .collect()
}

fn parse_from_import(rest: &str, statement: &str, source_module: &str) -> Option<DependencyRecord> {
    let (module, after_module) = rest.split_once(char::is_whitespace)?;
    if !is_module_path(module) {
        return None;
    }

    let items = strip_keyword(after_module.trim_start(), "import")?;
    let items = parse_imported_items(items)?;

    let import_type = if module.starts_with('.') {
        ImportType::Relative
    } else {
        ImportType::FromImport
    };
    Some(DependencyRecord::new(
        module,
        import_type,
        source_module,
        statement,
        items,
    ))
}

fn parse_imported_items(items: &str) -> Option<Vec<String>> {
    let items = items.trim();

    let (inner, parenthesized) = match items.strip_prefix('(') {
        Some(inner) => (inner.strip_suffix(')')?, true),
        None => (items, false),
    };

    let mut specs: Vec<&str> = inner.split(',').collect();
    if parenthesized && specs.len() > 1 && specs.last().is_some_and(|s| s.trim().is_empty()) {
        specs.pop();
    }

    specs
        .into_iter()
        .map(|spec| {
            if spec.trim() == "*" {
                return Some("*".to_string());
            }
            let item = strip_alias(spec)?;
            is_identifier(item).then(|| item.to_string())
        })
        .collect()
}

/// Strip a leading keyword that must be followed by whitespace
fn strip_keyword<'a>(text: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = text.strip_prefix(keyword)?;
    if rest.starts_with(char::is_whitespace) {
        Some(rest.trim_start())
    } else {
        None
    }
}

/// Reduce `name` or `name as alias` to `name`
fn strip_alias(spec: &str) -> Option<&str> {
    let mut tokens = spec.split_whitespace();
    let name = tokens.next()?;

    match (tokens.next(), tokens.next(), tokens.next()) {
        (None, _, _) => Some(name),
        (Some("as"), Some(alias), None) if is_identifier(alias) => Some(name),
        _ => None,
    }
}

/// A dotted name, optionally prefixed by one or more dots
fn is_module_path(name: &str) -> bool {
    let remainder = name.trim_start_matches('.');
    if remainder.is_empty() {
        return !name.is_empty();
    }
    remainder.split('.').all(is_identifier)
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_alphabetic() => {
            chars.all(|c| c == '_' || c.is_alphanumeric())
        }
        _ => false,
    }
}
