//! Dependency classification
//!
//! A resolved name is checked against an ordered list of rules and takes the
//! category of the first rule that matches; a name no rule matches is
//! external. The internal rules accept any plausible spelling overlap, so a
//! third-party package sharing a name suffix with a project module is
//! reported as internal.

use super::stdlib::is_builtin_stdlib;
use crate::models::dependency::DependencyType;
use std::collections::HashSet;
use std::fmt;

/// One classification check, in precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassificationRule {
    /// First dotted segment is a standard library module
    StdlibTopLevel,
    /// Exactly an internal module name
    ExactInternal,
    /// A package some internal module lives in (`pkg` for `pkg.mod`)
    PackageOfInternal,
    /// Something inside an internal module (`pkg.mod.Class` for `pkg.mod`)
    SubmoduleOfInternal,
    /// One name's segments are a trailing run of the other's
    SegmentSuffix,
}

impl ClassificationRule {
    /// Rules in the order they are tried
    pub const ORDER: [ClassificationRule; 5] = [
        ClassificationRule::StdlibTopLevel,
        ClassificationRule::ExactInternal,
        ClassificationRule::PackageOfInternal,
        ClassificationRule::SubmoduleOfInternal,
        ClassificationRule::SegmentSuffix,
    ];

    /// Category assigned when this rule matches
    pub fn category(&self) -> DependencyType {
        match self {
            ClassificationRule::StdlibTopLevel => DependencyType::Stdlib,
            _ => DependencyType::Internal,
        }
    }
}

impl fmt::Display for ClassificationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClassificationRule::StdlibTopLevel => "stdlib top-level",
            ClassificationRule::ExactInternal => "exact internal",
            ClassificationRule::PackageOfInternal => "package of internal",
            ClassificationRule::SubmoduleOfInternal => "submodule of internal",
            ClassificationRule::SegmentSuffix => "segment suffix",
        };
        f.write_str(name)
    }
}

/// Classifies resolved names as internal, external or standard library
#[derive(Debug, Clone, Default)]
pub struct DependencyClassifier {
    extra_stdlib: HashSet<String>,
}

impl DependencyClassifier {
    /// Classifier using only the built-in standard library set
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifier that also treats `names` as standard library
    pub fn with_extra_stdlib<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extra_stdlib: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether a top-level name is standard library
    pub fn is_stdlib(&self, top_level: &str) -> bool {
        is_builtin_stdlib(top_level) || self.extra_stdlib.contains(top_level)
    }

    /// Classify `name` against the set of internal module names
    pub fn classify(&self, name: &str, internal: &HashSet<String>) -> DependencyType {
        self.matching_rule(name, internal)
            .map(|rule| rule.category())
            .unwrap_or(DependencyType::External)
    }

    /// First rule matching `name`, if any
    pub fn matching_rule(&self, name: &str, internal: &HashSet<String>) -> Option<ClassificationRule> {
        ClassificationRule::ORDER
            .into_iter()
            .find(|rule| self.matches(*rule, name, internal))
    }

    /// Evaluate a single rule
    pub fn matches(&self, rule: ClassificationRule, name: &str, internal: &HashSet<String>) -> bool {
        match rule {
            ClassificationRule::StdlibTopLevel => {
                let top_level = name.split('.').next().unwrap_or(name);
                self.is_stdlib(top_level)
            }
            ClassificationRule::ExactInternal => internal.contains(name),
            ClassificationRule::PackageOfInternal => internal
                .iter()
                .any(|module| is_dotted_child(module, name)),
            ClassificationRule::SubmoduleOfInternal => internal
                .iter()
                .any(|module| is_dotted_child(name, module)),
            ClassificationRule::SegmentSuffix => {
                let parts: Vec<&str> = name.split('.').collect();
                internal.iter().any(|module| {
                    let module_parts: Vec<&str> = module.split('.').collect();
                    module_parts.ends_with(&parts) || parts.ends_with(&module_parts)
                })
            }
        }
    }
}

/// `child` starts with `parent` followed by a dot
fn is_dotted_child(child: &str, parent: &str) -> bool {
    child
        .strip_prefix(parent)
        .is_some_and(|rest| rest.starts_with('.'))
}
