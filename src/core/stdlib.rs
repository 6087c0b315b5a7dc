//! Built-in standard library module names

use std::collections::HashSet;
use std::sync::LazyLock;

/// Top-level names treated as standard library
///
/// `yaml` and `pytest` are not part of the standard library but have always
/// been reported alongside it.
pub const STDLIB_MODULES: &[&str] = &[
    "__future__", "abc", "argparse", "array", "ast", "asyncio", "base64", "binascii",
    "bisect", "builtins", "bz2", "calendar", "cmath", "codecs", "collections",
    "concurrent", "configparser", "contextlib", "contextvars", "copy", "csv", "ctypes",
    "dataclasses", "datetime", "decimal", "difflib", "dis", "doctest", "email", "enum",
    "errno", "fnmatch", "fractions", "functools", "gc", "getpass", "gettext", "glob",
    "gzip", "hashlib", "heapq", "hmac", "html", "http", "importlib", "inspect", "io",
    "itertools", "json", "keyword", "locale", "logging", "lzma", "math", "mmap",
    "multiprocessing", "numbers", "operator", "optparse", "os", "pathlib", "pdb",
    "pickle", "pkgutil", "platform", "pprint", "pytest", "queue", "random", "re",
    "reprlib", "sched", "secrets", "select", "selectors", "shlex", "shutil", "signal",
    "site", "smtplib", "socket", "socketserver", "sqlite3", "ssl", "stat", "statistics",
    "string", "struct", "subprocess", "sys", "sysconfig", "tarfile", "tempfile",
    "textwrap", "threading", "time", "timeit", "tokenize", "tomllib", "traceback",
    "types", "typing", "unicodedata", "unittest", "urllib", "uuid", "warnings",
    "weakref", "xml", "yaml", "zipfile", "zlib", "zoneinfo",
];

static STDLIB_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STDLIB_MODULES.iter().copied().collect());

/// Check whether a top-level name belongs to the built-in set
pub fn is_builtin_stdlib(top_level: &str) -> bool {
    STDLIB_SET.contains(top_level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_modules() {
        for name in ["os", "sys", "json", "typing", "collections", "importlib"] {
            assert!(is_builtin_stdlib(name), "{} should be stdlib", name);
        }
    }

    #[test]
    fn test_third_party_modules() {
        for name in ["requests", "numpy", "django", "os.path"] {
            assert!(!is_builtin_stdlib(name), "{} should not be stdlib", name);
        }
    }

    #[test]
    fn test_list_is_sorted_and_unique() {
        let mut sorted = STDLIB_MODULES.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted, STDLIB_MODULES);
    }
}
