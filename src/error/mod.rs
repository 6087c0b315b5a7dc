//! Error handling for modgraph
//!
//! The analysis core never surfaces these errors to its caller; they are
//! folded into the `errors`/`warnings` of an `AnalysisResult`. The loading,
//! configuration and output layers return them as ordinary `Result`s.

pub mod context;
pub mod types;

pub use context::{handle_error, ResultExt};
pub use types::{ErrorSeverity, ModgraphError, Result};
