//! Error types and exit codes for routegraph
//!
//! Each component reports its own typed error (`EdgeError`, `PathError`,
//! `HistoryError`). `RouteError` is the umbrella used at the CLI boundary.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, malformed script)
//! - 3: Data error (route missing or duplicated, no path, empty history)

mod macros;

use thiserror::Error;

use crate::graph::history::Command;
use crate::graph::trace::Trace;
use crate::graph::types::PathCost;

/// Exit codes for the routegraph CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - operation rejected by the network (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors raised by edge store mutations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EdgeError {
    #[error("invalid route values for {origin} -> {destination}: distance={distance}, cost={base_cost} (both must be positive)")]
    InvalidValue {
        origin: String,
        destination: String,
        distance: f64,
        base_cost: f64,
    },

    #[error("route already exists: {origin} -> {destination}")]
    AlreadyExists { origin: String, destination: String },

    #[error("route not found: {origin} -> {destination}")]
    NotFound { origin: String, destination: String },
}

impl EdgeError {
    pub fn already_exists(origin: &str, destination: &str) -> Self {
        EdgeError::AlreadyExists {
            origin: origin.to_string(),
            destination: destination.to_string(),
        }
    }

    pub fn not_found(origin: &str, destination: &str) -> Self {
        EdgeError::NotFound {
            origin: origin.to_string(),
            destination: destination.to_string(),
        }
    }

    fn error_type(&self) -> &'static str {
        match self {
            EdgeError::InvalidValue { .. } => "invalid_value",
            EdgeError::AlreadyExists { .. } => "already_exists",
            EdgeError::NotFound { .. } => "not_found",
        }
    }
}

/// Errors raised by path queries.
///
/// Every variant produced by the search carries the trace recorded up to the
/// failure, so a failed query is still explainable.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    #[error("unknown node: {node}")]
    UnknownNode { node: String, trace: Trace },

    #[error("no path from {from} to {to}")]
    NoPath {
        from: String,
        to: String,
        trace: Trace,
    },

    #[error("search stopped after settling {limit} nodes without reaching {destination}")]
    LimitReached {
        limit: usize,
        destination: String,
        trace: Trace,
    },

    #[error("invalid hour: {hour} (expected 0-23)")]
    InvalidHour { hour: u8 },
}

impl PathError {
    /// Trace recorded before the search gave up, if the search ran at all
    pub fn trace(&self) -> Option<&Trace> {
        match self {
            PathError::UnknownNode { trace, .. }
            | PathError::NoPath { trace, .. }
            | PathError::LimitReached { trace, .. } => Some(trace),
            PathError::InvalidHour { .. } => None,
        }
    }

    /// A failed query never has a numeric cost
    pub fn cost(&self) -> PathCost {
        PathCost::Unreachable
    }

    fn error_type(&self) -> &'static str {
        match self {
            PathError::UnknownNode { .. } => "unknown_node",
            PathError::NoPath { .. } => "no_path",
            PathError::LimitReached { .. } => "limit_reached",
            PathError::InvalidHour { .. } => "invalid_hour",
        }
    }
}

/// Errors raised by undo/redo
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HistoryError {
    #[error("nothing to undo")]
    NothingToUndo,

    #[error("nothing to redo")]
    NothingToRedo,

    /// The store refused to restore a recorded state. The command stays on
    /// the stack it was taken from.
    #[error("cannot restore {command}: {source}")]
    Conflict {
        command: Box<Command>,
        #[source]
        source: EdgeError,
    },
}

impl HistoryError {
    fn error_type(&self) -> &'static str {
        match self {
            HistoryError::NothingToUndo => "nothing_to_undo",
            HistoryError::NothingToRedo => "nothing_to_redo",
            HistoryError::Conflict { .. } => "history_conflict",
        }
    }
}

/// Errors that can occur during routegraph operations
#[derive(Error, Debug)]
pub enum RouteError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("line {line}: {reason}")]
    ScriptParse { line: usize, reason: String },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error(transparent)]
    Edge(#[from] EdgeError),

    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    History(#[from] HistoryError),

    /// A strict replay stopped at a rejected operation
    #[error("line {line}: {source}")]
    Aborted {
        line: usize,
        #[source]
        source: Box<RouteError>,
    },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl RouteError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        RouteError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a malformed script line (1-based)
    pub fn script_parse(line: usize, reason: impl Into<String>) -> Self {
        RouteError::ScriptParse {
            line,
            reason: reason.into(),
        }
    }

    /// Wrap an operation failure with the script line that caused it
    pub fn aborted(line: usize, source: RouteError) -> Self {
        RouteError::Aborted {
            line,
            source: Box::new(source),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RouteError::UnknownFormat(_)
            | RouteError::UsageError(_)
            | RouteError::ScriptParse { .. }
            | RouteError::InvalidValue { .. }
            | RouteError::Path(PathError::InvalidHour { .. })
            | RouteError::Edge(EdgeError::InvalidValue { .. }) => ExitCode::Usage,

            RouteError::Edge(_)
            | RouteError::Path(_)
            | RouteError::History(_)
            | RouteError::Aborted { .. } => ExitCode::Data,

            RouteError::Io(_) | RouteError::Json(_) | RouteError::Toml(_) | RouteError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            RouteError::UnknownFormat(_) => "unknown_format",
            RouteError::UsageError(_) => "usage_error",
            RouteError::ScriptParse { .. } => "script_parse",
            RouteError::InvalidValue { .. } => "invalid_value",
            RouteError::Edge(e) => e.error_type(),
            RouteError::Path(e) => e.error_type(),
            RouteError::History(e) => e.error_type(),
            RouteError::Aborted { source, .. } => source.error_type(),
            RouteError::Io(_) => "io_error",
            RouteError::Json(_) => "json_error",
            RouteError::Toml(_) => "toml_error",
            RouteError::Other(_) => "other",
        }
    }

    /// Trace of the failed path query behind this error, if any
    pub fn path_trace(&self) -> Option<&Trace> {
        match self {
            RouteError::Path(e) => e.trace(),
            RouteError::Aborted { source, .. } => source.path_trace(),
            _ => None,
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        match self {
            RouteError::ScriptParse { line, .. } | RouteError::Aborted { line, .. } => {
                error_obj["line"] = serde_json::json!(line);
            }
            _ => {}
        }

        if let Some(trace) = self.path_trace() {
            error_obj["cost"] = serde_json::json!(PathCost::Unreachable);
            error_obj["trace"] = serde_json::json!(trace);
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for routegraph operations
pub type Result<T> = std::result::Result<T, RouteError>;
