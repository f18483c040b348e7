//! Route script parsing
//!
//! One operation per line; `#` starts a comment and blank lines are skipped.
//!
//! ```text
//! add <origin> <destination> <distance> <cost>
//! remove <origin> <destination>
//! update <origin> <destination> <distance> <cost>
//! list <origin> [distance|cost]
//! list-all
//! exists <origin> <destination>
//! path <source> <destination> [hour]
//! undo
//! redo
//! history
//! ```

use routegraph_core::bail_parse;
use routegraph_core::error::Result;
use routegraph_core::graph::SortKey;

/// One parsed script operation
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Add {
        origin: String,
        destination: String,
        distance: f64,
        cost: f64,
    },
    Remove {
        origin: String,
        destination: String,
    },
    Update {
        origin: String,
        destination: String,
        distance: f64,
        cost: f64,
    },
    List {
        origin: String,
        sort: Option<SortKey>,
    },
    ListAll,
    Exists {
        origin: String,
        destination: String,
    },
    Path {
        source: String,
        destination: String,
        hour: Option<u8>,
    },
    Undo,
    Redo,
    History,
}

impl Operation {
    /// Script keyword of this operation
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add { .. } => "add",
            Operation::Remove { .. } => "remove",
            Operation::Update { .. } => "update",
            Operation::List { .. } => "list",
            Operation::ListAll => "list-all",
            Operation::Exists { .. } => "exists",
            Operation::Path { .. } => "path",
            Operation::Undo => "undo",
            Operation::Redo => "redo",
            Operation::History => "history",
        }
    }
}

/// An operation with its 1-based source line
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptLine {
    pub line: usize,
    pub op: Operation,
}

/// Parse a whole script. Fails on the first malformed line.
pub fn parse_script(content: &str) -> Result<Vec<ScriptLine>> {
    let mut lines = Vec::new();
    for (index, raw) in content.lines().enumerate() {
        let line = index + 1;
        if let Some(op) = parse_line(line, raw)? {
            lines.push(ScriptLine { line, op });
        }
    }
    Ok(lines)
}

fn parse_line(line: usize, raw: &str) -> Result<Option<Operation>> {
    let text = raw.split('#').next().unwrap_or_default().trim();
    if text.is_empty() {
        return Ok(None);
    }

    let mut words = text.split_whitespace();
    let Some(keyword) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let op = match keyword.to_lowercase().as_str() {
        "add" => {
            expect_args(line, keyword, &args, 4, 4)?;
            Operation::Add {
                origin: args[0].to_string(),
                destination: args[1].to_string(),
                distance: parse_number(line, "distance", args[2])?,
                cost: parse_number(line, "cost", args[3])?,
            }
        }
        "remove" => {
            expect_args(line, keyword, &args, 2, 2)?;
            Operation::Remove {
                origin: args[0].to_string(),
                destination: args[1].to_string(),
            }
        }
        "update" => {
            expect_args(line, keyword, &args, 4, 4)?;
            Operation::Update {
                origin: args[0].to_string(),
                destination: args[1].to_string(),
                distance: parse_number(line, "distance", args[2])?,
                cost: parse_number(line, "cost", args[3])?,
            }
        }
        "list" => {
            expect_args(line, keyword, &args, 1, 2)?;
            let sort = match args.get(1) {
                Some(s) => match s.parse::<SortKey>() {
                    Ok(sort) => Some(sort),
                    Err(e) => bail_parse!(line, "{}", e),
                },
                None => None,
            };
            Operation::List {
                origin: args[0].to_string(),
                sort,
            }
        }
        "list-all" => {
            expect_args(line, keyword, &args, 0, 0)?;
            Operation::ListAll
        }
        "exists" => {
            expect_args(line, keyword, &args, 2, 2)?;
            Operation::Exists {
                origin: args[0].to_string(),
                destination: args[1].to_string(),
            }
        }
        "path" => {
            expect_args(line, keyword, &args, 2, 3)?;
            let hour = match args.get(2) {
                Some(h) => match h.parse::<u8>() {
                    Ok(hour) => Some(hour),
                    Err(_) => bail_parse!(line, "invalid hour '{}' (expected 0-23)", h),
                },
                None => None,
            };
            Operation::Path {
                source: args[0].to_string(),
                destination: args[1].to_string(),
                hour,
            }
        }
        "undo" => {
            expect_args(line, keyword, &args, 0, 0)?;
            Operation::Undo
        }
        "redo" => {
            expect_args(line, keyword, &args, 0, 0)?;
            Operation::Redo
        }
        "history" => {
            expect_args(line, keyword, &args, 0, 0)?;
            Operation::History
        }
        other => bail_parse!(line, "unknown operation '{}'", other),
    };

    Ok(Some(op))
}

fn expect_args(line: usize, keyword: &str, args: &[&str], min: usize, max: usize) -> Result<()> {
    if args.len() < min || args.len() > max {
        let expected = if min == max {
            min.to_string()
        } else {
            format!("{} to {}", min, max)
        };
        bail_parse!(
            line,
            "'{}' expects {} arguments, got {}",
            keyword,
            expected,
            args.len()
        );
    }
    Ok(())
}

fn parse_number(line: usize, field: &str, value: &str) -> Result<f64> {
    match value.parse::<f64>() {
        Ok(number) => Ok(number),
        Err(_) => bail_parse!(line, "invalid {} '{}'", field, value),
    }
}
