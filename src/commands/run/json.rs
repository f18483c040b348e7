use routegraph_core::error::{Result, RouteError};
use routegraph_core::graph::PathCost;

use super::Outcome;
use crate::commands::script::Operation;

/// Output a successful operation as one JSON line
pub fn print_outcome(line: usize, op: &Operation, outcome: &Outcome) -> Result<()> {
    let result = match outcome {
        Outcome::Added(key) | Outcome::Removed(key) | Outcome::Updated(key) => {
            serde_json::to_value(key)?
        }
        Outcome::Listed {
            origin,
            sort,
            routes,
        } => serde_json::json!({
            "origin": origin,
            "sort": sort,
            "routes": routes,
        }),
        Outcome::ListedAll(all) => serde_json::to_value(all)?,
        Outcome::Exists { key, exists } => serde_json::json!({
            "origin": key.origin,
            "destination": key.destination,
            "exists": exists,
        }),
        Outcome::Path(result) => {
            let mut value = serde_json::to_value(result)?;
            if let Some(obj_mut) = value.as_object_mut() {
                obj_mut.insert("cost".to_string(), serde_json::to_value(result.cost())?);
            }
            value
        }
        Outcome::Undone(command) | Outcome::Redone(command) => serde_json::to_value(command)?,
        Outcome::History(entries) => serde_json::to_value(entries)?,
    };

    let output = serde_json::json!({
        "line": line,
        "op": op.name(),
        "ok": true,
        "result": result,
    });
    println!("{}", serde_json::to_string(&output)?);
    Ok(())
}

/// Output a rejected operation as one JSON line
pub fn print_failure(line: usize, op: &Operation, err: &RouteError) -> Result<()> {
    let mut output = serde_json::json!({
        "line": line,
        "op": op.name(),
        "ok": false,
        "error": {
            "code": err.exit_code() as i32,
            "type": err.error_type(),
            "message": err.to_string(),
        },
    });

    if let RouteError::Path(path_err) = err {
        if let Some(obj_mut) = output.as_object_mut() {
            obj_mut.insert(
                "cost".to_string(),
                serde_json::to_value(PathCost::Unreachable)?,
            );
            if let Some(trace) = path_err.trace() {
                obj_mut.insert("trace".to_string(), serde_json::to_value(trace)?);
            }
        }
    }

    println!("{}", serde_json::to_string(&output)?);
    Ok(())
}
