//! `routegraph check` - parse a script without executing it

use routegraph_core::error::Result;

use crate::cli::{Cli, OutputFormat};
use crate::commands::script::parse_script;

pub fn execute(cli: &Cli, content: &str) -> Result<()> {
    let lines = parse_script(content)?;

    match cli.format {
        OutputFormat::Json => {
            let ops: Vec<serde_json::Value> = lines
                .iter()
                .map(|l| serde_json::json!({ "line": l.line, "op": l.op.name() }))
                .collect();
            let output = serde_json::json!({
                "ok": true,
                "operations": lines.len(),
                "lines": ops,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Script OK: {} operations", lines.len());
            }
        }
    }

    Ok(())
}
