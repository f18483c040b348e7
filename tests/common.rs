use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

pub fn routegraph() -> Command {
    cargo_bin_cmd!("routegraph")
}

/// Three routes where the two-hop path A -> B -> C (cost 10) beats the
/// direct route A -> C (cost 11)
pub const TRIANGLE: &str = "\
add A B 2 6
add B C 1.2 4
add A C 3.5 11
";

#[allow(dead_code)]
pub fn write_script(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write script");
    path
}

/// Parse every stdout line as JSON
#[allow(dead_code)]
pub fn json_lines(stdout: &[u8]) -> Vec<serde_json::Value> {
    String::from_utf8_lossy(stdout)
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).expect("Failed to parse JSON line"))
        .collect()
}
