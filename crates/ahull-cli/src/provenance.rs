use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What a command records next to each table it writes.
pub struct Payload {
    pub params: Value,
    /// Result counts; `null` when the command has none.
    pub summary: Value,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            summary: Value::Null,
        }
    }
}

/// Write `<stem>.provenance.json` next to `table` with the git commit,
/// callsite, crate version, params and summary.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(table: P, payload: Payload) -> Result<PathBuf> {
    let table = table.as_ref();
    let path = provenance_path(table);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let callsite = Location::caller();
    let doc = json!({
        "code_rev": current_git_rev(),
        "version": ahull::VERSION,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "params": payload.params,
        "summary": payload.summary,
        "outputs": [table.to_string_lossy()]
    });
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(path = %path.display(), "provenance written");
    Ok(path)
}

fn provenance_path(table: &Path) -> PathBuf {
    let mut name = table
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("table"));
    name.push(".provenance.json");
    table.with_file_name(name)
}

pub fn current_git_rev() -> String {
    if let Some(rev) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return rev.to_string();
    }
    if let Ok(rev) = std::env::var("GIT_COMMIT") {
        if !rev.is_empty() {
            return rev;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
