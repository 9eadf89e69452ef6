use serde_json::{json, Value};
use std::panic::Location;
use std::process::Command;

/// Metadata used to build a provenance record.
pub struct Payload {
    pub params: Value,
    pub outputs: Vec<String>,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            outputs: Vec::new(),
        }
    }
}

/// Provenance record: git commit, crate version, callsite, params, and outputs.
#[track_caller]
pub fn record(payload: Payload) -> Value {
    let callsite = Location::caller();
    json!({
        "code_rev": current_git_rev(),
        "version": pointset::VERSION,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "params": payload.params,
        "outputs": payload.outputs
    })
}

pub fn current_git_rev() -> String {
    if let Some(from_env) = option_env!("GIT_COMMIT") {
        if !from_env.is_empty() {
            return from_env.to_string();
        }
    }
    if let Ok(env_override) = std::env::var("GIT_COMMIT") {
        if !env_override.is_empty() {
            return env_override;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout)
                    .ok()
                    .map(|s| s.trim().to_string())
            } else {
                None
            }
        })
        .unwrap_or_else(|| "unknown".to_string())
}
