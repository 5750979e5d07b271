//! Process execution utilities.

use huddle_types::Result;
use std::collections::HashMap;
use std::path::Path;

/// Execute a command asynchronously in a working directory with extra
/// environment variables.
pub async fn run_async_in(
    dir: impl AsRef<Path>,
    command: &str,
    args: &[&str],
    env_vars: &HashMap<String, String>,
) -> Result<(String, i32, String)> {
    let mut cmd = tokio::process::Command::new(command);
    cmd.current_dir(dir.as_ref()).args(args);

    for (key, value) in env_vars {
        cmd.env(key, value);
    }

    let output = cmd.output().await?;

    Ok((
        String::from_utf8_lossy(&output.stdout).to_string(),
        output.status.code().unwrap_or(-1),
        String::from_utf8_lossy(&output.stderr).to_string(),
    ))
}
