use std::path::Path;
use std::process::Command;

use anyhow::{Result, bail};

/// Check that a usable Git binary is on PATH.
///
/// Wraps `git --version`. Returns an actionable error if git cannot be
/// spawned at all.
pub fn check_git_available() -> Result<()> {
    match Command::new("git").arg("--version").output() {
        Ok(output) if output.status.success() => Ok(()),
        Ok(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("git --version failed:\n{}", stderr)
        }
        Err(e) => bail!("Could not run git: {}. Is Git installed and on PATH?", e),
    }
}

/// List every commit touching `file`, newest first, one commit per line as
/// `<commit-hash> <parent-hashes...>`.
///
/// Wraps `git log --pretty=format:%H %P -- <file>` run inside `repo`.
/// On failure, returns an error containing git's stderr output.
pub fn log_parents(repo: &Path, file: &str) -> Result<String> {
    let output = Command::new("git")
        .current_dir(repo)
        .args(["log", "--pretty=format:%H %P", "--", file])
        .output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("git log failed:\n{}", stderr);
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(test)]
#[path = "git_commands_test.rs"]
mod tests;
