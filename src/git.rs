use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::str::FromStr;
use std::sync::OnceLock;

use anyhow::{bail, Context, Error, Result};
use regex::Regex;

/// An `owner/repo` slug naming the template repository; each entity
/// kind lives on its own branch of it.
pub(crate) struct Source {
    pub(crate) owner: String,
    pub(crate) repo: String,
}

impl Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "https://github.com/{}/{}.git", self.owner, self.repo)
    }
}

impl FromStr for Source {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let pattern =
            PATTERN.get_or_init(|| Regex::new(r"^([a-zA-Z0-9._-]+)\/([a-zA-Z0-9._-]+)$").unwrap());
        if let Some(captures) = pattern.captures(s) {
            let (_, [owner, repo]) = captures.extract();
            return Ok(Self {
                owner: owner.to_string(),
                repo: repo.to_string(),
            });
        }
        bail!("invalid template repository slug: '{s}'")
    }
}

impl Source {
    /// Shallow-clone the given branch into the scratch directory and
    /// return the checkout path.
    pub(crate) fn fetch(&self, branch: &str, dst: impl AsRef<Path>) -> Result<PathBuf> {
        if !check_git_installed()? {
            bail!("git is not installed")
        }

        let dst = dst.as_ref().join(&self.repo);
        let output = Command::new("git")
            .arg("clone")
            .arg("--quiet")
            .arg("--depth")
            .arg("1")
            .arg("--branch")
            .arg(branch)
            .arg(self.to_string())
            .arg(&dst)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .context("failed to execute git clone command")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!(
                "failed to fetch branch '{branch}' from {self}: {}",
                stderr.trim()
            )
        }

        Ok(dst)
    }
}

fn check_git_installed() -> Result<bool> {
    let check = Command::new("git")
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .context("failed to check if git is installed")?;
    Ok(check.success())
}
