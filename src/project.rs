use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::request::Kind;
use crate::utils::Result;

/// Present at the root of every initialized mini-program project; used
/// only as an existence probe.
pub const SENTINEL: &str = "sitemap.json";

/// Resolved once per process: the project root and the two conventional
/// entity directories beneath it.
pub struct ProjectLayout {
    root: PathBuf,
    pages: PathBuf,
    components: PathBuf,
}

impl ProjectLayout {
    pub fn locate() -> Result<Self> {
        Ok(Self::at(env::current_dir()?))
    }

    pub fn at(root: PathBuf) -> Self {
        let pages = root.join("pages");
        let components = root.join("components");
        Self {
            root,
            pages,
            components,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn dir_for(&self, kind: Kind) -> &Path {
        match kind {
            Kind::Page => &self.pages,
            Kind::Component => &self.components,
        }
    }

    /// Whether the root carries the sentinel config file of a
    /// mini-program project.
    pub fn has_sentinel(&self) -> bool {
        self.root.join(SENTINEL).exists()
    }

    /// Create both entity directories, tolerating ones that already
    /// exist.
    pub fn ensure_dirs(&self) -> Result<()> {
        fs::create_dir_all(&self.pages)?;
        fs::create_dir_all(&self.components)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn sentinel_probe() {
        let dir = TempDir::new().unwrap();
        let layout = ProjectLayout::at(dir.path().to_path_buf());
        assert!(!layout.has_sentinel());
        fs::write(dir.path().join(SENTINEL), "{}").unwrap();
        assert!(layout.has_sentinel());
    }

    #[test]
    fn ensure_dirs_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let layout = ProjectLayout::at(dir.path().to_path_buf());
        layout.ensure_dirs().unwrap();
        layout.ensure_dirs().unwrap();
        assert!(layout.dir_for(Kind::Page).is_dir());
        assert!(layout.dir_for(Kind::Component).is_dir());
    }
}
