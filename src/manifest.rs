use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::utils::{self, Error, Result};

const MANIFEST_FILE: &str = "app.json";

/// The project-wide `app.json`, held as a parsed document so a rewrite
/// preserves every field and the order they appeared in.
pub struct Manifest {
    path: PathBuf,
    document: Value,
}

impl Manifest {
    pub fn load(root: impl AsRef<Path>) -> Result<Self> {
        let path = root.as_ref().join(MANIFEST_FILE);
        let contents = fs::read_to_string(&path)?;
        let document = serde_json::from_str(&contents)?;
        Ok(Self { path, document })
    }

    /// Append a logical page path to the `pages` list unless it is
    /// already registered. Returns whether an entry was added.
    pub fn register(&mut self, logical_path: &str) -> Result<bool> {
        let pages = self
            .document
            .get_mut("pages")
            .and_then(Value::as_array_mut)
            .ok_or(Error::MalformedManifest)?;
        let entry = Value::from(logical_path);
        if pages.contains(&entry) {
            return Ok(false);
        }
        pages.push(entry);
        Ok(true)
    }

    pub fn save(&self) -> Result<()> {
        fs::write(&self.path, utils::to_tab_json(&self.document)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn seed(contents: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(MANIFEST_FILE), contents).unwrap();
        dir
    }

    #[test]
    fn registers_a_new_page_once() {
        let dir = seed("{\"pages\": [\"pages/index/index\"]}");
        let mut manifest = Manifest::load(dir.path()).unwrap();
        assert!(manifest.register("pages/home/home").unwrap());
        assert!(!manifest.register("pages/home/home").unwrap());
        manifest.save().unwrap();

        let saved = fs::read_to_string(dir.path().join(MANIFEST_FILE)).unwrap();
        assert_eq!(saved.matches("pages/home/home").count(), 1);
    }

    #[test]
    fn preserves_unrelated_fields_and_their_order() {
        let dir = seed(
            "{\"window\": {\"navigationBarTitleText\": \"demo\"}, \"pages\": [], \"style\": \"v2\"}",
        );
        let mut manifest = Manifest::load(dir.path()).unwrap();
        manifest.register("pages/home/home").unwrap();
        manifest.save().unwrap();

        let saved = fs::read_to_string(dir.path().join(MANIFEST_FILE)).unwrap();
        assert_eq!(
            saved,
            "{\n\t\"window\": {\n\t\t\"navigationBarTitleText\": \"demo\"\n\t},\n\t\"pages\": [\n\t\t\"pages/home/home\"\n\t],\n\t\"style\": \"v2\"\n}\n"
        );
    }

    #[test]
    fn keeps_existing_entries_in_order() {
        let dir = seed("{\"pages\": [\"pages/b/b\", \"pages/a/a\"]}");
        let mut manifest = Manifest::load(dir.path()).unwrap();
        manifest.register("pages/c/c").unwrap();
        let pages = manifest.document["pages"].as_array().unwrap();
        assert_eq!(
            pages.iter().map(|p| p.as_str().unwrap()).collect::<Vec<_>>(),
            ["pages/b/b", "pages/a/a", "pages/c/c"]
        );
    }

    #[test]
    fn missing_pages_array_is_an_error() {
        let dir = seed("{\"window\": {}}");
        let mut manifest = Manifest::load(dir.path()).unwrap();
        let err = manifest.register("pages/home/home").unwrap_err();
        assert!(matches!(err, Error::MalformedManifest));
    }
}
