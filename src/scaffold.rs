use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::project::ProjectLayout;
use crate::render::RenderedArtifact;
use crate::request::CreationRequest;
use crate::utils::{self, Error, Result};

/// Write the rendered artifact into the project tree and return the
/// entity directory. The entity directory is created non-recursively so
/// a name taken between validation and write fails fast instead of
/// being overwritten.
pub fn write_entity(
    layout: &ProjectLayout,
    request: &CreationRequest,
    artifact: &RenderedArtifact,
) -> Result<PathBuf> {
    let parent = layout.dir_for(request.kind);
    fs::create_dir_all(parent)?;

    let target = parent.join(&request.name);
    fs::create_dir(&target).map_err(|err| {
        if err.kind() == ErrorKind::AlreadyExists {
            Error::EntityExists(target.clone())
        } else {
            Error::Io(err)
        }
    })?;

    let name = &request.name;
    fs::write(target.join(format!("{name}.js")), &artifact.script)?;
    fs::write(target.join(format!("{name}.wxml")), &artifact.markup)?;
    fs::write(target.join(format!("{name}.wxss")), &artifact.style)?;
    fs::write(
        target.join(format!("{name}.json")),
        utils::to_tab_json(&artifact.config)?,
    )?;

    Ok(target)
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tempfile::TempDir;

    use crate::request::Kind;

    use super::*;

    fn artifact() -> RenderedArtifact {
        RenderedArtifact {
            script: String::from("Page({})"),
            markup: String::from("<view>home</view>"),
            style: String::from(".page {}"),
            config: json!({"usingComponents": {}}),
        }
    }

    fn request(kind: Kind) -> CreationRequest {
        CreationRequest {
            kind,
            name: String::from("home"),
            options: Vec::new(),
        }
    }

    #[test]
    fn writes_exactly_four_files() {
        let dir = TempDir::new().unwrap();
        let layout = ProjectLayout::at(dir.path().to_path_buf());
        layout.ensure_dirs().unwrap();

        let target = write_entity(&layout, &request(Kind::Page), &artifact()).unwrap();
        assert_eq!(target, layout.dir_for(Kind::Page).join("home"));

        let mut names = fs::read_dir(&target)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().into_string().unwrap())
            .collect::<Vec<_>>();
        names.sort();
        assert_eq!(names, ["home.js", "home.json", "home.wxml", "home.wxss"]);
    }

    #[test]
    fn config_file_is_tab_indented() {
        let dir = TempDir::new().unwrap();
        let layout = ProjectLayout::at(dir.path().to_path_buf());
        layout.ensure_dirs().unwrap();

        let target = write_entity(&layout, &request(Kind::Page), &artifact()).unwrap();
        let config = fs::read_to_string(target.join("home.json")).unwrap();
        assert_eq!(config, "{\n\t\"usingComponents\": {}\n}\n");
    }

    #[test]
    fn refuses_an_existing_entity_directory() {
        let dir = TempDir::new().unwrap();
        let layout = ProjectLayout::at(dir.path().to_path_buf());
        layout.ensure_dirs().unwrap();
        fs::create_dir(layout.dir_for(Kind::Component).join("home")).unwrap();

        let err = write_entity(&layout, &request(Kind::Component), &artifact()).unwrap_err();
        assert!(matches!(err, Error::EntityExists(_)));
        // nothing spilled next to the existing directory
        assert_eq!(fs::read_dir(layout.dir_for(Kind::Component).join("home")).unwrap().count(), 0);
    }

    #[test]
    fn creates_a_missing_kind_directory() {
        let dir = TempDir::new().unwrap();
        let layout = ProjectLayout::at(dir.path().to_path_buf());

        write_entity(&layout, &request(Kind::Page), &artifact()).unwrap();
        assert!(layout.dir_for(Kind::Page).join("home").join("home.js").is_file());
    }
}
