use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Datelike, Local};
use minijinja::{context, Environment};
use serde_json::Value;
use walkdir::WalkDir;

use crate::request::{CreationRequest, PageOption};
use crate::utils::{self, Error, Result};

const SCRIPT_TEMPLATE: &str = "js.jinja";
const MARKUP_TEMPLATE: &str = "wxml.jinja";
const STYLE_TEMPLATE: &str = "wxss.jinja";
const CONFIG_SEED: &str = "temp.json";

/// Everything an entity is made of, rendered in memory before any of it
/// touches the project tree.
#[derive(Debug)]
pub struct RenderedArtifact {
    pub script: String,
    pub markup: String,
    pub style: String,
    pub config: Value,
}

/// Renders a fetched template bundle. Every UTF-8 text file in the
/// bundle is registered under its relative path; binary files are
/// skipped.
pub struct Renderer {
    root: PathBuf,
    environment: Environment<'static>,
}

impl Renderer {
    pub fn load(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        let mut environment = Environment::new();
        environment.add_function("year", || Local::now().year().to_string());

        let walker = WalkDir::new(&root).sort_by_file_name();
        for entry in walker {
            let entry = entry.map_err(|err| err.into_io_error().unwrap())?;
            if !entry.file_type().is_file() {
                continue;
            }
            let buf = fs::read(entry.path())?;
            if utils::is_binary_buf(&buf) {
                continue;
            }
            let name = utils::path_to_string(entry.path().strip_prefix(&root).unwrap());
            let source = String::from_utf8(buf).expect("file encoding should be utf-8");
            environment.add_template_owned(name, source)?;
        }

        Ok(Self { root, environment })
    }

    pub fn render(&self, request: &CreationRequest) -> Result<RenderedArtifact> {
        let name = request.name.as_str();
        let hooks = request
            .options
            .iter()
            .map(|option| option.hook())
            .collect::<Vec<_>>();

        let script = self.environment.get_template(SCRIPT_TEMPLATE)?.render(context! {
            name,
            shareTitle => name,
            sharePath => format!("/pages/{name}/{name}"),
            pageInit => hooks,
        })?;
        let script = strip_render_wrapper(&script).to_string();

        let markup = self
            .environment
            .get_template(MARKUP_TEMPLATE)?
            .render(context! { name })?;
        let style = self
            .environment
            .get_template(STYLE_TEMPLATE)?
            .render(context! {})?;

        let mut config = self.base_config()?;
        apply_options(&mut config, &request.options);

        Ok(RenderedArtifact {
            script,
            markup,
            style,
            config,
        })
    }

    fn base_config(&self) -> Result<Value> {
        let path = self.root.join(CONFIG_SEED);
        let contents = fs::read_to_string(&path).map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                Error::MissingBundleFile(String::from(CONFIG_SEED))
            } else {
                err.into()
            }
        })?;
        Ok(serde_json::from_str(&contents)?)
    }
}

/// The render pipeline wraps script output in an extraneous enclosing
/// tag; strip it when present and pass everything else through.
pub fn strip_render_wrapper(content: &str) -> &str {
    let mut content = content;
    let bytes = content.as_bytes();
    if bytes.len() >= 5 && bytes[..5].eq_ignore_ascii_case(b"<div>") {
        content = &content[5..];
    }
    let bytes = content.as_bytes();
    if bytes.len() >= 6 && bytes[bytes.len() - 6..].eq_ignore_ascii_case(b"</div>") {
        content = &content[..content.len() - 6];
    }
    content
}

/// Fold the selected page options into the base config document.
pub fn apply_options(config: &mut Value, options: &[PageOption]) {
    let Some(doc) = config.as_object_mut() else {
        return;
    };
    for option in options {
        match option {
            PageOption::PullDownRefresh => {
                doc.insert(String::from("enablePullDownRefresh"), Value::Bool(true));
            }
            PageOption::ReachBottom => {
                // the published template sets a boolean here, not a pixel
                // distance; kept as observed
                doc.insert(String::from("onReachBottomDistance"), Value::Bool(true));
            }
            PageOption::Share => {}
        }
    }
}
