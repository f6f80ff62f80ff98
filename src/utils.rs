use std::path::{Path, PathBuf};

use memchr::memchr;
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    MiniJinja(#[from] minijinja::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("template bundle is missing '{0}'")]
    MissingBundleFile(String),
    #[error("'{}' already exists, choose another name", .0.display())]
    EntityExists(PathBuf),
    #[error("manifest has no 'pages' array")]
    MalformedManifest,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Serialize a JSON document with tab indentation and a trailing
/// newline, the layout the generated project files use.
pub fn to_tab_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    let mut contents = String::from_utf8(buf).expect("serialized json should be utf-8");
    contents.push('\n');
    Ok(contents)
}

pub(crate) fn is_binary_buf(buf: &[u8]) -> bool {
    memchr(0u8, buf).is_some()
}

pub(crate) fn path_to_string<P: AsRef<Path>>(path: P) -> String {
    path.as_ref()
        .to_str()
        .expect("path encoding should be utf-8")
        .to_string()
}
