use std::fmt::Display;
use std::path::Path;

/// The two scaffoldable entity kinds. Each kind knows the template
/// branch it is generated from and the directory it lands in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    Page,
    Component,
}

impl Kind {
    pub const ALL: [Kind; 2] = [Kind::Page, Kind::Component];

    /// Branch of the template repository holding this kind's bundle.
    pub fn branch(self) -> &'static str {
        match self {
            Self::Page => "pageTemplate",
            Self::Component => "componentTemplate",
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Page => write!(f, "page"),
            Self::Component => write!(f, "component"),
        }
    }
}

/// Page initialization options offered by the multi-select prompt.
/// Components take no options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageOption {
    Share,
    PullDownRefresh,
    ReachBottom,
}

impl PageOption {
    pub const ALL: [PageOption; 3] = [
        PageOption::Share,
        PageOption::PullDownRefresh,
        PageOption::ReachBottom,
    ];

    /// The lifecycle hook the template stubs out for this option.
    pub fn hook(self) -> &'static str {
        match self {
            Self::Share => "onShareAppMessage",
            Self::PullDownRefresh => "onPullDownRefresh",
            Self::ReachBottom => "onReachBottom",
        }
    }

    pub fn default_selected(self) -> bool {
        matches!(self, Self::PullDownRefresh)
    }
}

impl Display for PageOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Share => write!(f, "share app message"),
            Self::PullDownRefresh => write!(f, "pull-down refresh"),
            Self::ReachBottom => write!(f, "reach bottom"),
        }
    }
}

/// A validated creation request, immutable once collected.
pub struct CreationRequest {
    pub kind: Kind,
    pub name: String,
    pub options: Vec<PageOption>,
}

impl CreationRequest {
    /// The manifest-relative identifier registered for a new page.
    pub fn logical_path(&self) -> String {
        format!("pages/{0}/{0}", self.name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum NameError {
    #[error("name required")]
    Empty,
    #[error("already exists, choose another name")]
    Taken,
}

/// Validate a candidate entity name against its kind directory,
/// returning the trimmed name. The existence probe is an exact path
/// match against the sibling that would be created.
pub fn validate_name(kind_dir: &Path, name: &str) -> Result<String, NameError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    if kind_dir.join(name).exists() {
        return Err(NameError::Taken);
    }
    Ok(name.to_string())
}
