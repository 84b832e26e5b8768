//! Project records.

use std::path::Path;

use serde::Serialize;

/// A project known to the launchpad.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalProject {
    pub project_root: String,
    pub title: String,
}

/// The single project a session is operating on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentProject {
    pub id: String,
    pub title: String,
}

impl CurrentProject {
    pub fn new(title: &str) -> Self {
        CurrentProject {
            id: format!("Project:{title}"),
            title: title.to_string(),
        }
    }
}

/// Derive a project title from its root path, e.g. "/home/dev/todos" ->
/// "todos".
pub fn title_from_root(root: &Path) -> String {
    root.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string())
}
