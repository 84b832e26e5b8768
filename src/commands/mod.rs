pub mod browsers;
pub mod config;
pub mod open;
pub mod scaffold;
mod theme;

use std::path::PathBuf;

use crate::error::{LaunchpadError, Result};

/// Resolve the project root argument, defaulting to the current directory.
pub(crate) fn resolve_project_root(path: Option<PathBuf>) -> Result<PathBuf> {
    let root = match path {
        Some(p) => PathBuf::from(shellexpand::tilde(&p.display().to_string()).into_owned()),
        None => std::env::current_dir()?,
    };

    if !root.is_dir() {
        return Err(LaunchpadError::ProjectError(format!(
            "project root does not exist: {}",
            root.display()
        )));
    }

    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_project_root_is_an_error() {
        let result = resolve_project_root(Some(PathBuf::from("/path/does/not/exist")));
        assert!(result.is_err());
    }

    #[test]
    fn default_project_root_is_the_current_directory() {
        let root = resolve_project_root(None).unwrap();
        assert!(root.is_dir());
    }
}
