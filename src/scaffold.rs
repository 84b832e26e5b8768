//! Scaffolded spec files: the wire-shaped file descriptors and the
//! integration-spec template writer.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;

/// Outcome of scaffolding a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaffoldStatus {
    Valid,
    Skipped,
    Error,
}

/// Path and content metadata for a generated file. camelCase field names
/// are part of the wire contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileParts {
    pub id: String,
    pub absolute: String,
    pub relative: String,
    pub name: String,
    pub file_name: String,
    pub base_name: String,
    pub file_extension: String,
    pub contents: String,
}

/// A generated test-spec file descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaffoldedFile {
    pub status: ScaffoldStatus,
    pub description: String,
    pub file: FileParts,
}

/// Relative location of the scaffolded example integration spec.
pub const INTEGRATION_SPEC_RELATIVE: &str = "cypress/integration/basic/todo.cy.js";

pub const INTEGRATION_TEMPLATE: &str = "\
describe('Todo Spec', () => {
  it('adds a todo', () => {
    // TODO
  })
})
";

/// Opaque file identity used in wire payloads.
fn file_id(absolute: &str) -> String {
    format!("Spec:{absolute}")
}

/// Write the example integration spec into the project, returning its
/// descriptor. An already-present file is left alone and reported as
/// skipped.
pub fn scaffold_integration(project_root: &Path) -> Result<Vec<ScaffoldedFile>> {
    let absolute = project_root.join(INTEGRATION_SPEC_RELATIVE);

    let status = if absolute.exists() {
        ScaffoldStatus::Skipped
    } else {
        if let Some(parent) = absolute.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&absolute, INTEGRATION_TEMPLATE)?;
        ScaffoldStatus::Valid
    };

    let absolute = absolute.display().to_string();

    Ok(vec![ScaffoldedFile {
        status,
        description: "Generated spec".to_string(),
        file: FileParts {
            id: file_id(&absolute),
            absolute,
            relative: INTEGRATION_SPEC_RELATIVE.to_string(),
            name: "basic/todo.cy.js".to_string(),
            file_name: "todo".to_string(),
            base_name: "todo.cy.js".to_string(),
            file_extension: ".js".to_string(),
            contents: INTEGRATION_TEMPLATE.to_string(),
        },
    }])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaffolds_the_integration_spec_once() {
        let dir = tempfile::tempdir().unwrap();

        let first = scaffold_integration(dir.path()).unwrap();
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].status, ScaffoldStatus::Valid);
        assert!(!first[0].file.contents.is_empty());

        let written = dir.path().join(INTEGRATION_SPEC_RELATIVE);
        assert_eq!(fs::read_to_string(&written).unwrap(), INTEGRATION_TEMPLATE);

        // Second run must not overwrite
        let second = scaffold_integration(dir.path()).unwrap();
        assert_eq!(second[0].status, ScaffoldStatus::Skipped);
    }

    #[test]
    fn descriptor_serializes_with_wire_field_names() {
        let dir = tempfile::tempdir().unwrap();
        let files = scaffold_integration(dir.path()).unwrap();

        let json = serde_json::to_value(&files[0]).unwrap();
        assert_eq!(json["status"], "valid");
        assert_eq!(json["file"]["fileName"], "todo");
        assert_eq!(json["file"]["baseName"], "todo.cy.js");
        assert_eq!(json["file"]["fileExtension"], ".js");
        assert!(json["file"]["id"].as_str().unwrap().starts_with("Spec:"));
    }
}
