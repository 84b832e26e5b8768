//! Mock mutation resolver used by the integration tests.
//!
//! Emulates the backend's mutation handlers against an in-memory context so
//! tests can drive the launchpad flows without a server. Dispatch is a
//! closed enum, one variant per mutation; side effects are confined to the
//! [`TestContext`] passed in. Only [`Mutation::GenerateSpecFromSource`] can
//! fail, when no project is active.

use std::path::{Path, PathBuf};

use crate::browser::{BrowserFamily, FoundBrowser};
use crate::config::Preferences;
use crate::error::{LaunchpadError, Result};
use crate::project::{title_from_root, CurrentProject, GlobalProject};
use crate::scaffold::{FileParts, ScaffoldStatus, ScaffoldedFile};

/// Root under which test fixture projects live.
const TEST_PROJECT_ROOT: &str = "/usr/local/dev/projects";

/// Per-test mutable state. Created fresh per test case, mutated by
/// [`resolve`] calls, discarded at test end.
#[derive(Debug, Clone)]
pub struct TestContext {
    pub projects: Vec<GlobalProject>,
    pub current_project: Option<CurrentProject>,
    pub browsers: Vec<FoundBrowser>,
}

impl TestContext {
    pub fn new() -> Self {
        TestContext {
            projects: Vec::new(),
            current_project: None,
            browsers: test_browsers(),
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// A backend mutation, one variant per operation the real server exposes.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    AddProject { path: String },
    SetCurrentProject { path: String },
    ClearCurrentProject,
    RemoveProject { path: String },
    HideBrowserWindow,
    SetProjectPreferences { preferences: Preferences },
    GenerateSpecFromSource,
    ReconfigureProject,
    ResetWizard,
    ScaffoldIntegration,
    MatchesSpecPattern { spec_file: String },
}

/// Payload returned by a resolved mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutput {
    /// The empty-object payload.
    Empty,
    Bool(bool),
    ScaffoldedFile(ScaffoldedFile),
    ScaffoldedFiles(Vec<ScaffoldedFile>),
}

/// Resolve a mutation against the context, mirroring the backend contract.
pub fn resolve(ctx: &mut TestContext, mutation: Mutation) -> Result<MutationOutput> {
    match mutation {
        Mutation::AddProject { path } => {
            if path.is_empty() {
                return Ok(MutationOutput::Empty);
            }

            let title = title_from_root(Path::new(&path));
            ctx.projects.push(test_global_project(&title));

            Ok(MutationOutput::Empty)
        }
        Mutation::SetCurrentProject { path } => {
            let project = ctx.projects.iter().find(|p| p.project_root == path);
            ctx.current_project = project.map(|p| CurrentProject::new(&p.title));

            Ok(MutationOutput::Empty)
        }
        Mutation::ClearCurrentProject => {
            ctx.current_project = None;

            Ok(MutationOutput::Empty)
        }
        Mutation::RemoveProject { path } => {
            ctx.projects.retain(|p| p.project_root != path);

            Ok(MutationOutput::Empty)
        }
        Mutation::HideBrowserWindow => Ok(MutationOutput::Bool(true)),
        Mutation::SetProjectPreferences { .. } => Ok(MutationOutput::Empty),
        Mutation::GenerateSpecFromSource => {
            if ctx.current_project.is_none() {
                return Err(LaunchpadError::NoActiveProject);
            }

            Ok(MutationOutput::ScaffoldedFile(generated_spec_fixture()))
        }
        Mutation::ReconfigureProject => Ok(MutationOutput::Bool(true)),
        Mutation::ResetWizard => Ok(MutationOutput::Bool(true)),
        Mutation::ScaffoldIntegration => Ok(MutationOutput::ScaffoldedFiles(vec![
            integration_spec_fixture(),
        ])),
        Mutation::MatchesSpecPattern { .. } => Ok(MutationOutput::Bool(true)),
    }
}

/// Build the global-project fixture for a title.
pub fn test_global_project(title: &str) -> GlobalProject {
    GlobalProject {
        project_root: format!("{TEST_PROJECT_ROOT}/{title}"),
        title: title.to_string(),
    }
}

/// The canned browser list the choose-a-browser tests run against.
pub fn test_browsers() -> Vec<FoundBrowser> {
    let browser = |id: &str,
                   name: &str,
                   display_name: &str,
                   family: BrowserFamily,
                   major: u32,
                   version: &str,
                   is_selected: bool| FoundBrowser {
        id: id.to_string(),
        name: name.to_string(),
        display_name: display_name.to_string(),
        family,
        channel: "stable".to_string(),
        path: PathBuf::from(format!("/test/{name}/path")),
        version: version.to_string(),
        major_version: Some(major),
        disabled: false,
        is_selected,
    };

    vec![
        browser("1", "chrome", "Chrome", BrowserFamily::Chromium, 1, "1.2.333.445", true),
        browser("2", "firefox", "Firefox", BrowserFamily::Firefox, 2, "2.3.444", false),
        browser("3", "electron", "Electron", BrowserFamily::Chromium, 3, "3.4.555.66", false),
        browser("4", "edge", "Edge", BrowserFamily::Chromium, 4, "4.5.666.77", false),
    ]
}

/// Canned payload for a spec generated from a component source file.
/// Literal fixture data; the id's encoding carries no meaning.
pub fn generated_spec_fixture() -> ScaffoldedFile {
    ScaffoldedFile {
        status: ScaffoldStatus::Valid,
        description: "Generated Spec".to_string(),
        file: FileParts {
            id: "U3BlYzovVXNlcnMvbGFjaGxhbi9jb2RlL3dvcmsvY3lwcmVzczUvcGFja2FnZXMvYXBwL3NyYy9CYXNpYy5zcGVjLnRzeA==".to_string(),
            absolute: "/Users/lachlan/code/work/cypress5/packages/app/src/Basic.spec.tsx".to_string(),
            relative: "app/src/Basic.spec.tsx".to_string(),
            name: "Basic".to_string(),
            file_name: "Basic.spec.tsx".to_string(),
            base_name: "Basic".to_string(),
            file_extension: "tsx".to_string(),
            contents: "it('should do stuff', () => {})".to_string(),
        },
    }
}

/// Canned payload for a scaffolded example integration spec.
pub fn integration_spec_fixture() -> ScaffoldedFile {
    ScaffoldedFile {
        status: ScaffoldStatus::Valid,
        description: "Generated spec".to_string(),
        file: FileParts {
            id: "U3BlYzovVXNlcnMvbGFjaGxhbi9jb2RlL3dvcmsvY3lwcmVzczUvcGFja2FnZXMvYXBwL3NyYy9CYXNpYy5zcGVjLnRzeA==".to_string(),
            absolute: "/Users/lachlan/code/work/cypress/packages/app/cypress/integration/basic/todo.cy.js".to_string(),
            relative: "cypress/integration/basic/todo.cy.js".to_string(),
            name: "basic/todo.cy.js".to_string(),
            file_name: "todo".to_string(),
            base_name: "todo.cy.js".to_string(),
            file_extension: ".js".to_string(),
            contents: "\n          describe('Todo Spec', () => {\n            it('adds a todo', () => {\n              // TODO\n            })\n          })".to_string(),
        },
    }
}
