//! Launching the selected browser.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tokio::process::{Child, Command};

use crate::error::{LaunchpadError, Result};

/// The active testing mode for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestingType {
    E2e,
    Component,
}

impl TestingType {
    pub fn as_str(self) -> &'static str {
        match self {
            TestingType::E2e => "e2e",
            TestingType::Component => "component",
        }
    }
}

impl fmt::Display for TestingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters carried by a browser launch. Field names are a wire contract
/// (`browserPath`, `testingType`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchRequest {
    pub browser_path: PathBuf,
    pub testing_type: TestingType,
}

/// Spawn the browser described by the request. The testing mode is handed
/// to the child through its environment.
pub async fn launch(request: &LaunchRequest) -> Result<Child> {
    tracing::debug!(
        path = %request.browser_path.display(),
        mode = request.testing_type.as_str(),
        "launching browser"
    );

    Command::new(&request.browser_path)
        .env("LAUNCHPAD_TESTING_TYPE", request.testing_type.as_str())
        .spawn()
        .map_err(|e| {
            LaunchpadError::LaunchError(format!("{}: {}", request.browser_path.display(), e))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn testing_type_string_forms() {
        assert_eq!(TestingType::E2e.as_str(), "e2e");
        assert_eq!(TestingType::Component.as_str(), "component");
        assert_eq!(TestingType::E2e.to_string(), "e2e");
    }

    #[test]
    fn launch_request_serializes_with_wire_field_names() {
        let request = LaunchRequest {
            browser_path: PathBuf::from("/test/chrome/path"),
            testing_type: TestingType::E2e,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["browserPath"], "/test/chrome/path");
        assert_eq!(json["testingType"], "e2e");
    }

    #[tokio::test]
    async fn launch_surfaces_spawn_failure() {
        let request = LaunchRequest {
            browser_path: PathBuf::from("/path/does/not/exist"),
            testing_type: TestingType::E2e,
        };

        let err = launch(&request).await.unwrap_err();
        assert!(err.to_string().contains("/path/does/not/exist"));
    }
}
