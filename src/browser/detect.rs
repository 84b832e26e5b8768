//! Browser detection against a curated candidate table.
//!
//! Each candidate maps a logical browser name to the executable names it
//! ships under. Detection resolves those on PATH, probes `--version`, and
//! flags installs older than the minimum supported major version as
//! disabled (listed but not selectable).

use std::path::{Path, PathBuf};
use std::process::Command;

use serde::{Deserialize, Serialize};

/// Browser engine family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrowserFamily {
    Chromium,
    Firefox,
    Webkit,
}

/// A browser found on this system. Field names are a wire contract
/// (camelCase in JSON output).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoundBrowser {
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub family: BrowserFamily,
    pub channel: String,
    pub path: PathBuf,
    pub version: String,
    pub major_version: Option<u32>,
    pub disabled: bool,
    pub is_selected: bool,
}

struct Candidate {
    name: &'static str,
    display_name: &'static str,
    family: BrowserFamily,
    channel: &'static str,
    binaries: &'static [&'static str],
    min_supported_major: u32,
}

const CANDIDATES: &[Candidate] = &[
    Candidate {
        name: "chrome",
        display_name: "Chrome",
        family: BrowserFamily::Chromium,
        channel: "stable",
        binaries: &["google-chrome", "google-chrome-stable", "chrome"],
        min_supported_major: 64,
    },
    Candidate {
        name: "chrome",
        display_name: "Chrome Beta",
        family: BrowserFamily::Chromium,
        channel: "beta",
        binaries: &["google-chrome-beta"],
        min_supported_major: 64,
    },
    Candidate {
        name: "chromium",
        display_name: "Chromium",
        family: BrowserFamily::Chromium,
        channel: "stable",
        binaries: &["chromium", "chromium-browser"],
        min_supported_major: 64,
    },
    Candidate {
        name: "edge",
        display_name: "Edge",
        family: BrowserFamily::Chromium,
        channel: "stable",
        binaries: &["microsoft-edge", "microsoft-edge-stable"],
        min_supported_major: 79,
    },
    Candidate {
        name: "firefox",
        display_name: "Firefox",
        family: BrowserFamily::Firefox,
        channel: "stable",
        binaries: &["firefox"],
        min_supported_major: 86,
    },
];

/// Detect installed browsers. Order follows the candidate table; ids are
/// assigned positionally. None of the results are marked selected — that is
/// the selection layer's job.
pub fn detect_browsers() -> Vec<FoundBrowser> {
    let mut found: Vec<FoundBrowser> = CANDIDATES.iter().filter_map(detect_candidate).collect();

    for (i, browser) in found.iter_mut().enumerate() {
        browser.id = (i + 1).to_string();
    }

    found
}

fn detect_candidate(candidate: &Candidate) -> Option<FoundBrowser> {
    let path = candidate
        .binaries
        .iter()
        .find_map(|bin| which::which(bin).ok())?;

    let version = probe_version(&path).unwrap_or_default();
    let major = major_version(&version);
    let disabled = major.is_some_and(|m| m < candidate.min_supported_major);

    tracing::debug!(
        name = candidate.name,
        path = %path.display(),
        version = %version,
        disabled,
        "detected browser"
    );

    Some(FoundBrowser {
        id: String::new(),
        name: candidate.name.to_string(),
        display_name: candidate.display_name.to_string(),
        family: candidate.family,
        channel: candidate.channel.to_string(),
        path,
        version,
        major_version: major,
        disabled,
        is_selected: false,
    })
}

/// Identify the browser at an explicit executable path, for
/// `--browser /path/to/binary` selectors. The error carries the underlying
/// spawn failure text, which callers surface verbatim.
pub fn identify_at_path(path: &Path) -> std::io::Result<FoundBrowser> {
    let output = Command::new(path).arg("--version").output()?;
    let raw = String::from_utf8_lossy(&output.stdout).into_owned();

    let candidate = CANDIDATES
        .iter()
        .find(|c| raw.to_lowercase().contains(&c.display_name.to_lowercase()));

    let candidate = candidate.ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("version output did not match a known browser: {}", raw.trim()),
        )
    })?;

    let version = parse_version_output(&raw).unwrap_or_default();
    let major = major_version(&version);

    Ok(FoundBrowser {
        id: String::new(),
        name: candidate.name.to_string(),
        display_name: candidate.display_name.to_string(),
        family: candidate.family,
        channel: candidate.channel.to_string(),
        path: path.to_path_buf(),
        version,
        major_version: major,
        disabled: major.is_some_and(|m| m < candidate.min_supported_major),
        is_selected: false,
    })
}

fn probe_version(path: &Path) -> Option<String> {
    let output = Command::new(path).arg("--version").output().ok()?;
    if !output.status.success() {
        return None;
    }
    parse_version_output(&String::from_utf8_lossy(&output.stdout))
}

/// Extract the dotted version number from `--version` output, e.g.
/// "Google Chrome 121.0.6167.85" -> "121.0.6167.85".
fn parse_version_output(raw: &str) -> Option<String> {
    raw.split_whitespace()
        .find(|token| {
            token.contains('.') && token.chars().next().is_some_and(|c| c.is_ascii_digit())
        })
        .map(|token| token.trim_end_matches(',').to_string())
}

/// First component of a dotted version string.
pub fn major_version(version: &str) -> Option<u32> {
    version.split('.').next()?.parse().ok()
}
