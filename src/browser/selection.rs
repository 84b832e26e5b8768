//! Browser selection: honoring a `--browser` selector and keeping exactly
//! one browser selected across user re-selection.
//!
//! A selector that cannot be resolved is never fatal: the default selection
//! is kept and a [`BrowserWarning`] with stable contract text is returned
//! for the caller to surface.

use std::path::{Path, PathBuf};

use super::detect::FoundBrowser;
use super::launcher::{LaunchRequest, TestingType};
use crate::error::{LaunchpadError, Result};

/// Alert title shown when a `--browser` selector cannot be honored.
pub const BROWSER_NOT_FOUND_TITLE: &str = "Warning: Browser Not Found";

/// Help link included with every browser-not-found warning.
pub const TROUBLESHOOTING_URL: &str = "https://on.cypress.io/troubleshooting-launching-browsers";

/// A parsed `--browser` argument: either a logical browser name or an
/// executable path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserSelector {
    Name(String),
    Path(PathBuf),
}

impl BrowserSelector {
    /// Parse a raw `--browser` value. Values that are absolute or contain a
    /// path separator are treated as executable paths; everything else is a
    /// browser name.
    pub fn parse(raw: &str) -> BrowserSelector {
        let expanded = shellexpand::tilde(raw);
        let as_path = Path::new(expanded.as_ref());
        if as_path.is_absolute() || raw.contains(std::path::MAIN_SEPARATOR) {
            BrowserSelector::Path(PathBuf::from(expanded.as_ref()))
        } else {
            BrowserSelector::Name(raw.to_string())
        }
    }
}

/// Non-fatal warning produced when a selector does not resolve to a usable
/// browser. The message text is a stable contract with consumers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserWarning {
    pub title: &'static str,
    pub message: String,
    pub help_link: &'static str,
}

impl BrowserWarning {
    fn not_found_by_name(value: &str) -> Self {
        BrowserWarning {
            title: BROWSER_NOT_FOUND_TITLE,
            message: format!(
                "The specified browser was not found on your system or is not supported by Cypress: {value}"
            ),
            help_link: TROUBLESHOOTING_URL,
        }
    }

    fn not_found_at_path(value: &Path, source: &std::io::Error) -> Self {
        BrowserWarning {
            title: BROWSER_NOT_FOUND_TITLE,
            message: format!(
                "We could not identify a known browser at the path you specified: {}\n\n{}",
                value.display(),
                source
            ),
            help_link: TROUBLESHOOTING_URL,
        }
    }
}

/// The detected browser list, with at most one browser selected at a time.
#[derive(Debug, Clone)]
pub struct BrowserSet {
    browsers: Vec<FoundBrowser>,
}

impl BrowserSet {
    /// Wrap a detected list and normalize the selection flags: the first
    /// enabled browser already marked selected wins, otherwise the first
    /// enabled browser becomes the default selection.
    pub fn new(mut browsers: Vec<FoundBrowser>) -> Self {
        let selected = browsers
            .iter()
            .position(|b| b.is_selected && !b.disabled)
            .or_else(|| browsers.iter().position(|b| !b.disabled));

        for (i, browser) in browsers.iter_mut().enumerate() {
            browser.is_selected = Some(i) == selected;
        }

        BrowserSet { browsers }
    }

    pub fn browsers(&self) -> &[FoundBrowser] {
        &self.browsers
    }

    pub fn is_empty(&self) -> bool {
        self.browsers.is_empty()
    }

    /// The currently selected browser, if any.
    pub fn selected(&self) -> Option<&FoundBrowser> {
        self.browsers.iter().find(|b| b.is_selected)
    }

    /// Apply a CLI-supplied selector.
    ///
    /// Name selectors match exactly on `name` or `channel` — never by
    /// display-name prefix. Path selectors match a detected browser's path,
    /// falling back to `identify` to probe the executable; an identified
    /// browser is appended to the set and selected.
    ///
    /// On failure the current selection is kept and the warning to surface
    /// is returned.
    pub fn apply_selector<F>(
        &mut self,
        selector: &BrowserSelector,
        identify: F,
    ) -> Option<BrowserWarning>
    where
        F: FnOnce(&Path) -> std::io::Result<FoundBrowser>,
    {
        match selector {
            BrowserSelector::Name(name) => {
                let id = self
                    .browsers
                    .iter()
                    .find(|b| !b.disabled && (b.name == *name || b.channel == *name))
                    .map(|b| b.id.clone());

                match id {
                    Some(id) => {
                        self.mark_selected(&id);
                        None
                    }
                    None => Some(BrowserWarning::not_found_by_name(name)),
                }
            }
            BrowserSelector::Path(path) => {
                let id = self
                    .browsers
                    .iter()
                    .find(|b| !b.disabled && b.path == *path)
                    .map(|b| b.id.clone());

                if let Some(id) = id {
                    self.mark_selected(&id);
                    return None;
                }

                match identify(path) {
                    Ok(browser) => {
                        let id = (self.browsers.len() + 1).to_string();
                        self.browsers.push(FoundBrowser {
                            id: id.clone(),
                            is_selected: false,
                            ..browser
                        });
                        self.mark_selected(&id);
                        None
                    }
                    Err(err) => Some(BrowserWarning::not_found_at_path(path, &err)),
                }
            }
        }
    }

    /// User re-selection by browser id. Disabled browsers are not
    /// selectable; on success exactly one browser is selected.
    pub fn select(&mut self, id: &str) -> Result<&FoundBrowser> {
        let index = self
            .browsers
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| LaunchpadError::BrowserError(format!("no browser with id {id}")))?;

        if self.browsers[index].disabled {
            return Err(LaunchpadError::BrowserError(format!(
                "{} is disabled and cannot be selected",
                self.browsers[index].display_name
            )));
        }

        for (i, browser) in self.browsers.iter_mut().enumerate() {
            browser.is_selected = i == index;
        }

        Ok(&self.browsers[index])
    }

    /// Build the launch request for the selected browser, carrying its
    /// recorded path and the active testing mode.
    pub fn launch_request(&self, testing_type: TestingType) -> Result<LaunchRequest> {
        let selected = self
            .selected()
            .ok_or_else(|| LaunchpadError::BrowserError("no browser is selected".to_string()))?;

        Ok(LaunchRequest {
            browser_path: selected.path.clone(),
            testing_type,
        })
    }

    fn mark_selected(&mut self, id: &str) {
        for browser in &mut self.browsers {
            browser.is_selected = browser.id == id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::detect::BrowserFamily;

    fn browser(id: &str, name: &str, display_name: &str, path: &str) -> FoundBrowser {
        FoundBrowser {
            id: id.to_string(),
            name: name.to_string(),
            display_name: display_name.to_string(),
            family: BrowserFamily::Chromium,
            channel: "stable".to_string(),
            path: PathBuf::from(path),
            version: "100.0.1.2".to_string(),
            major_version: Some(100),
            disabled: false,
            is_selected: false,
        }
    }

    fn sample_set() -> BrowserSet {
        BrowserSet::new(vec![
            browser("1", "chrome", "Chrome", "/test/chrome/path"),
            browser("2", "chromium", "Chromium", "/test/chromium/path"),
            browser("3", "edge", "Edge", "/test/edge/path"),
        ])
    }

    fn no_identify(_: &Path) -> std::io::Result<FoundBrowser> {
        panic!("identify should not be called")
    }

    #[test]
    fn selector_parse_distinguishes_names_from_paths() {
        assert_eq!(
            BrowserSelector::parse("edge"),
            BrowserSelector::Name("edge".to_string())
        );
        assert_eq!(
            BrowserSelector::parse("/usr/bin/chromium"),
            BrowserSelector::Path(PathBuf::from("/usr/bin/chromium"))
        );
        assert_eq!(
            BrowserSelector::parse("bin/chromium"),
            BrowserSelector::Path(PathBuf::from("bin/chromium"))
        );
    }

    #[test]
    fn new_set_defaults_to_first_enabled_browser() {
        let mut first_disabled = browser("1", "chrome", "Chrome", "/test/chrome/path");
        first_disabled.disabled = true;
        let set = BrowserSet::new(vec![
            first_disabled,
            browser("2", "edge", "Edge", "/test/edge/path"),
        ]);

        assert_eq!(set.selected().map(|b| b.id.as_str()), Some("2"));
    }

    #[test]
    fn new_set_keeps_an_existing_selection() {
        let mut preselected = browser("2", "edge", "Edge", "/test/edge/path");
        preselected.is_selected = true;
        let set = BrowserSet::new(vec![
            browser("1", "chrome", "Chrome", "/test/chrome/path"),
            preselected,
        ]);

        assert_eq!(set.selected().map(|b| b.id.as_str()), Some("2"));
    }

    #[test]
    fn name_selector_matches_exactly_not_by_prefix() {
        let mut set = sample_set();

        // "chrome" must not prefix-match "chromium"
        let warning = set.apply_selector(&BrowserSelector::Name("chrome".to_string()), no_identify);
        assert!(warning.is_none());
        assert_eq!(set.selected().map(|b| b.name.as_str()), Some("chrome"));

        let warning = set.apply_selector(&BrowserSelector::Name("chro".to_string()), no_identify);
        let warning = warning.expect("partial name must not match");
        assert_eq!(warning.title, BROWSER_NOT_FOUND_TITLE);
        assert!(warning.message.contains("chro"));
    }

    #[test]
    fn name_selector_matches_channel() {
        let mut beta = browser("2", "chrome", "Chrome Beta", "/test/chrome-beta/path");
        beta.channel = "beta".to_string();
        let mut set = BrowserSet::new(vec![
            browser("1", "chrome", "Chrome", "/test/chrome/path"),
            beta,
        ]);

        let warning = set.apply_selector(&BrowserSelector::Name("beta".to_string()), no_identify);
        assert!(warning.is_none());
        assert_eq!(set.selected().map(|b| b.id.as_str()), Some("2"));
    }

    #[test]
    fn unmatched_name_keeps_default_selection_and_warns() {
        let mut set = sample_set();
        let warning = set
            .apply_selector(
                &BrowserSelector::Name("doesNotExist".to_string()),
                no_identify,
            )
            .expect("expected a warning");

        assert_eq!(warning.title, "Warning: Browser Not Found");
        assert_eq!(
            warning.message,
            "The specified browser was not found on your system or is not supported by Cypress: doesNotExist"
        );
        assert_eq!(
            warning.help_link,
            "https://on.cypress.io/troubleshooting-launching-browsers"
        );
        assert_eq!(set.selected().map(|b| b.id.as_str()), Some("1"));
    }

    #[test]
    fn disabled_browser_is_not_matched_by_name() {
        let mut disabled = browser("2", "edge", "Edge", "/test/edge/path");
        disabled.disabled = true;
        let mut set = BrowserSet::new(vec![
            browser("1", "chrome", "Chrome", "/test/chrome/path"),
            disabled,
        ]);

        let warning = set.apply_selector(&BrowserSelector::Name("edge".to_string()), no_identify);
        assert!(warning.is_some());
        assert_eq!(set.selected().map(|b| b.id.as_str()), Some("1"));
    }

    #[test]
    fn path_selector_matches_detected_path() {
        let mut set = sample_set();
        let warning = set.apply_selector(
            &BrowserSelector::Path(PathBuf::from("/test/edge/path")),
            no_identify,
        );
        assert!(warning.is_none());
        assert_eq!(set.selected().map(|b| b.name.as_str()), Some("edge"));
    }

    #[test]
    fn path_selector_appends_and_selects_identified_browser() {
        let mut set = sample_set();
        let warning = set.apply_selector(
            &BrowserSelector::Path(PathBuf::from("/opt/chrome-dev/chrome")),
            |path| {
                let mut b = browser("", "chrome", "Chrome", "");
                b.path = path.to_path_buf();
                Ok(b)
            },
        );

        assert!(warning.is_none());
        assert_eq!(set.browsers().len(), 4);
        let selected = set.selected().expect("one browser selected");
        assert_eq!(selected.path, PathBuf::from("/opt/chrome-dev/chrome"));
    }

    #[test]
    fn failed_path_probe_warns_with_spawn_error_text() {
        let mut set = sample_set();
        let warning = set
            .apply_selector(
                &BrowserSelector::Path(PathBuf::from("/path/does/not/exist")),
                |_| {
                    Err(std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        "No such file or directory (os error 2)",
                    ))
                },
            )
            .expect("expected a warning");

        assert!(warning.message.starts_with(
            "We could not identify a known browser at the path you specified: /path/does/not/exist"
        ));
        assert!(warning.message.contains("No such file or directory"));
        assert_eq!(set.selected().map(|b| b.id.as_str()), Some("1"));
    }

    #[test]
    fn select_moves_the_single_selection() {
        let mut set = sample_set();
        assert_eq!(set.selected().map(|b| b.id.as_str()), Some("1"));

        set.select("3").unwrap();

        let selected: Vec<&str> = set
            .browsers()
            .iter()
            .filter(|b| b.is_selected)
            .map(|b| b.id.as_str())
            .collect();
        assert_eq!(selected, vec!["3"]);
    }

    #[test]
    fn select_rejects_disabled_and_unknown_browsers() {
        let mut disabled = browser("2", "edge", "Edge", "/test/edge/path");
        disabled.disabled = true;
        let mut set = BrowserSet::new(vec![
            browser("1", "chrome", "Chrome", "/test/chrome/path"),
            disabled,
        ]);

        assert!(set.select("2").is_err());
        assert!(set.select("99").is_err());
        assert_eq!(set.selected().map(|b| b.id.as_str()), Some("1"));
    }

    #[test]
    fn launch_request_carries_selected_path_and_mode() {
        let set = sample_set();
        let request = set.launch_request(TestingType::E2e).unwrap();
        assert_eq!(request.browser_path, PathBuf::from("/test/chrome/path"));
        assert_eq!(request.testing_type, TestingType::E2e);
    }

    #[test]
    fn launch_request_without_selection_is_an_error() {
        let set = BrowserSet::new(vec![]);
        assert!(set.launch_request(TestingType::E2e).is_err());
    }
}
