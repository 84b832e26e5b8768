pub mod detect;
pub mod launcher;
pub mod selection;

pub use detect::{detect_browsers, identify_at_path, BrowserFamily, FoundBrowser};
pub use launcher::{launch, LaunchRequest, TestingType};
pub use selection::{
    BrowserSelector, BrowserSet, BrowserWarning, BROWSER_NOT_FOUND_TITLE, TROUBLESHOOTING_URL,
};
