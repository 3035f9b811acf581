//! Named defaults shared across the browser.

/// URL used when a tab is created with an empty URL.
pub const DEFAULT_URL: &str = "https://www.google.com";

/// URL reported when the engine has no current URL.
pub const BLANK_URL: &str = "about:blank";

/// Title of a tab that has not finished its first load.
pub const DEFAULT_TITLE: &str = "New Tab";

/// Title of a loaded page whose engine reports no title.
pub const UNTITLED: &str = "Untitled";

/// Inline document shown for malformed URLs and provisional load failures.
pub const ERROR_PAGE_HTML: &str =
    "<h1>Error: Couldn't load page. Either you have no internet or the URL is invalid.</h1>";

/// Stored homepage default.
pub const DEFAULT_HOMEPAGE: &str = "https://google.com";

/// Homepage used when the stored homepage is blank.
pub const FALLBACK_HOMEPAGE: &str = "https://www.google.com/?client=safari&channel=ipad_bm";

/// URL shared when no tab is active.
pub const SHARE_FALLBACK_URL: &str = "https://google.com";

pub const APP_TITLE: &str = "Playground Browser Beta";

pub const BETA_WARNING: &str =
    "Warning: Alpha features are currently enabled. The browser may not function as expected.";

// User agents

/// Safari on an iPad Pro running iOS 17.
pub const IPAD_PRO_SAFARI: &str = "Mozilla/5.0 (iPad; CPU OS 17_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1";

/// Chrome on a macOS desktop.
pub const DESKTOP_CHROME: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

pub const CUSTOM_APP_AGENT: &str = "PlaygroundBrowser/1.0 (iOS; AppleWebKit/605.1.15)";

pub const DEFAULT_USER_AGENT: &str = IPAD_PRO_SAFARI;

/// Sidebar shortcuts, in display order.
pub const FEATURED_SITES: &[(&str, &str)] = &[
    ("Google", "https://www.google.com/?client=safari&channel=ipad_bm"),
    ("Gordon County Schools", "https://www.gcbe.org"),
    ("Schoology", "https://gcbe.schoology.com"),
    ("Clever", "https://clever.com/in/gcbe/student/portal"),
    ("Duolingo", "https://duolingo.com"),
    ("Blooket", "https://blooket.com/"),
    ("Gimkit", "https://gimkit.com"),
];

/// Looks up a featured site URL by its display name.
pub fn featured_site_url(name: &str) -> Option<&'static str> {
    FEATURED_SITES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, url)| *url)
}
