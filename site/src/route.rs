use tracing::{Level, debug, instrument};

// the one page that renders without the shared chrome
pub const START_PROJECT_PATH: &str = "/startaproject";

pub const SERVICES_PATH: &str = "/services";

// site pages
//
// this is the full routing table for the site.  matching is exact -- there are no
// nested or parametrized segments, and the old /aboutus and /contact routes are
// intentionally absent (contact is an in-page modal now)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SitePage {
    Home,
    About,
    Team,
    Services,
    StartProject,
}

impl SitePage {
    pub fn all() -> Vec<Self> {
        vec![
            Self::Home,
            Self::About,
            Self::Team,
            Self::Services,
            Self::StartProject,
        ]
    }

    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" => Some(Self::Home),
            "/about" => Some(Self::About),
            "/team" => Some(Self::Team),
            SERVICES_PATH => Some(Self::Services),
            START_PROJECT_PATH => Some(Self::StartProject),
            _ => None,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Team => "/team",
            Self::Services => SERVICES_PATH,
            Self::StartProject => START_PROJECT_PATH,
        }
    }

    pub fn layout(self) -> LayoutMode {
        layout_for_path(self.path())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutMode {
    // navigation bar and structural wrapper around the page
    Chrome,
    // the page is mounted on its own
    Standalone,
}

// layout selection
//
// this is re-derived from the path on every navigation rather than stored anywhere,
// so it can never disagree with the url.  unknown paths get the chrome, and whatever
// not-found page the router shows lives inside it
#[instrument(level=Level::DEBUG)]
pub fn layout_for_path(path: &str) -> LayoutMode {
    let mode = if path == START_PROJECT_PATH {
        LayoutMode::Standalone
    } else {
        LayoutMode::Chrome
    };

    debug!(?mode, "selected layout");
    mode
}

// pages with a light background, where the nav bar needs dark text and icons
pub fn is_light_page(path: &str) -> bool {
    path == SERVICES_PATH || path == START_PROJECT_PATH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_start_project_is_standalone() {
        for page in SitePage::all() {
            let expected = if page == SitePage::StartProject {
                LayoutMode::Standalone
            } else {
                LayoutMode::Chrome
            };

            assert_eq!(page.layout(), expected, "{page:?}");
            assert_eq!(layout_for_path(page.path()), expected, "{page:?}");
        }
    }

    #[test]
    fn paths_resolve_back_to_their_page() {
        for page in SitePage::all() {
            assert_eq!(SitePage::from_path(page.path()), Some(page));
        }
    }

    #[test]
    fn matching_is_exact() {
        assert_eq!(SitePage::from_path("/about/"), None);
        assert_eq!(SitePage::from_path("/About"), None);
        assert_eq!(SitePage::from_path("/aboutus"), None);
        assert_eq!(SitePage::from_path("/contact"), None);
        assert_eq!(SitePage::from_path(""), None);
    }

    #[test]
    fn unknown_paths_keep_the_chrome() {
        assert_eq!(layout_for_path("/nowhere"), LayoutMode::Chrome);
        assert_eq!(layout_for_path("/startaproject/"), LayoutMode::Chrome);
    }

    #[test]
    fn light_pages() {
        assert!(is_light_page("/services"));
        assert!(is_light_page("/startaproject"));
        assert!(!is_light_page("/"));
        assert!(!is_light_page("/about"));
        assert!(!is_light_page("/team"));
    }
}
