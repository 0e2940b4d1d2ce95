use tracing::debug;

use crate::{
    config::NavConfig,
    route::{self, SitePage},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub page: SitePage,
}

impl NavItem {
    pub fn path(&self) -> &'static str {
        self.page.path()
    }

    // exact match only, so at most one item is ever active
    pub fn is_active(&self, path: &str) -> bool {
        self.path() == path
    }
}

// items shown in both the desktop bar and the mobile drawer, in display order
pub static NAV_ITEMS: [NavItem; 2] = [
    NavItem {
        label: "About",
        page: SitePage::About,
    },
    NavItem {
        label: "Services",
        page: SitePage::Services,
    },
];

// which copy of the contact control was pressed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactOrigin {
    Desktop,
    Drawer,
}

// the four looks of the bar, light/dark page crossed with scrolled/at the top
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavBackground {
    LightPageTop,
    LightPageScrolled,
    DarkPageTop,
    DarkPageScrolled,
}

impl NavBackground {
    pub fn css_color(self) -> &'static str {
        match self {
            Self::LightPageTop => "rgba(255,255,255, 1)",
            Self::LightPageScrolled => "rgba(255,255,255, .9)",
            Self::DarkPageTop => "rgba(20,0,33, 0)",
            Self::DarkPageScrolled => "rgba(20,0,33, .9)",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextTone {
    // for light page backgrounds
    Dark,
    // for dark page backgrounds
    Light,
}

impl TextTone {
    pub fn for_path(path: &str) -> Self {
        if route::is_light_page(path) {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Dark => "tone-dark",
            Self::Light => "tone-light",
        }
    }
}

pub fn active_item(path: &str) -> Option<&'static NavItem> {
    NAV_ITEMS.iter().find(|item| item.is_active(path))
}

// navigation bar state
//
// only the scroll and drawer flags live here.  the path always comes from the router
// for the render at hand, and everything visual (background, text tone, active link)
// is derived from it on demand, so there is no second copy to fall behind.  the theme
// lives in ThemeSetting since it is shared with the rest of the page
#[derive(Clone, Debug, PartialEq)]
pub struct NavBarState {
    config: NavConfig,
    scrolled: bool,
    is_open: bool,
}

impl NavBarState {
    pub fn new(config: NavConfig) -> Self {
        NavBarState {
            config,
            scrolled: false,
            is_open: false,
        }
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn on_scroll(&mut self, offset: f64) {
        self.scrolled = offset > self.config.scroll_threshold;
    }

    // growing past the breakpoint hides the drawer trigger, so an open drawer would
    // otherwise be stranded
    pub fn on_resize(&mut self, width: f64) {
        if width >= self.config.drawer_breakpoint && self.is_open {
            debug!(width, "closing drawer on resize");
            self.is_open = false;
        }
    }

    // any navigation closes the drawer, including a click on the current page
    pub fn on_navigate(&mut self, path: &str) {
        debug!(%path, "navigated");
        self.is_open = false;
    }

    pub fn toggle_drawer(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn request_contact<F: FnOnce()>(&mut self, origin: ContactOrigin, callback: F) {
        callback();

        if origin == ContactOrigin::Drawer {
            self.is_open = false;
        }
    }

    pub fn background(&self, path: &str) -> NavBackground {
        match (route::is_light_page(path), self.scrolled) {
            (true, false) => NavBackground::LightPageTop,
            (true, true) => NavBackground::LightPageScrolled,
            (false, false) => NavBackground::DarkPageTop,
            (false, true) => NavBackground::DarkPageScrolled,
        }
    }

    pub fn shadow(&self) -> &'static str {
        if self.scrolled {
            "0px 4px 10px rgba(0, 0, 0, 0.2)"
        } else {
            "none"
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn state() -> NavBarState {
        NavBarState::new(NavConfig::default())
    }

    fn open() -> NavBarState {
        let mut state = state();
        state.toggle_drawer();
        assert!(state.is_open());
        state
    }

    #[test]
    fn scroll_threshold_is_strict() {
        let mut state = state();

        for (offset, expected) in [(0.0, false), (49.9, false), (50.0, false), (50.1, true), (900.0, true)] {
            state.on_scroll(offset);
            assert_eq!(state.scrolled(), expected, "offset {offset}");
        }

        state.on_scroll(10.0);
        assert!(!state.scrolled());
    }

    #[test]
    fn resize_past_breakpoint_closes_drawer() {
        let mut state = open();

        state.on_resize(1024.0);
        assert!(!state.is_open());

        let mut state = open();
        state.on_resize(1920.0);
        assert!(!state.is_open());
    }

    #[test]
    fn resize_below_breakpoint_leaves_drawer_alone() {
        let mut opened = open();
        opened.on_resize(1023.0);
        assert!(opened.is_open());

        let mut closed = state();
        closed.on_resize(500.0);
        assert!(!closed.is_open());
        closed.on_resize(2000.0);
        assert!(!closed.is_open());
    }

    #[test]
    fn navigation_always_closes_drawer() {
        let paths = ["/", "/about", "/team", "/services", "/startaproject", "/nowhere"];

        for to in paths {
            for was_open in [false, true] {
                let mut state = state();
                if was_open {
                    state.toggle_drawer();
                }

                state.on_navigate(to);

                assert!(!state.is_open(), "-> {to}");
            }
        }
    }

    #[test]
    fn drawer_toggle_flips() {
        let mut state = state();

        state.toggle_drawer();
        assert!(state.is_open());
        state.toggle_drawer();
        assert!(!state.is_open());
    }

    #[test]
    fn contact_from_desktop_keeps_drawer() {
        let calls = Cell::new(0);
        let mut state = open();

        state.request_contact(ContactOrigin::Desktop, || calls.set(calls.get() + 1));

        assert_eq!(calls.get(), 1);
        assert!(state.is_open());
    }

    #[test]
    fn contact_from_drawer_closes_it() {
        let calls = Cell::new(0);
        let mut state = open();

        state.request_contact(ContactOrigin::Drawer, || calls.set(calls.get() + 1));

        assert_eq!(calls.get(), 1);
        assert!(!state.is_open());
    }

    #[test]
    fn active_item_is_exact_match() {
        assert_eq!(active_item("/about"), Some(&NAV_ITEMS[0]));
        assert_eq!(active_item("/services"), Some(&NAV_ITEMS[1]));
        assert_eq!(active_item("/"), None);
        assert_eq!(active_item("/team"), None);
        assert_eq!(active_item("/startaproject"), None);
        assert_eq!(active_item("/about/"), None);
    }

    #[test]
    fn at_most_one_item_active() {
        for path in ["/", "/about", "/services", "/team", "/startaproject"] {
            let active = NAV_ITEMS.iter().filter(|item| item.is_active(path)).count();
            assert!(active <= 1, "{path}");
        }
    }

    #[test]
    fn background_covers_all_four_looks() {
        let mut state = state();
        assert_eq!(state.background("/services"), NavBackground::LightPageTop);
        assert_eq!(state.background("/"), NavBackground::DarkPageTop);
        assert_eq!(state.shadow(), "none");

        state.on_scroll(51.0);
        assert_eq!(state.background("/services"), NavBackground::LightPageScrolled);
        assert_eq!(state.background("/"), NavBackground::DarkPageScrolled);
        assert_ne!(state.shadow(), "none");
        assert_eq!(active_item("/services"), Some(&NAV_ITEMS[1]));
    }

    #[test]
    fn derived_looks_follow_the_path_of_each_render() {
        // the same state rendered under a new route must switch immediately, with no
        // navigation event in between
        let mut state = state();
        state.on_scroll(80.0);
        let before = state.clone();

        assert_eq!(state.background("/about"), NavBackground::DarkPageScrolled);
        assert_eq!(TextTone::for_path("/about"), TextTone::Light);
        assert_eq!(active_item("/about").map(|item| item.label), Some("About"));

        assert_eq!(state.background("/services"), NavBackground::LightPageScrolled);
        assert_eq!(TextTone::for_path("/services"), TextTone::Dark);
        assert_eq!(active_item("/services").map(|item| item.label), Some("Services"));

        assert_eq!(state, before);
    }

    #[test]
    fn background_colors_are_distinct() {
        let colors = [
            NavBackground::LightPageTop,
            NavBackground::LightPageScrolled,
            NavBackground::DarkPageTop,
            NavBackground::DarkPageScrolled,
        ]
        .map(NavBackground::css_color);

        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn text_tone_follows_page() {
        assert_eq!(TextTone::for_path("/services"), TextTone::Dark);
        assert_eq!(TextTone::for_path("/startaproject"), TextTone::Dark);
        assert_eq!(TextTone::for_path("/about"), TextTone::Light);
    }

    #[test]
    fn reclicking_current_link_keeps_it_active() {
        let mut state = open();

        state.on_navigate("/about");

        assert!(!state.is_open());
        assert_eq!(active_item("/about").map(|item| item.label), Some("About"));
    }

    #[test]
    fn custom_thresholds() {
        let config = NavConfig {
            scroll_threshold: 10.0,
            drawer_breakpoint: 768.0,
        };
        let mut state = NavBarState::new(config);

        state.on_scroll(11.0);
        assert!(state.scrolled());

        state.toggle_drawer();
        state.on_resize(800.0);
        assert!(!state.is_open());
    }
}
