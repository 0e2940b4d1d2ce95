// navigation and layout logic for the site
//
// nothing in here touches the browser, so all of it can be exercised natively.  the
// webapp owns the event wiring and rendering and calls into these types on every
// scroll, resize, navigation and click
pub mod config;
pub mod nav;
pub mod route;
pub mod theme;
