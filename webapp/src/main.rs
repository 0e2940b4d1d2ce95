#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::{Level, error};

use site::{
    config::SiteConfig,
    route::{LayoutMode, SitePage},
};

mod common;
use common::theme::provide_theme;

mod components;
use components::{contact::ContactModal, navigation::NavBar};

mod about;
use about::About;

mod home;
use home::Home;

mod not_found;
use not_found::NotFound;

mod services;
use services::Services;

mod start_project;
use start_project::StartProject;

mod team;
use team::Team;

const SITE_CONFIG: &str = include_str!("../site.toml");

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

// every page sits under the LayoutSelector, which decides per navigation whether
// the chrome goes around it
#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(LayoutSelector)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/team")]
        Team {},
        #[route("/services")]
        Services {},
        #[route("/startaproject")]
        StartProject {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl From<SitePage> for Route {
    fn from(page: SitePage) -> Self {
        match page {
            SitePage::Home => Route::Home {},
            SitePage::About => Route::About {},
            SitePage::Team => Route::Team {},
            SitePage::Services => Route::Services {},
            SitePage::StartProject => Route::StartProject {},
        }
    }
}

fn load_site_config() -> SiteConfig {
    SiteConfig::from_toml(SITE_CONFIG).unwrap_or_else(|err| {
        error!("failed to parse site config, using defaults: {err}");
        SiteConfig::default()
    })
}

#[component]
pub fn App() -> Element {
    let config = use_hook(load_site_config);

    provide_theme(&config.theme);
    use_context_provider(|| config);

    rsx! {
        style { "{common::style::SITE_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}

// the path is inspected on every render rather than remembered, so the layout can't
// drift from the url
#[component]
fn LayoutSelector() -> Element {
    let path = use_route::<Route>().to_string();

    let layout = SitePage::from_path(&path)
        .map(SitePage::layout)
        .unwrap_or(LayoutMode::Chrome);

    match layout {
        LayoutMode::Standalone => rsx! {
            Outlet::<Route> {}
        },
        LayoutMode::Chrome => rsx! {
            SiteChrome {}
        },
    }
}

#[component]
fn SiteChrome() -> Element {
    let mut contact_signal = use_signal(|| false);

    rsx! {
        div { class: "site-shell",
            NavBar { on_contact: move |_| contact_signal.set(true) }
            main { class: "page-content", Outlet::<Route> {} }
            footer { class: "site-footer",
                span { "© Quadups" }
                Link { to: Route::StartProject {}, "Start a Project" }
            }
        }
        ContactModal { open_signal: contact_signal }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn router_paths_match_site_pages() {
        for page in SitePage::all() {
            let route = Route::from(page);

            assert_eq!(route.to_string(), page.path(), "{page:?}");
            assert_eq!(SitePage::from_path(&route.to_string()), Some(page));
        }
    }

    #[test]
    fn site_page_paths_parse_to_their_route() {
        for page in SitePage::all() {
            let route = page.path().parse::<Route>().ok();

            assert!(route == Some(Route::from(page)), "{page:?}");
        }
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        for path in ["/aboutus", "/contact", "/nowhere/at/all"] {
            assert!(matches!(path.parse::<Route>(), Ok(Route::NotFound { .. })), "{path}");
            assert_eq!(SitePage::from_path(path), None);
        }
    }
}
