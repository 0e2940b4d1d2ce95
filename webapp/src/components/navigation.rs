use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_router::prelude::*;

use site::{
    config::SiteConfig,
    nav::{ContactOrigin, NAV_ITEMS, NavBarState, NavItem, TextTone},
};

use crate::{
    Route,
    common::{
        listener::{WindowListener, scroll_offset, viewport_width},
        theme::ThemeContext,
    },
};

// apply a transition, only notifying subscribers if something actually changed
//
// scroll events arrive many times a second and almost never flip the state
fn update(mut nav_signal: Signal<NavBarState>, transition: impl FnOnce(&mut NavBarState)) {
    let mut next = nav_signal.peek().clone();
    transition(&mut next);

    if next != *nav_signal.peek() {
        nav_signal.set(next);
    }
}

#[derive(Clone, PartialEq, Props)]
struct NavBarLinkProps {
    item: NavItem,
    active: bool,
    underline: bool,
    nav_signal: Signal<NavBarState>,
}

#[component]
fn NavBarLink(props: NavBarLinkProps) -> Element {
    let item = props.item;
    let nav_signal = props.nav_signal;

    rsx! {
        Link {
            class: if props.active { "nav-link active" } else { "nav-link" },
            to: Route::from(item.page),
            // the router ignores a click on the current page, but the drawer still has to close
            onclick: move |_| update(nav_signal, |state| state.on_navigate(item.path())),
            "{item.label}"
            if props.active && props.underline {
                span { class: "underline" }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct ThemeSwitchProps {
    theme_context: ThemeContext,
}

#[component]
fn ThemeSwitch(props: ThemeSwitchProps) -> Element {
    let mut theme_context = props.theme_context;
    let dark = theme_context.current().is_dark();

    rsx! {
        div { class: "theme-switch",
            span { if dark { "☾" } else { "☀" } }
            button {
                class: if dark { "switch checked" } else { "switch" },
                role: "switch",
                "aria-checked": "{dark}",
                onclick: move |_| {
                    theme_context.toggle();
                },
                span { class: "thumb" }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct NavDrawerProps {
    path: String,
    nav_signal: Signal<NavBarState>,
    on_contact: EventHandler<()>,
}

#[component]
fn NavDrawer(props: NavDrawerProps) -> Element {
    let path = props.path;
    let nav_signal = props.nav_signal;
    let on_contact = props.on_contact;
    let theme_context = use_context::<ThemeContext>();

    let state = nav_signal();

    if !state.is_open() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "drawer-backdrop",
            onclick: move |_| update(nav_signal, |state| state.toggle_drawer()),
        }
        aside { class: "drawer",
            ul {
                for item in NAV_ITEMS {
                    li { key: "{item.path()}",
                        NavBarLink {
                            item,
                            active: item.is_active(&path),
                            underline: false,
                            nav_signal,
                        }
                    }
                }
                li {
                    button {
                        class: "nav-contact",
                        onclick: move |_| {
                            update(nav_signal, |state| {
                                state.request_contact(ContactOrigin::Drawer, || on_contact.call(()))
                            })
                        },
                        "Contact"
                    }
                }
                li {
                    ThemeSwitch { theme_context }
                }
                li { class: "drawer-cta",
                    Link { to: Route::StartProject {}, class: "btn btn-brand", "Start a Project" }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct NavBarProps {
    on_contact: EventHandler<()>,
}

#[component]
pub fn NavBar(props: NavBarProps) -> Element {
    let on_contact = props.on_contact;

    let config = use_context::<SiteConfig>();
    let theme_context = use_context::<ThemeContext>();
    let path = use_route::<Route>().to_string();

    let nav_signal = use_signal(|| NavBarState::new(config.nav.clone()));

    // held for the lifetime of the component; unmounting drops both listeners
    use_hook(move || {
        let scroll = WindowListener::new("scroll", move |_| {
            if let Some(offset) = scroll_offset() {
                update(nav_signal, |state| state.on_scroll(offset));
            }
        });

        let resize = WindowListener::new("resize", move |_| {
            if let Some(width) = viewport_width() {
                update(nav_signal, |state| state.on_resize(width));
            }
        });

        Rc::new((scroll, resize))
    });

    // the page may already be scrolled when the bar mounts
    use_effect(move || {
        if let Some(offset) = scroll_offset() {
            update(nav_signal, |state| state.on_scroll(offset));
        }
    });

    use_effect(use_reactive((&path,), move |(path,)| {
        update(nav_signal, |state| state.on_navigate(&path));
    }));

    // derived from this render's path, never from anything stored
    let state = nav_signal();
    let tone = TextTone::for_path(&path).css_class();
    let background = state.background(&path).css_color();
    let shadow = state.shadow();

    rsx! {
        nav {
            class: "site-nav {tone}",
            style: "background-color: {background}; box-shadow: {shadow};",

            Link { to: Route::Home {}, class: "logo", "QUADUPS" }

            ul { class: "nav-links",
                for item in NAV_ITEMS {
                    li { key: "{item.path()}",
                        NavBarLink {
                            item,
                            active: item.is_active(&path),
                            underline: true,
                            nav_signal,
                        }
                    }
                }
                li {
                    button {
                        class: "nav-contact",
                        onclick: move |_| {
                            update(nav_signal, |state| {
                                state.request_contact(ContactOrigin::Desktop, || on_contact.call(()))
                            })
                        },
                        "Contact"
                    }
                }
                li {
                    ThemeSwitch { theme_context }
                }
            }

            Link { to: Route::StartProject {}, class: "btn btn-brand nav-cta", "Start a Project" }

            button {
                class: "menu-trigger",
                "aria-label": "Open menu",
                onclick: move |_| update(nav_signal, |state| state.toggle_drawer()),
                "☰"
            }
        }

        NavDrawer { path: path.clone(), nav_signal, on_contact }
    }
}
