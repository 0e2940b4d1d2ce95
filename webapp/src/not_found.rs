use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        section { class: "hero",
            div { class: "container",
                h1 { class: "hero-title", "Page not found" }
                p { class: "hero-subtitle", "Nothing lives at /{path}." }
                Link { to: Route::Home {}, class: "btn btn-brand", "Back home" }
            }
        }
    }
}
