use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "hero",
            div { class: "container",
                h1 { class: "hero-title", "We build products people love" }
                p { class: "hero-subtitle",
                    "Design, engineering and strategy for teams that want to ship."
                }
                Link { to: Route::StartProject {}, class: "btn btn-brand", "Start a Project" }
            }
        }

        section { class: "section",
            div { class: "container card-grid",
                div { class: "card",
                    h3 { "Who we are" }
                    p { "A small studio with a long track record." }
                    Link { to: Route::About {}, "About us" }
                }
                div { class: "card",
                    h3 { "What we do" }
                    p { "Web, mobile and product design, end to end." }
                    Link { to: Route::Services {}, "Our services" }
                }
                div { class: "card",
                    h3 { "The people" }
                    p { "Meet the team behind the work." }
                    Link { to: Route::Team {}, "Our team" }
                }
            }
        }
    }
}
