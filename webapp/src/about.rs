use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    rsx! {
        section { class: "hero",
            div { class: "container",
                h1 { class: "hero-title", "About us" }
                p { class: "hero-subtitle", "Independent, senior, and hands-on." }
            }
        }
        section { class: "section",
            div { class: "container",
                p {
                    "We partner with founders and product teams from the first sketch to the "
                    "production launch, and we stay around after it."
                }
            }
        }
    }
}
