use dioxus::prelude::*;

const SERVICES: [(&str, &str); 3] = [
    ("Web development", "Fast, accessible sites and web applications."),
    ("Mobile apps", "Native and cross-platform apps for iOS and Android."),
    ("Product design", "Research, prototyping and interface design."),
];

// light background page; the nav bar switches to dark text here
#[component]
pub fn Services() -> Element {
    rsx! {
        section { class: "hero light",
            div { class: "container",
                h1 { class: "hero-title", "Services" }
                p { class: "hero-subtitle", "Everything it takes to go from idea to launch." }
            }
        }
        section { class: "section",
            div { class: "container card-grid",
                for (name, description) in SERVICES {
                    div { class: "card", key: "{name}",
                        h3 { "{name}" }
                        p { "{description}" }
                    }
                }
            }
        }
    }
}
