use dioxus::prelude::*;

const ROLES: [(&str, &str); 4] = [
    ("Engineering", "Web and mobile applications, APIs and infrastructure."),
    ("Design", "Product, interface and brand design."),
    ("Strategy", "Discovery, roadmaps and product direction."),
    ("Delivery", "Planning, coordination and quality."),
];

#[component]
pub fn Team() -> Element {
    rsx! {
        section { class: "hero",
            div { class: "container",
                h1 { class: "hero-title", "Our team" }
            }
        }
        section { class: "section",
            div { class: "container card-grid",
                for (role, description) in ROLES {
                    div { class: "card", key: "{role}",
                        h3 { "{role}" }
                        p { "{description}" }
                    }
                }
            }
        }
    }
}
