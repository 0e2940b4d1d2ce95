use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::info;

use site::nav::TextTone;

use crate::{Route, common::theme::use_theme};

// StartProject
//
// rendered without the chrome, so it carries its own way back home
#[component]
pub fn StartProject() -> Element {
    let theme = use_theme();
    let mut submitted_signal = use_signal(|| false);

    let tone = if theme.is_dark() {
        TextTone::Light
    } else {
        TextTone::Dark
    }
    .css_class();

    rsx! {
        div { class: "start-project {tone}",
            Link { to: Route::Home {}, class: "logo", "QUADUPS" }

            div { class: "container",
                h1 { class: "hero-title", "Start a Project" }

                if submitted_signal() {
                    p { "Thanks! We will be in touch shortly." }
                } else {
                    form {
                        onsubmit: move |event| {
                            let name = match event.values().get("name") {
                                Some(val) => val.as_value(),
                                None => String::from(""),
                            };

                            info!(%name, "project request submitted");
                            submitted_signal.set(true);
                        },
                        input { name: "name", r#type: "text", placeholder: "Your name" }
                        input { name: "email", r#type: "email", placeholder: "Email" }
                        textarea { name: "brief", rows: "6", placeholder: "Tell us about the project" }
                        input { class: "btn btn-brand", r#type: "submit", value: "Send" }
                    }
                }
            }
        }
    }
}
