use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;

// ContactModal
//
// the chrome hands the nav bar a callback that raises this signal; the modal itself
// owns closing again
#[derive(Clone, PartialEq, Props)]
pub struct ContactModalProps {
    open_signal: Signal<bool>,
}

#[component]
pub fn ContactModal(props: ContactModalProps) -> Element {
    let mut open_signal = props.open_signal;

    if !open_signal() {
        return rsx! {};
    }

    rsx! {
        div { class: "modal",
            div { class: "modal-content",
                div { class: "modal-header",
                    h2 { "Get in touch" }
                    button {
                        class: "close",
                        "aria-label": "Close",
                        onclick: move |_| open_signal.set(false),
                        "×"
                    }
                }
                p { "Tell us what you are building and we will get back to you." }
                div { style: "margin-top: var(--space-6);",
                    Link {
                        to: Route::StartProject {},
                        class: "btn btn-brand",
                        onclick: move |_| open_signal.set(false),
                        "Start a Project"
                    }
                }
            }
        }
    }
}
