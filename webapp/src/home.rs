use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "container",
            section { class: "hero",
                h1 { class: "hero-title", "See a problem? Report it." }
                p { class: "hero-subtitle",
                    "Potholes, broken street lights, uncollected garbage - tell your city about it in under a minute."
                }
                div { class: "hero-actions",
                    Link {
                        to: Route::ReportForm {},
                        class: "btn btn-primary btn-lg",
                        "Report an Issue"
                    }
                }
            }

            section { class: "steps-grid",
                div { class: "card",
                    div { class: "step-number", "1" }
                    h3 { "Locate" }
                    p { "Use GPS, search for an address, or drop a pin on the map." }
                }
                div { class: "card",
                    div { class: "step-number", "2" }
                    h3 { "Describe" }
                    p { "Pick the issue type, add a short description and up to three photos." }
                }
                div { class: "card",
                    div { class: "step-number", "3" }
                    h3 { "Track" }
                    p { "Submit and keep your report id to follow up on its progress." }
                }
            }
        }
    }
}
