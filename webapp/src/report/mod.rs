use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;

mod geolocate;
mod map;

mod location;
use location::LocationPicker;

mod upload;
use upload::PhotoUpload;

const ISSUE_TYPES: [&str; 5] = [
    "Pothole",
    "Street Light",
    "Garbage",
    "Water Leakage",
    "Other Issues",
];

// The catch-all option that reveals the free-text issue field.
const OTHER_ISSUE: &str = "Other Issues";

fn shows_other_field(issue_type: &str) -> bool {
    issue_type == OTHER_ISSUE
}

#[component]
pub fn ReportForm() -> Element {
    let mut issue_type = use_signal(|| String::from(ISSUE_TYPES[0]));

    let navigator = use_navigator();

    rsx! {
        div { class: "container",
            h1 { "Report an Issue" }
            p { "Describe the problem and pin down where it is." }

            form {
                class: "card report-form",
                // Submission is handled elsewhere; the form only collects.
                onsubmit: move |_| {
                    tracing::info!("report form submitted");
                    navigator.push(Route::ThankYou { rid: None });
                },

                div { class: "form-group",
                    label { class: "form-label", r#for: "reporter-name", "Your name" }
                    input {
                        id: "reporter-name",
                        name: "name",
                        class: "form-input",
                        r#type: "text",
                        required: true,
                    }
                }

                div { class: "form-group",
                    label { class: "form-label", r#for: "reporter-email", "Email (optional)" }
                    input {
                        id: "reporter-email",
                        name: "email",
                        class: "form-input",
                        r#type: "email",
                    }
                }

                div { class: "form-group",
                    label { class: "form-label", r#for: "issue-type", "Issue type" }
                    select {
                        id: "issue-type",
                        name: "issue-type",
                        class: "form-select",
                        onchange: move |event| issue_type.set(event.value()),
                        for kind in ISSUE_TYPES {
                            option { value: kind, selected: issue_type() == kind, "{kind}" }
                        }
                    }
                }

                div {
                    id: "other-issue-container",
                    class: "form-group",
                    style: if shows_other_field(&issue_type()) { "display: block;" } else { "display: none;" },
                    label { class: "form-label", r#for: "other-issue", "What kind of issue?" }
                    input {
                        id: "other-issue",
                        name: "other-issue",
                        class: "form-input",
                        r#type: "text",
                    }
                }

                div { class: "form-group",
                    label { class: "form-label", r#for: "description", "Description" }
                    textarea {
                        id: "description",
                        name: "description",
                        class: "form-textarea",
                        placeholder: "What is wrong, and since when?",
                    }
                }

                LocationPicker {}
                PhotoUpload {}

                button { r#type: "submit", class: "btn btn-action btn-lg", "Submit report" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_issues_reveals_the_detail_field() {
        assert!(shows_other_field("Other Issues"));
    }

    #[test]
    fn every_named_issue_type_hides_the_detail_field() {
        for kind in ISSUE_TYPES.iter().filter(|kind| **kind != OTHER_ISSUE) {
            assert!(!shows_other_field(kind));
        }
    }

    #[test]
    fn toggle_is_stable_over_repeated_changes() {
        for _ in 0..3 {
            assert!(shows_other_field("Other Issues"));
            assert!(!shows_other_field("Pothole"));
        }
    }
}
