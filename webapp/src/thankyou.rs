use dioxus::prelude::*;

use crate::common::notify;

/// Tracking tag shown to the user: `#<rid>` when the page URL carried a
/// report id, `#?` otherwise.
pub fn report_tag(rid: Option<&str>) -> String {
    match rid {
        Some(rid) if !rid.is_empty() => format!("#{rid}"),
        _ => String::from("#?"),
    }
}

#[component]
pub fn ThankYou(rid: Option<String>) -> Element {
    let tag = report_tag(rid.as_deref());
    let notice_tag = tag.clone();

    rsx! {
        div { class: "container",
            section { class: "card thankyou-card",
                h1 { "Thank you!" }
                p {
                    "Your report has been received. Keep the id below to follow up on its progress."
                }
                div { class: "form-group",
                    label { class: "form-label", r#for: "report-id", "Report ID" }
                    input {
                        id: "report-id",
                        class: "form-input",
                        r#type: "text",
                        readonly: true,
                        value: "{tag}",
                    }
                }
                button {
                    id: "track-status-btn",
                    class: "btn btn-primary",
                    // Status pages are not served yet; placeholder only
                    onclick: move |_| {
                        notify(
                            &format!("Navigating to status page for Report ID: {notice_tag}."),
                        )
                    },
                    "Track Your Status"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_renders_present_id() {
        assert_eq!(report_tag(Some("482")), "#482");
    }

    #[test]
    fn tag_renders_placeholder_when_absent() {
        assert_eq!(report_tag(None), "#?");
    }

    #[test]
    fn tag_renders_placeholder_for_empty_id() {
        assert_eq!(report_tag(Some("")), "#?");
    }
}
