use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct ModalProps {
    /// Rendered on the overlay element so page scripts and styles can
    /// address a specific modal.
    id: String,
    title: String,
    children: Element,
    #[props(default)]
    footer: Option<Element>,
    on_close: EventHandler<()>,
}

#[component]
pub fn Modal(props: ModalProps) -> Element {
    let on_close = props.on_close;

    rsx! {
        div {
            id: "{props.id}",
            class: "modal-overlay",
            // Clicking the overlay dismisses; clicks inside the content must not
            onclick: move |evt| {
                evt.stop_propagation();
                on_close.call(());
            },
            div {
                class: "modal-content",
                onclick: move |evt| evt.stop_propagation(),

                div { class: "modal-header",
                    h2 { class: "modal-title", "{props.title}" }
                    button {
                        class: "btn-close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }

                div { class: "modal-body", {props.children} }

                if let Some(footer) = &props.footer {
                    div { class: "modal-footer", {footer.clone()} }
                }
            }
        }
    }
}
