use base64::prelude::*;
use dioxus::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::common::notify;

const MAX_UPLOADS: usize = 3;

fn within_cap(count: usize) -> bool {
    count <= MAX_UPLOADS
}

/// Inline `data:` URI so the preview works without any server round-trip.
fn preview_uri(name: &str, bytes: &[u8]) -> String {
    let mime = mime_guess::from_path(name).first_or_octet_stream();
    format!("data:{mime};base64,{}", BASE64_STANDARD.encode(bytes))
}

// Clearing the input element keeps the browser-held selection consistent
// with the (empty) preview list after a rejected batch.
fn reset_file_input() {
    let input = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id("file-upload"))
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok());

    if let Some(input) = input {
        input.set_value("");
    }
}

#[derive(Clone, PartialEq)]
struct PendingPhoto {
    name: String,
    data_uri: String,
}

#[component]
pub fn PhotoUpload() -> Element {
    let mut photos = use_signal(Vec::<PendingPhoto>::new);

    rsx! {
        div { class: "form-group",
            label { class: "form-label", r#for: "file-upload", "Photos (up to 3)" }
            input {
                id: "file-upload",
                name: "files",
                class: "form-input",
                r#type: "file",
                accept: "image/*",
                multiple: true,
                onchange: move |event: FormEvent| async move {
                    let Some(engine) = event.files() else {
                        return;
                    };

                    let names = engine.files();
                    if !within_cap(names.len()) {
                        notify("You can only upload a maximum of 3 images.");
                        reset_file_input();
                        return;
                    }

                    // a new accepted batch always replaces the previous cards
                    photos.set(Vec::new());

                    for name in names {
                        if let Some(bytes) = engine.read_file(&name).await {
                            let photo = PendingPhoto {
                                data_uri: preview_uri(&name, &bytes),
                                name,
                            };
                            photos.with_mut(|pending| pending.push(photo));
                        }
                    }
                },
            }

            div { id: "image-preview-container", class: "photo-previews",
                for (index , photo) in photos().into_iter().enumerate() {
                    div { class: "photo-preview", key: "{index}-{photo.name}",
                        img { src: "{photo.data_uri}", alt: "Image preview" }
                        button {
                            r#type: "button",
                            class: "photo-remove",
                            onclick: move |_| {
                                photos.with_mut(|pending| {
                                    pending.remove(index);
                                });
                            },
                            "×"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cap_accepts_up_to_three_files() {
        assert!(within_cap(0));
        assert!(within_cap(1));
        assert!(within_cap(3));
    }

    #[test]
    fn cap_rejects_four_or_more_files() {
        assert!(!within_cap(4));
        assert!(!within_cap(12));
    }

    #[test]
    fn preview_uri_carries_mime_and_payload() {
        let uri = preview_uri("pothole.png", &[0x89, 0x50, 0x4e, 0x47]);
        assert_eq!(uri, "data:image/png;base64,iVBORw==");
    }

    #[test]
    fn preview_uri_defaults_unknown_extensions() {
        let uri = preview_uri("photo.unknown-ext", b"x");
        assert!(uri.starts_with("data:application/octet-stream;base64,"));
    }
}
