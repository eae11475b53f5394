use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;
use gloo_console::error as console_error;

use api::coords::Coordinates;
use api::{geocode, ipgeo};

use crate::common::notify;
use crate::components::modal::Modal;

use super::geolocate::{self, GeolocateError};
use super::map;

const MAP_CONTAINER: &str = "location-map";

// One update routine for every coordinate source: GPS, IP fallback, address
// search, marker drag and map click all land here. The visible address and
// the coordinate attributes on the input change together, never separately.
async fn update_location(
    picked: Coordinates,
    mut address_text: Signal<String>,
    mut coords: Signal<Option<Coordinates>>,
) {
    address_text.set(String::from("Fetching address..."));

    let address = geocode::reverse_geocode(picked).await;

    address_text.set(address);
    coords.set(Some(picked));

    map::place_marker(picked);
}

async fn set_initial_location(
    picked: Coordinates,
    mut address_text: Signal<String>,
    mut coords: Signal<Option<Coordinates>>,
    mut map_visible: Signal<bool>,
    mut confirm_open: Signal<bool>,
) {
    map_visible.set(true);

    update_location(picked, address_text, coords).await;

    // First successful resolution creates the widget; the await above has
    // already revealed the container. Later resolutions only recenter.
    map::ensure(MAP_CONTAINER, picked, move |pin| {
        spawn(update_location(pin, address_text, coords));
    });
    map::pan_to(picked);

    confirm_open.set(true);
}

// GPS first, then one IP lookup, then the manual-entry notice. Each step is
// attempted exactly once.
async fn acquire_location(
    address_text: Signal<String>,
    coords: Signal<Option<Coordinates>>,
    map_visible: Signal<bool>,
    confirm_open: Signal<bool>,
) {
    let gps_error = match geolocate::current_position().await {
        Ok(position) => {
            set_initial_location(position, address_text, coords, map_visible, confirm_open).await;
            return;
        }
        Err(error) => error,
    };

    match ipgeo::lookup().await {
        Ok(position) => {
            set_initial_location(position, address_text, coords, map_visible, confirm_open).await;
        }
        Err(_) => match gps_error {
            GeolocateError::Unsupported => notify(
                "Geolocation not supported, and IP fallback failed. Please enter your address manually.",
            ),
            GeolocateError::Failed => {
                notify("Unable to get your location. Please type your address.")
            }
        },
    }
}

async fn run_search(
    query: String,
    address_text: Signal<String>,
    coords: Signal<Option<Coordinates>>,
    map_visible: Signal<bool>,
    confirm_open: Signal<bool>,
) {
    if query.trim().is_empty() {
        return;
    }

    match geocode::search_address(&query).await {
        Ok(Some(position)) => {
            set_initial_location(position, address_text, coords, map_visible, confirm_open).await;
        }
        Ok(None) => notify("No results found for that address."),
        Err(err) => {
            console_error!(format!("address search failed: {err}"));
            notify("Address search failed. Please try again.");
        }
    }
}

#[component]
pub fn LocationPicker() -> Element {
    let mut address_text = use_signal(String::new);
    let coords = use_signal(|| None::<Coordinates>);
    let map_visible = use_signal(|| false);
    let mut confirm_open = use_signal(|| false);
    let mut gps_busy = use_signal(|| false);
    let mut search_text = use_signal(String::new);

    // a remount behaves like a fresh page load
    use_drop(map::reset);

    let (lat_attr, lng_attr) = match coords() {
        Some(position) => (position.lat.to_string(), position.lng.to_string()),
        None => (String::new(), String::new()),
    };

    let confirm_footer = rsx! {
        button {
            id: "cancel-location",
            r#type: "button",
            class: "btn btn-secondary",
            onclick: move |_| confirm_open.set(false),
            "Cancel"
        }
        button {
            id: "confirm-location",
            r#type: "button",
            class: "btn btn-action",
            onclick: move |_| confirm_open.set(false),
            "Use this location"
        }
    };

    rsx! {
        div { class: "form-group",
            label { class: "form-label", r#for: "location-input", "Location" }
            input {
                id: "location-input",
                name: "location",
                class: "form-input",
                r#type: "text",
                placeholder: "Where is the issue?",
                value: "{address_text}",
                "data-latitude": "{lat_attr}",
                "data-longitude": "{lng_attr}",
                oninput: move |event| address_text.set(event.value()),
            }

            div { class: "location-toolbar",
                button {
                    id: "get-location-btn",
                    r#type: "button",
                    class: "btn btn-secondary",
                    disabled: gps_busy(),
                    onclick: move |_| async move {
                        gps_busy.set(true);
                        acquire_location(address_text, coords, map_visible, confirm_open).await;
                        gps_busy.set(false);
                    },
                    if gps_busy() {
                        span { class: "spinner" }
                    }
                    "GPS"
                }
                input {
                    id: "address-search",
                    class: "form-input",
                    r#type: "text",
                    placeholder: "Search for an address",
                    value: "{search_text}",
                    oninput: move |event| search_text.set(event.value()),
                    onkeydown: move |event| {
                        if event.key() == Key::Enter {
                            event.prevent_default();
                            spawn(run_search(
                                search_text(),
                                address_text,
                                coords,
                                map_visible,
                                confirm_open,
                            ));
                        }
                    },
                }
                button {
                    id: "search-btn",
                    r#type: "button",
                    class: "btn btn-primary",
                    onclick: move |_| {
                        spawn(run_search(
                            search_text(),
                            address_text,
                            coords,
                            map_visible,
                            confirm_open,
                        ));
                    },
                    "Search"
                }
            }

            div {
                id: MAP_CONTAINER,
                class: if map_visible() { "location-map" } else { "location-map hidden" },
            }
            p {
                id: "map-instruction",
                class: if map_visible() { "map-instruction" } else { "map-instruction hidden" },
                "Drag the pin or click the map to fine-tune the location."
            }

            if confirm_open() {
                Modal {
                    id: "location-modal",
                    title: "Confirm location",
                    on_close: move |_| confirm_open.set(false),
                    footer: confirm_footer,

                    p { "We detected the issue location as:" }
                    p { id: "detected-location", class: "detected-location", "{address_text}" }
                }
            }
        }
    }
}
