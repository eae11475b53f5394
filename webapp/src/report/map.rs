use std::cell::RefCell;

use leaflet::{
    LatLng, Map, MapOptions, Marker, MarkerOptions, MouseEvent, TileLayer, TileLayerOptions,
};
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;

use api::coords::Coordinates;

const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const TILE_ATTRIBUTION: &str =
    r#"&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors"#;
const INITIAL_ZOOM: f64 = 16.0;

struct MapHandle {
    map: Map,
    marker: Marker,
}

// At most one map/marker pair per page lifetime; the handle lives here so the
// Leaflet callbacks can reach it without touching component state.
thread_local! {
    static HANDLE: RefCell<Option<MapHandle>> = const { RefCell::new(None) };
}

/// Lazily creates the map and its draggable marker inside the given container.
/// Idempotent: once the pair exists this is a no-op, the widget is never
/// re-created. Marker drag-end and map click both report through `on_pick`;
/// a click additionally recenters the view.
pub fn ensure(
    container: &str,
    coords: Coordinates,
    on_pick: impl Fn(Coordinates) + Clone + 'static,
) {
    if HANDLE.with(|handle| handle.borrow().is_some()) {
        return;
    }

    let map = Map::new(container, &MapOptions::default());
    map.set_view(&LatLng::new(coords.lat, coords.lng), INITIAL_ZOOM);

    let tile_options = TileLayerOptions::default();
    tile_options.set_attribution(TILE_ATTRIBUTION.to_string());
    TileLayer::new_options(TILE_URL, &tile_options).add_to(&map);

    let marker_options = MarkerOptions::default();
    marker_options.set_draggable(true);
    let marker = Marker::new_with_options(&LatLng::new(coords.lat, coords.lng), &marker_options);
    marker.add_to(&map);

    {
        let on_pick = on_pick.clone();
        let on_drag_end = Closure::<dyn FnMut(JsValue)>::new(move |_event: JsValue| {
            if let Some(coords) = marker_position() {
                on_pick(coords);
            }
        });
        marker.on("dragend", on_drag_end.as_ref());
        on_drag_end.forget();
    }

    map.on_mouse_click(Box::new(move |event: MouseEvent| {
        let position = event.lat_lng();
        let picked = Coordinates::new(position.lat(), position.lng());
        pan_to(picked);
        on_pick(picked);
    }));

    HANDLE.with(|handle| *handle.borrow_mut() = Some(MapHandle { map, marker }));
}

pub fn place_marker(coords: Coordinates) {
    HANDLE.with(|handle| {
        if let Some(handle) = handle.borrow().as_ref() {
            handle.marker.set_lat_lng(&LatLng::new(coords.lat, coords.lng));
        }
    });
}

pub fn pan_to(coords: Coordinates) {
    HANDLE.with(|handle| {
        if let Some(handle) = handle.borrow().as_ref() {
            handle.map.pan_to(&LatLng::new(coords.lat, coords.lng));
        }
    });
}

fn marker_position() -> Option<Coordinates> {
    HANDLE.with(|handle| {
        handle.borrow().as_ref().map(|handle| {
            let position = handle.marker.get_lat_lng();
            Coordinates::new(position.lat(), position.lng())
        })
    })
}

/// Drops the widget handle. Called when the report page unmounts so that a
/// remount starts a fresh page lifetime.
pub fn reset() {
    HANDLE.with(|handle| *handle.borrow_mut() = None);
}
