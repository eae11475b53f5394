use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{GeolocationPosition, GeolocationPositionError, PositionOptions};

use api::coords::Coordinates;

// High accuracy, 12 second timeout, never a cached position.
const TIMEOUT_MS: u32 = 12_000;

/// Why the device could not be located. `Unsupported` (no Geolocation API at
/// all) and `Failed` (denied, unavailable, or timed out) lead to different
/// user-facing notices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GeolocateError {
    Unsupported,
    Failed,
}

/// One attempt at the device geolocation API, bridged to an awaitable result.
pub async fn current_position() -> Result<Coordinates, GeolocateError> {
    let window = web_sys::window().ok_or(GeolocateError::Unsupported)?;
    let geolocation = window
        .navigator()
        .geolocation()
        .map_err(|_| GeolocateError::Unsupported)?;

    let (tx, rx) = oneshot::channel::<Result<Coordinates, GeolocateError>>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let on_success = {
        let tx = tx.clone();
        Closure::<dyn FnMut(GeolocationPosition)>::new(move |position: GeolocationPosition| {
            if let Some(tx) = tx.borrow_mut().take() {
                let coords = position.coords();
                let _ = tx.send(Ok(Coordinates::new(coords.latitude(), coords.longitude())));
            }
        })
    };

    let on_error = {
        let tx = tx.clone();
        Closure::<dyn FnMut(GeolocationPositionError)>::new(
            move |_error: GeolocationPositionError| {
                if let Some(tx) = tx.borrow_mut().take() {
                    let _ = tx.send(Err(GeolocateError::Failed));
                }
            },
        )
    };

    let options = PositionOptions::new();
    options.set_enable_high_accuracy(true);
    options.set_timeout(TIMEOUT_MS);
    options.set_maximum_age(0);

    geolocation
        .get_current_position_with_error_callback_and_options(
            on_success.as_ref().unchecked_ref::<js_sys::Function>(),
            Some(on_error.as_ref().unchecked_ref::<js_sys::Function>()),
            &options,
        )
        .map_err(|_| GeolocateError::Unsupported)?;

    // the browser invokes the callbacks after this function has suspended
    on_success.forget();
    on_error.forget();

    rx.await.unwrap_or(Err(GeolocateError::Failed))
}
