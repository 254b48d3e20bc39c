//! Browser lookups used by the components. Without the `csr` feature these
//! return nothing, so the component tree still builds for native tests.

use blockdraw::blocks::BlockId;
use blockdraw::input::{Point, SurfacePoint};
use leptos::ev::{DragEvent, MouseEvent};
use leptos::prelude::*;

#[cfg(feature = "csr")]
use blockdraw::input::{content_origin, surface_point};

/// Raw `data-config` attribute of `<body>`, if any.
#[cfg(feature = "csr")]
pub fn mount_config_attr() -> Option<String> {
    web_sys::window()?.document()?.body()?.get_attribute("data-config")
}

#[cfg(not(feature = "csr"))]
pub fn mount_config_attr() -> Option<String> {
    None
}

/// Client position and surface-relative pixel of a mouse event over the canvas.
#[cfg(feature = "csr")]
pub fn surface_event_point(canvas: &NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<(Point, SurfacePoint)> {
    let canvas = canvas.get_untracked()?;
    let rect = canvas.get_bounding_client_rect();
    let client = Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()));
    let origin = content_origin(
        Point::new(rect.left(), rect.top()),
        f64::from(canvas.client_left()),
        f64::from(canvas.client_top()),
    );
    Some((client, surface_point(client, origin)))
}

#[cfg(not(feature = "csr"))]
pub fn surface_event_point(_canvas: &NodeRef<leptos::html::Canvas>, _ev: &MouseEvent) -> Option<(Point, SurfacePoint)> {
    None
}

/// Tag the drag payload so every browser starts the drag.
#[cfg(feature = "csr")]
pub fn mark_drag_source(ev: &DragEvent, id: &BlockId) {
    let Some(transfer) = ev.data_transfer() else {
        return;
    };
    transfer.set_effect_allowed("move");
    if let Err(err) = transfer.set_data("text/plain", &id.to_string()) {
        log::debug!("drag payload not set: {err:?}");
    }
}

#[cfg(not(feature = "csr"))]
pub fn mark_drag_source(_ev: &DragEvent, _id: &BlockId) {}
