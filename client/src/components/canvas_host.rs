//! Bridge between the DOM canvas and the editor.
//!
//! ARCHITECTURE
//! ============
//! On mount the host binds the canvas 2D context and attaches it to the editor,
//! which paints the current scene. After that the host only translates pointer
//! events into picker commands: clicks fill the focused coordinate field, and
//! moves drive the floating `x:… y:…` readout.

use blockdraw::engine::Command;
use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::app::{EditorHandle, dispatch};
use crate::util::block_view::readout_style;
use crate::util::dom::surface_event_point;

/// Canvas element plus the coordinate readout.
#[component]
pub fn CanvasHost() -> impl IntoView {
    let editor = expect_context::<EditorHandle>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "csr")]
    Effect::new(move || {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        if editor.with_untracked(|e| e.surface().is_some()) {
            return;
        }
        let (width, height) = editor.with_untracked(|e| (e.core.config.surface_width, e.core.config.surface_height));
        match blockdraw::surface::bind_canvas(&canvas, width, height) {
            Ok(surface) => editor.update(|e| e.attach(surface)),
            Err(err) => log::error!("canvas unavailable: {err}"),
        }
    });

    // Keep focus in the active input; otherwise it blurs before the click lands.
    let on_mouse_down = move |ev: MouseEvent| ev.prevent_default();

    let on_click = move |ev: MouseEvent| {
        if let Some((_, at)) = surface_event_point(&canvas_ref, &ev) {
            dispatch(editor, Command::SurfaceClick { at });
        }
    };

    let on_mouse_move = move |ev: MouseEvent| {
        if let Some((client, at)) = surface_event_point(&canvas_ref, &ev) {
            dispatch(editor, Command::PointerMove { client, at });
        }
    };

    let readout = move || {
        editor.with(|e| e.core.interaction.readout.clone()).map(|r| {
            let style = readout_style(&r);
            view! { <div class="coord-readout" style=style>{r.text}</div> }
        })
    };

    view! {
        <section class="canvas-pane">
            <canvas
                class="canvas-host"
                node_ref=canvas_ref
                on:mousedown=on_mouse_down
                on:click=on_click
                on:mousemove=on_mouse_move
                on:mouseleave=move |_| dispatch(editor, Command::PointerLeave)
            >
                "Your browser does not support canvas."
            </canvas>
            {readout}
        </section>
    }
}
