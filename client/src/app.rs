//! Root application component and the shared editor handle.

use blockdraw::engine::{Command, Editor};
use blockdraw::surface::CanvasSurface;
use leptos::prelude::*;

use crate::components::{block_panel::BlockPanel, canvas_host::CanvasHost};
use crate::util::config::resolve_config;
use crate::util::dom::mount_config_attr;

/// The editor, shared through context.
///
/// Local storage because the attached canvas context is a JS handle.
pub type EditorHandle = RwSignal<Editor<CanvasSurface>, LocalStorage>;

/// Apply a command. The editor repaints inside `dispatch`, then the signal
/// notifies the form views.
pub fn dispatch(editor: EditorHandle, command: Command) {
    editor.update(|e| {
        e.dispatch(command);
    });
}

/// Root application component.
///
/// Reads the optional `data-config` JSON from `<body>` and provides the editor
/// to every child component.
#[component]
pub fn App() -> impl IntoView {
    let config = resolve_config(mount_config_attr().as_deref());
    let editor: EditorHandle = RwSignal::new_local(Editor::new(config));
    provide_context(editor);

    view! {
        <main class="editor">
            <BlockPanel/>
            <CanvasHost/>
        </main>
    }
}
