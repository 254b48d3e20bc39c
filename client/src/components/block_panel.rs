//! Sidebar with the add-block button and the ordered list of block cards.
//!
//! Card order is the block list order, which is also paint order: the card at
//! the bottom draws on top.

use blockdraw::engine::Command;
use leptos::prelude::*;

use crate::app::{EditorHandle, dispatch};
use crate::components::block_card::BlockCard;

/// Add button plus one keyed card per block.
#[component]
pub fn BlockPanel() -> impl IntoView {
    let editor = expect_context::<EditorHandle>();
    let block_ids = move || editor.with(|e| e.core.blocks.ids());

    view! {
        <aside class="block-panel">
            <button class="block-panel__add" on:click=move |_| dispatch(editor, Command::AddBlock)>
                "+ Add block"
            </button>
            <div class="block-panel__list">
                <For each=block_ids key=|id| *id children=move |id| view! { <BlockCard id=id/> }/>
            </div>
        </aside>
    }
}
