//! One shape block: drag handle, delete button, shape selector, and field inputs.
//!
//! DESIGN
//! ======
//! The card keeps no state of its own. Every control reads its value from the
//! editor and writes back through a `Command`, so switching shapes only
//! re-labels inputs and never clears what was typed.

use blockdraw::blocks::{BlockId, Field, ShapeType};
use blockdraw::engine::Command;
use leptos::ev::DragEvent;
use leptos::prelude::*;

use crate::app::{EditorHandle, dispatch};
use crate::util::block_view::{display_style, field_class, input_type};
use crate::util::dom::mark_drag_source;

const COORD_FIELDS: [Field; 4] = [Field::X1, Field::Y1, Field::X2, Field::Y2];

/// Card for the block `id`.
#[component]
pub fn BlockCard(id: BlockId) -> impl IntoView {
    let editor = expect_context::<EditorHandle>();
    let shape = move || editor.with(|e| e.core.blocks.get(&id).map_or(ShapeType::Line, |b| b.shape));
    let dragging = move || editor.with(|e| e.core.interaction.is_dragging(&id));

    let on_drag_start = move |ev: DragEvent| {
        mark_drag_source(&ev, &id);
        dispatch(editor, Command::DragStart { id });
    };
    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        dispatch(editor, Command::Drop { target: id });
    };

    view! {
        <div
            class="block-card"
            class:block-card--dragging=dragging
            draggable="true"
            on:dragstart=on_drag_start
            on:dragend=move |_| dispatch(editor, Command::DragEnd)
            on:dragover=move |ev: DragEvent| ev.prevent_default()
            on:drop=on_drop
        >
            <div class="block-card__handle">"☰ Drag"</div>
            <button
                class="block-card__delete"
                title="Delete block"
                aria-label="Delete block"
                on:click=move |_| dispatch(editor, Command::DeleteBlock { id })
            >
                "✕"
            </button>

            <select
                class="block-card__shape"
                on:change=move |ev| {
                    dispatch(editor, Command::SetField { id, field: Field::Shape, value: event_target_value(&ev) });
                }
            >
                {ShapeType::ALL
                    .into_iter()
                    .map(|option| {
                        view! {
                            <option value=option.as_str() prop:selected=move || shape() == option>
                                {option.display_name()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>

            <div class="block-card__coords">
                {COORD_FIELDS.into_iter().map(|field| view! { <FieldInput id=id field=field/> }).collect_view()}
            </div>

            <div class="block-card__style">
                <FieldInput id=id field=Field::Color/>
                <FieldInput id=id field=Field::Thickness/>
            </div>
        </div>
    }
}

/// Text, number, or color input bound to one field of one block.
#[component]
fn FieldInput(id: BlockId, field: Field) -> impl IntoView {
    let editor = expect_context::<EditorHandle>();
    let shape = move || editor.with(|e| e.core.blocks.get(&id).map_or(ShapeType::Line, |b| b.shape));
    let text = move || editor.with(|e| e.core.blocks.get(&id).map(|b| b.field(field).to_owned()).unwrap_or_default());

    view! {
        <input
            class=field_class(field)
            type=input_type(field)
            placeholder=move || field.placeholder(shape())
            style:display=move || display_style(field.is_visible(shape()))
            prop:value=text
            on:input=move |ev| dispatch(editor, Command::SetField { id, field, value: event_target_value(&ev) })
            on:focus=move |_| dispatch(editor, Command::Focus { id, field })
            on:blur=move |_| dispatch(editor, Command::Blur { id, field })
        />
    }
}
