//! Editor engine: the single command entry point over the block list and
//! interaction state.
//!
//! The host UI turns every DOM event into a [`Command`]. [`EditorCore`] applies
//! it and reports whether the scene changed; [`Editor`] additionally owns the
//! drawing surface and repaints before `dispatch` returns, so a repaint always
//! reflects the state at the end of the handler that caused it.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::blocks::{BlockId, BlockList, Field};
use crate::config::EditorConfig;
use crate::input::{InteractionState, Point, SurfacePoint};
use crate::render;
use crate::surface::Surface;

/// A user interaction, already mapped off the DOM.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Append a default block.
    AddBlock,
    /// Remove a block.
    DeleteBlock { id: BlockId },
    /// Move `moved` next to `target` (see [`BlockList::move_block`]).
    MoveBlock { moved: BlockId, target: BlockId },
    /// Replace one field's text. For [`Field::Shape`] the value is a shape name.
    SetField { id: BlockId, field: Field, value: String },
    /// A field received focus.
    Focus { id: BlockId, field: Field },
    /// A field lost focus.
    Blur { id: BlockId, field: Field },
    /// The surface was clicked.
    SurfaceClick { at: SurfacePoint },
    /// The pointer moved over the surface.
    PointerMove { client: Point, at: SurfacePoint },
    /// The pointer left the surface.
    PointerLeave,
    /// A block's drag handle started a drag.
    DragStart { id: BlockId },
    /// The drag finished, whether or not it dropped.
    DragEnd,
    /// The dragged block was dropped on `target`.
    Drop { target: BlockId },
}

/// What the host must do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Nothing visible on the surface changed.
    None,
    /// The block list changed and the surface must be repainted.
    RenderNeeded,
}

impl Action {
    fn from_changed(changed: bool) -> Self {
        if changed { Self::RenderNeeded } else { Self::None }
    }
}

/// Editor state that doesn't depend on a drawing surface.
///
/// Separated from [`Editor`] so it can be tested without a browser.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorCore {
    pub blocks: BlockList,
    pub interaction: InteractionState,
    pub config: EditorConfig,
}

impl EditorCore {
    #[must_use]
    pub fn new(config: EditorConfig) -> Self {
        Self { blocks: BlockList::new(), interaction: InteractionState::default(), config }
    }

    /// Apply one command.
    pub fn dispatch(&mut self, command: Command) -> Action {
        log::debug!("dispatch {command:?}");
        match command {
            Command::AddBlock => {
                self.add_block();
                Action::RenderNeeded
            }
            Command::DeleteBlock { id } => self.delete_block(&id),
            Command::MoveBlock { moved, target } => Action::from_changed(self.blocks.move_block(&moved, &target)),
            Command::SetField { id, field, value } => Action::from_changed(self.blocks.set_field(&id, field, value)),
            Command::Focus { id, field } => {
                self.interaction.focus(id, field);
                Action::None
            }
            Command::Blur { id, field } => {
                self.interaction.blur(id, field);
                Action::None
            }
            Command::SurfaceClick { at } => self.pick(at),
            Command::PointerMove { client, at } => {
                self.interaction.hover(client, at);
                Action::None
            }
            Command::PointerLeave => {
                self.interaction.leave();
                Action::None
            }
            Command::DragStart { id } => {
                if self.blocks.index_of(&id).is_some() {
                    self.interaction.drag_start(id);
                }
                Action::None
            }
            Command::DragEnd => {
                self.interaction.drag_end();
                Action::None
            }
            Command::Drop { target } => self.drop_on(&target),
        }
    }

    /// Append a default block and return its id.
    pub fn add_block(&mut self) -> BlockId {
        let defaults = self.config.block_defaults();
        self.blocks.add_block(&defaults)
    }

    fn delete_block(&mut self, id: &BlockId) -> Action {
        self.interaction.forget_block(id);
        match self.blocks.delete_block(id) {
            Some(_) => Action::RenderNeeded,
            None => Action::None,
        }
    }

    fn pick(&mut self, at: SurfacePoint) -> Action {
        let Some(picked) = self.interaction.pick(at) else {
            return Action::None;
        };
        Action::from_changed(self.blocks.set_field(&picked.block, picked.field, picked.value))
    }

    fn drop_on(&mut self, target: &BlockId) -> Action {
        let Some(dragged) = self.interaction.dragged else {
            return Action::None;
        };
        Action::from_changed(self.blocks.move_block(&dragged, target))
    }
}

/// The full editor: [`EditorCore`] plus the surface it paints on.
///
/// The surface is attached once the host has mounted its canvas; commands
/// dispatched before that only update the model.
pub struct Editor<S: Surface> {
    surface: Option<S>,
    pub core: EditorCore,
}

impl<S: Surface> Editor<S> {
    /// Create an editor with no surface attached yet.
    #[must_use]
    pub fn new(config: EditorConfig) -> Self {
        Self { surface: None, core: EditorCore::new(config) }
    }

    /// Attach the drawing surface and paint the current scene onto it.
    pub fn attach(&mut self, surface: S) {
        self.surface = Some(surface);
        self.render();
    }

    /// The attached surface, if any.
    #[must_use]
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Apply a command and, if the scene changed, repaint before returning.
    pub fn dispatch(&mut self, command: Command) -> Action {
        let action = self.core.dispatch(command);
        if action == Action::RenderNeeded {
            self.render();
        }
        action
    }

    /// Repaint the whole scene. A no-op until a surface is attached.
    pub fn render(&self) {
        let Some(surface) = self.surface.as_ref() else {
            return;
        };
        let (width, height) = self.core.config.surface_size();
        render::draw(surface, &self.core.blocks, width, height);
    }
}
