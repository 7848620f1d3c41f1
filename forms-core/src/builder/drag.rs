//! Drag-Reorder Controller
//!
//! Interprets a stream of builder gestures against an [`ElementList`].
//!
//! ```text
//!            PickUp(i)                 Hover(j), j != i
//!   Idle ──────────────▶ Dragging(i) ──────────────────▶ Dragging(j)
//!    ▲                        │          (move_to(i, j))
//!    └──── Drop / Cancel ─────┘
//!
//!   PaletteDrop(label): append, state unchanged
//!   Click(id):          select id (independent of drag state)
//! ```
//!
//! Every hover applies one array-move immediately, so each intermediate
//! state is itself a valid ordering.

use tracing::debug;

use crate::domain::{ElementId, ElementLabel, ElementList, FormElement};
use crate::error::{FormsError, Result};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    /// Dragging the element currently sitting at `index`
    Dragging { index: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    /// Start dragging the list element at this index
    PickUp(usize),
    /// Dragged element is over the list element at this index
    Hover(usize),
    /// Release the dragged element
    Drop,
    /// Abort the drag; the order reached so far stays
    Cancel,
    /// A palette item was dropped onto the list
    PaletteDrop(ElementLabel),
    /// A list element was clicked
    Click(ElementId),
}

/// Effect of a gesture on the list
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureOutcome {
    Unchanged,
    Moved { from: usize, to: usize },
    Appended(FormElement),
    Selected(ElementId),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DragController {
    state: DragState,
    selected: Option<ElementId>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn selected(&self) -> Option<ElementId> {
        self.selected
    }

    /// Apply one gesture. On error neither the list nor the controller
    /// state changes.
    pub fn apply(&mut self, list: &mut ElementList, gesture: Gesture) -> Result<GestureOutcome> {
        debug!(?gesture, state = ?self.state, "builder gesture");
        match gesture {
            Gesture::PickUp(index) => {
                self.pick_up(list, index)?;
                Ok(GestureOutcome::Unchanged)
            }
            Gesture::Hover(index) => self.hover(list, index),
            Gesture::Drop | Gesture::Cancel => {
                self.release();
                Ok(GestureOutcome::Unchanged)
            }
            Gesture::PaletteDrop(label) => Ok(GestureOutcome::Appended(self.palette_drop(list, label)?)),
            Gesture::Click(id) => {
                self.select(list, id)?;
                Ok(GestureOutcome::Selected(id))
            }
        }
    }

    /// Picking up while already dragging restarts the drag from `index`.
    pub fn pick_up(&mut self, list: &ElementList, index: usize) -> Result<()> {
        if index >= list.len() {
            return Err(FormsError::OutOfRange {
                index,
                len: list.len(),
            });
        }
        self.state = DragState::Dragging { index };
        Ok(())
    }

    /// Move the dragged element to `target` and track it there.
    /// Hovering at the current index, or while idle, changes nothing.
    pub fn hover(&mut self, list: &mut ElementList, target: usize) -> Result<GestureOutcome> {
        let DragState::Dragging { index } = self.state else {
            return Ok(GestureOutcome::Unchanged);
        };
        if index == target {
            return Ok(GestureOutcome::Unchanged);
        }

        list.move_to(index, target)?;
        self.state = DragState::Dragging { index: target };
        Ok(GestureOutcome::Moved {
            from: index,
            to: target,
        })
    }

    pub fn release(&mut self) {
        self.state = DragState::Idle;
    }

    /// Palette drags never enter `Dragging`; the drop appends directly.
    pub fn palette_drop(&mut self, list: &mut ElementList, label: ElementLabel) -> Result<FormElement> {
        list.append(label)
    }

    pub fn select(&mut self, list: &ElementList, id: ElementId) -> Result<()> {
        if !list.contains(id) {
            return Err(FormsError::not_found(format!("element {id}")));
        }
        self.selected = Some(id);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Remove the selected element and clear the selection. A drag in
    /// progress is cancelled since its tracked index may have shifted.
    pub fn remove_selected(&mut self, list: &mut ElementList) -> Option<FormElement> {
        let id = self.selected.take()?;
        self.state = DragState::Idle;
        list.remove(id)
    }
}
