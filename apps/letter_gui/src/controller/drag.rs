//! Drag-to-reorder state machine, independent of how rows are drawn.

use letter_core::NameList;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        source: usize,
    },
}

#[derive(Debug, Default)]
pub struct DragReorderController {
    state: DragState,
}

impl DragReorderController {
    #[cfg(test)]
    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn dragging_index(&self) -> Option<usize> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging { source } => Some(source),
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging_index().is_some()
    }

    /// Whether the row at `index` should be drawn as the one being dragged.
    pub fn is_dragged(&self, index: usize) -> bool {
        self.dragging_index() == Some(index)
    }

    /// A later drag-start replaces whatever source was tracked before.
    pub fn begin(&mut self, index: usize) {
        tracing::trace!(index, "drag started");
        self.state = DragState::Dragging { source: index };
    }

    /// Drag-over on any row: dropping is allowed while a drag is in progress.
    pub fn accepts_drop(&self) -> bool {
        self.is_dragging()
    }

    /// Drops the dragged row onto `target`. The state returns to idle whether or not the
    /// list accepted the move.
    pub fn drop_on(&mut self, target: usize, list: &mut NameList) -> bool {
        let moved = match self.state {
            DragState::Idle => false,
            DragState::Dragging { source } => list.reorder(source, target),
        };
        self.state = DragState::Idle;
        moved
    }

    pub fn cancel(&mut self) {
        if self.is_dragging() {
            tracing::trace!("drag abandoned");
        }
        self.state = DragState::Idle;
    }

    /// Mirrors the platform drag payload once per frame. A payload starts (or retargets)
    /// a drag; a missing payload with the pointer released means the drag ended without
    /// a drop on any row.
    pub fn sync_with_pointer(&mut self, payload: Option<usize>, pointer_down: bool) {
        match payload {
            Some(index) if self.dragging_index() != Some(index) => self.begin(index),
            Some(_) => {}
            None if !pointer_down => self.cancel(),
            None => {}
        }
    }
}

#[cfg(test)]
#[path = "tests/drag_tests.rs"]
mod tests;
