//! Row interactions collected during a frame and applied once the rows are drawn.

use letter_core::{NameId, NameList};

use crate::controller::drag::DragReorderController;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEvent {
    BeginDrag(usize),
    DropOn(usize),
    Remove(NameId),
}

/// Returns whether the list changed.
pub fn apply_list_event(
    event: ListEvent,
    list: &mut NameList,
    drag: &mut DragReorderController,
) -> bool {
    match event {
        ListEvent::BeginDrag(index) => {
            drag.begin(index);
            false
        }
        ListEvent::DropOn(target) => drag.drop_on(target, list),
        ListEvent::Remove(id) => list.remove_name(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_then_drop_moves_row() {
        let mut list = NameList::from_names(["Alice", "Bob", "Carol"]);
        let mut drag = DragReorderController::default();

        assert!(!apply_list_event(ListEvent::BeginDrag(2), &mut list, &mut drag));
        assert!(apply_list_event(ListEvent::DropOn(0), &mut list, &mut drag));

        let order: Vec<&str> = list.iter().map(|e| e.name()).collect();
        assert_eq!(order, ["Carol", "Alice", "Bob"]);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn remove_event_deletes_by_id() {
        let mut list = NameList::from_names(["Alice", "Bob"]);
        let mut drag = DragReorderController::default();
        let alice = list.get(0).map(|e| e.id()).expect("alice");

        assert!(apply_list_event(ListEvent::Remove(alice), &mut list, &mut drag));
        assert!(!apply_list_event(ListEvent::Remove(alice), &mut list, &mut drag));
        assert_eq!(list.len(), 1);
    }
}
