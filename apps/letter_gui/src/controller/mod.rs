//! Controller layer: input form, drag-reorder state machine, clipboard export, and the
//! list events the UI emits while rendering rows.

pub mod drag;
pub mod events;
pub mod export;
pub mod form;
