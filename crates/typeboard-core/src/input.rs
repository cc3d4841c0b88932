//! Pointer event vocabulary for the canvas interaction path.

use crate::boxes::BoxId;
use crate::store::Snapshot;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Pointer button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// A pointer event in canvas-local coordinates.
///
/// The UI shell is responsible for translating window positions into the
/// canvas's coordinate space before handing events to the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PointerEvent {
    Down {
        position: Point,
        button: PointerButton,
    },
    Move {
        position: Point,
    },
    Up {
        position: Point,
        button: PointerButton,
    },
}

/// Bookkeeping for a drag in flight.
#[derive(Debug, Clone)]
pub struct DragState {
    /// The box being dragged.
    pub box_id: BoxId,
    /// The box's position when the drag began.
    pub origin: Point,
    /// Store contents captured at drag start; pushed to the history on
    /// release if the box actually moved.
    pub pre_drag: Snapshot,
}
