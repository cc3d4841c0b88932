//! Authoritative store of the canvas's text boxes.

use crate::boxes::{BoxId, BoxPatch, TextBox, MAX_FONT_SIZE, MIN_FONT_SIZE};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A full copy of the store's boxes at one instant, as kept by the history.
pub type Snapshot = Vec<TextBox>;

/// Hit-test slack around a box, matching the padded click target of the
/// rendered element.
const HIT_TOLERANCE: f64 = 4.0;

/// Holds the current sequence of text boxes and allocates their ids.
///
/// Boxes are kept in creation order, which doubles as back-to-front
/// stacking order. Mutations address boxes by id and silently no-op when
/// the id is unknown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoxStore {
    boxes: Vec<TextBox>,
    next_id: u64,
}

impl Default for BoxStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BoxStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            boxes: Vec::new(),
            next_id: 1,
        }
    }

    fn allocate_id(&mut self) -> BoxId {
        let id = BoxId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Append a new default-styled box at the default position.
    /// Returns the new box's id.
    pub fn add_box(&mut self) -> BoxId {
        self.add_box_at(TextBox::DEFAULT_POSITION)
    }

    /// Append a new default-styled box at the given position.
    /// Returns the new box's id.
    pub fn add_box_at(&mut self, position: Point) -> BoxId {
        let id = self.allocate_id();
        self.boxes.push(TextBox::new(id, position));
        id
    }

    /// Get a box by id.
    pub fn get(&self, id: BoxId) -> Option<&TextBox> {
        self.boxes.iter().find(|b| b.id == id)
    }

    /// Get a mutable reference to a box by id.
    pub fn get_mut(&mut self, id: BoxId) -> Option<&mut TextBox> {
        self.boxes.iter_mut().find(|b| b.id == id)
    }

    /// Replace the matching box's coordinates. No-op if the id is unknown.
    pub fn update_position(&mut self, id: BoxId, position: Point) {
        if let Some(text_box) = self.get_mut(id) {
            text_box.position = position;
        }
    }

    /// Merge a partial set of fields into the matching box. Font sizes are
    /// clamped to the valid range. No-op if the id is unknown.
    pub fn apply_patch(&mut self, id: BoxId, patch: BoxPatch) {
        let Some(text_box) = self.get_mut(id) else {
            return;
        };
        if let Some(content) = patch.content {
            text_box.content = content;
        }
        if let Some(size) = patch.font_size {
            text_box.font_size = size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        }
        if let Some(family) = patch.font_family {
            text_box.font_family = family;
        }
        if let Some(bold) = patch.bold {
            text_box.bold = bold;
        }
        if let Some(italic) = patch.italic {
            text_box.italic = italic;
        }
        if let Some(underline) = patch.underline {
            text_box.underline = underline;
        }
        if let Some(alignment) = patch.alignment {
            text_box.alignment = alignment;
        }
    }

    /// All boxes in back-to-front order.
    pub fn boxes(&self) -> &[TextBox] {
        &self.boxes
    }

    /// Number of boxes.
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Check whether the store holds no boxes.
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Topmost box whose bounds contain the point, if any.
    /// Scans front to back so overlapping boxes resolve to the most
    /// recently added one.
    pub fn box_at_point(&self, point: Point) -> Option<BoxId> {
        self.boxes
            .iter()
            .rev()
            .find(|b| b.hit_test(point, HIT_TOLERANCE))
            .map(|b| b.id)
    }

    /// Copy the current boxes out for the history.
    pub fn snapshot(&self) -> Snapshot {
        self.boxes.clone()
    }

    /// Replace the current boxes with a snapshot. The id counter advances
    /// past every restored id, so restored boxes never collide with future
    /// allocations.
    pub fn restore(&mut self, snapshot: Snapshot) {
        let max_restored = snapshot.iter().map(|b| b.id.0 + 1).max().unwrap_or(1);
        self.next_id = self.next_id.max(max_restored);
        self.boxes = snapshot;
    }
}
