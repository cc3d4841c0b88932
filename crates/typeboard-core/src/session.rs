//! Editor session: the single mutation path over the store and its history.

use crate::boxes::{Alignment, BoxId, BoxPatch, FontFamily, TextBox};
use crate::history::History;
use crate::input::{DragState, PointerButton, PointerEvent};
use crate::store::BoxStore;
use kurbo::Point;

/// One editing session: the box store, its undo history, and the
/// interaction state around them.
///
/// Every UI-facing operation funnels through here so that the
/// snapshot-before-mutate discipline lives in one place instead of being
/// scattered across handlers.
#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    store: BoxStore,
    history: History,
    /// The box currently selected for editing, if any.
    active: Option<BoxId>,
    /// Drag in flight, if any.
    drag: Option<DragState>,
    /// Box with an open content-edit burst. Consecutive content edits to
    /// the same box share one history entry; any other operation seals the
    /// burst.
    edit_burst: Option<BoxId>,
}

impl EditorSession {
    /// Create a session with an empty canvas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the box store.
    pub fn store(&self) -> &BoxStore {
        &self.store
    }

    /// Id of the active box, if any.
    pub fn active_id(&self) -> Option<BoxId> {
        self.active
    }

    /// The active box record, if one is selected and still exists.
    pub fn active_box(&self) -> Option<&TextBox> {
        self.active.and_then(|id| self.store.get(id))
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Select a box. Selecting a different box seals any open edit burst.
    pub fn select(&mut self, id: BoxId) {
        if self.active != Some(id) {
            self.seal_edit_burst();
        }
        self.active = Some(id);
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.seal_edit_burst();
        self.active = None;
    }

    fn seal_edit_burst(&mut self) {
        self.edit_burst = None;
    }

    /// Snapshot the current state ahead of a mutation.
    fn record(&mut self) {
        self.seal_edit_burst();
        self.history.record(self.store.snapshot());
    }

    /// Add a text box at the default position with default style and
    /// select it. Returns the new box's id.
    pub fn add_text_box(&mut self) -> BoxId {
        self.record();
        let id = self.store.add_box();
        self.active = Some(id);
        id
    }

    /// Set the active box's font family.
    pub fn set_font_family(&mut self, family: FontFamily) {
        self.patch_active(BoxPatch {
            font_family: Some(family),
            ..Default::default()
        });
    }

    /// Set the active box's font size (clamped by the store).
    pub fn set_font_size(&mut self, size: f64) {
        self.patch_active(BoxPatch {
            font_size: Some(size),
            ..Default::default()
        });
    }

    /// Flip the active box's bold flag.
    pub fn toggle_bold(&mut self) {
        let Some(bold) = self.active_box().map(|b| b.bold) else {
            return;
        };
        self.patch_active(BoxPatch {
            bold: Some(!bold),
            ..Default::default()
        });
    }

    /// Flip the active box's italic flag.
    pub fn toggle_italic(&mut self) {
        let Some(italic) = self.active_box().map(|b| b.italic) else {
            return;
        };
        self.patch_active(BoxPatch {
            italic: Some(!italic),
            ..Default::default()
        });
    }

    /// Flip the active box's underline flag.
    pub fn toggle_underline(&mut self) {
        let Some(underline) = self.active_box().map(|b| b.underline) else {
            return;
        };
        self.patch_active(BoxPatch {
            underline: Some(!underline),
            ..Default::default()
        });
    }

    /// Advance the active box's alignment to the next value in the cycle.
    pub fn cycle_alignment(&mut self) {
        let Some(alignment) = self.active_box().map(|b| b.alignment) else {
            return;
        };
        self.patch_active(BoxPatch {
            alignment: Some(alignment.next()),
            ..Default::default()
        });
    }

    /// Snapshot, then merge a patch into the active box. No-op (and no
    /// history entry) when nothing is selected.
    fn patch_active(&mut self, patch: BoxPatch) {
        let Some(id) = self.active else {
            return;
        };
        if self.store.get(id).is_none() {
            return;
        }
        self.record();
        self.store.apply_patch(id, patch);
    }

    /// Replace the active box's content from the inline editor.
    ///
    /// Consecutive calls for the same box coalesce into one history entry:
    /// the snapshot is taken when the burst starts, and the burst is sealed
    /// by any other operation, selection change, or undo/redo. One typing
    /// burst therefore maps to one undo step.
    pub fn edit_content(&mut self, text: impl Into<String>) {
        let Some(id) = self.active else {
            return;
        };
        if self.store.get(id).is_none() {
            return;
        }
        if self.edit_burst != Some(id) {
            self.history.record(self.store.snapshot());
            self.edit_burst = Some(id);
        }
        self.store.apply_patch(
            id,
            BoxPatch {
                content: Some(text.into()),
                ..Default::default()
            },
        );
    }

    /// Feed one pointer event (canvas-local coordinates) into the
    /// interaction state machine.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down {
                position,
                button: PointerButton::Primary,
            } => self.pointer_down(position),
            PointerEvent::Move { position } => self.pointer_move(position),
            PointerEvent::Up {
                button: PointerButton::Primary,
                ..
            } => self.pointer_up(),
            _ => {}
        }
    }

    fn pointer_down(&mut self, position: Point) {
        match self.store.box_at_point(position) {
            Some(id) => {
                self.select(id);
                let Some(origin) = self.store.get(id).map(|b| b.position) else {
                    return;
                };
                self.drag = Some(DragState {
                    box_id: id,
                    origin,
                    pre_drag: self.store.snapshot(),
                });
            }
            None => self.clear_selection(),
        }
    }

    fn pointer_move(&mut self, position: Point) {
        // The box anchor tracks the pointer directly (delta-free)
        if let Some(drag) = &self.drag {
            self.store.update_position(drag.box_id, position);
        }
    }

    fn pointer_up(&mut self) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        let moved = self
            .store
            .get(drag.box_id)
            .is_some_and(|b| b.position != drag.origin);
        if moved {
            // The committed snapshot is the one captured at drag start, so
            // undo restores the pre-drag position
            self.seal_edit_burst();
            self.history.record(drag.pre_drag);
        }
    }

    /// Undo the last change. Returns false when the undo stack is empty.
    pub fn undo(&mut self) -> bool {
        log::debug!("undo requested");
        self.seal_edit_burst();
        self.drag = None;
        let changed = self.history.undo(&mut self.store);
        if changed {
            self.prune_selection();
        }
        changed
    }

    /// Redo the last undone change. Returns false when the redo stack is
    /// empty.
    pub fn redo(&mut self) -> bool {
        log::debug!("redo requested");
        self.seal_edit_burst();
        self.drag = None;
        let changed = self.history.redo(&mut self.store);
        if changed {
            self.prune_selection();
        }
        changed
    }

    /// Drop the selection if its box no longer exists after a restore.
    fn prune_selection(&mut self) {
        if let Some(id) = self.active {
            if self.store.get(id).is_none() {
                self.active = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(session: &mut EditorSession, x: f64, y: f64) {
        session.handle_pointer(PointerEvent::Down {
            position: Point::new(x, y),
            button: PointerButton::Primary,
        });
    }

    fn drag_to(session: &mut EditorSession, x: f64, y: f64) {
        session.handle_pointer(PointerEvent::Move {
            position: Point::new(x, y),
        });
    }

    fn release(session: &mut EditorSession, x: f64, y: f64) {
        session.handle_pointer(PointerEvent::Up {
            position: Point::new(x, y),
            button: PointerButton::Primary,
        });
    }

    #[test]
    fn test_add_undo_redo_scenario() {
        let mut session = EditorSession::new();

        let id = session.add_text_box();
        assert_eq!(session.store().len(), 1);
        let added = session.store().get(id).unwrap().clone();
        assert_eq!(added.position, Point::new(50.0, 50.0));

        assert!(session.undo());
        assert!(session.store().is_empty());

        assert!(session.redo());
        let restored = session.store().get(id).unwrap();
        assert_eq!(*restored, added);
    }

    #[test]
    fn test_undo_on_empty_stack_is_noop() {
        let mut session = EditorSession::new();
        assert!(!session.undo());
        assert!(!session.redo());
        assert!(session.store().is_empty());

        session.add_text_box();
        assert!(!session.redo());
        assert_eq!(session.store().len(), 1);
    }

    #[test]
    fn test_new_mutation_discards_redo() {
        let mut session = EditorSession::new();
        session.add_text_box();
        session.add_text_box();

        assert!(session.undo());
        assert!(session.can_redo());

        session.add_text_box();
        assert!(!session.can_redo());
    }

    #[test]
    fn test_undo_after_redo_after_undo_is_symmetric() {
        let mut session = EditorSession::new();
        session.add_text_box();
        let before = session.store().snapshot();
        session.toggle_bold();
        let after = session.store().snapshot();

        assert!(session.undo());
        assert_eq!(session.store().snapshot(), before);
        assert!(session.redo());
        assert_eq!(session.store().snapshot(), after);
        assert!(session.undo());
        assert_eq!(session.store().snapshot(), before);
    }

    #[test]
    fn test_ids_unique_across_restores() {
        let mut session = EditorSession::new();
        let first = session.add_text_box();
        assert!(session.undo());
        let second = session.add_text_box();
        assert_ne!(first, second);
    }

    #[test]
    fn test_alignment_cycles_back_to_left() {
        let mut session = EditorSession::new();
        session.add_text_box();

        let mut seen = Vec::new();
        for _ in 0..4 {
            session.cycle_alignment();
            seen.push(session.active_box().unwrap().alignment);
        }
        assert_eq!(
            seen,
            vec![
                Alignment::Center,
                Alignment::Right,
                Alignment::Justify,
                Alignment::Left,
            ]
        );
    }

    #[test]
    fn test_bold_on_second_box_undoes_cleanly() {
        let mut session = EditorSession::new();
        let a = session.add_text_box();
        let b = session.add_text_box();

        session.select(b);
        session.toggle_bold();
        assert!(session.store().get(b).unwrap().bold);

        assert!(session.undo());
        assert!(!session.store().get(b).unwrap().bold);
        assert!(session.store().get(a).is_some());
        assert_eq!(session.store().len(), 2);
    }

    #[test]
    fn test_property_ops_without_selection_are_noops() {
        let mut session = EditorSession::new();
        session.toggle_bold();
        session.cycle_alignment();
        session.set_font_size(40.0);
        session.edit_content("nothing");

        assert!(session.store().is_empty());
        assert!(!session.can_undo());
    }

    #[test]
    fn test_press_selects_and_empty_click_clears() {
        let mut session = EditorSession::new();
        let id = session.add_text_box();

        press(&mut session, 55.0, 55.0);
        release(&mut session, 55.0, 55.0);
        assert_eq!(session.active_id(), Some(id));

        press(&mut session, 600.0, 600.0);
        release(&mut session, 600.0, 600.0);
        assert_eq!(session.active_id(), None);
    }

    #[test]
    fn test_drag_released_in_place_commits_nothing() {
        let mut session = EditorSession::new();
        session.add_text_box();

        press(&mut session, 55.0, 55.0);
        drag_to(&mut session, 120.0, 80.0);
        drag_to(&mut session, 50.0, 50.0);
        release(&mut session, 50.0, 50.0);

        // the box ended where it started, so only the add is undoable
        assert!(session.undo());
        assert!(session.store().is_empty());
        assert!(!session.can_undo());
    }

    #[test]
    fn test_drag_commits_exactly_one_snapshot() {
        let mut session = EditorSession::new();
        let id = session.add_text_box();

        press(&mut session, 55.0, 55.0);
        drag_to(&mut session, 120.0, 80.0);
        drag_to(&mut session, 200.0, 140.0);
        release(&mut session, 200.0, 140.0);

        assert_eq!(
            session.store().get(id).unwrap().position,
            Point::new(200.0, 140.0)
        );

        // one undo returns to the pre-drag position, a second removes the box
        assert!(session.undo());
        assert_eq!(
            session.store().get(id).unwrap().position,
            Point::new(50.0, 50.0)
        );
        assert!(session.undo());
        assert!(session.store().is_empty());
    }

    #[test]
    fn test_drag_position_tracks_pointer_absolutely() {
        let mut session = EditorSession::new();
        let id = session.add_text_box();

        press(&mut session, 60.0, 58.0);
        drag_to(&mut session, 300.0, 200.0);

        // the anchor jumps to the pointer rather than preserving the grab offset
        assert_eq!(
            session.store().get(id).unwrap().position,
            Point::new(300.0, 200.0)
        );
        release(&mut session, 300.0, 200.0);
        assert_eq!(session.active_id(), Some(id));
    }

    #[test]
    fn test_content_edits_coalesce_into_one_undo_step() {
        let mut session = EditorSession::new();
        session.add_text_box();

        session.edit_content("H");
        session.edit_content("He");
        session.edit_content("Hello");
        assert_eq!(session.active_box().unwrap().content, "Hello");

        assert!(session.undo());
        assert_eq!(session.active_box().unwrap().content, "New Text");
        assert!(session.undo());
        assert!(session.store().is_empty());
    }

    #[test]
    fn test_other_operation_seals_edit_burst() {
        let mut session = EditorSession::new();
        session.add_text_box();

        session.edit_content("draft one");
        session.toggle_italic();
        session.edit_content("draft two");

        // three undo steps: second burst, italic, first burst
        assert!(session.undo());
        assert_eq!(session.active_box().unwrap().content, "draft one");
        assert!(session.active_box().unwrap().italic);
        assert!(session.undo());
        assert!(!session.active_box().unwrap().italic);
        assert!(session.undo());
        assert_eq!(session.active_box().unwrap().content, "New Text");
    }

    #[test]
    fn test_undo_seals_edit_burst() {
        let mut session = EditorSession::new();
        session.add_text_box();

        session.edit_content("first");
        assert!(session.undo());
        assert!(session.redo());
        session.edit_content("second");

        assert!(session.undo());
        assert_eq!(session.active_box().unwrap().content, "first");
    }

    #[test]
    fn test_selection_dropped_when_box_vanishes_on_undo() {
        let mut session = EditorSession::new();
        let id = session.add_text_box();
        assert_eq!(session.active_id(), Some(id));

        assert!(session.undo());
        assert_eq!(session.active_id(), None);
    }

    #[test]
    fn test_font_size_clamped_through_session() {
        let mut session = EditorSession::new();
        session.add_text_box();

        session.set_font_size(4.0);
        assert!((session.active_box().unwrap().font_size - 8.0).abs() < f64::EPSILON);
        session.set_font_size(100.0);
        assert!((session.active_box().unwrap().font_size - 72.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_font_family_change_snapshots_history() {
        let mut session = EditorSession::new();
        session.add_text_box();

        session.set_font_family(FontFamily::Georgia);
        assert_eq!(
            session.active_box().unwrap().font_family,
            FontFamily::Georgia
        );

        assert!(session.undo());
        assert_eq!(session.active_box().unwrap().font_family, FontFamily::Arial);
    }

    #[test]
    fn test_secondary_button_ignored() {
        let mut session = EditorSession::new();
        let id = session.add_text_box();
        session.clear_selection();

        session.handle_pointer(PointerEvent::Down {
            position: Point::new(55.0, 55.0),
            button: PointerButton::Secondary,
        });
        assert_eq!(session.active_id(), None);
        assert!(session.store().get(id).is_some());
    }
}
