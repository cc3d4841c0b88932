//! Control bar and property panel.

use egui::Ui;
use typeboard_core::{EditorSession, FontFamily, MAX_FONT_SIZE, MIN_FONT_SIZE};
use typeboard_widgets::{layout, theme, ActionButton, ToggleButton};

/// Top bar: undo/redo and box creation.
pub fn control_bar(ui: &mut Ui, session: &mut EditorSession) {
    ui.horizontal(|ui| {
        if ActionButton::new("Undo")
            .enabled(session.can_undo())
            .show(ui)
        {
            session.undo();
        }
        if ActionButton::new("Redo")
            .enabled(session.can_redo())
            .show(ui)
        {
            session.redo();
        }
        layout::vertical_separator(ui);
        if ActionButton::new("+ Add Text").show(ui) {
            session.add_text_box();
        }
    });
}

/// Bottom bar: style controls bound to the active box, or a placeholder
/// when nothing is selected.
pub fn property_panel(ui: &mut Ui, session: &mut EditorSession) {
    ui.horizontal(|ui| {
        let Some(active) = session.active_box().cloned() else {
            ui.label(
                egui::RichText::new("Select a text box to edit its properties.")
                    .color(theme::TEXT_MUTED),
            );
            return;
        };

        layout::section_label(ui, "Font");
        let mut family = active.font_family;
        egui::ComboBox::from_id_salt("font_family")
            .selected_text(family.name())
            .show_ui(ui, |ui| {
                for option in FontFamily::all() {
                    ui.selectable_value(&mut family, *option, option.name());
                }
            });
        if family != active.font_family {
            session.set_font_family(family);
        }

        let mut size = active.font_size;
        let size_response = ui.add(
            egui::DragValue::new(&mut size)
                .range(MIN_FONT_SIZE..=MAX_FONT_SIZE)
                .speed(1.0)
                .suffix(" px"),
        );
        if size_response.changed() {
            session.set_font_size(size);
        }

        layout::vertical_separator(ui);
        layout::section_label(ui, "Style");
        if ToggleButton::new("B", active.bold).show(ui) {
            session.toggle_bold();
        }
        if ToggleButton::new("I", active.italic).show(ui) {
            session.toggle_italic();
        }
        if ToggleButton::new("U", active.underline).show(ui) {
            session.toggle_underline();
        }

        layout::vertical_separator(ui);
        if ToggleButton::new(active.alignment.name(), false)
            .min_width(56.0)
            .show(ui)
        {
            session.cycle_alignment();
        }
    });
}
