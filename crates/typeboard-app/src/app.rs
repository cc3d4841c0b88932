//! Application state and the canvas frame loop.

use egui::{
    Align2, Color32, CornerRadius, CursorIcon, FontId, Key, Pos2, Rect, Sense, Stroke,
    StrokeKind, Vec2,
};
use kurbo::Point;
use typeboard_core::{BoxId, EditorSession, FontFamily, PointerButton, PointerEvent, TextBox};
use typeboard_widgets::theme;

use crate::ui;

/// Canvas background color.
const CANVAS_BG: Color32 = Color32::from_rgb(226, 232, 240);

pub struct TypeboardApp {
    session: EditorSession,
    /// Box whose content is being edited in place, if any.
    editing: Option<BoxId>,
    /// Give the inline editor keyboard focus on the frame it opens.
    editing_needs_focus: bool,
}

impl TypeboardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            session: EditorSession::new(),
            editing: None,
            editing_needs_focus: false,
        }
    }

    fn handle_keyboard(&mut self, ctx: &egui::Context) {
        ctx.input(|i| {
            let cmd = i.modifiers.command;
            if cmd && i.key_pressed(Key::Z) && !i.modifiers.shift {
                self.session.undo();
            }
            if cmd && i.key_pressed(Key::Z) && i.modifiers.shift {
                self.session.redo();
            }
            if i.key_pressed(Key::Escape) {
                if self.editing.is_some() {
                    self.editing = None;
                } else {
                    self.session.clear_selection();
                }
            }
        });
    }

    fn canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
        let canvas_rect = response.rect;

        for text_box in self.session.store().boxes() {
            let selected = self.session.active_id() == Some(text_box.id);
            self.paint_box(&painter, canvas_rect, text_box, selected);
        }

        self.handle_canvas_input(ui.ctx(), &response, canvas_rect);
        self.inline_editor(ui.ctx(), canvas_rect);
    }

    fn handle_canvas_input(
        &mut self,
        ctx: &egui::Context,
        response: &egui::Response,
        canvas_rect: Rect,
    ) {
        if response.double_clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let point = to_canvas(pos, canvas_rect);
                if let Some(id) = self.session.store().box_at_point(point) {
                    self.session.select(id);
                    self.editing = Some(id);
                    self.editing_needs_focus = true;
                }
            }
        } else if response.clicked() {
            // a press-and-release without movement: selection only
            if let Some(pos) = response.interact_pointer_pos() {
                let point = to_canvas(pos, canvas_rect);
                self.session.handle_pointer(PointerEvent::Down {
                    position: point,
                    button: PointerButton::Primary,
                });
                self.session.handle_pointer(PointerEvent::Up {
                    position: point,
                    button: PointerButton::Primary,
                });
            }
        }

        if response.drag_started() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.session.handle_pointer(PointerEvent::Down {
                    position: to_canvas(pos, canvas_rect),
                    button: PointerButton::Primary,
                });
            }
        }
        if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.session.handle_pointer(PointerEvent::Move {
                    position: to_canvas(pos, canvas_rect),
                });
            }
        }
        if response.drag_stopped() {
            let pos = response
                .interact_pointer_pos()
                .unwrap_or(canvas_rect.min);
            self.session.handle_pointer(PointerEvent::Up {
                position: to_canvas(pos, canvas_rect),
                button: PointerButton::Primary,
            });
        }

        // the inline editor follows the selection
        if self.editing.is_some() && self.editing != self.session.active_id() {
            self.editing = None;
        }

        if let Some(pos) = response.hover_pos() {
            if self
                .session
                .store()
                .box_at_point(to_canvas(pos, canvas_rect))
                .is_some()
            {
                ctx.output_mut(|o| o.cursor_icon = CursorIcon::Move);
            }
        }
    }

    fn paint_box(
        &self,
        painter: &egui::Painter,
        canvas_rect: Rect,
        text_box: &TextBox,
        selected: bool,
    ) {
        let bounds = text_box.bounds();
        let screen = Rect::from_min_size(
            to_screen(text_box.position, canvas_rect),
            Vec2::new(bounds.width() as f32, bounds.height() as f32),
        );

        if selected {
            painter.rect_stroke(
                screen.expand(3.0),
                CornerRadius::same(2),
                Stroke::new(1.0, theme::ACCENT),
                StrokeKind::Outside,
            );
        }

        // while the inline editor is open it renders this box's text itself
        if self.editing == Some(text_box.id) {
            return;
        }

        let font = font_id(text_box.font_family, text_box.font_size);
        let (anchor_x, align) = match text_box.alignment {
            typeboard_core::Alignment::Center => (screen.center().x, Align2::CENTER_TOP),
            typeboard_core::Alignment::Right => (screen.right(), Align2::RIGHT_TOP),
            _ => (screen.left(), Align2::LEFT_TOP),
        };
        let anchor = Pos2::new(anchor_x, screen.top());

        let painted = painter.text(anchor, align, &text_box.content, font.clone(), theme::TEXT);
        if text_box.bold {
            // faux bold: egui ships no heavy face, so repaint with a
            // half-pixel offset
            painter.text(
                anchor + Vec2::new(0.5, 0.0),
                align,
                &text_box.content,
                font,
                theme::TEXT,
            );
        }
        if text_box.underline {
            let y = painted.bottom() - 1.0;
            painter.line_segment(
                [
                    Pos2::new(painted.left(), y),
                    Pos2::new(painted.right(), y),
                ],
                Stroke::new(1.0, theme::TEXT),
            );
        }
    }

    fn inline_editor(&mut self, ctx: &egui::Context, canvas_rect: Rect) {
        let Some(id) = self.editing else {
            return;
        };
        let Some((pos, font, mut text)) = self.session.store().get(id).map(|b| {
            (
                to_screen(b.position, canvas_rect),
                font_id(b.font_family, b.font_size),
                b.content.clone(),
            )
        }) else {
            self.editing = None;
            return;
        };

        egui::Area::new(egui::Id::new(("inline_editor", id)))
            .fixed_pos(pos)
            .show(ctx, |ui| {
                let response = ui.add(
                    egui::TextEdit::multiline(&mut text)
                        .font(font)
                        .frame(false)
                        .desired_width(320.0)
                        .desired_rows(1),
                );
                if self.editing_needs_focus {
                    response.request_focus();
                    self.editing_needs_focus = false;
                }
                if response.changed() {
                    self.session.edit_content(text);
                }
            });
    }
}

impl eframe::App for TypeboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard(ctx);

        egui::TopBottomPanel::top("control_bar")
            .show(ctx, |ui| ui::control_bar(ui, &mut self.session));
        egui::TopBottomPanel::bottom("property_panel")
            .show(ctx, |ui| ui::property_panel(ui, &mut self.session));
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(CANVAS_BG))
            .show(ctx, |ui| self.canvas(ui));
    }
}

/// Translate a window position into canvas-local coordinates.
fn to_canvas(pos: Pos2, canvas_rect: Rect) -> Point {
    Point::new(
        (pos.x - canvas_rect.min.x) as f64,
        (pos.y - canvas_rect.min.y) as f64,
    )
}

/// Translate a canvas-local point back into window coordinates.
fn to_screen(point: Point, canvas_rect: Rect) -> Pos2 {
    Pos2::new(
        canvas_rect.min.x + point.x as f32,
        canvas_rect.min.y + point.y as f32,
    )
}

/// Map a core font family onto the faces egui actually ships: one
/// proportional and one monospace, so the serif families fall back to the
/// proportional face.
fn font_id(family: FontFamily, size: f64) -> FontId {
    let family = match family {
        FontFamily::CourierNew => egui::FontFamily::Monospace,
        _ => egui::FontFamily::Proportional,
    };
    FontId::new(size as f32, family)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_coordinate_round_trip() {
        let canvas_rect = Rect::from_min_size(Pos2::new(10.0, 40.0), egui::vec2(800.0, 600.0));
        let point = to_canvas(Pos2::new(60.0, 90.0), canvas_rect);
        assert!((point.x - 50.0).abs() < f64::EPSILON);
        assert!((point.y - 50.0).abs() < f64::EPSILON);

        let back = to_screen(point, canvas_rect);
        assert!((back.x - 60.0).abs() < f32::EPSILON);
        assert!((back.y - 90.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_font_mapping() {
        assert_eq!(
            font_id(FontFamily::CourierNew, 16.0).family,
            egui::FontFamily::Monospace
        );
        assert_eq!(
            font_id(FontFamily::Georgia, 16.0).family,
            egui::FontFamily::Proportional
        );
        assert!((font_id(FontFamily::Arial, 16.0).size - 16.0).abs() < f32::EPSILON);
    }
}
