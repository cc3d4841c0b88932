//! Reusable egui widget components for the Typeboard panels.
//!
//! - **Buttons**: action buttons and text toggle buttons
//! - **Layout**: section labels, separators

pub mod buttons;
pub mod layout;

pub use buttons::{ActionButton, ToggleButton};
pub use layout::{section_label, vertical_separator};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Control height for bar buttons.
    pub const CONTROL_HEIGHT: f32 = 24.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(210, 210, 210);
    /// Selection/active color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Hover background
    pub const HOVER_BG: Color32 = Color32::from_rgb(235, 235, 235);
    /// Resting button background
    pub const BUTTON_BG: Color32 = Color32::from_rgb(248, 248, 248);
}
