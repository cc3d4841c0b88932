//! Text box records and their closed style enumerations.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Smallest accepted font size in pixels.
pub const MIN_FONT_SIZE: f64 = 8.0;
/// Largest accepted font size in pixels.
pub const MAX_FONT_SIZE: f64 = 72.0;

/// Identifier for a text box, unique for the lifetime of a session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct BoxId(pub u64);

impl fmt::Display for BoxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Font family options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontFamily {
    /// Arial (default).
    #[default]
    Arial,
    /// Times New Roman serif font.
    TimesNewRoman,
    /// Courier New monospace font.
    CourierNew,
    /// Georgia serif font.
    Georgia,
}

impl FontFamily {
    /// Get the font family name as shown in the UI.
    pub fn name(&self) -> &'static str {
        match self {
            FontFamily::Arial => "Arial",
            FontFamily::TimesNewRoman => "Times New Roman",
            FontFamily::CourierNew => "Courier New",
            FontFamily::Georgia => "Georgia",
        }
    }

    /// Get all available font families.
    pub fn all() -> &'static [FontFamily] {
        &[
            FontFamily::Arial,
            FontFamily::TimesNewRoman,
            FontFamily::CourierNew,
            FontFamily::Georgia,
        ]
    }
}

/// Paragraph alignment of a text box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    /// Cycle to the next alignment (wraps back to Left after Justify).
    pub fn next(self) -> Self {
        match self {
            Alignment::Left => Alignment::Center,
            Alignment::Center => Alignment::Right,
            Alignment::Right => Alignment::Justify,
            Alignment::Justify => Alignment::Left,
        }
    }

    /// Get the alignment name as shown in the UI.
    pub fn name(&self) -> &'static str {
        match self {
            Alignment::Left => "Left",
            Alignment::Center => "Center",
            Alignment::Right => "Right",
            Alignment::Justify => "Justify",
        }
    }
}

/// One editable text element on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBox {
    /// Stable identifier, assigned by the store.
    pub id: BoxId,
    /// Position (top-left anchor) in canvas-local pixel coordinates.
    pub position: Point,
    /// The text content.
    pub content: String,
    /// Font size in pixels, kept within `MIN_FONT_SIZE..=MAX_FONT_SIZE`.
    pub font_size: f64,
    /// Font family.
    pub font_family: FontFamily,
    /// Bold style flag.
    pub bold: bool,
    /// Italic style flag.
    pub italic: bool,
    /// Underline style flag.
    pub underline: bool,
    /// Paragraph alignment.
    pub alignment: Alignment,
}

impl TextBox {
    /// Default font size for new boxes.
    pub const DEFAULT_FONT_SIZE: f64 = 16.0;
    /// Default position for new boxes.
    pub const DEFAULT_POSITION: Point = Point::new(50.0, 50.0);
    /// Default content for new boxes.
    pub const DEFAULT_CONTENT: &'static str = "New Text";

    /// Create a new text box with default content and style.
    pub(crate) fn new(id: BoxId, position: Point) -> Self {
        Self {
            id,
            position,
            content: Self::DEFAULT_CONTENT.to_string(),
            font_size: Self::DEFAULT_FONT_SIZE,
            font_family: FontFamily::default(),
            bold: false,
            italic: false,
            underline: false,
            alignment: Alignment::default(),
        }
    }

    /// Approximate width based on character count and font size.
    /// This is a rough estimate; actual width depends on the font.
    fn approximate_width(&self) -> f64 {
        // For multi-line content, the widest line wins
        let max_line_len = self
            .content
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);

        // Average character width varies by family; bold runs a little wider
        let char_width_factor = match self.font_family {
            FontFamily::Arial => 0.52,
            FontFamily::TimesNewRoman => 0.50,
            FontFamily::CourierNew => 0.60,
            FontFamily::Georgia => 0.53,
        };
        let char_width_factor = if self.bold {
            char_width_factor + 0.03
        } else {
            char_width_factor
        };

        max_line_len as f64 * self.font_size * char_width_factor
    }

    /// Approximate height based on font size and number of lines.
    fn approximate_height(&self) -> f64 {
        let line_count = self.content.lines().count().max(1);
        let line_count = if self.content.ends_with('\n') {
            line_count + 1
        } else {
            line_count
        };
        // Line height is typically 1.2 * font_size
        line_count as f64 * self.font_size * 1.2
    }

    /// Bounding rectangle of the box in canvas-local coordinates.
    pub fn bounds(&self) -> Rect {
        let width = self.approximate_width().max(20.0);
        let height = self.approximate_height();
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + width,
            self.position.y + height,
        )
    }

    /// Check whether a point falls inside the box bounds.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        self.bounds().inflate(tolerance, tolerance).contains(point)
    }
}

/// A partial update merged into a box by [`crate::store::BoxStore::apply_patch`].
///
/// `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoxPatch {
    pub content: Option<String>,
    pub font_size: Option<f64>,
    pub font_family: Option<FontFamily>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<bool>,
    pub alignment: Option<Alignment>,
}
