// File: crates/chart-engine/src/text.rs
// Summary: Text shaping on top of Skia textlayout, with left/center/right anchored drawing.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

const SANS_FAMILIES: &[&str] = &["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"];
const NUMERIC_FAMILIES: &[&str] = &["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"];

/// Font face used for a piece of chart text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Face {
    /// Titles, category labels, messages.
    Sans,
    /// Tick values and percentages, so digits line up.
    Numeric,
}

impl Face {
    fn families(self) -> &'static [&'static str] {
        match self {
            Face::Sans => SANS_FAMILIES,
            Face::Numeric => NUMERIC_FAMILIES,
        }
    }
}

/// Horizontal anchor for a line of text relative to its x coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Left,
    Center,
    Right,
}

/// Size, color and face of a text run.
#[derive(Clone, Copy, Debug)]
pub struct TextSpec {
    pub size: f32,
    pub color: skia::Color,
    pub face: Face,
}

impl TextSpec {
    pub const fn new(size: f32, color: skia::Color, face: Face) -> Self {
        Self { size, color, face }
    }
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fonts = FontCollection::new();
        fonts.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts }
    }

    /// Shape `text` as a single unwrapped line.
    pub fn layout(&self, text: &str, spec: TextSpec) -> Paragraph {
        let mut style = TextStyle::new();
        style.set_font_size(spec.size.max(1.0));
        style.set_color(spec.color);
        style.set_font_families(spec.face.families());

        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw `text` with its baseline near `y`, anchored at `x`.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, anchor: Anchor, spec: TextSpec) {
        if text.is_empty() {
            return;
        }
        let paragraph = self.layout(text, spec);
        let width = paragraph.longest_line();
        let left = match anchor {
            Anchor::Left => x,
            Anchor::Center => x - width / 2.0,
            Anchor::Right => x - width,
        };
        // Paragraphs paint from their top-left corner; lift by an approximate ascent.
        paragraph.paint(canvas, (left, y - spec.size * 0.8));
    }

    /// Draw `text` centered on (`x`, `y`), rotated to read bottom-to-top.
    pub fn draw_vertical(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, spec: TextSpec) {
        canvas.save();
        canvas.rotate(-90.0, Some(skia::Point::new(x, y)));
        self.draw(canvas, text, x, y + spec.size * 0.35, Anchor::Center, spec);
        canvas.restore();
    }
}
