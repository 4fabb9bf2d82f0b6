// File: crates/chart-engine/src/theme.rs
// Summary: Light/Dark theming for surface colors (background, grid, axes, text).

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub empty_text: skia::Color,
    pub slice_label: skia::Color,
    pub slice_border: skia::Color,
    /// Alpha applied to the series color when filling an area chart.
    pub area_fill_alpha: u8,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 229, 231, 235),
            axis_line: skia::Color::from_argb(255, 156, 163, 175),
            axis_label: skia::Color::from_argb(255, 31, 41, 55),
            tick: skia::Color::from_argb(255, 107, 114, 128),
            empty_text: skia::Color::from_argb(255, 107, 114, 128),
            slice_label: skia::Color::from_argb(255, 255, 255, 255),
            slice_border: skia::Color::from_argb(255, 255, 255, 255),
            area_fill_alpha: 51,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            empty_text: skia::Color::from_argb(255, 150, 150, 160),
            slice_label: skia::Color::from_argb(255, 255, 255, 255),
            slice_border: skia::Color::from_argb(255, 18, 18, 20),
            area_fill_alpha: 64,
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            grid: skia::Color::from_argb(255, 0x22, 0x22, 0x22),
            axis_line: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            axis_label: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            tick: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            empty_text: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            slice_label: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            slice_border: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            area_fill_alpha: 96,
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}

/// Serde adapter that stores a [`Theme`] as its preset name and resolves it with [`find`].
#[cfg(feature = "serde")]
pub mod by_name {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Theme;

    pub fn serialize<S: Serializer>(theme: &Theme, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(theme.name)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Theme, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(super::find(&name))
    }
}
