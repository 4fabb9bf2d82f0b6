// File: crates/chart-engine/src/color.rs
// Summary: Built-in palette and CSS-style color string parsing into Skia colors.

use skia_safe as skia;

/// Fallback palette: blue, green, red, orange, purple.
pub const DEFAULT_PALETTE: [&str; 5] = ["#3b82f6", "#10b981", "#ef4444", "#f59e0b", "#8b5cf6"];

/// Used when a color string cannot be parsed.
pub const FALLBACK_COLOR: skia::Color = skia::Color::from_argb(255, 107, 114, 128);

/// Pick `palette[index % len]`, falling back to [`DEFAULT_PALETTE`] when `palette` is empty
/// or the picked entry is blank.
pub fn palette_color(palette: &[String], index: usize) -> String {
    if !palette.is_empty() {
        let c = palette[index % palette.len()].trim();
        if !c.is_empty() {
            return c.to_string();
        }
    }
    DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()].to_string()
}

/// Parse `#rgb`, `#rrggbb`, `#rrggbbaa`, or one of a few CSS names.
pub fn parse_color(s: &str) -> Option<skia::Color> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }
    let named = match s.to_ascii_lowercase().as_str() {
        "blue" => "3b82f6",
        "green" => "10b981",
        "red" => "ef4444",
        "orange" => "f59e0b",
        "purple" => "8b5cf6",
        "black" => "000000",
        "white" => "ffffff",
        "gray" | "grey" => "6b7280",
        _ => return None,
    };
    parse_hex(named)
}

/// Parse a color string, logging and substituting [`FALLBACK_COLOR`] on failure.
pub fn resolve_color(s: &str) -> skia::Color {
    parse_color(s).unwrap_or_else(|| {
        tracing::warn!(color = s, "unrecognized color string, using fallback");
        FALLBACK_COLOR
    })
}

fn parse_hex(hex: &str) -> Option<skia::Color> {
    if !hex.is_ascii() {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    match hex.len() {
        3 => {
            let nib = |i: usize| {
                let v = u8::from_str_radix(hex.get(i..i + 1)?, 16).ok()?;
                Some(v * 17)
            };
            Some(skia::Color::from_argb(255, nib(0)?, nib(1)?, nib(2)?))
        }
        6 => Some(skia::Color::from_argb(255, byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(skia::Color::from_argb(byte(6)?, byte(0)?, byte(2)?, byte(4)?)),
        _ => None,
    }
}
