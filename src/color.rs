//! Color parsing and WCAG luminance math.
//!
//! Supports named colors, hex (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`),
//! `rgb()/rgba()`, and `hsl()/hsla()`. Malformed input parses to `None`;
//! contrast helpers degrade to a 1:1 ratio rather than erroring so rule
//! checks never crash on bad style values.

use regex::Regex;

/// An sRGB color with an optional alpha channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: Option<f32>,
}

impl Color {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: None }
    }

    /// Parse a CSS color string. Returns `None` for anything unrecognized.
    pub fn parse(input: &str) -> Option<Color> {
        let value = input.trim().to_lowercase();
        if value.is_empty() {
            return None;
        }
        if let Some(named) = parse_named(&value) {
            return Some(named);
        }
        if let Some(hex) = value.strip_prefix('#') {
            return parse_hex(hex);
        }
        if value.starts_with("rgb") {
            return parse_rgb(&value);
        }
        if value.starts_with("hsl") {
            return parse_hsl(&value);
        }
        None
    }

    /// Relative luminance per WCAG 2.x.
    /// <https://www.w3.org/TR/WCAG21/#dfn-relative-luminance>
    pub fn luminance(&self) -> f64 {
        let srgb = [self.r, self.g, self.b].map(|c| {
            let v = c as f64 / 255.0;
            if v <= 0.03928 {
                v / 12.92
            } else {
                ((v + 0.055) / 1.055).powf(2.4)
            }
        });
        0.2126 * srgb[0] + 0.7152 * srgb[1] + 0.0722 * srgb[2]
    }

    /// Re-encode as lowercase `#rrggbb`. Alpha is not carried.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Contrast ratio between two colors, in [1, 21]. Symmetric.
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let l1 = a.luminance();
    let l2 = b.luminance();
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio of two color strings. Either side failing to parse
/// yields the worst-case 1.0 so callers degrade to "no issue detected".
pub fn contrast_ratio_str(a: &str, b: &str) -> f64 {
    match (Color::parse(a), Color::parse(b)) {
        (Some(c1), Some(c2)) => contrast_ratio(c1, c2),
        _ => 1.0,
    }
}

fn parse_named(name: &str) -> Option<Color> {
    let (r, g, b) = match name {
        "black" => (0, 0, 0),
        "white" => (255, 255, 255),
        "red" => (255, 0, 0),
        "green" => (0, 128, 0),
        "blue" => (0, 0, 255),
        "yellow" => (255, 255, 0),
        "cyan" | "aqua" => (0, 255, 255),
        "magenta" | "fuchsia" => (255, 0, 255),
        "gray" | "grey" => (128, 128, 128),
        "silver" => (192, 192, 192),
        "maroon" => (128, 0, 0),
        "olive" => (128, 128, 0),
        "lime" => (0, 255, 0),
        "teal" => (0, 128, 128),
        "navy" => (0, 0, 128),
        "purple" => (128, 0, 128),
        "orange" => (255, 165, 0),
        "pink" => (255, 192, 203),
        "brown" => (165, 42, 42),
        "transparent" => {
            return Some(Color {
                r: 0,
                g: 0,
                b: 0,
                a: Some(0.0),
            })
        }
        _ => return None,
    };
    Some(Color::rgb(r, g, b))
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    // Short forms expand by doubling each nibble
    let expanded = match hex.len() {
        3 | 4 => hex.chars().flat_map(|c| [c, c]).collect::<String>(),
        6 | 8 => hex.to_string(),
        _ => return None,
    };
    let r = u8::from_str_radix(&expanded[0..2], 16).ok()?;
    let g = u8::from_str_radix(&expanded[2..4], 16).ok()?;
    let b = u8::from_str_radix(&expanded[4..6], 16).ok()?;
    let a = if expanded.len() == 8 {
        Some(u8::from_str_radix(&expanded[6..8], 16).ok()? as f32 / 255.0)
    } else {
        None
    };
    Some(Color { r, g, b, a })
}

fn parse_rgb(value: &str) -> Option<Color> {
    let re = Regex::new(r"^rgba?\s*\(\s*([\d.]+)\s*,\s*([\d.]+)\s*,\s*([\d.]+)\s*(?:,\s*([\d.]+))?\s*\)$")
        .expect("valid regex");
    let caps = re.captures(value)?;
    let channel = |i: usize| -> Option<u8> {
        let v: f64 = caps.get(i)?.as_str().parse().ok()?;
        Some(clamp_channel(v))
    };
    let a = match caps.get(4) {
        Some(m) => Some(m.as_str().parse::<f32>().ok()?),
        None => None,
    };
    Some(Color {
        r: channel(1)?,
        g: channel(2)?,
        b: channel(3)?,
        a,
    })
}

fn parse_hsl(value: &str) -> Option<Color> {
    let re = Regex::new(r"^hsla?\s*\(\s*([\d.]+)\s*,\s*([\d.]+)%\s*,\s*([\d.]+)%\s*(?:,\s*([\d.]+))?\s*\)$")
        .expect("valid regex");
    let caps = re.captures(value)?;
    let h: f64 = caps[1].parse::<f64>().ok()? / 360.0;
    let s: f64 = caps[2].parse::<f64>().ok()? / 100.0;
    let l: f64 = caps[3].parse::<f64>().ok()? / 100.0;

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    };

    let a = match caps.get(4) {
        Some(m) => Some(m.as_str().parse::<f32>().ok()?),
        None => None,
    };
    Some(Color {
        r: clamp_channel(r * 255.0),
        g: clamp_channel(g * 255.0),
        b: clamp_channel(b * 255.0),
        a,
    })
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Round and clamp a derived channel value into [0, 255].
pub(crate) fn clamp_channel(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}
