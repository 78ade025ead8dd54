use tracing::warn;

use crate::theme::Theme;

/// An RGB triple with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Parse a 3- or 6-digit hex color; the leading `#` is optional.
/// 3-digit colors expand per CSS rules (`#abc` → `#aabbcc`).
pub fn parse_hex_color(input: &str) -> Option<Rgb> {
    let digits = input.trim().trim_start_matches('#');

    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return None,
    };

    let r = u8::from_str_radix(&expanded[0..2], 16).ok()?;
    let g = u8::from_str_radix(&expanded[2..4], 16).ok()?;
    let b = u8::from_str_radix(&expanded[4..6], 16).ok()?;
    Some(Rgb { r, g, b })
}

/// RGB → HSL, with hue in degrees `[0, 360)` and saturation/lightness as
/// percentages `[0, 100]`.
pub fn rgb_to_hsl(rgb: Rgb) -> (f64, f64, f64) {
    let r = rgb.r as f64 / 255.0;
    let g = rgb.g as f64 / 255.0;
    let b = rgb.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if (max - min).abs() < f64::EPSILON {
        // Achromatic
        return (0.0, 0.0, l * 100.0);
    }

    let delta = max - min;
    let s = if l > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    let h = if (max - r).abs() < f64::EPSILON {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if (max - g).abs() < f64::EPSILON {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    (h * 60.0, s * 100.0, l * 100.0)
}

/// HSL → RGB. Every channel is clamped into `[0, 255]` and any NaN from the
/// intermediate arithmetic is coerced to 0 before encoding.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let h = (h.rem_euclid(360.0)) / 360.0;
    let s = (s / 100.0).clamp(0.0, 1.0);
    let l = (l / 100.0).clamp(0.0, 1.0);

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

    Rgb {
        r: encode_channel(r),
        g: encode_channel(g),
        b: encode_channel(b),
    }
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
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

fn encode_channel(value: f64) -> u8 {
    let scaled = value * 255.0;
    if scaled.is_nan() {
        return 0;
    }
    scaled.round().clamp(0.0, 255.0) as u8
}

/// Derive `n` same-hue shades from one seed color, spread across the
/// theme's lightness range.
///
/// A malformed seed falls back to the theme default rather than failing.
/// The dark theme's raw lightness range deliberately runs past 100% (an
/// upstream quirk we reproduce); the final lightness is clamped into
/// `[0, 100]` before conversion, which flattens the brightest dark-theme
/// shades to white.
pub fn generate_color_shades(seed: &str, n: usize, theme: Theme) -> Vec<String> {
    if n == 0 {
        return Vec::new();
    }

    let rgb = parse_hex_color(seed).unwrap_or_else(|| {
        warn!(seed, "Malformed seed color, using theme fallback");
        parse_hex_color(theme.fallback_seed()).unwrap_or(Rgb { r: 0, g: 0, b: 0 })
    });

    let (hue, saturation, _) = rgb_to_hsl(rgb);
    let (low, high) = theme.lightness_range();

    (0..n)
        .map(|i| {
            let progress = if n == 1 {
                0.5
            } else {
                i as f64 / (n - 1) as f64
            };
            let lightness = (low + progress * (high - low)).clamp(0.0, 100.0);
            hsl_to_rgb(hue, saturation, lightness).to_hex()
        })
        .collect()
}
