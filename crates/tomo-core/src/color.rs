//! Small hex color helpers.

/// Dark text for light backgrounds.
pub const DARK_TEXT: &str = "#1e1e1e";

/// Light text for dark backgrounds.
pub const LIGHT_TEXT: &str = "#ffffff";

/// Parse `#rrggbb` (the `#` is optional).
pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Perceived brightness above one half.
pub fn is_light_color(hex: &str) -> bool {
    match parse_hex(hex) {
        Some((r, g, b)) => {
            let luminance = (0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)) / 255.0;
            luminance > 0.5
        }
        None => false,
    }
}

/// Readable text color on top of `hex`.
pub fn text_color_for_background(hex: &str) -> &'static str {
    if hex.is_empty() || is_light_color(hex) {
        DARK_TEXT
    } else {
        LIGHT_TEXT
    }
}

/// Darken by `k` steps, each step scaling the channels by 0.7.
///
/// Unparseable input is returned unchanged.
pub fn darker(hex: &str, k: f64) -> String {
    let Some((r, g, b)) = parse_hex(hex) else {
        return hex.to_string();
    };
    let factor = 0.7_f64.powf(k);
    let scale = |c: u8| (f64::from(c) * factor).round().clamp(0.0, 255.0) as u8;
    format!("#{:02x}{:02x}{:02x}", scale(r), scale(g), scale(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#ff8000"), Some((255, 128, 0)));
        assert_eq!(parse_hex("ff8000"), Some((255, 128, 0)));
        assert_eq!(parse_hex("#fff"), None);
        assert_eq!(parse_hex("#gg0000"), None);
    }

    #[test]
    fn test_text_color() {
        assert_eq!(text_color_for_background("#ffe761"), DARK_TEXT);
        assert_eq!(text_color_for_background("#0065ff"), LIGHT_TEXT);
        assert_eq!(text_color_for_background(""), DARK_TEXT);
    }

    #[test]
    fn test_darker() {
        assert_eq!(darker("#ffffff", 0.0), "#ffffff");
        // 255 * 0.7^0.5 = 213.35
        assert_eq!(darker("#ffffff", 0.5), "#d5d5d5");
        assert_eq!(darker("nope", 0.5), "nope");
    }
}
