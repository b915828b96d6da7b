// ============================================================================
// COLOR - Normalización de colores hex del picker
// ============================================================================

/// Parsear `#RGB` o `#RRGGBB` a canales RGB
pub fn parse_hex_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    let hex = raw.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            Some((r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
}

/// Normalizar a `#rrggbb` en minúsculas; si no se puede parsear, usar el fallback
pub fn normalize_hex_color(value: &str, fallback: &str) -> String {
    match parse_hex_rgb(value).or_else(|| parse_hex_rgb(fallback)) {
        Some((r, g, b)) => format!("#{r:02x}{g:02x}{b:02x}"),
        None => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_rgb_supports_short_and_long_forms() {
        assert_eq!(parse_hex_rgb("#FFF"), Some((255, 255, 255)));
        assert_eq!(parse_hex_rgb(" #1a2B3c "), Some((26, 43, 60)));
    }

    #[test]
    fn parse_hex_rgb_rejects_invalid_inputs() {
        assert_eq!(parse_hex_rgb("ffffff"), None);
        assert_eq!(parse_hex_rgb("#ff"), None);
        assert_eq!(parse_hex_rgb("#fffff"), None);
        assert_eq!(parse_hex_rgb("#zzzzzz"), None);
        assert_eq!(parse_hex_rgb("#ééé"), None);
    }

    #[test]
    fn normalize_hex_color_lowercases_and_expands() {
        assert_eq!(normalize_hex_color("#ABC", "#ffffff"), "#aabbcc");
        assert_eq!(normalize_hex_color("#00FF7F", "#ffffff"), "#00ff7f");
    }

    #[test]
    fn normalize_hex_color_falls_back_on_garbage() {
        assert_eq!(normalize_hex_color("red", "#ffffff"), "#ffffff");
        assert_eq!(normalize_hex_color("", "#FFF"), "#ffffff");
    }
}
