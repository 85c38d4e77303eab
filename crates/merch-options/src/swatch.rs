//! Swatch colour parsing.
//!
//! A `colourSwatch:` tag value is pipe-delimited:
//! `<name>|<primary>|<secondary...>`. A `#`-prefixed primary builds a
//! conic gradient over all colours; a `.jpg` primary references a CDN theme
//! asset; with no primary the name itself is the colour token.

use merch_core::RegionProfile;
use serde::{Deserialize, Serialize};

/// A renderable swatch colour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SwatchColor {
    /// CSS `conic-gradient(...)` value.
    Conic(String),
    /// CSS background shorthand referencing an image asset.
    Image(String),
    /// Literal colour token (a name or hex code).
    Named(String),
}

impl SwatchColor {
    /// The CSS background value.
    pub fn css(&self) -> &str {
        match self {
            SwatchColor::Conic(v) | SwatchColor::Image(v) | SwatchColor::Named(v) => v,
        }
    }
}

/// A parsed swatch tag value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedSwatch {
    /// Display name of the colourway (e.g. "Midnight").
    pub name: String,
    /// Renderable colour; absent when the primary is unrecognized.
    pub color: Option<SwatchColor>,
}

/// Parse a swatch tag value (the part after `colourSwatch:`).
///
/// Returns `None` for an empty value.
pub fn parse_swatch(value: &str, profile: &RegionProfile) -> Option<ParsedSwatch> {
    if value.is_empty() {
        return None;
    }

    let mut parts = value.split('|');
    let name = parts.next().unwrap_or_default().to_string();
    let primary = parts.next().filter(|p| !p.is_empty());
    let secondary: Vec<&str> = parts.collect();

    let color = match primary {
        None => Some(SwatchColor::Named(name.clone())),
        Some(primary) if primary.starts_with('#') => {
            Some(SwatchColor::Conic(conic_gradient(primary, &secondary)))
        }
        Some(primary) if primary.contains(".jpg") => Some(SwatchColor::Image(format!(
            "url('{}') no-repeat center center / cover",
            profile.asset_url(primary)
        ))),
        Some(_) => None,
    };

    Some(ParsedSwatch { name, color })
}

/// Build a conic gradient over the primary and secondary colours.
///
/// Stops are evenly distributed and listed in reverse of encounter order.
fn conic_gradient(primary: &str, secondary: &[&str]) -> String {
    let total = secondary.len() + 1;
    let step = 100.0 / total as f64;

    let stops = std::iter::once(primary)
        .chain(secondary.iter().copied())
        .rev()
        .enumerate()
        .map(|(i, hex)| {
            let pct = ((i + 1) as f64 * step * 10000.0).round() / 10000.0;
            format!("{hex} 0 {pct}%")
        })
        .collect::<Vec<_>>()
        .join(", ");

    format!("conic-gradient({stops})")
}

#[cfg(test)]
mod tests {
    use super::*;
    use merch_core::Region;

    fn profile() -> RegionProfile {
        RegionProfile::for_region(Region::Au)
    }

    #[test]
    fn test_single_stop_is_solid_gradient() {
        let parsed = parse_swatch("Red|#ff0000", &profile()).unwrap();
        assert_eq!(parsed.name, "Red");
        assert_eq!(
            parsed.color,
            Some(SwatchColor::Conic(
                "conic-gradient(#ff0000 0 100%)".to_string()
            ))
        );
    }

    #[test]
    fn test_two_stop_gradient_reverses_order() {
        let parsed = parse_swatch("Red|#ff0000|#00ff00", &profile()).unwrap();
        assert_eq!(
            parsed.color,
            Some(SwatchColor::Conic(
                "conic-gradient(#00ff00 0 50%, #ff0000 0 100%)".to_string()
            ))
        );
    }

    #[test]
    fn test_image_swatch_uses_region_asset() {
        let parsed = parse_swatch("Ripple|swatch-ripple.jpg", &profile()).unwrap();
        assert_eq!(
            parsed.color,
            Some(SwatchColor::Image(
                "url('https://lskd.co/cdn/shop/t/683/assets/swatch-ripple.jpg') no-repeat center center / cover"
                    .to_string()
            ))
        );
    }

    #[test]
    fn test_name_only_is_literal_token() {
        let parsed = parse_swatch("black", &profile()).unwrap();
        assert_eq!(parsed.name, "black");
        assert_eq!(parsed.color, Some(SwatchColor::Named("black".to_string())));
    }

    #[test]
    fn test_unrecognized_primary_has_no_color() {
        let parsed = parse_swatch("Mystery|plaid", &profile()).unwrap();
        assert_eq!(parsed.name, "Mystery");
        assert_eq!(parsed.color, None);
    }

    #[test]
    fn test_empty_value_is_none() {
        assert_eq!(parse_swatch("", &profile()), None);
    }
}
