// SPDX-License-Identifier: MIT
//
// RGB color and its textual encodings.
//
// The theme template and the options store both speak in text, and they do
// not agree on a format:
//
//   decimal triple  "106, 116, 211"   → CSS rgb()/rgba() arguments in templates
//   hex             "#6A74D3"         → palette entries in templates
//   numeric list    [106, 116, 211]   → the color picker's native shape
//
// Everything is parsed into `Rgb` at the boundary. Formatting is canonical:
// decimal uses ", " as the separator, hex is upper case with a leading '#'.

use std::fmt;
use std::str::FromStr;

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Why a textual color could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseColorError {
    /// Input was empty or whitespace.
    #[error("empty color string")]
    Empty,

    /// A decimal triple had the wrong number of components.
    #[error("expected 3 color components, found {0}")]
    ComponentCount(usize),

    /// One component was not an integer in 0..=255.
    #[error("invalid color component {0:?}")]
    Component(String),

    /// A hex string had the wrong length or a non-hex digit.
    #[error("invalid hex color {0:?}")]
    Hex(String),
}

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An 8-bit sRGB color. The canonical in-memory form for every color the
/// generator touches.
///
/// # Examples
///
/// ```
/// use glass_color::Rgb;
///
/// let seed: Rgb = "106, 116, 211".parse().unwrap();
/// assert_eq!(seed, Rgb::new(106, 116, 211));
/// assert_eq!(seed.to_hex(), "#6A74D3");
/// assert_eq!(seed.to_decimal(), "106, 116, 211");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a decimal triple such as `"106, 116, 211"`.
    ///
    /// Components are split on `,` and trimmed, so `"106,116,211"` is
    /// accepted too.
    ///
    /// # Errors
    ///
    /// Fails on empty input, a component count other than 3, or any
    /// component that is not an integer in `0..=255`.
    pub fn parse_decimal(s: &str) -> Result<Self, ParseColorError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseColorError::Empty);
        }

        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(ParseColorError::ComponentCount(parts.len()));
        }

        let channel = |p: &str| {
            p.parse::<u8>()
                .map_err(|_| ParseColorError::Component(p.to_string()))
        };
        Ok(Self::new(channel(parts[0])?, channel(parts[1])?, channel(parts[2])?))
    }

    /// Parse a hex color: `#RRGGBB` or `#RGB`, with or without the `#`,
    /// either case.
    ///
    /// # Errors
    ///
    /// Fails on any other length or on a non-hex digit.
    pub fn parse_hex(s: &str) -> Result<Self, ParseColorError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseColorError::Empty);
        }
        parse_hex(trimmed).ok_or_else(|| ParseColorError::Hex(trimmed.to_string()))
    }

    /// Build a color from a numeric list, the color picker's native shape.
    ///
    /// # Errors
    ///
    /// Fails unless the slice has exactly 3 elements, each in `0..=255`.
    pub fn from_components(values: &[i64]) -> Result<Self, ParseColorError> {
        let [r, g, b] = values else {
            return Err(ParseColorError::ComponentCount(values.len()));
        };
        let channel = |v: i64| {
            u8::try_from(v).map_err(|_| ParseColorError::Component(v.to_string()))
        };
        Ok(Self::new(channel(*r)?, channel(*g)?, channel(*b)?))
    }

    /// `"R, G, B"` — the form used inside CSS `rgb()` arguments.
    #[must_use]
    pub fn to_decimal(self) -> String {
        format!("{}, {}, {}", self.r, self.g, self.b)
    }

    /// `"#RRGGBB"`, upper case.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// `[R, G, B]` — the form a color picker expects as its default value.
    #[must_use]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Channels normalized to `0.0..=1.0`.
    #[must_use]
    pub fn to_unit(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Build from normalized channels. Each channel is scaled by 255,
    /// clamped to `0..=255` and rounded to nearest, ties to even.
    #[must_use]
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        Self::new(to_u8(r), to_u8(g), to_u8(b))
    }

    /// Whether all three channels are equal.
    #[inline]
    #[must_use]
    pub const fn is_gray(self) -> bool {
        self.r == self.g && self.g == self.b
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Accepts either textual encoding. A leading `#` selects hex; anything
    /// else must be a decimal triple, so `"123"` is not read as `#123`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with('#') {
            return Self::parse_hex(s);
        }
        Self::parse_decimal(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Option<Rgb> {
    let s = s.strip_prefix('#').unwrap_or(s);
    let bytes = s.as_bytes();

    match bytes.len() {
        // #RGB
        3 => {
            let r = parse_hex_digit(bytes[0])?;
            let g = parse_hex_digit(bytes[1])?;
            let b = parse_hex_digit(bytes[2])?;
            Some(Rgb::new(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        // #RRGGBB
        6 => {
            let r = parse_hex_byte(&bytes[0..2])?;
            let g = parse_hex_byte(&bytes[2..4])?;
            let b = parse_hex_byte(&bytes[4..6])?;
            Some(Rgb::new(r, g, b))
        }
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

/// Convert a float (0.0–1.0) to a u8 (0–255), rounding half to even.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    (v * 255.0).clamp(0.0, 255.0).round_ties_even() as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ── Decimal ──────────────────────────────────────────────────────────

    #[test]
    fn decimal_parses_canonical_form() {
        assert_eq!(Rgb::parse_decimal("106, 116, 211"), Ok(Rgb::new(106, 116, 211)));
    }

    #[test]
    fn decimal_tolerates_spacing() {
        assert_eq!(Rgb::parse_decimal("106,116,211"), Ok(Rgb::new(106, 116, 211)));
        assert_eq!(Rgb::parse_decimal("  0 ,  0,255 "), Ok(Rgb::new(0, 0, 255)));
    }

    #[test]
    fn decimal_rejects_wrong_count() {
        assert_eq!(Rgb::parse_decimal("1,2"), Err(ParseColorError::ComponentCount(2)));
        assert_eq!(
            Rgb::parse_decimal("1, 2, 3, 4"),
            Err(ParseColorError::ComponentCount(4))
        );
    }

    #[test]
    fn decimal_rejects_empty() {
        assert_eq!(Rgb::parse_decimal(""), Err(ParseColorError::Empty));
        assert_eq!(Rgb::parse_decimal("   "), Err(ParseColorError::Empty));
    }

    #[test]
    fn decimal_rejects_out_of_range() {
        assert_eq!(
            Rgb::parse_decimal("256, 0, 0"),
            Err(ParseColorError::Component("256".to_string()))
        );
        assert!(Rgb::parse_decimal("-1, 0, 0").is_err());
        assert!(Rgb::parse_decimal("a, b, c").is_err());
    }

    #[test]
    fn decimal_format_uses_comma_space() {
        assert_eq!(Rgb::new(1, 22, 255).to_decimal(), "1, 22, 255");
    }

    // ── Hex ──────────────────────────────────────────────────────────────

    #[test]
    fn hex_parsing_rrggbb() {
        assert_eq!(Rgb::parse_hex("#6A74D3"), Ok(Rgb::new(106, 116, 211)));
        assert_eq!(Rgb::parse_hex("#6a74d3"), Ok(Rgb::new(106, 116, 211)));
    }

    #[test]
    fn hex_parsing_short() {
        assert_eq!(Rgb::parse_hex("#f80"), Ok(Rgb::new(255, 136, 0)));
    }

    #[test]
    fn hex_parsing_no_hash() {
        assert_eq!(Rgb::parse_hex("00ff00"), Ok(Rgb::new(0, 255, 0)));
    }

    #[test]
    fn hex_parsing_invalid() {
        assert!(Rgb::parse_hex("xyz").is_err());
        assert!(Rgb::parse_hex("#12345").is_err());
        assert_eq!(Rgb::parse_hex(""), Err(ParseColorError::Empty));
    }

    #[test]
    fn hex_format_is_upper_case() {
        assert_eq!(Rgb::new(0xc8, 0x64, 0x0a).to_hex(), "#C8640A");
        assert_eq!(Rgb::new(0xc8, 0x64, 0x0a).to_string(), "#C8640A");
    }

    // ── FromStr ──────────────────────────────────────────────────────────

    #[test]
    fn from_str_accepts_both_encodings() {
        let a: Rgb = "106, 116, 211".parse().unwrap();
        let b: Rgb = "#6A74D3".parse().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn from_str_needs_hash_for_hex() {
        assert_eq!("123".parse::<Rgb>(), Err(ParseColorError::ComponentCount(1)));
        assert!("abc".parse::<Rgb>().is_err());
        assert!("6A74D3".parse::<Rgb>().is_err());
        assert_eq!("#123".parse::<Rgb>(), Ok(Rgb::new(0x11, 0x22, 0x33)));
    }

    #[test]
    fn from_str_reports_decimal_error_for_garbage() {
        let err = "1,2".parse::<Rgb>().unwrap_err();
        assert_eq!(err, ParseColorError::ComponentCount(2));
    }

    // ── Components ───────────────────────────────────────────────────────

    #[test]
    fn components_from_list() {
        assert_eq!(Rgb::from_components(&[106, 116, 211]), Ok(Rgb::new(106, 116, 211)));
        assert_eq!(
            Rgb::from_components(&[1, 2]),
            Err(ParseColorError::ComponentCount(2))
        );
        assert!(Rgb::from_components(&[0, 300, 0]).is_err());
        assert!(Rgb::from_components(&[0, -5, 0]).is_err());
    }

    #[test]
    fn array_roundtrip() {
        let c = Rgb::new(9, 8, 7);
        assert_eq!(Rgb::from(c.to_array()), c);
    }

    // ── Unit conversion ──────────────────────────────────────────────────

    #[test]
    fn unit_extremes() {
        assert_eq!(Rgb::from_unit(0.0, 1.0, 0.5), Rgb::new(0, 255, 128));
    }

    #[test]
    fn unit_clamps_out_of_range() {
        assert_eq!(Rgb::from_unit(-0.2, 1.7, 0.0), Rgb::new(0, 255, 0));
    }

    #[test]
    fn unit_rounds_half_to_even() {
        // 0.3 * 255 is exactly 76.5 in f64.
        assert_eq!(Rgb::from_unit(0.3, 0.3, 0.3), Rgb::new(76, 76, 76));
    }

    #[test]
    fn gray_detection() {
        assert!(Rgb::new(5, 5, 5).is_gray());
        assert!(!Rgb::new(5, 5, 6).is_gray());
    }
}
