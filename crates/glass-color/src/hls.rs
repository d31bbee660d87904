// SPDX-License-Identifier: MIT
//
// Hue / lightness / saturation — the working space for tonal ramps.
//
// This is the classic double-hexcone HLS model, not a perceptual space.
// Holding hue and saturation fixed while moving lightness gives the
// "same color, lighter or darker" ramp the dashboard theme is built from.
//
// All three components live in 0.0..=1.0 (hue is a fraction of a turn).

use crate::color::Rgb;

const ONE_THIRD: f64 = 1.0 / 3.0;
const ONE_SIXTH: f64 = 1.0 / 6.0;
const TWO_THIRDS: f64 = 2.0 / 3.0;

/// A color in HLS space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hls {
    /// Hue as a fraction of a full turn, `0.0..1.0`.
    pub h: f64,
    /// Lightness, `0.0` (black) to `1.0` (white).
    pub l: f64,
    /// Saturation, `0.0` (gray) to `1.0`.
    pub s: f64,
}

impl Hls {
    #[inline]
    #[must_use]
    pub const fn new(h: f64, l: f64, s: f64) -> Self {
        Self { h, l, s }
    }

    #[must_use]
    pub fn from_rgb(color: Rgb) -> Self {
        let (r, g, b) = color.to_unit();
        let (h, l, s) = rgb_to_hls(r, g, b);
        Self { h, l, s }
    }

    /// Convert back to 8-bit RGB (clamped, rounded half to even).
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        let (r, g, b) = hls_to_rgb(self.h, self.l, self.s);
        Rgb::from_unit(r, g, b)
    }

    /// Same hue and saturation at a different lightness.
    #[inline]
    #[must_use]
    pub const fn with_lightness(self, l: f64) -> Self {
        Self { l, ..self }
    }
}

impl From<Rgb> for Hls {
    fn from(color: Rgb) -> Self {
        Self::from_rgb(color)
    }
}

// ─── Conversion Functions ────────────────────────────────────────────────────

/// Normalized RGB → HLS.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn rgb_to_hls(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let sum = max + min;
    let range = max - min;
    let l = sum / 2.0;

    // Achromatic: hue and saturation are undefined, report zero.
    if min == max {
        return (0.0, l, 0.0);
    }

    // Near-white tints can land a hair above 1.0 through rounding.
    let s = (if l <= 0.5 { range / sum } else { range / (2.0 - sum) }).min(1.0);

    let rc = (max - r) / range;
    let gc = (max - g) / range;
    let bc = (max - b) / range;

    let h = if r == max {
        bc - gc
    } else if g == max {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };

    ((h / 6.0).rem_euclid(1.0), l, s)
}

/// HLS → normalized RGB. Output channels may need clamping only through
/// floating-point noise; the model itself stays in gamut.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn hls_to_rgb(h: f64, l: f64, s: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (l, l, l);
    }

    let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - (l * s) };
    let m1 = 2.0 * l - m2;

    (
        hue_channel(m1, m2, h + ONE_THIRD),
        hue_channel(m1, m2, h),
        hue_channel(m1, m2, h - ONE_THIRD),
    )
}

fn hue_channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < ONE_SIXTH {
        return m1 + (m2 - m1) * hue * 6.0;
    }
    if hue < 0.5 {
        return m2;
    }
    if hue < TWO_THIRDS {
        return m1 + (m2 - m1) * (TWO_THIRDS - hue) * 6.0;
    }
    m1
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    fn assert_rgb_close(actual: Rgb, expected: Rgb) {
        let close = |a: u8, e: u8| (i16::from(a) - i16::from(e)).unsigned_abs() <= 1;
        assert!(
            close(actual.r, expected.r) && close(actual.g, expected.g) && close(actual.b, expected.b),
            "RGB mismatch: got {actual}, expected {expected}"
        );
    }

    // ── Known Values ─────────────────────────────────────────────────────

    #[test]
    fn red_has_zero_hue_full_saturation() {
        let hls = Hls::from_rgb(Rgb::new(255, 0, 0));
        assert!(approx_eq(hls.h, 0.0, 1e-9));
        assert!(approx_eq(hls.l, 0.5, 1e-9));
        assert!(approx_eq(hls.s, 1.0, 1e-9));
    }

    #[test]
    fn green_and_blue_hues_are_thirds() {
        assert!(approx_eq(Hls::from_rgb(Rgb::new(0, 255, 0)).h, ONE_THIRD, 1e-9));
        assert!(approx_eq(Hls::from_rgb(Rgb::new(0, 0, 255)).h, TWO_THIRDS, 1e-9));
    }

    #[test]
    fn gray_has_no_saturation() {
        let hls = Hls::from_rgb(Rgb::new(128, 128, 128));
        assert!(approx_eq(hls.s, 0.0, 1e-12));
        assert!(approx_eq(hls.h, 0.0, 1e-12));
        assert!(approx_eq(hls.l, 128.0 / 255.0, 1e-12));
    }

    #[test]
    fn default_seed_components() {
        let hls = Hls::from_rgb(Rgb::new(106, 116, 211));
        assert!(approx_eq(hls.l, 317.0 / 510.0, 1e-12));
        assert!(hls.h > 0.6 && hls.h < 0.7, "hue {}", hls.h);
    }

    #[test]
    fn magenta_hue_wraps_positive() {
        // r == max with b > g yields a negative raw hue before wrapping.
        let hls = Hls::from_rgb(Rgb::new(255, 0, 128));
        assert!(hls.h > 0.8 && hls.h < 1.0, "hue {}", hls.h);
    }

    #[test]
    fn with_lightness_keeps_hue_and_saturation() {
        let hls = Hls::new(0.25, 0.4, 0.7).with_lightness(0.9);
        assert_eq!(hls, Hls::new(0.25, 0.9, 0.7));
    }

    #[test]
    fn lightness_extremes_are_black_and_white() {
        let hls = Hls::from_rgb(Rgb::new(106, 116, 211));
        assert_eq!(hls.with_lightness(0.0).to_rgb(), Rgb::new(0, 0, 0));
        assert_eq!(hls.with_lightness(1.0).to_rgb(), Rgb::new(255, 255, 255));
    }

    // ── Roundtrip ────────────────────────────────────────────────────────

    #[test]
    fn primaries_roundtrip_exactly() {
        for c in [
            Rgb::new(255, 0, 0),
            Rgb::new(0, 255, 0),
            Rgb::new(0, 0, 255),
            Rgb::new(255, 255, 0),
            Rgb::new(0, 255, 255),
            Rgb::new(255, 0, 255),
            Rgb::new(255, 255, 255),
            Rgb::new(0, 0, 0),
        ] {
            assert_eq!(Hls::from_rgb(c).to_rgb(), c);
        }
    }

    #[test]
    fn light_tint_saturation_does_not_exceed_one() {
        let hls = Hls::from_rgb(Rgb::new(255, 180, 180));
        assert!(hls.s <= 1.0, "{}", hls.s);
        assert_rgb_close(hls.to_rgb(), Rgb::new(255, 180, 180));
    }

    proptest! {
        #[test]
        fn any_rgb_roundtrips_within_one(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let c = Rgb::new(r, g, b);
            assert_rgb_close(Hls::from_rgb(c).to_rgb(), c);
        }

        #[test]
        fn components_stay_in_unit_range(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let hls = Hls::from_rgb(Rgb::new(r, g, b));
            prop_assert!((0.0..1.0).contains(&hls.h));
            prop_assert!((0.0..=1.0).contains(&hls.l));
            prop_assert!((0.0..=1.0).contains(&hls.s));
        }
    }
}
