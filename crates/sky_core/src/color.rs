//! Color pairs, interpolation and random sky color sampling.

use bevy::prelude::*;
use rand::Rng;

/// The two endpoints of a vertical sky gradient.
///
/// `bottom` is the horizon color, `top` the zenith color. A pair is immutable
/// once handed to a transition; the running fade interpolates between whole
/// pairs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorPair {
    pub bottom: LinearRgba,
    pub top: LinearRgba,
}

impl Default for ColorPair {
    fn default() -> Self {
        Self::dawn()
    }
}

impl ColorPair {
    pub fn new(bottom: LinearRgba, top: LinearRgba) -> Self {
        Self { bottom, top }
    }

    /// Warm horizon under a pale blue zenith.
    pub fn dawn() -> Self {
        Self {
            bottom: LinearRgba::rgb(0.9, 0.45, 0.2),
            top: LinearRgba::rgb(0.35, 0.55, 0.85),
        }
    }

    /// Deep purple horizon under a near-black zenith.
    pub fn dusk() -> Self {
        Self {
            bottom: LinearRgba::rgb(0.3, 0.1, 0.35),
            top: LinearRgba::rgb(0.02, 0.02, 0.08),
        }
    }

    /// Componentwise interpolation: bottom with bottom, top with top.
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            bottom: lerp_color(self.bottom, other.bottom, t),
            top: lerp_color(self.top, other.top, t),
        }
    }
}

/// Componentwise linear interpolation between two colors.
pub fn lerp_color(a: LinearRgba, b: LinearRgba, t: f32) -> LinearRgba {
    LinearRgba {
        red: lerp(a.red, b.red, t),
        green: lerp(a.green, b.green, t),
        blue: lerp(a.blue, b.blue, t),
        alpha: lerp(a.alpha, b.alpha, t),
    }
}

/// Linear interpolation helper.
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Sample one sky color: hue uniform over the full circle, saturation fixed
/// at 1, value uniform in [0.5, 1].
///
/// Full saturation keeps the skies vivid; the value floor keeps them from
/// going muddy.
pub fn random_sky_color<R: Rng>(rng: &mut R) -> LinearRgba {
    let hue = rng.gen_range(0.0..360.0);
    let value = rng.gen_range(0.5..=1.0);
    Color::hsv(hue, 1.0, value).to_linear()
}

/// Sample an independent bottom and top color.
pub fn random_sky_pair<R: Rng>(rng: &mut R) -> ColorPair {
    ColorPair {
        bottom: random_sky_color(rng),
        top: random_sky_color(rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn approx(a: LinearRgba, b: LinearRgba) -> bool {
        (a.red - b.red).abs() < 1e-5
            && (a.green - b.green).abs() < 1e-5
            && (a.blue - b.blue).abs() < 1e-5
            && (a.alpha - b.alpha).abs() < 1e-5
    }

    #[test]
    fn test_lerp_endpoints_are_exact() {
        let a = LinearRgba::rgb(0.1, 0.2, 0.3);
        let b = LinearRgba::rgb(0.9, 0.8, 0.7);

        assert!(approx(lerp_color(a, b, 0.0), a));
        assert!(approx(lerp_color(a, b, 1.0), b));
    }

    #[test]
    fn test_lerp_midpoint_is_average() {
        let a = LinearRgba::rgb(0.0, 0.0, 0.0);
        let b = LinearRgba::rgb(1.0, 0.5, 0.2);
        let mid = lerp_color(a, b, 0.5);

        assert!((mid.red - 0.5).abs() < 1e-5);
        assert!((mid.green - 0.25).abs() < 1e-5);
        assert!((mid.blue - 0.1).abs() < 1e-5);
    }

    #[test]
    fn test_pair_lerp_matches_components() {
        let a = ColorPair::dawn();
        let b = ColorPair::dusk();
        let mid = a.lerp(&b, 0.5);

        assert!(approx(mid.bottom, lerp_color(a.bottom, b.bottom, 0.5)));
        assert!(approx(mid.top, lerp_color(a.top, b.top, 0.5)));
    }

    #[test]
    fn test_random_sky_color_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let c = random_sky_color(&mut rng);
            let max = c.red.max(c.green).max(c.blue);
            let min = c.red.min(c.green).min(c.blue);

            // Full saturation means the weakest channel is zero.
            assert!(min < 1e-5, "min channel {} should be ~0", min);
            // Value >= 0.5 in sRGB is ~0.214 in linear space.
            assert!(max >= 0.21, "max channel {} below value floor", max);
            assert!(max <= 1.0 + 1e-5);
        }
    }

    #[test]
    fn test_random_sky_pair_samples_independently() {
        let mut rng = StdRng::seed_from_u64(7);
        let pair = random_sky_pair(&mut rng);

        // Two independent draws are essentially never equal.
        assert!(!approx(pair.bottom, pair.top));
    }
}
