// anim/easing.rs
//
// Easing curves over normalized time. Input is clamped to [0, 1] so
// callers can feed raw elapsed-over-duration ratios.

/// Curve shaping for animated values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    /// Fast start, decelerating finish.
    QuadOut,
    /// Sharper deceleration than QuadOut.
    CubicOut,
}

impl Easing {
    /// Map normalized time through the curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadOut => t * (2.0 - t),
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// Linear interpolation between two values.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Interpolate with a curve applied to `t`.
pub fn ease(a: f32, b: f32, t: f32, easing: Easing) -> f32 {
    lerp(a, b, easing.apply(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_curve_hits_its_endpoints() {
        for curve in [Easing::Linear, Easing::QuadOut, Easing::CubicOut] {
            assert_eq!(curve.apply(0.0), 0.0);
            assert_eq!(curve.apply(1.0), 1.0);
        }
    }

    #[test]
    fn quad_out_front_loads_the_motion() {
        assert_eq!(Easing::QuadOut.apply(0.5), 0.75);
        assert!(Easing::QuadOut.apply(0.25) > 0.25);
    }

    #[test]
    fn cubic_out_decelerates_harder_than_quad() {
        assert!(Easing::CubicOut.apply(0.5) > Easing::QuadOut.apply(0.5));
    }

    #[test]
    fn ease_interpolates_between_bounds() {
        assert_eq!(ease(10.0, 20.0, 0.0, Easing::QuadOut), 10.0);
        assert_eq!(ease(10.0, 20.0, 1.0, Easing::QuadOut), 20.0);
        assert_eq!(ease(0.0, 100.0, 0.5, Easing::Linear), 50.0);
    }

    #[test]
    fn out_of_range_time_clamps() {
        assert_eq!(Easing::QuadOut.apply(-1.0), 0.0);
        assert_eq!(Easing::QuadOut.apply(2.5), 1.0);
        assert_eq!(ease(5.0, 9.0, 3.0, Easing::Linear), 9.0);
    }
}
