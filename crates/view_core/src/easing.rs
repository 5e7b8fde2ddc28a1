use std::f32::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// `cubic-bezier(0.42, 0, 0.58, 1)`
    EaseInOut,
    SineInOut,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
            Easing::SineInOut => 0.5 - (PI * t).cos() / 2.0,
        }
    }
}

fn bezier_axis(p1: f32, p2: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    3.0 * p1 * t * u * u + 3.0 * p2 * t * t * u + t * t * t
}

// x(t) is monotonic for control points inside [0, 1], so bisection converges.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    let mut t = x;
    for _ in 0..24 {
        let current = bezier_axis(x1, x2, t);
        if (current - x).abs() < 1e-6 {
            break;
        }
        if current < x {
            lo = t;
        } else {
            hi = t;
        }
        t = (lo + hi) / 2.0;
    }
    bezier_axis(y1, y2, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easings_pin_endpoints() {
        for easing in [Easing::Linear, Easing::EaseInOut, Easing::SineInOut] {
            assert!(easing.apply(0.0).abs() < 1e-4, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-4, "{easing:?} at 1");
        }
    }

    #[test]
    fn ease_in_out_is_symmetric_and_slow_at_the_edges() {
        let mid = Easing::EaseInOut.apply(0.5);
        assert!((mid - 0.5).abs() < 1e-3);
        let early = Easing::EaseInOut.apply(0.2);
        let late = Easing::EaseInOut.apply(0.8);
        assert!(early < 0.2);
        assert!((early + late - 1.0).abs() < 1e-3);
    }

    #[test]
    fn inputs_outside_unit_range_are_clamped() {
        assert_eq!(Easing::Linear.apply(-3.0), 0.0);
        assert_eq!(Easing::SineInOut.apply(2.0), 1.0);
    }
}
