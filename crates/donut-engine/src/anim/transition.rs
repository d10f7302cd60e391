// anim/transition.rs
//
// A timed move between two allocations. The transition itself is pure
// state; the host drives it with elapsed milliseconds and paints
// whatever `sample` returns.

use crate::anim::easing::{ease, Easing};
use crate::api::types::Category;
use crate::core::allocation::Allocation;

/// Start and target counting as already settled, in percent points.
const SETTLED_TOL: f32 = 0.1;

/// An in-flight animated redraw.
#[derive(Debug, Clone)]
pub struct Transition {
    from: Allocation,
    to: Allocation,
    duration_ms: f32,
    easing: Easing,
}

impl Transition {
    pub fn between(from: Allocation, to: Allocation, duration_ms: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_ms,
            easing,
        }
    }

    /// Give a settled ring a visible pulse: when the start already
    /// matches the target, shrink the start so the ring dips and grows
    /// back instead of sitting still.
    pub fn with_dip(mut self, dip_scale: f32) -> Self {
        if self.from.approx_eq(&self.to, SETTLED_TOL) {
            self.from = self.to.scaled(dip_scale);
        }
        self
    }

    pub fn duration_ms(&self) -> f32 {
        self.duration_ms
    }

    pub fn target(&self) -> &Allocation {
        &self.to
    }

    /// Normalized progress for an elapsed time.
    pub fn progress(&self, elapsed_ms: f32) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self, elapsed_ms: f32) -> bool {
        elapsed_ms >= self.duration_ms
    }

    /// The allocation to paint at an elapsed time. The final frame is
    /// the exact target, never an interpolated approximation.
    pub fn sample(&self, elapsed_ms: f32) -> Allocation {
        if self.is_finished(elapsed_ms) {
            return self.to.clone();
        }
        let t = self.progress(elapsed_ms);
        let mut out = Allocation::default();
        for cat in Category::DRAW_ORDER {
            out.set(cat, ease(self.from.get(cat), self.to.get(cat), t, self.easing));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alloc(values: [f32; 5]) -> Allocation {
        let mut out = Allocation::default();
        for (cat, value) in Category::DRAW_ORDER.into_iter().zip(values) {
            out.set(cat, value);
        }
        out
    }

    #[test]
    fn final_frame_is_the_exact_target() {
        let to = alloc([25.0, 25.0, 25.0, 25.0, 0.0]);
        let transition =
            Transition::between(alloc([0.0; 5]), to.clone(), 450.0, Easing::QuadOut);
        assert_eq!(transition.sample(450.0), to);
        assert_eq!(transition.sample(10_000.0), to);
    }

    #[test]
    fn halfway_reflects_the_curve() {
        let from = alloc([0.0; 5]);
        let to = alloc([100.0, 0.0, 0.0, 0.0, 0.0]);

        let linear = Transition::between(from.clone(), to.clone(), 400.0, Easing::Linear);
        assert!((linear.sample(200.0).get(Category::Health) - 50.0).abs() < 1e-3);

        let quad = Transition::between(from, to, 400.0, Easing::QuadOut);
        assert!((quad.sample(200.0).get(Category::Health) - 75.0).abs() < 1e-3);
    }

    #[test]
    fn dip_rewrites_an_already_settled_start() {
        let to = alloc([50.0, 50.0, 0.0, 0.0, 0.0]);
        let transition =
            Transition::between(to.clone(), to.clone(), 450.0, Easing::QuadOut).with_dip(0.85);
        let start = transition.sample(0.0);
        assert!((start.get(Category::Health) - 42.5).abs() < 1e-3);
        assert!((start.get(Category::Career) - 42.5).abs() < 1e-3);
    }

    #[test]
    fn dip_leaves_a_real_move_alone() {
        let from = alloc([100.0, 0.0, 0.0, 0.0, 0.0]);
        let to = alloc([25.0, 75.0, 0.0, 0.0, 0.0]);
        let transition =
            Transition::between(from.clone(), to, 450.0, Easing::QuadOut).with_dip(0.85);
        assert_eq!(transition.sample(0.0), from);
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let to = alloc([10.0, 20.0, 30.0, 40.0, 0.0]);
        let transition = Transition::between(alloc([0.0; 5]), to.clone(), 0.0, Easing::Linear);
        assert!(transition.is_finished(0.0));
        assert_eq!(transition.sample(0.0), to);
        assert_eq!(transition.progress(0.0), 1.0);
    }
}
