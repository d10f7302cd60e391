use donut_engine::{Allocation, Transition};
use gloo_render::{request_animation_frame, AnimationFrame};

/// An in-flight animated redraw plus its scheduling state. Dropping it
/// cancels the pending frame.
pub struct ActiveAnimation {
    transition: Transition,
    /// Timestamp of the first frame; elapsed time is measured from it.
    started_at: Option<f64>,
    frame: Option<AnimationFrame>,
}

impl ActiveAnimation {
    pub fn new(transition: Transition) -> Self {
        Self {
            transition,
            started_at: None,
            frame: None,
        }
    }

    pub fn set_frame(&mut self, frame: AnimationFrame) {
        self.frame = Some(frame);
    }

    /// Consume the pending frame handle and advance the clock. Returns
    /// the allocation to paint and whether the transition is done.
    pub fn advance(&mut self, timestamp: f64) -> (Allocation, bool) {
        self.frame.take();
        let start = *self.started_at.get_or_insert(timestamp);
        let elapsed = (timestamp - start) as f32;
        (
            self.transition.sample(elapsed),
            self.transition.is_finished(elapsed),
        )
    }
}

/// Schedule the next animation tick for a chart. The callback re-enters
/// the page registry by chart id, so the returned handle can live inside
/// the registry without a reference cycle.
pub fn schedule(chart_id: String) -> AnimationFrame {
    request_animation_frame(move |timestamp| crate::page::animation_frame(&chart_id, timestamp))
}
