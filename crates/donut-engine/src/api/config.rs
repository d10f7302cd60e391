use glam::Vec2;

/// Configuration for one donut chart instance. Defaults match the
/// production layout: a 200x200 viewBox with a 68px inner radius and a
/// 28px ring.
#[derive(Debug, Clone, PartialEq)]
pub struct DonutConfig {
    /// Ring center in viewBox units.
    pub center: Vec2,
    /// Inner radius of the ring.
    pub radius: f32,
    /// Ring thickness.
    pub thickness: f32,
    /// Radius of the white disk covering the ring center.
    pub hole_radius: f32,
    /// Minimum share (percent) for a wedge to carry an on-slice label.
    pub label_min_percent: f32,
    /// Animated redraw duration in milliseconds.
    pub animation_ms: f32,
    /// Start-state factor for the synthetic dip used when a redraw targets
    /// the distribution already on screen.
    pub dip_scale: f32,
}

impl Default for DonutConfig {
    fn default() -> Self {
        Self {
            center: Vec2::new(100.0, 100.0),
            radius: 68.0,
            thickness: 28.0,
            hole_radius: 58.0,
            label_min_percent: 6.0,
            animation_ms: 450.0,
            dip_scale: 0.85,
        }
    }
}
