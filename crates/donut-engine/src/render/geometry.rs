//! Arc path construction for ring segments. Angles are degrees, 0 at
//! three o'clock, increasing clockwise in SVG's y-down frame; wedges
//! start from twelve o'clock (-90).

use glam::Vec2;

/// Spans at or past this are treated as a full turn.
const FULL_TURN_CLAMP: f32 = 359.9;
/// What a full turn is drawn as; a true 360 arc collapses to nothing
/// because start and end coincide.
const CLAMPED_SPAN: f32 = 359.99;

fn polar(center: Vec2, radius: f32, angle_deg: f32) -> Vec2 {
    center + radius * Vec2::from_angle(angle_deg.to_radians())
}

/// Path data for one ring segment between two radii.
///
/// Outer edge sweeps clockwise from start to end, then a straight cut
/// to the inner radius and the inner edge sweeps back.
pub fn arc_path(
    center: Vec2,
    inner_radius: f32,
    thickness: f32,
    start_deg: f32,
    mut end_deg: f32,
) -> String {
    if end_deg - start_deg >= FULL_TURN_CLAMP {
        end_deg = start_deg + CLAMPED_SPAN;
    }
    let outer_radius = inner_radius + thickness;

    let outer_start = polar(center, outer_radius, start_deg);
    let outer_end = polar(center, outer_radius, end_deg);
    let inner_end = polar(center, inner_radius, end_deg);
    let inner_start = polar(center, inner_radius, start_deg);

    let large_arc = if end_deg - start_deg > 180.0 { 1 } else { 0 };

    format!(
        "M {} {} A {} {} 0 {} 1 {} {} L {} {} A {} {} 0 {} 0 {} {} Z",
        outer_start.x,
        outer_start.y,
        outer_radius,
        outer_radius,
        large_arc,
        outer_end.x,
        outer_end.y,
        inner_end.x,
        inner_end.y,
        inner_radius,
        inner_radius,
        large_arc,
        inner_start.x,
        inner_start.y,
    )
}

/// Where a segment's percent label sits: mid-angle, mid-thickness.
pub fn label_anchor(
    center: Vec2,
    inner_radius: f32,
    thickness: f32,
    start_deg: f32,
    end_deg: f32,
) -> Vec2 {
    let mid_deg = (start_deg + end_deg) / 2.0;
    polar(center, inner_radius + thickness / 2.0, mid_deg)
}
