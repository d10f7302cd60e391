use glam::Vec2;

use crate::api::types::Category;
use crate::bridge::naming;
use crate::core::allocation::Allocation;
use crate::core::chart::ChartInstance;
use crate::render::{geometry, snippets};

/// The unassigned slice is flat; no gradient reference.
const UNASSIGNED_FILL: &str = "#F1F5F9";

/// One linearGradient def.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientDef {
    pub id: String,
    pub light: &'static str,
    pub dark: &'static str,
    pub rotation: i32,
}

/// One ring segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Wedge {
    pub category: Category,
    pub path: String,
    pub fill: String,
}

/// A percent label centered on its slice.
#[derive(Debug, Clone, PartialEq)]
pub struct WedgeLabel {
    pub x: f32,
    pub y: f32,
    pub text: String,
}

/// Replacement innerHTML for one score badge outside the SVG.
#[derive(Debug, Clone, PartialEq)]
pub struct BadgeUpdate {
    pub element_id: String,
    pub html: String,
}

/// Everything needed to paint one frame of one chart: gradient defs,
/// wedge paths, slice labels, the center hole, and the badge HTML to
/// mirror outside the SVG. The host paints this verbatim; everything
/// here is plain data.
#[derive(Debug, Clone)]
pub struct ChartFrame {
    /// Prefix for gradient and filter ids inside this chart's defs.
    pub def_prefix: String,
    pub gradients: Vec<GradientDef>,
    pub wedges: Vec<Wedge>,
    pub labels: Vec<WedgeLabel>,
    pub hole_center: Vec2,
    pub hole_radius: f32,
    /// Rounded total of the named categories, e.g. "75%".
    pub center_text: String,
    pub badges: Vec<BadgeUpdate>,
    pub skeleton_id: String,
    /// Id prefix of the external total-score elements to refresh.
    pub total_score_prefix: String,
}

/// Build the draw list for one allocation. During animation this runs
/// once per frame with the interpolated allocation, so badges and the
/// center total tick along with the wedges.
pub fn build_frame(chart: &ChartInstance, allocation: &Allocation) -> ChartFrame {
    let config = chart.config();
    let def_prefix = naming::def_prefix(chart.name(), chart.is_modal());

    let gradients = Category::DRAW_ORDER
        .into_iter()
        .map(|cat| {
            let gradient = cat.gradient();
            GradientDef {
                id: naming::gradient_id(&def_prefix, cat),
                light: gradient.light,
                dark: gradient.dark,
                rotation: gradient.rotation,
            }
        })
        .collect();

    let mut wedges = Vec::new();
    let mut labels = Vec::new();
    let mut angle = -90.0_f32;
    for cat in Category::DRAW_ORDER {
        let pct = allocation.get(cat);
        if pct <= 0.0 {
            continue;
        }
        let span = (pct / 100.0) * 360.0;
        let fill = if cat == Category::Unassigned {
            UNASSIGNED_FILL.to_owned()
        } else {
            format!("url(#{})", naming::gradient_id(&def_prefix, cat))
        };
        wedges.push(Wedge {
            category: cat,
            path: geometry::arc_path(
                config.center,
                config.radius,
                config.thickness,
                angle,
                angle + span,
            ),
            fill,
        });

        if pct >= config.label_min_percent && cat != Category::Unassigned {
            let anchor = geometry::label_anchor(
                config.center,
                config.radius,
                config.thickness,
                angle,
                angle + span,
            );
            labels.push(WedgeLabel {
                x: anchor.x,
                y: anchor.y,
                text: format!("{}%", pct.round() as i32),
            });
        }

        angle += span;
    }

    let badges = Category::NAMED
        .into_iter()
        .map(|cat| BadgeUpdate {
            element_id: naming::badge_id(chart.name(), chart.is_modal(), cat),
            html: snippets::badge_span(allocation.get(cat), cat, chart.lucky().contains(cat)),
        })
        .collect();

    ChartFrame {
        def_prefix,
        gradients,
        wedges,
        labels,
        hole_center: config.center,
        hole_radius: config.hole_radius,
        center_text: format!("{}%", allocation.named_total().round() as i32),
        badges,
        skeleton_id: naming::skeleton_id(chart.name()),
        total_score_prefix: naming::total_score_prefix(chart.name()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::DonutConfig;
    use crate::api::types::CategorySet;

    fn chart_with(statuses: &[Category]) -> ChartInstance {
        ChartInstance::new(
            "chart-a",
            false,
            statuses.iter().copied().collect(),
            CategorySet::ALL,
            DonutConfig::default(),
        )
    }

    fn path_start(wedge: &Wedge) -> (f32, f32) {
        let mut tokens = wedge.path.split_whitespace().skip(1);
        let x = tokens.next().unwrap().parse().unwrap();
        let y = tokens.next().unwrap().parse().unwrap();
        (x, y)
    }

    #[test]
    fn zero_slices_are_skipped() {
        let chart = chart_with(&[Category::Health, Category::Career]);
        let frame = build_frame(&chart, &chart.target());

        let drawn: Vec<Category> = frame.wedges.iter().map(|w| w.category).collect();
        assert_eq!(
            drawn,
            vec![Category::Health, Category::Career, Category::Unassigned]
        );
    }

    #[test]
    fn wedges_accumulate_clockwise_from_twelve() {
        let chart = chart_with(&[
            Category::Health,
            Category::Career,
            Category::Finance,
            Category::Love,
        ]);
        let frame = build_frame(&chart, &chart.target());
        assert_eq!(frame.wedges.len(), 4);

        let (x0, y0) = path_start(&frame.wedges[0]);
        assert!((x0 - 100.0).abs() < 1e-3);
        assert!((y0 - 4.0).abs() < 1e-3);

        let (x1, y1) = path_start(&frame.wedges[1]);
        assert!((x1 - 196.0).abs() < 1e-3);
        assert!((y1 - 100.0).abs() < 1e-3);
    }

    #[test]
    fn labels_respect_the_minimum_percent() {
        let chart = chart_with(&[Category::Health]);
        let mut allocation = Allocation::default();
        allocation.set(Category::Health, 5.0);
        allocation.set(Category::Career, 95.0);

        let frame = build_frame(&chart, &allocation);
        assert_eq!(frame.labels.len(), 1);
        assert_eq!(frame.labels[0].text, "95%");
    }

    #[test]
    fn unassigned_is_flat_and_unlabeled() {
        let chart = chart_with(&[]);
        let frame = build_frame(&chart, &chart.target());

        assert_eq!(frame.wedges.len(), 1);
        assert_eq!(frame.wedges[0].category, Category::Unassigned);
        assert_eq!(frame.wedges[0].fill, UNASSIGNED_FILL);
        assert!(frame.labels.is_empty());
    }

    #[test]
    fn center_total_counts_named_categories_only() {
        let chart = chart_with(&[Category::Health, Category::Career, Category::Finance]);
        let frame = build_frame(&chart, &chart.target());
        assert_eq!(frame.center_text, "75%");
    }

    #[test]
    fn badges_cover_every_named_category() {
        let mut chart = chart_with(&[Category::Health]);
        chart.add_lucky(Category::Love);
        let frame = build_frame(&chart, &chart.target());

        assert_eq!(frame.badges.len(), 4);
        assert_eq!(
            frame.badges[0].element_id,
            "good-score-container-chart-a-สุขภาพ"
        );
        let love = &frame.badges[3];
        assert!(love.html.contains("font-weight: 800"));
        let finance = &frame.badges[2];
        assert!(finance.html.contains("#CBD5E1"));
    }

    #[test]
    fn gradient_ids_carry_the_chart_prefix() {
        let chart = chart_with(&[Category::Health]);
        let frame = build_frame(&chart, &chart.target());

        assert_eq!(frame.gradients.len(), 5);
        assert!(frame
            .gradients
            .iter()
            .all(|g| g.id.starts_with("donut-chart-a-")));
        assert!(frame.wedges[0].fill.contains("donut-chart-a-H"));
    }
}
