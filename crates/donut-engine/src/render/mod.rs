pub mod frame;
pub mod geometry;
pub mod snippets;

pub use frame::{build_frame, BadgeUpdate, ChartFrame, GradientDef, Wedge, WedgeLabel};
pub use geometry::{arc_path, label_anchor};
