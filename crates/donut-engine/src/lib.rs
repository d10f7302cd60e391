pub mod anim;
pub mod api;
pub mod bridge;
pub mod core;
pub mod error;
pub mod render;

// Re-export key types at crate root for convenience
pub use api::config::DonutConfig;
pub use api::types::{Category, CategorySet, Gradient};
pub use core::allocation::{allocate, Allocation, BASE_SHARE};
pub use core::breakdown::{
    decode_active, decode_breakdown, qualifying_categories, BreakdownMap, CategoryBreakdown,
};
pub use core::chart::ChartInstance;
pub use core::lucky::{
    InteractionState, LuckyNumber, LuckyNumberResponse, LuckyOutcome, LuckySlot, SlotPhase,
};
pub use anim::easing::{ease, lerp, Easing};
pub use anim::transition::Transition;
pub use render::frame::{build_frame, BadgeUpdate, ChartFrame, GradientDef, Wedge, WedgeLabel};
pub use render::geometry::{arc_path, label_anchor};
pub use bridge::naming::{ChartKey, ContainerKey};
pub use error::EngineError;
