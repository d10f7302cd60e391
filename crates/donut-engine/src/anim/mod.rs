// anim/mod.rs
//
// Easing curves and the allocation transition that animates redraws.

pub mod easing;
pub mod transition;

pub use easing::{ease, lerp, Easing};
pub use transition::Transition;
