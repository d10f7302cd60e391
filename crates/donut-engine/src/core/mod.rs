pub mod allocation;
pub mod breakdown;
pub mod chart;
pub mod lucky;
