pub mod config;
pub mod types;

pub use config::DonutConfig;
pub use types::{Category, CategorySet, Gradient};
