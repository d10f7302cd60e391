pub mod naming;

pub use naming::{ChartKey, ContainerKey};
