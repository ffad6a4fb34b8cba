//! Tab rendering modules

pub mod heatmap;
pub mod overview;
pub mod sessions;
pub mod trend;
