//! Layout module for tracking UI component regions
//!
//! `LayoutRegions` records where each widget was drawn on the last frame,
//! and `region_at()` maps a mouse position back to the widget under it.

mod layout_regions;

pub use layout_hit_test::region_at;
pub use layout_regions::{LayoutRegions, Region};
