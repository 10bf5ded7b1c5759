//! Core library for laying out tag clouds.
//!
//! - Spiral: Archimedean spiral of candidate anchor points around a fixed center
//! - Compactor: greedy slide of a free candidate toward the center, bounded by its neighbours
//! - Layouter: `CircularCloudLayouter` ties both together over an append-only placement set
//! - Pipeline: `layout_items` takes keyed sizes and returns a serde-serializable `Cloud`
//!
//! Quick example:
//! ```
//! use tag_cloud_core::prelude::*;
//! # fn main() -> tag_cloud_core::Result<()> {
//! let mut layouter = CircularCloudLayouter::new(Point::new(500, 500), 10);
//! let first = layouter.put_next_rectangle(Size::new(50, 20))?;
//! let second = layouter.put_next_rectangle(Size::new(30, 10))?;
//! assert!(!first.intersects(&second));
//! # Ok(()) }
//! ```

pub mod compactor;
pub mod config;
pub mod error;
pub mod export;
pub mod layouter;
pub mod model;
pub mod pipeline;
pub mod placement;
pub mod spiral;

pub use config::*;
pub use error::*;
pub use export::*;
pub use layouter::*;
pub use model::*;
pub use pipeline::*;

/// Convenience prelude for common types and functions.
/// Importing `tag_cloud_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::config::{LayouterConfig, LayouterConfigBuilder};
    pub use crate::error::CloudError;
    pub use crate::layouter::{CircularCloudLayouter, CloudLayouter};
    pub use crate::model::{Cloud, CloudStats, Placement, Point, Rect, Rejected, Size};
    pub use crate::pipeline::LayoutItem;
    pub use crate::{layout_items, layout_sizes, to_json_array, to_json_hash};
}
