use crate::config::LayouterConfig;
use crate::error::{CloudError, Result};
use crate::layouter::{CircularCloudLayouter, CloudLayouter};
use crate::model::{Cloud, Placement, Rejected, Size};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Keyed size to place (typically a tag word and its measured text box).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutItem<K = String> {
    pub key: K,
    pub width: i32,
    pub height: i32,
}

impl<K> LayoutItem<K> {
    pub fn new(key: K, width: i32, height: i32) -> Self {
        Self { key, width, height }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

#[instrument(skip_all)]
/// Lays out `items` in input order and returns the resulting cloud.
///
/// Notes:
/// - Order matters: every placement depends on all earlier ones.
/// - Items the layouter rejects are recorded in `Cloud::rejected`; later items are still placed.
/// - Fails only on an invalid config or empty input.
pub fn layout_items<K>(items: Vec<LayoutItem<K>>, cfg: LayouterConfig) -> Result<Cloud<K>> {
    if items.is_empty() {
        return Err(CloudError::Empty);
    }
    let mut layouter = CircularCloudLayouter::with_config(cfg)?;
    Ok(layout_into(&mut layouter, items))
}

/// Like [`layout_items`] but continues an existing layouter, so batches can be appended.
/// The returned cloud holds this batch only; `layouter.rectangles()` has every placement.
pub fn layout_into<K>(
    layouter: &mut CircularCloudLayouter,
    items: Vec<LayoutItem<K>>,
) -> Cloud<K> {
    let mut placements = Vec::with_capacity(items.len());
    let mut rejected = Vec::new();
    for (index, item) in items.into_iter().enumerate() {
        let size = item.size();
        match layouter.put_next_rectangle(size) {
            Ok(rect) => placements.push(Placement {
                key: item.key,
                rect,
            }),
            Err(e) => {
                warn!(index, w = size.width, h = size.height, error = %e, "item rejected");
                rejected.push(Rejected {
                    index,
                    key: item.key,
                    size,
                    reason: e.to_string(),
                });
            }
        }
    }
    Cloud {
        center: layouter.center(),
        step: layouter.config().step,
        placements,
        rejected,
    }
}

/// Convenience wrapper for `(key, width, height)` tuples.
pub fn layout_sizes<K>(items: Vec<(K, i32, i32)>, cfg: LayouterConfig) -> Result<Cloud<K>> {
    let items = items
        .into_iter()
        .map(|(key, w, h)| LayoutItem::new(key, w, h))
        .collect();
    layout_items(items, cfg)
}
