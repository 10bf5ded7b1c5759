use crate::compactor::Compactor;
use crate::config::LayouterConfig;
use crate::error::{CloudError, Result};
use crate::model::{CloudStats, Point, Rect, Size};
use crate::placement::PlacementSet;
use crate::spiral::Spiral;
use tracing::debug;

/// A layouter places rectangles one at a time around a fixed center.
///
/// Implementations must never return a rectangle overlapping one they returned before.
/// A rejected request must leave the layout unchanged.
pub trait CloudLayouter {
    fn center(&self) -> Point;
    fn put_next_rectangle(&mut self, size: Size) -> Result<Rect>;
}

/// Circular cloud: spiral search for a free spot, then compaction toward the center.
///
/// Deterministic: the same config and the same sequence of sizes always produce the
/// same rectangles. Not synchronized; wrap it in a mutex to share across threads.
#[derive(Debug, Clone)]
pub struct CircularCloudLayouter {
    cfg: LayouterConfig,
    spiral: Spiral,
    compactor: Compactor,
    placed: PlacementSet,
}

impl CircularCloudLayouter {
    /// Layouter around `center` with spiral `step` and the default attempt cap.
    ///
    /// `step` is not validated here; use [`CircularCloudLayouter::with_config`] for that.
    pub fn new(center: Point, step: i32) -> Self {
        Self::from_valid_config(LayouterConfig {
            center,
            step,
            ..Default::default()
        })
    }

    pub fn with_config(cfg: LayouterConfig) -> Result<Self> {
        cfg.validate()?;
        Ok(Self::from_valid_config(cfg))
    }

    fn from_valid_config(cfg: LayouterConfig) -> Self {
        Self {
            spiral: Spiral::new(cfg.center, cfg.step),
            compactor: Compactor::new(cfg.center),
            placed: PlacementSet::new(),
            cfg,
        }
    }

    pub fn config(&self) -> &LayouterConfig {
        &self.cfg
    }

    /// Committed rectangles in request order.
    pub fn rectangles(&self) -> &[Rect] {
        self.placed.as_slice()
    }

    pub fn len(&self) -> usize {
        self.placed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }

    /// Current spiral angle, i.e. how many candidate points have been drawn so far.
    pub fn angle(&self) -> u64 {
        self.spiral.angle()
    }

    pub fn stats(&self) -> CloudStats {
        CloudStats::compute(self.cfg.center, &self.placed)
    }

    /// Walks the spiral until a rectangle of `size` fits without overlap.
    fn find_free_spot(&mut self, size: Size) -> Result<(Rect, u64)> {
        let mut attempts = 0u64;
        loop {
            if let Some(cap) = self.cfg.max_spiral_attempts {
                if attempts >= cap {
                    return Err(CloudError::SpiralExhausted {
                        attempts,
                        width: size.width,
                        height: size.height,
                    });
                }
            }
            attempts += 1;
            let candidate = Rect::at(self.spiral.next_point(), size);
            if !self.placed.overlaps(&candidate) {
                return Ok((candidate, attempts));
            }
        }
    }
}

impl CloudLayouter for CircularCloudLayouter {
    fn center(&self) -> Point {
        self.cfg.center
    }

    fn put_next_rectangle(&mut self, size: Size) -> Result<Rect> {
        if !size.is_valid() {
            return Err(CloudError::InvalidSize {
                width: size.width,
                height: size.height,
            });
        }

        let (candidate, attempts) = self.find_free_spot(size)?;
        let (rect, moves) = self.compactor.compact(candidate, self.placed.as_slice());
        self.placed.commit(rect);
        debug!(
            w = size.width,
            h = size.height,
            x = rect.x,
            y = rect.y,
            attempts,
            moves,
            angle = self.spiral.angle(),
            "rectangle placed"
        );
        Ok(rect)
    }
}
