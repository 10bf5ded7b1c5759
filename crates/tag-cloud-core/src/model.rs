use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Integer point. The y axis grows downward (screen coordinates).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared euclidean distance to `other`, widened so it cannot overflow.
    pub fn distance_sq(&self, other: &Point) -> i64 {
        let dx = self.x as i64 - other.x as i64;
        let dy = self.y as i64 - other.y as i64;
        dx * dx + dy * dy
    }

    pub fn distance(&self, other: &Point) -> f64 {
        (self.distance_sq(other) as f64).sqrt()
    }
}

/// Requested rectangle size. Not validated on construction; the layouter rejects non-positive sides.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Axis-aligned rectangle. `x,y` is top-left; `w,h` are sizes.
/// `right()`/`bottom()` are exclusive, so rectangles sharing an edge do not intersect.
/// Edges are `i64`: a side up to `i32::MAX` at any `i32` position stays representable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn at(location: Point, size: Size) -> Self {
        Self::new(location.x, location.y, size.width, size.height)
    }

    #[inline]
    pub fn left(&self) -> i64 {
        self.x as i64
    }
    #[inline]
    pub fn top(&self) -> i64 {
        self.y as i64
    }
    #[inline]
    pub fn right(&self) -> i64 {
        self.x as i64 + self.w as i64
    }
    #[inline]
    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.h as i64
    }

    pub fn location(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.w, self.h)
    }

    pub fn area(&self) -> i64 {
        self.w as i64 * self.h as i64
    }

    /// Same size, moved so its top-left is `location`.
    pub fn with_location(&self, location: Point) -> Self {
        Self::new(location.x, location.y, self.w, self.h)
    }

    /// True when the interiors overlap; touching edges do not count.
    pub fn intersects(&self, other: &Rect) -> bool {
        other.left() < self.right()
            && self.left() < other.right()
            && other.top() < self.bottom()
            && self.top() < other.bottom()
    }

    /// Corners as `(x, y)` in clockwise order starting at top-left.
    pub fn corners(&self) -> [(i64, i64); 4] {
        [
            (self.left(), self.top()),
            (self.right(), self.top()),
            (self.right(), self.bottom()),
            (self.left(), self.bottom()),
        ]
    }

    /// Smallest rectangle containing both. Sides saturate at `i32::MAX`.
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let r = self.right().max(other.right());
        let b = self.bottom().max(other.bottom());
        let w = i32::try_from(r - x as i64).unwrap_or(i32::MAX);
        let h = i32::try_from(b - y as i64).unwrap_or(i32::MAX);
        Rect::new(x, y, w, h)
    }
}

/// A committed rectangle together with the caller's key (usually the tag word).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Placement<K = String> {
    pub key: K,
    pub rect: Rect,
}

/// An input item the layouter refused, kept so batch callers can report it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rejected<K = String> {
    /// Position of the item in the input sequence.
    pub index: usize,
    pub key: K,
    pub size: Size,
    pub reason: String,
}

/// Result of laying out a batch: placements in request order plus the rejects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cloud<K = String> {
    pub center: Point,
    pub step: i32,
    pub placements: Vec<Placement<K>>,
    #[serde(default)]
    pub rejected: Vec<Rejected<K>>,
}

impl<K> Cloud<K> {
    pub fn rects(&self) -> impl Iterator<Item = &Rect> + '_ {
        self.placements.iter().map(|p| &p.rect)
    }

    /// Computes compactness statistics for this cloud.
    pub fn stats(&self) -> CloudStats {
        CloudStats::compute(self.center, self.rects())
    }
}

/// How tightly a set of rectangles fills the circle around the center.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CloudStats {
    pub num_rects: usize,
    /// Sum of `w * h` over all rectangles.
    pub total_area: i64,
    /// Mean distance from the center to every rectangle corner.
    /// Each distance is truncated before averaging and the mean is an integer division.
    pub average_radius: i64,
    /// `PI * average_radius^2`.
    pub circle_area: f64,
    /// `(circle_area - total_area) / circle_area * 100`. Negative when the rectangles
    /// cover more than the circle, 0.0 for an empty cloud.
    pub waste_percentage: f64,
    pub bounding_box: Option<Rect>,
}

impl CloudStats {
    pub fn compute<'a>(center: Point, rects: impl IntoIterator<Item = &'a Rect>) -> Self {
        let mut num_rects = 0usize;
        let mut total_area = 0i64;
        let mut distance_sum = 0i64;
        let mut bounding_box: Option<Rect> = None;

        for r in rects {
            num_rects += 1;
            total_area += r.area();
            for (x, y) in r.corners() {
                let dx = (x - center.x as i64) as f64;
                let dy = (y - center.y as i64) as f64;
                distance_sum += (dx * dx + dy * dy).sqrt() as i64;
            }
            bounding_box = Some(match bounding_box {
                Some(bb) => bb.union(r),
                None => *r,
            });
        }

        let average_radius = if num_rects > 0 {
            distance_sum / (num_rects as i64 * 4)
        } else {
            0
        };
        let circle_area = PI * (average_radius as f64).powi(2);
        let waste_percentage = if circle_area > 0.0 {
            (circle_area - total_area as f64) / circle_area * 100.0
        } else {
            0.0
        };

        Self {
            num_rects,
            total_area,
            average_radius,
            circle_area,
            waste_percentage,
            bounding_box,
        }
    }

    /// Returns a human-readable summary of the statistics.
    pub fn summary(&self) -> String {
        format!(
            "Rects: {}, Area: {} px², Avg radius: {} px, Circle: {:.0} px², Waste: {:.2}%",
            self.num_rects,
            self.total_area,
            self.average_radius,
            self.circle_area,
            self.waste_percentage,
        )
    }
}
