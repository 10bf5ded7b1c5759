use crate::model::{Point, Rect};
use tracing::trace;

/// Axis-aligned move directions in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Down,
    Up,
    Left,
    Right,
}

/// A move of `distance` pixels in `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Movement {
    pub direction: Direction,
    pub distance: i64,
}

impl Movement {
    /// `rect` shifted by this move, or `None` if the new top-left leaves the `i32` range.
    pub fn apply(&self, rect: &Rect) -> Option<Rect> {
        let d = self.distance;
        let (x, y) = match self.direction {
            Direction::Down => (rect.left(), rect.top() + d),
            Direction::Up => (rect.left(), rect.top() - d),
            Direction::Left => (rect.left() - d, rect.top()),
            Direction::Right => (rect.left() + d, rect.top()),
        };
        let location = Point::new(i32::try_from(x).ok()?, i32::try_from(y).ok()?);
        Some(rect.with_location(location))
    }
}

/// Free distance in each direction, limited by the nearest facing neighbour.
/// `None` means no neighbour shares the perpendicular span.
#[derive(Debug, Default, Clone, Copy)]
struct Clearance {
    down: Option<i64>,
    up: Option<i64>,
    left: Option<i64>,
    right: Option<i64>,
}

fn tighten(slot: &mut Option<i64>, gap: i64) {
    *slot = Some(slot.map_or(gap, |cur| cur.min(gap)));
}

/// Open-interval intersection of `[a_start, a_end)` and `[b_start, b_end)`.
#[inline]
fn spans_overlap(a_start: i64, a_end: i64, b_start: i64, b_end: i64) -> bool {
    a_start.max(b_start) < a_end.min(b_end)
}

impl Clearance {
    fn measure(rect: &Rect, placed: &[Rect]) -> Self {
        let mut c = Clearance::default();
        for other in placed {
            if spans_overlap(other.left(), other.right(), rect.left(), rect.right()) {
                if other.bottom() <= rect.top() {
                    tighten(&mut c.up, rect.top() - other.bottom());
                } else if other.top() >= rect.bottom() {
                    tighten(&mut c.down, other.top() - rect.bottom());
                }
            }
            if spans_overlap(other.top(), other.bottom(), rect.top(), rect.bottom()) {
                if other.right() <= rect.left() {
                    tighten(&mut c.left, rect.left() - other.right());
                } else if other.left() >= rect.right() {
                    tighten(&mut c.right, other.left() - rect.right());
                }
            }
        }
        c
    }

    /// First direction with a bounded, positive gap. Unbounded directions are never chosen.
    fn first_movable(&self) -> Option<Movement> {
        [
            (Direction::Down, self.down),
            (Direction::Up, self.up),
            (Direction::Left, self.left),
            (Direction::Right, self.right),
        ]
        .into_iter()
        .find_map(|(direction, gap)| match gap {
            Some(distance) if distance > 0 => Some(Movement {
                direction,
                distance,
            }),
            _ => None,
        })
    }
}

/// Greedy hill-climbing step that slides a free candidate toward the center
/// until it rests against its neighbours.
#[derive(Debug, Clone, Copy)]
pub struct Compactor {
    center: Point,
}

impl Compactor {
    pub fn new(center: Point) -> Self {
        Self { center }
    }

    /// The move the compactor would try next for `rect`, if any.
    pub fn possible_movement(&self, rect: &Rect, placed: &[Rect]) -> Option<Movement> {
        Clearance::measure(rect, placed).first_movable()
    }

    /// Slides `candidate` toward the center and returns the final rectangle with
    /// the number of moves applied.
    ///
    /// `candidate` must not overlap any rectangle in `placed`. Each move stops at
    /// the nearest neighbour, so the result does not overlap either, and a move is
    /// only taken when it brings the top-left corner strictly closer to the center.
    pub fn compact(&self, candidate: Rect, placed: &[Rect]) -> (Rect, usize) {
        let mut rect = candidate;
        let mut moves = 0;
        while let Some(movement) = self.possible_movement(&rect, placed) {
            let Some(moved) = movement.apply(&rect) else {
                break;
            };
            let before = self.center.distance_sq(&rect.location());
            if self.center.distance_sq(&moved.location()) >= before {
                break;
            }
            trace!(?movement, from = ?rect.location(), to = ?moved.location(), "compaction move");
            rect = moved;
            moves += 1;
        }
        (rect, moves)
    }
}
