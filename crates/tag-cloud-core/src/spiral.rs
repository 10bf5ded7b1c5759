use crate::model::Point;
use std::f64::consts::PI;

/// Archimedean spiral of candidate anchor points around a fixed center.
///
/// Each call to [`Spiral::next_point`] returns the point for the current angle and
/// advances the angle by one. The radius grows with the angle converted to radians,
/// while `cos`/`sin` receive the raw angle value. Existing layouts depend on that
/// exact point sequence, so the formula must stay as is.
#[derive(Debug, Clone)]
pub struct Spiral {
    center: Point,
    step: i32,
    angle: u64,
}

impl Spiral {
    pub fn new(center: Point, step: i32) -> Self {
        Self {
            center,
            step,
            angle: 0,
        }
    }

    /// Number of points produced so far (the angle of the next point).
    pub fn angle(&self) -> u64 {
        self.angle
    }

    pub fn next_point(&mut self) -> Point {
        let point = self.point_at(self.angle);
        self.angle += 1;
        point
    }

    fn point_at(&self, angle: u64) -> Point {
        let angle = angle as f64;
        // evaluated left to right; reordering changes rounding of the truncated result
        let length = self.step as f64 / (2.0 * PI) * angle * PI / 180.0;
        let x = self.center.x.saturating_add((length * angle.cos()) as i32);
        let y = self.center.y.saturating_add((length * angle.sin()) as i32);
        Point::new(x, y)
    }
}

impl Iterator for Spiral {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        Some(self.next_point())
    }
}
