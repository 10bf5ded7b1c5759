use crate::model::Rect;

/// Append-only, ordered collection of committed rectangles.
///
/// Queries scan every entry; clouds stay in the hundreds-to-thousands range.
#[derive(Debug, Clone, Default)]
pub struct PlacementSet {
    rects: Vec<Rect>,
}

impl PlacementSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if `rect` overlaps (non-zero area) any committed rectangle.
    pub fn overlaps(&self, rect: &Rect) -> bool {
        self.rects.iter().any(|r| r.intersects(rect))
    }

    /// Appends without validation; callers guarantee `rect` is free.
    pub fn commit(&mut self, rect: Rect) {
        self.rects.push(rect);
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    pub fn as_slice(&self) -> &[Rect] {
        &self.rects
    }
}

impl<'a> IntoIterator for &'a PlacementSet {
    type Item = &'a Rect;
    type IntoIter = std::slice::Iter<'a, Rect>;

    fn into_iter(self) -> Self::IntoIter {
        self.rects.iter()
    }
}
