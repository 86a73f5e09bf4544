// Dirty region tracking for partial display updates

/// Bounding box of the pixels modified since the last flush.
///
/// Coordinates are inclusive. The empty region uses the sentinel
/// `top = left = u16::MAX, right = bottom = 0`, so any real pixel widens it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirtyRegion {
    pub top: u16,
    pub left: u16,
    pub right: u16,
    pub bottom: u16,
}

impl Default for DirtyRegion {
    fn default() -> Self {
        Self::empty()
    }
}

impl DirtyRegion {
    pub const fn empty() -> Self {
        Self {
            top: u16::MAX,
            left: u16::MAX,
            right: 0,
            bottom: 0,
        }
    }

    /// Region covering a whole `width` x `height` panel
    pub const fn full(width: u16, height: u16) -> Self {
        Self {
            top: 0,
            left: 0,
            right: width.saturating_sub(1),
            bottom: height.saturating_sub(1),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.top > self.bottom || self.left > self.right
    }

    /// Widen the region to include a single pixel
    pub fn include_point(&mut self, x: u16, y: u16) {
        self.include_span(x, y, x, y);
    }

    /// Widen the region to include the inclusive box `(left, top)..=(right, bottom)`
    pub fn include_span(&mut self, left: u16, top: u16, right: u16, bottom: u16) {
        self.left = self.left.min(left);
        self.top = self.top.min(top);
        self.right = self.right.max(right);
        self.bottom = self.bottom.max(bottom);
    }

    /// Union with another region; an empty `other` changes nothing
    pub fn merge(&mut self, other: &DirtyRegion) {
        if other.is_empty() {
            return;
        }
        self.include_span(other.left, other.top, other.right, other.bottom);
    }

    /// Whether the region already spans the whole panel
    pub fn covers(&self, width: u16, height: u16) -> bool {
        !self.is_empty()
            && self.top == 0
            && self.left == 0
            && self.right >= width.saturating_sub(1)
            && self.bottom >= height.saturating_sub(1)
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        !self.is_empty() && x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }

    /// Number of columns in the region (0 when empty)
    pub fn columns(&self) -> u16 {
        if self.is_empty() {
            0
        } else {
            self.right - self.left + 1
        }
    }

    /// Inclusive page range touched by the region, `None` when empty
    pub fn pages(&self) -> Option<(u16, u16)> {
        if self.is_empty() {
            None
        } else {
            Some((self.top / 8, self.bottom / 8))
        }
    }

    pub fn reset(&mut self) {
        *self = Self::empty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sentinel() {
        let region = DirtyRegion::empty();
        assert!(region.is_empty());
        assert_eq!(region.columns(), 0);
        assert_eq!(region.pages(), None);
        assert!(!region.contains(0, 0));
    }

    #[test]
    fn test_include_point_widens() {
        let mut region = DirtyRegion::empty();
        region.include_point(5, 9);
        assert_eq!(region, DirtyRegion { top: 9, left: 5, right: 5, bottom: 9 });

        region.include_point(2, 20);
        assert_eq!(region, DirtyRegion { top: 9, left: 2, right: 5, bottom: 20 });
        assert_eq!(region.pages(), Some((1, 2)));
        assert_eq!(region.columns(), 4);
    }

    #[test]
    fn test_merge_ignores_empty() {
        let mut region = DirtyRegion::empty();
        region.include_point(3, 3);
        let before = region;
        region.merge(&DirtyRegion::empty());
        assert_eq!(region, before);

        region.merge(&DirtyRegion { top: 0, left: 10, right: 12, bottom: 1 });
        assert_eq!(region, DirtyRegion { top: 0, left: 3, right: 12, bottom: 3 });
    }

    #[test]
    fn test_covers_full_panel() {
        assert!(DirtyRegion::full(128, 64).covers(128, 64));
        assert!(!DirtyRegion::empty().covers(128, 64));

        let mut partial = DirtyRegion::full(128, 64);
        partial.top = 1;
        assert!(!partial.covers(128, 64));
    }

    #[test]
    fn test_reset() {
        let mut region = DirtyRegion::full(96, 16);
        region.reset();
        assert!(region.is_empty());
    }
}
