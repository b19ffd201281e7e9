/// A point in window client or screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A rectangle described by its origin and size.
///
/// The default value is the empty rectangle at the origin, which
/// contains no points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds a rectangle from Win32-style edges (right/bottom exclusive).
    pub fn from_edges(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Half-open containment test, matching `PtInRect`: the right and
    /// bottom edges are outside the rectangle.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_round_trip_through_origin_and_size() {
        // Act
        let rect = Rect::from_edges(10, 20, 110, 70);

        // Assert
        assert_eq!(rect, Rect::new(10, 20, 100, 50));
        assert_eq!(rect.right(), 110);
        assert_eq!(rect.bottom(), 70);
    }

    #[test]
    fn contains_excludes_right_and_bottom_edges() {
        // Arrange
        let rect = Rect::new(0, 0, 100, 50);

        // Act / Assert
        assert!(rect.contains(Point::new(0, 0)));
        assert!(rect.contains(Point::new(99, 49)));
        assert!(!rect.contains(Point::new(100, 10)));
        assert!(!rect.contains(Point::new(10, 50)));
        assert!(!rect.contains(Point::new(-1, 10)));
    }

    #[test]
    fn default_rect_contains_nothing() {
        // Arrange
        let rect = Rect::default();

        // Act / Assert
        assert!(rect.is_empty());
        assert!(!rect.contains(Point::new(0, 0)));
    }
}
