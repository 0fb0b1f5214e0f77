//! Logical-unit geometry: points, drag offsets and bounding boxes.

use std::ops::Sub;

/// A position on the table, in logical units
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by the inverse of `offset`
    pub fn minus(self, offset: Offset) -> Point {
        Point::new(self.x - offset.dx, self.y - offset.dy)
    }
}

/// Difference between two points (grab point relative to a box origin)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Offset {
    pub dx: i32,
    pub dy: i32,
}

impl Offset {
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

impl Sub for Point {
    type Output = Offset;

    fn sub(self, rhs: Point) -> Offset {
        Offset::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Axis-aligned box: origin at the top-left corner
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Half-open containment: the right and bottom edges are outside
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    pub fn move_to(&mut self, origin: Point) {
        self.x = origin.x;
        self.y = origin.y;
    }

    /// Move so the box's center lands on `center` (floor division for odd sizes)
    pub fn center_on(&mut self, center: Point) {
        self.x = center.x - self.width.div_euclid(2);
        self.y = center.y - self.height.div_euclid(2);
    }

    /// True if `other` lies entirely inside this box
    pub fn encloses(&self, other: &Bounds) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_half_open() {
        let b = Bounds::new(30, 30, 80, 120);
        assert!(b.contains(Point::new(30, 30)));
        assert!(b.contains(Point::new(109, 149)));
        assert!(!b.contains(Point::new(110, 30)));
        assert!(!b.contains(Point::new(30, 150)));
        assert!(!b.contains(Point::new(29, 100)));
    }

    #[test]
    fn test_center_on() {
        let mut b = Bounds::new(0, 0, 80, 120);
        b.center_on(Point::new(500, 400));
        assert_eq!(b.origin(), Point::new(460, 340));
        assert_eq!(b.center(), Point::new(500, 400));
    }

    #[test]
    fn test_point_difference_and_minus() {
        let grab = Point::new(470, 350);
        let origin = Point::new(460, 340);
        let offset = grab - origin;
        assert_eq!(offset, Offset::new(10, 10));
        assert_eq!(Point::new(570, 400).minus(offset), Point::new(560, 390));
    }

    #[test]
    fn test_encloses() {
        let window = Bounds::new(0, 0, 1200, 900);
        assert!(window.encloses(&Bounds::new(30, 30, 80, 120)));
        assert!(window.encloses(&Bounds::new(1120, 780, 80, 120)));
        assert!(!window.encloses(&Bounds::new(1121, 30, 80, 120)));
        assert!(!window.encloses(&Bounds::new(-1, 30, 80, 120)));
    }
}
