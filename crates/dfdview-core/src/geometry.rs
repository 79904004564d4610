//! Geometric primitives for scene placement and view transforms.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in scene or screen space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangular bounding box defined by minimum and maximum coordinates
//! - [`Transform`] - A 2D affine transform, as applied to the scene by the viewport
//!
//! # Coordinate System
//!
//! dfdview uses a coordinate system consistent with SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Scene coordinates are the literal positions baked into the diagram. Screen
//! coordinates are what the pointer reports; the viewport's [`Transform`] maps
//! the former onto the latter.

/// A 2D point representing a position in scene or screen space.
///
/// # Examples
///
/// ```
/// # use dfdview_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let diff = p1.sub_point(p2);
/// assert_eq!(diff.x(), 5.0);
/// assert_eq!(diff.y(), 15.0);
///
/// let mid = p1.midpoint(p2);
/// assert_eq!(mid.x(), 7.5);
/// assert_eq!(mid.y(), 12.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Checks if both x and y coordinates are zero
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Multiplies both coordinates by the given factor.
    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Returns a new point with absolute values of both coordinates
    pub fn abs(self) -> Self {
        Self {
            x: self.x.abs(),
            y: self.y.abs(),
        }
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Multiplies both dimensions by the given factor
    pub fn scale(self, factor: f32) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
        }
    }

    /// Returns true if both width and height are zero
    pub fn is_zero(self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates a new bounds from a center point and a size
    pub fn new_from_center(center: Point, size: Size) -> Self {
        let half_width = size.width / 2.0;
        let half_height = size.height / 2.0;
        Self {
            min_x: center.x - half_width,
            min_y: center.y - half_height,
            max_x: center.x + half_width,
            max_y: center.y + half_height,
        }
    }

    /// Creates a new bounds from a top-left point and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    /// Creates the smallest bounds containing every point in `points`.
    ///
    /// Returns `None` for an empty iterator.
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let seed = Self {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        Some(points.fold(seed, |acc, p| Self {
            min_x: acc.min_x.min(p.x),
            min_y: acc.min_y.min(p.y),
            max_x: acc.max_x.max(p.x),
            max_y: acc.max_y.max(p.y),
        }))
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the top-left corner as a Point
    pub fn min_point(self) -> Point {
        Point {
            x: self.min_x,
            y: self.min_y,
        }
    }

    /// Converts bounds to a Size object
    pub fn to_size(self) -> Size {
        Size {
            width: self.width(),
            height: self.height(),
        }
    }

    /// Merges two bounds to create a larger bounds that contains both.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dfdview_core::geometry::{Bounds, Point, Size};
    /// let entity = Bounds::new_from_top_left(Point::new(150.0, 350.0), Size::new(140.0, 70.0));
    /// let store = Bounds::new_from_top_left(Point::new(1950.0, 200.0), Size::new(200.0, 60.0));
    ///
    /// let combined = entity.merge(&store);
    /// assert_eq!(combined.min_x(), 150.0);
    /// assert_eq!(combined.min_y(), 200.0);
    /// assert_eq!(combined.max_x(), 2150.0);
    /// assert_eq!(combined.max_y(), 420.0);
    /// ```
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Moves the bounds by the specified offset.
    pub fn translate(&self, offset: Point) -> Self {
        Self {
            min_x: self.min_x + offset.x,
            min_y: self.min_y + offset.y,
            max_x: self.max_x + offset.x,
            max_y: self.max_y + offset.y,
        }
    }
}

/// A 2D affine transform `[a c e; b d f; 0 0 1]`, matching SVG's `matrix(a b c d e f)`.
///
/// A point `(x, y)` maps to `(a*x + c*y + e, b*x + d*y + f)`.
///
/// Composition follows SVG transform lists: `s.then(t)` is the transform that
/// applies `t` first and `s` second, i.e. the matrix product `s · t`. That is
/// the order of `transform="scale(..) translate(..)"`.
///
/// # Examples
///
/// ```
/// # use dfdview_core::geometry::{Point, Transform};
/// // scale(2) · translate(5, 10)
/// let t = Transform::scale(2.0).then(Transform::translate(5.0, 10.0));
///
/// let p = t.apply(Point::new(1.0, 1.0));
/// assert_eq!(p.x(), 12.0);
/// assert_eq!(p.y(), 22.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    a: f32,
    b: f32,
    c: f32,
    d: f32,
    e: f32,
    f: f32,
}

impl Transform {
    /// The transform that leaves every point unchanged.
    pub fn identity() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
        }
    }

    /// A uniform scale about the origin.
    pub fn scale(factor: f32) -> Self {
        Self {
            a: factor,
            d: factor,
            ..Self::identity()
        }
    }

    /// A translation by `(tx, ty)`.
    pub fn translate(tx: f32, ty: f32) -> Self {
        Self {
            e: tx,
            f: ty,
            ..Self::identity()
        }
    }

    /// Returns `self · inner`: `inner` is applied to a point first, then `self`.
    pub fn then(self, inner: Transform) -> Self {
        Self {
            a: self.a * inner.a + self.c * inner.b,
            b: self.b * inner.a + self.d * inner.b,
            c: self.a * inner.c + self.c * inner.d,
            d: self.b * inner.c + self.d * inner.d,
            e: self.a * inner.e + self.c * inner.f + self.e,
            f: self.b * inner.e + self.d * inner.f + self.f,
        }
    }

    /// Maps a point through this transform.
    pub fn apply(self, point: Point) -> Point {
        Point::new(
            self.a * point.x + self.c * point.y + self.e,
            self.b * point.x + self.d * point.y + self.f,
        )
    }

    /// Horizontal scale component.
    pub fn scale_x(self) -> f32 {
        self.a
    }

    /// Vertical scale component.
    pub fn scale_y(self) -> f32 {
        self.d
    }

    /// Translation component, in the output coordinate space.
    pub fn translation(self) -> Point {
        Point::new(self.e, self.f)
    }

    /// Returns true if this transform leaves every point unchanged.
    pub fn is_identity(self) -> bool {
        self == Self::identity()
    }

    /// Returns the SVG `transform` attribute value, `matrix(a b c d e f)`.
    pub fn to_svg_value(self) -> String {
        format!(
            "matrix({} {} {} {} {} {})",
            self.a, self.b, self.c, self.d, self.e, self.f
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_new() {
        let point = Point::new(3.5, 4.2);
        assert_eq!(point.x(), 3.5);
        assert_eq!(point.y(), 4.2);
    }

    #[test]
    fn test_point_default_is_zero() {
        assert!(Point::default().is_zero());
        assert!(!Point::new(0.0, 1.0).is_zero());
    }

    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(150.0, 120.0);
        let b = Point::new(100.0, 100.0);

        assert_eq!(a.sub_point(b), Point::new(50.0, 20.0));
        assert_eq!(a.add_point(b), Point::new(250.0, 220.0));
        assert_eq!(b.scale(0.5), Point::new(50.0, 50.0));
        assert_eq!(Point::new(-3.0, 4.0).abs(), Point::new(3.0, 4.0));
    }

    #[test]
    fn test_bounds_new_from_center() {
        let bounds = Bounds::new_from_center(Point::new(750.0, 300.0), Size::new(130.0, 130.0));
        assert_eq!(bounds.min_x(), 685.0);
        assert_eq!(bounds.min_y(), 235.0);
        assert_eq!(bounds.max_x(), 815.0);
        assert_eq!(bounds.max_y(), 365.0);
        assert_eq!(bounds.center(), Point::new(750.0, 300.0));
    }

    #[test]
    fn test_bounds_new_from_top_left() {
        let bounds = Bounds::new_from_top_left(Point::new(10.0, 20.0), Size::new(30.0, 40.0));
        assert_eq!(bounds.min_point(), Point::new(10.0, 20.0));
        assert_eq!(bounds.to_size(), Size::new(30.0, 40.0));
    }

    #[test]
    fn test_bounds_from_points() {
        let bounds = Bounds::from_points([
            Point::new(290.0, 385.0),
            Point::new(685.0, 300.0),
            Point::new(400.0, 500.0),
        ])
        .unwrap();

        assert_eq!(bounds.min_x(), 290.0);
        assert_eq!(bounds.min_y(), 300.0);
        assert_eq!(bounds.max_x(), 685.0);
        assert_eq!(bounds.max_y(), 500.0);

        assert!(Bounds::from_points(std::iter::empty()).is_none());
    }

    #[test]
    fn test_bounds_translate() {
        let bounds = Bounds::new_from_top_left(Point::new(10.0, 20.0), Size::new(50.0, 30.0));
        let moved = bounds.translate(Point::new(100.0, 50.0));
        assert_eq!(moved.min_x(), 110.0);
        assert_eq!(moved.min_y(), 70.0);
        assert_eq!(moved.width(), 50.0);
        assert_eq!(moved.height(), 30.0);
    }

    #[test]
    fn test_transform_identity() {
        let t = Transform::identity();
        assert!(t.is_identity());
        assert_eq!(t.apply(Point::new(12.0, -7.0)), Point::new(12.0, -7.0));
        assert_eq!(Transform::default(), t);
    }

    #[test]
    fn test_transform_then_order() {
        // translate first, then scale
        let scale_after = Transform::scale(2.0).then(Transform::translate(10.0, 0.0));
        assert_eq!(scale_after.apply(Point::new(1.0, 0.0)), Point::new(22.0, 0.0));

        // scale first, then translate
        let translate_after = Transform::translate(10.0, 0.0).then(Transform::scale(2.0));
        assert_eq!(translate_after.apply(Point::new(1.0, 0.0)), Point::new(12.0, 0.0));
    }

    #[test]
    fn test_transform_accessors() {
        let t = Transform::scale(1.5).then(Transform::translate(20.0, 40.0));
        assert_eq!(t.scale_x(), 1.5);
        assert_eq!(t.scale_y(), 1.5);
        assert_eq!(t.translation(), Point::new(30.0, 60.0));
    }

    #[test]
    fn test_transform_svg_value() {
        assert_eq!(Transform::identity().to_svg_value(), "matrix(1 0 0 1 0 0)");
        assert_eq!(
            Transform::translate(50.0, 20.0).to_svg_value(),
            "matrix(1 0 0 1 50 20)"
        );
    }
}
