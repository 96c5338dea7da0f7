mod point;
mod vec;
pub use point::Point3;
pub use vec::Vec3;

use std::ops::{Add, Mul};

impl From<Point3> for Vec3 {
    fn from(p: Point3) -> Self {
        Vec3::new(p.x, p.y, p.z)
    }
}

impl From<Vec3> for Point3 {
    fn from(v: Vec3) -> Point3 {
        Point3::new(v.x, v.y, v.z)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RGBColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl RGBColor {
    pub const fn new(r: f64, g: f64, b: f64) -> RGBColor {
        RGBColor { r, g, b }
    }
    pub const ZERO: RGBColor = RGBColor::new(0.0, 0.0, 0.0);
    pub const WHITE: RGBColor = RGBColor::new(1.0, 1.0, 1.0);

    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }

    pub fn to_rgb(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }
}

impl Add for RGBColor {
    type Output = RGBColor;
    fn add(self, other: RGBColor) -> RGBColor {
        RGBColor::new(self.r + other.r, self.g + other.g, self.b + other.b)
    }
}

impl Mul<RGBColor> for f64 {
    type Output = RGBColor;
    fn mul(self, other: RGBColor) -> RGBColor {
        RGBColor::new(self * other.r, self * other.g, self * other.b)
    }
}

impl From<Vec3> for RGBColor {
    fn from(v: Vec3) -> RGBColor {
        RGBColor::new(v.x, v.y, v.z)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point3,
    pub direction: Vec3,
}

impl Ray {
    pub const fn new(origin: Point3, direction: Vec3) -> Self {
        Ray { origin, direction }
    }

    pub fn point_at_parameter(self, time: f64) -> Point3 {
        self.origin + self.direction * time
    }

    /// Same ray with a unit-length direction, or `None` for a zero-length direction.
    pub fn normalized(self) -> Option<Self> {
        self.direction
            .try_normalized()
            .map(|direction| Ray::new(self.origin, direction))
    }
}
