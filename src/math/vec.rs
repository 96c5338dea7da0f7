use std::ops::{Add, Div, Mul, Neg, Sub};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Vec3 {
        Vec3 { x, y, z }
    }
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    pub const X: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    pub const Y: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    pub const Z: Vec3 = Vec3::new(0.0, 0.0, 1.0);
}

// dot product
impl Mul for Vec3 {
    type Output = f64;
    fn mul(self, other: Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;
    fn mul(self, other: f64) -> Vec3 {
        Vec3::new(self.x * other, self.y * other, self.z * other)
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;
    fn mul(self, other: Vec3) -> Vec3 {
        other * self
    }
}

impl Div<f64> for Vec3 {
    type Output = Vec3;
    fn div(self, other: f64) -> Vec3 {
        Vec3::new(self.x / other, self.y / other, self.z / other)
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, other: Vec3) -> Vec3 {
        self + (-other)
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(other: [f64; 3]) -> Vec3 {
        Vec3::new(other[0], other[1], other[2])
    }
}

impl Vec3 {
    pub fn norm_squared(&self) -> f64 {
        *self * *self
    }

    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Returns `None` instead of dividing by a zero or non-finite length.
    pub fn try_normalized(&self) -> Option<Self> {
        let norm = self.norm();
        if norm == 0.0 || !norm.is_finite() {
            return None;
        }
        Some(*self / norm)
    }

    /// Sum of the three components.
    pub fn component_sum(&self) -> f64 {
        self.x + self.y + self.z
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_dot_and_norm() {
        let v = Vec3::new(3.0, 4.0, 0.0);
        assert_eq!(v * Vec3::X, 3.0);
        assert_eq!(v.norm(), 5.0);
        let n = v.try_normalized().unwrap();
        assert!((n.norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_length_does_not_normalize() {
        assert!(Vec3::ZERO.try_normalized().is_none());
        assert!(Vec3::new(f64::NAN, 0.0, 1.0).try_normalized().is_none());
        assert!(Vec3::new(f64::INFINITY, 0.0, 0.0).try_normalized().is_none());
    }
}
