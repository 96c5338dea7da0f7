use super::QuadraticForm;
use crate::errors::RenderError;
use crate::math::*;

/// Hit parameter reported when the quadratic has no real root.
pub const MISS: f64 = -1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Point3,
    radius: f64,
}

impl Sphere {
    pub fn new(center: Point3, radius: f64) -> Result<Sphere, RenderError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(RenderError::InvalidRadius(radius));
        }
        if !center.is_finite() {
            return Err(RenderError::InvalidPoint { name: "center" });
        }
        Ok(Sphere { center, radius })
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Nearest root of the ray/sphere quadratic, or [`MISS`] when the discriminant is negative.
    /// The direction does not need to be unit length. The far root is never reported,
    /// so a ray starting inside the sphere gets a non-positive parameter.
    pub fn intersect(&self, r: Ray, form: QuadraticForm) -> f64 {
        let oc: Vec3 = r.origin - self.center;
        let a = r.direction * r.direction;
        let b = match form {
            QuadraticForm::Geometric => 2.0 * (oc * r.direction),
            QuadraticForm::ComponentSum => 2.0 * oc.component_sum(),
        };
        let c = oc * oc - self.radius * self.radius;
        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return MISS;
        }
        (-b - discriminant.sqrt()) / (2.0 * a)
    }

    /// `Some(h)` only for a forward hit, `h > 0`.
    pub fn hit(&self, r: Ray, form: QuadraticForm) -> Option<f64> {
        let time = self.intersect(r, form);
        if time > 0.0 {
            Some(time)
        } else {
            None
        }
    }

    /// Outward unit normal at a point on the surface.
    pub fn normal_at(&self, point: Point3) -> Option<Vec3> {
        (point - self.center).try_normalized()
    }
}
