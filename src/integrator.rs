use crate::errors::RenderError;
use crate::geometry::{QuadraticForm, Sphere};
use crate::math::*;
use crate::profile::Profile;

pub const SKY_BLUE: RGBColor = RGBColor::new(0.5, 0.7, 1.0);

pub trait Integrator: Send + Sync {
    /// Color seen along a camera ray. The direction does not need to be unit length.
    fn color(&self, r: Ray, profile: &mut Profile) -> Result<RGBColor, RenderError>;
}

/// Shades sphere hits by their surface normal and everything else with the sky gradient.
pub struct NormalIntegrator {
    pub sphere: Sphere,
    pub quadratic_form: QuadraticForm,
}

impl NormalIntegrator {
    pub fn new(sphere: Sphere, quadratic_form: QuadraticForm) -> Self {
        NormalIntegrator {
            sphere,
            quadratic_form,
        }
    }
}

impl Integrator for NormalIntegrator {
    fn color(&self, r: Ray, profile: &mut Profile) -> Result<RGBColor, RenderError> {
        profile.camera_rays += 1;
        // normalized once, both the hit parameter and the shading use the unit direction
        let ray = r.normalized().ok_or(RenderError::ZeroLengthDirection)?;
        match self.sphere.hit(ray, self.quadratic_form) {
            Some(time) => {
                profile.sphere_hits += 1;
                let point = ray.point_at_parameter(time);
                let normal = self
                    .sphere
                    .normal_at(point)
                    .ok_or(RenderError::ZeroLengthDirection)?;
                Ok(normal_color(normal))
            }
            None => {
                profile.sky_hits += 1;
                Ok(sky_color(ray.direction))
            }
        }
    }
}

/// Maps each component of a unit normal from [-1, 1] to [0, 1].
pub fn normal_color(normal: Vec3) -> RGBColor {
    RGBColor::from((normal + Vec3::new(1.0, 1.0, 1.0)) * 0.5)
}

/// Linear blend from white at the bottom to sky blue at the top.
pub fn sky_color(unit_direction: Vec3) -> RGBColor {
    let t = 0.5 * (unit_direction.y + 1.0);
    (1.0 - t) * RGBColor::WHITE + t * SKY_BLUE
}
