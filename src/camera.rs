use crate::math::*;

use tracing::debug;

/// Pinhole camera looking down -z, with the viewport derived from the scene scalars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub origin: Point3,
    pub horizontal: Vec3,
    pub vertical: Vec3,
    pub corner_bottom_left: Point3,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub focal_length: f64,
}

impl Camera {
    pub fn new(
        aspect_ratio: f64,
        viewport_height: f64,
        focal_length: f64,
        origin: Point3,
    ) -> Camera {
        let viewport_width = aspect_ratio * viewport_height;
        let horizontal = Vec3::new(viewport_width, 0.0, 0.0);
        let vertical = Vec3::new(0.0, viewport_height, 0.0);
        let corner_bottom_left =
            origin - horizontal / 2.0 - vertical / 2.0 - Vec3::new(0.0, 0.0, focal_length);
        debug!(
            "camera viewport {}x{}, corner_bottom_left = {:?}",
            viewport_width, viewport_height, corner_bottom_left
        );
        Camera {
            origin,
            horizontal,
            vertical,
            corner_bottom_left,
            viewport_width,
            viewport_height,
            focal_length,
        }
    }

    /// Unnormalized ray through the viewport point at `(u, v)`, with `v` increasing upward.
    pub fn get_ray(&self, u: f64, v: f64) -> Ray {
        Ray::new(
            self.origin,
            self.corner_bottom_left + u * self.horizontal + v * self.vertical - self.origin,
        )
    }
}

/// Maps a raster pixel (top row is `y = 0`) to viewport uv coordinates.
/// An image axis with a single pixel maps to 0.
pub fn pixel_uv(x: usize, y: usize, width: usize, height: usize) -> (f64, f64) {
    let u = if width > 1 {
        x as f64 / (width - 1) as f64
    } else {
        0.0
    };
    let v = if height > 1 {
        1.0 - y as f64 / (height - 1) as f64
    } else {
        0.0
    };
    (u, v)
}
