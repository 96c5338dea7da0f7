use crate::camera::{pixel_uv, Camera};
use crate::errors::RenderError;
use crate::geometry::Sphere;
use crate::math::*;
use crate::parsing::config::SceneSettings;

use tracing::warn;

pub const SCALAR_NAMES: [&str; 7] = [
    "aspect_ratio",
    "width",
    "height",
    "viewport_height",
    "viewport_width",
    "focal_length",
    "radius",
];

pub const POINT_NAMES: [&str; 5] = [
    "origin",
    "horizontal",
    "vertical",
    "corner_bottom_left",
    "center",
];

/// Largest film the renderer will allocate.
pub const MAX_PIXELS: usize = 1 << 28;

fn positive_scalar(name: &'static str, value: f64) -> Result<f64, RenderError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(RenderError::InvalidScalar { name, value })
    }
}

/// The validated, immutable scene: image size, camera and the one sphere.
#[derive(Debug, Clone)]
pub struct Scene {
    pub aspect_ratio: f64,
    pub width: usize,
    pub height: usize,
    pub camera: Camera,
    pub sphere: Sphere,
    pub sphere_name: String,
}

impl Scene {
    pub fn new(settings: &SceneSettings) -> Result<Scene, RenderError> {
        let aspect_ratio = positive_scalar("aspect_ratio", settings.aspect_ratio)?;
        let viewport_height = positive_scalar("viewport_height", settings.viewport_height)?;
        let focal_length = positive_scalar("focal_length", settings.focal_length)?;

        let (width, height) = (settings.width, settings.resolved_height());
        let pixels = width.checked_mul(height).unwrap_or(usize::MAX);
        if width == 0 || height == 0 || pixels > MAX_PIXELS {
            return Err(RenderError::InvalidDimensions { width, height });
        }
        if width == 1 || height == 1 {
            warn!(
                "degenerate image axis in {}x{}, single row/column maps to u/v = 0",
                width, height
            );
        }

        let origin = Point3::from(settings.origin);
        if !origin.is_finite() {
            return Err(RenderError::InvalidPoint { name: "origin" });
        }
        let sphere = Sphere::new(Point3::from(settings.sphere.center), settings.sphere.radius)?;

        Ok(Scene {
            aspect_ratio,
            width,
            height,
            camera: Camera::new(aspect_ratio, viewport_height, focal_length, origin),
            sphere,
            sphere_name: settings.sphere.name.clone(),
        })
    }

    pub fn total_pixels(&self) -> usize {
        self.width * self.height
    }

    pub fn scalar(&self, name: &str) -> Option<f64> {
        match name {
            "aspect_ratio" => Some(self.aspect_ratio),
            "width" => Some(self.width as f64),
            "height" => Some(self.height as f64),
            "viewport_height" => Some(self.camera.viewport_height),
            "viewport_width" => Some(self.camera.viewport_width),
            "focal_length" => Some(self.camera.focal_length),
            "radius" => Some(self.sphere.radius()),
            _ => None,
        }
    }

    pub fn point(&self, name: &str) -> Option<Point3> {
        match name {
            "origin" => Some(self.camera.origin),
            "horizontal" => Some(Point3::from(self.camera.horizontal)),
            "vertical" => Some(Point3::from(self.camera.vertical)),
            "corner_bottom_left" => Some(self.camera.corner_bottom_left),
            "center" => Some(self.sphere.center()),
            _ => None,
        }
    }

    /// Camera ray for a raster pixel, direction not yet normalized.
    pub fn ray_for_pixel(&self, x: usize, y: usize) -> Ray {
        let (u, v) = pixel_uv(x, y, self.width, self.height);
        self.camera.get_ray(u, v)
    }

    /// Every pixel's camera ray in output order: top row first, left to right.
    pub fn rays(&self) -> impl Iterator<Item = ((usize, usize), Ray)> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width).map(move |x| ((x, y), self.ray_for_pixel(x, y)))
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::parsing::config::SphereSettings;

    fn standard_scene() -> Scene {
        Scene::new(&SceneSettings::default()).unwrap()
    }

    #[test]
    fn test_standard_scene_constants() {
        let scene = standard_scene();
        assert_eq!(scene.scalar("width"), Some(400.0));
        assert_eq!(scene.scalar("height"), Some(225.0));
        assert_eq!(scene.scalar("viewport_height"), Some(2.0));
        assert_eq!(scene.scalar("focal_length"), Some(1.0));
        assert_eq!(scene.scalar("radius"), Some(0.5));
        assert_eq!(scene.point("center"), Some(Point3::new(0.0, 0.0, -1.0)));
        assert_eq!(scene.point("origin"), Some(Point3::ORIGIN));
        assert_eq!(scene.scalar("nonexistent"), None);
        assert_eq!(scene.point("nonexistent"), None);
        for name in SCALAR_NAMES {
            assert!(scene.scalar(name).is_some(), "{}", name);
        }
        for name in POINT_NAMES {
            assert!(scene.point(name).is_some(), "{}", name);
        }
    }

    #[test]
    fn test_corner_invariant() {
        let scene = standard_scene();
        let origin = scene.point("origin").unwrap();
        let horizontal = Vec3::from(scene.point("horizontal").unwrap());
        let vertical = Vec3::from(scene.point("vertical").unwrap());
        let focal_length = scene.scalar("focal_length").unwrap();
        let expected =
            origin - horizontal / 2.0 - vertical / 2.0 - Vec3::new(0.0, 0.0, focal_length);
        assert_eq!(scene.point("corner_bottom_left"), Some(expected));
    }

    #[test]
    fn test_rejects_degenerate_settings() {
        let zero_width = SceneSettings {
            width: 0,
            ..SceneSettings::default()
        };
        assert!(matches!(
            Scene::new(&zero_width),
            Err(RenderError::InvalidDimensions { .. })
        ));

        let zero_height = SceneSettings {
            height: Some(0),
            ..SceneSettings::default()
        };
        assert!(Scene::new(&zero_height).is_err());

        let flat = SceneSettings {
            aspect_ratio: 0.0,
            ..SceneSettings::default()
        };
        assert!(matches!(
            Scene::new(&flat),
            Err(RenderError::InvalidScalar {
                name: "aspect_ratio",
                ..
            })
        ));

        let no_focal_length = SceneSettings {
            focal_length: -1.0,
            ..SceneSettings::default()
        };
        assert!(Scene::new(&no_focal_length).is_err());

        let bad_sphere = SceneSettings {
            sphere: SphereSettings {
                radius: 0.0,
                ..SphereSettings::default()
            },
            ..SceneSettings::default()
        };
        assert!(matches!(
            Scene::new(&bad_sphere),
            Err(RenderError::InvalidRadius(_))
        ));
    }

    #[test]
    fn test_rejects_oversized_film() {
        // a tiny aspect ratio derives a height that saturates to usize::MAX
        let tall = SceneSettings {
            aspect_ratio: 1e-300,
            ..SceneSettings::default()
        };
        assert_eq!(tall.resolved_height(), usize::MAX);
        assert!(matches!(
            Scene::new(&tall),
            Err(RenderError::InvalidDimensions { .. })
        ));

        let overflowing = SceneSettings {
            width: usize::MAX / 2,
            height: Some(3),
            ..SceneSettings::default()
        };
        assert!(matches!(
            Scene::new(&overflowing),
            Err(RenderError::InvalidDimensions { .. })
        ));

        let just_over = SceneSettings {
            width: MAX_PIXELS + 1,
            height: Some(1),
            ..SceneSettings::default()
        };
        assert!(Scene::new(&just_over).is_err());

        let at_limit = SceneSettings {
            width: 1 << 14,
            height: Some(1 << 14),
            ..SceneSettings::default()
        };
        assert_eq!(Scene::new(&at_limit).unwrap().total_pixels(), 1 << 28);
    }

    #[test]
    fn test_single_pixel_scene_is_allowed() {
        let settings = SceneSettings {
            width: 1,
            height: Some(1),
            ..SceneSettings::default()
        };
        let scene = Scene::new(&settings).unwrap();
        let r = scene.ray_for_pixel(0, 0);
        assert_eq!(r.direction, scene.camera.corner_bottom_left - scene.camera.origin);
    }

    #[test]
    fn test_rays_are_row_major() {
        let settings = SceneSettings {
            width: 3,
            height: Some(2),
            ..SceneSettings::default()
        };
        let scene = Scene::new(&settings).unwrap();
        let pixels: Vec<(usize, usize)> = scene.rays().map(|(pixel, _)| pixel).collect();
        assert_eq!(
            pixels,
            vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]
        );
        let (_, first) = scene.rays().next().unwrap();
        assert!(first.direction.y > 0.0);
        assert!(first.direction.x < 0.0);
    }
}
