mod naive;
mod parallel;
mod vec2d;

pub use naive::NaiveRenderer;
pub use parallel::ParallelRenderer;
pub use vec2d::Vec2D;

use crate::errors::RenderError;
use crate::integrator::{Integrator, NormalIntegrator};
use crate::math::RGBColor;
use crate::parsing::config::{RenderSettings, RendererType};
use crate::profile::Profile;
use crate::scene::Scene;

use std::time::Instant;

use tracing::info;

pub type Film = Vec2D<RGBColor>;

pub trait Renderer {
    fn render(
        &self,
        scene: &Scene,
        integrator: &dyn Integrator,
    ) -> Result<(Film, Profile), RenderError>;
    fn threads(&self) -> usize;
}

pub fn construct_renderer(renderer_type: RendererType) -> Box<dyn Renderer> {
    match renderer_type {
        RendererType::Naive => Box::new(NaiveRenderer::new()),
        RendererType::Parallel { rows_per_chunk } => {
            Box::new(ParallelRenderer::new(rows_per_chunk))
        }
    }
}

// a NaN or infinity here means an upstream precondition was violated
pub(crate) fn check_color(x: usize, y: usize, color: RGBColor) -> Result<RGBColor, RenderError> {
    if color.is_finite() {
        Ok(color)
    } else {
        Err(RenderError::NonFiniteColor { x, y, color })
    }
}

pub fn render_scene(
    scene: &Scene,
    settings: &RenderSettings,
    renderer_type: RendererType,
) -> Result<Film, RenderError> {
    let integrator = NormalIntegrator::new(scene.sphere, settings.quadratic_form);
    let renderer = construct_renderer(renderer_type);
    info!(
        "starting render with film resolution {}x{}",
        scene.width, scene.height
    );

    let now = Instant::now();
    let (film, profile) = renderer.render(scene, &integrator)?;
    let elapsed = now.elapsed().as_secs_f32().max(f32::EPSILON);
    info!("took {}s", elapsed);
    profile.pretty_print(elapsed, renderer.threads());
    Ok(film)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::QuadraticForm;
    use crate::integrator::sky_color;
    use crate::math::Ray;
    use crate::parsing::config::SceneSettings;

    fn small_scene(width: usize, height: usize) -> Scene {
        Scene::new(&SceneSettings {
            width,
            height: Some(height),
            ..SceneSettings::default()
        })
        .unwrap()
    }

    #[test]
    fn test_naive_and_parallel_agree() {
        let scene = small_scene(40, 23);
        let integrator = NormalIntegrator::new(scene.sphere, QuadraticForm::Geometric);
        let (naive, naive_profile) = NaiveRenderer::new().render(&scene, &integrator).unwrap();
        for rows_per_chunk in [0, 1, 5, 100, usize::MAX / 2, usize::MAX] {
            let (parallel, parallel_profile) = ParallelRenderer::new(rows_per_chunk)
                .render(&scene, &integrator)
                .unwrap();
            assert_eq!(naive, parallel);
            assert_eq!(naive_profile, parallel_profile);
        }
    }

    #[test]
    fn test_profile_counts_every_pixel() {
        let scene = small_scene(16, 9);
        let integrator = NormalIntegrator::new(scene.sphere, QuadraticForm::Geometric);
        let (_, profile) = ParallelRenderer::new(2).render(&scene, &integrator).unwrap();
        assert_eq!(profile.camera_rays, 16 * 9);
        assert_eq!(profile.sphere_hits + profile.sky_hits, 16 * 9);
        assert!(profile.sphere_hits > 0);
        assert!(profile.sky_hits > 0);
    }

    #[test]
    fn test_standard_scene_center_hits_and_corner_is_sky() {
        let scene = small_scene(400, 225);
        let film =
            render_scene(&scene, &RenderSettings::default(), RendererType::default()).unwrap();
        assert_eq!(film.total_pixels(), 400 * 225);

        let ray = scene.ray_for_pixel(200, 112).normalized().unwrap();
        assert!(scene.sphere.hit(ray, QuadraticForm::Geometric).is_some());

        let corner = film.at(0, 0);
        assert!(corner.b > corner.r);
        let top_left = scene.ray_for_pixel(0, 0).normalized().unwrap();
        assert_eq!(corner, sky_color(top_left.direction));
    }

    struct BrokenIntegrator;

    impl Integrator for BrokenIntegrator {
        fn color(&self, _r: Ray, _profile: &mut Profile) -> Result<RGBColor, RenderError> {
            Ok(RGBColor::new(f64::NAN, 0.0, 0.0))
        }
    }

    #[test]
    fn test_non_finite_color_aborts_render() {
        let scene = small_scene(4, 3);
        let renderers = [
            construct_renderer(RendererType::Naive),
            construct_renderer(RendererType::default()),
        ];
        for renderer in renderers {
            let result = renderer.render(&scene, &BrokenIntegrator);
            assert!(matches!(result, Err(RenderError::NonFiniteColor { .. })));
        }
    }
}
