use super::{check_color, Film, Renderer};

use crate::errors::RenderError;
use crate::integrator::Integrator;
use crate::math::RGBColor;
use crate::profile::Profile;
use crate::scene::Scene;

/// Single-threaded, one pixel at a time in output order.
#[derive(Default)]
pub struct NaiveRenderer {}

impl NaiveRenderer {
    pub fn new() -> NaiveRenderer {
        NaiveRenderer {}
    }
}

impl Renderer for NaiveRenderer {
    fn render(
        &self,
        scene: &Scene,
        integrator: &dyn Integrator,
    ) -> Result<(Film, Profile), RenderError> {
        let mut film: Film = Film::new(scene.width, scene.height, RGBColor::ZERO);
        let mut profile = Profile::default();
        for ((x, y), ray) in scene.rays() {
            let color = integrator.color(ray, &mut profile)?;
            film.write_at(x, y, check_color(x, y, color)?);
        }
        Ok((film, profile))
    }

    fn threads(&self) -> usize {
        1
    }
}
