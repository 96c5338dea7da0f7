use super::{check_color, Film, Renderer};

use crate::errors::RenderError;
use crate::integrator::Integrator;
use crate::math::RGBColor;
use crate::profile::Profile;
use crate::scene::Scene;

use rayon::prelude::*;

/// Renders bands of `rows_per_chunk` rows on the rayon pool. Each band owns a disjoint
/// slice of the film.
pub struct ParallelRenderer {
    rows_per_chunk: usize,
}

impl ParallelRenderer {
    pub fn new(rows_per_chunk: usize) -> ParallelRenderer {
        ParallelRenderer {
            rows_per_chunk: rows_per_chunk.max(1),
        }
    }
}

impl Renderer for ParallelRenderer {
    fn render(
        &self,
        scene: &Scene,
        integrator: &dyn Integrator,
    ) -> Result<(Film, Profile), RenderError> {
        let width = scene.width;
        // the scene bounds width * height, so this cannot overflow
        let chunk_len = width * self.rows_per_chunk.min(scene.height);
        let mut film: Film = Film::new(width, scene.height, RGBColor::ZERO);

        let profile = film
            .buffer
            .par_chunks_mut(chunk_len)
            .enumerate()
            .map(|(chunk_index, chunk)| -> Result<Profile, RenderError> {
                let mut profile = Profile::default();
                for (offset, pixel_ref) in chunk.iter_mut().enumerate() {
                    let pixel_index = chunk_index * chunk_len + offset;
                    let y: usize = pixel_index / width;
                    let x: usize = pixel_index - width * y;
                    let color = integrator.color(scene.ray_for_pixel(x, y), &mut profile)?;
                    *pixel_ref = check_color(x, y, color)?;
                }
                Ok(profile)
            })
            .try_reduce(Profile::default, |a, b| Ok(a.combine(b)))?;

        Ok((film, profile))
    }

    fn threads(&self) -> usize {
        rayon::current_num_threads()
    }
}
