use tracing::info;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Profile {
    pub camera_rays: usize, // one per pixel
    pub sphere_hits: usize,
    pub sky_hits: usize,
}

impl Profile {
    pub fn new(camera_rays: usize, sphere_hits: usize, sky_hits: usize) -> Self {
        Profile {
            camera_rays,
            sphere_hits,
            sky_hits,
        }
    }
    pub fn combine(&self, other: Self) -> Self {
        Profile::new(
            self.camera_rays + other.camera_rays,
            self.sphere_hits + other.sphere_hits,
            self.sky_hits + other.sky_hits,
        )
    }

    pub fn pretty_print(&self, elapsed: f32, threads: usize) {
        let &Profile {
            camera_rays,
            sphere_hits,
            sky_hits,
        } = self;
        info!(
            "{} total camera rays at {} per second and {} per second per thread",
            camera_rays,
            camera_rays as f32 / elapsed,
            camera_rays as f32 / elapsed / (threads as f32)
        );
        info!("{} sphere hits, {} sky hits", sphere_hits, sky_hits);
    }
}
