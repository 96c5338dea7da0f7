pub use crate::camera::{pixel_uv, Camera};
pub use crate::errors::RenderError;
pub use crate::geometry::{QuadraticForm, Sphere};
pub use crate::integrator::{Integrator, NormalIntegrator};
pub use crate::math::*;
pub use crate::output::{output_film, OutputFormat};
pub use crate::parsing::config::{RenderSettings, RendererType, SceneSettings, TOMLConfig};
pub use crate::parsing::get_settings;
pub use crate::renderer::{render_scene, Film, Renderer};
pub use crate::scene::{Scene, POINT_NAMES, SCALAR_NAMES};
