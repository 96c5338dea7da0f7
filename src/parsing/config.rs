use crate::geometry::QuadraticForm;
use crate::output::OutputFormat;

use super::Point3Data;

use serde::Deserialize;

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SphereSettings {
    pub name: String,
    pub center: Point3Data,
    pub radius: f64,
}

impl Default for SphereSettings {
    fn default() -> Self {
        SphereSettings {
            name: String::from("big_sphere"),
            center: [0.0, 0.0, -1.0],
            radius: 0.5,
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SceneSettings {
    pub aspect_ratio: f64,
    pub width: usize,
    // derived from width and aspect_ratio when absent
    pub height: Option<usize>,
    pub viewport_height: f64,
    pub focal_length: f64,
    pub origin: Point3Data,
    pub sphere: SphereSettings,
}

impl Default for SceneSettings {
    fn default() -> Self {
        SceneSettings {
            aspect_ratio: 16.0 / 9.0,
            width: 400,
            height: None,
            viewport_height: 2.0,
            focal_length: 1.0,
            origin: [0.0, 0.0, 0.0],
            sphere: SphereSettings::default(),
        }
    }
}

impl SceneSettings {
    /// Explicit height, or `width / aspect_ratio` truncated toward zero.
    pub fn resolved_height(&self) -> usize {
        self.height
            .unwrap_or_else(|| (self.width as f64 / self.aspect_ratio) as usize)
    }
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum RendererType {
    Naive,
    Parallel { rows_per_chunk: usize },
}

impl Default for RendererType {
    fn default() -> Self {
        RendererType::Parallel { rows_per_chunk: 8 }
    }
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct RenderSettings {
    // stdout when None
    pub filename: Option<String>,
    pub format: OutputFormat,
    pub threads: Option<u16>,
    pub quadratic_form: QuadraticForm,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct TOMLConfig {
    pub renderer: RendererType,
    pub render_settings: RenderSettings,
    pub scene: SceneSettings,
}
