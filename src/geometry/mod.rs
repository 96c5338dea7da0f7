mod sphere;

pub use sphere::{Sphere, MISS};

use serde::Deserialize;

/// How the linear term of the ray/sphere quadratic is computed.
#[derive(Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum QuadraticForm {
    /// `b = 2 (O - C) . D`
    #[default]
    Geometric,
    /// `b = 2 ((Ox - Cx) + (Oy - Cy) + (Oz - Cz))`, reproducing the arithmetic of the
    /// reference scene bit for bit. The direction drops out of `b`.
    ComponentSum,
}
