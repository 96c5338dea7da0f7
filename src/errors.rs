use crate::math::RGBColor;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(
        "image dimensions must be nonzero and at most {} pixels, got {width}x{height}",
        crate::scene::MAX_PIXELS
    )]
    InvalidDimensions { width: usize, height: usize },
    #[error("scalar `{name}` must be finite and greater than zero, got {value}")]
    InvalidScalar { name: &'static str, value: f64 },
    #[error("point `{name}` must have finite components")]
    InvalidPoint { name: &'static str },
    #[error("sphere radius must be finite and greater than zero, got {0}")]
    InvalidRadius(f64),
    #[error("cannot normalize a zero-length ray direction")]
    ZeroLengthDirection,
    #[error("non-finite color {color:?} at pixel ({x}, {y})")]
    NonFiniteColor { x: usize, y: usize, color: RGBColor },
    #[error("{width}x{height} is too large for a png")]
    ImageTooLarge { width: usize, height: usize },
    #[error("png output requires a filename")]
    PngRequiresFile,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Image(#[from] image::ImageError),
}
