use crate::errors::RenderError;
use crate::math::RGBColor;
use crate::renderer::Film;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use serde::Deserialize;
use tracing::info;

pub const MAX_CHANNEL_VALUE: u8 = 255;

#[allow(clippy::upper_case_acronyms)]
#[derive(Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// plain text `P3` pixel map
    #[default]
    PPM,
    PNG,
}

/// Scales a [0, 1] channel to [0, 255], truncating rather than rounding.
pub fn quantize_channel(channel: f64) -> u8 {
    // float to int `as` casts saturate, so this also clamps
    (channel * MAX_CHANNEL_VALUE as f64) as u8
}

pub fn quantize(color: RGBColor) -> [u8; 3] {
    debug_assert!(color.is_finite(), "{:?}", color);
    [
        quantize_channel(color.r),
        quantize_channel(color.g),
        quantize_channel(color.b),
    ]
}

/// Writes the film as a `P3` pixel map, one `r g b` line per pixel, top row first.
pub fn write_ppm<W: Write>(film: &Film, sink: W) -> Result<(), RenderError> {
    let mut sink = BufWriter::new(sink);
    writeln!(sink, "P3")?;
    writeln!(sink, "{} {}", film.width, film.height)?;
    writeln!(sink, "{}", MAX_CHANNEL_VALUE)?;
    for color in film.buffer.iter() {
        let [r, g, b] = quantize(*color);
        writeln!(sink, "{} {} {}", r, g, b)?;
    }
    sink.flush()?;
    Ok(())
}

pub fn write_png<P: AsRef<Path>>(film: &Film, path: P) -> Result<(), RenderError> {
    let too_large = || RenderError::ImageTooLarge {
        width: film.width,
        height: film.height,
    };
    let width = u32::try_from(film.width).map_err(|_| too_large())?;
    let height = u32::try_from(film.height).map_err(|_| too_large())?;
    let mut img: image::RgbImage = image::ImageBuffer::new(width, height);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        *pixel = image::Rgb(quantize(film.at(x as usize, y as usize)));
    }
    img.save(path)?;
    Ok(())
}

/// Writes the film to `filename`, or to stdout when no filename is given.
pub fn output_film(
    film: &Film,
    format: OutputFormat,
    filename: Option<&str>,
) -> Result<(), RenderError> {
    let now = Instant::now();
    match (format, filename) {
        (OutputFormat::PPM, None) => write_ppm(film, std::io::stdout().lock())?,
        (OutputFormat::PPM, Some(filename)) => {
            create_parent_dir(filename)?;
            write_ppm(film, File::create(filename)?)?
        }
        (OutputFormat::PNG, Some(filename)) => {
            create_parent_dir(filename)?;
            write_png(film, filename)?
        }
        (OutputFormat::PNG, None) => return Err(RenderError::PngRequiresFile),
    }
    info!(
        "wrote {:?} image to {} in {}s",
        format,
        filename.unwrap_or("stdout"),
        now.elapsed().as_secs_f32()
    );
    Ok(())
}

fn create_parent_dir(filename: &str) -> std::io::Result<()> {
    match Path::new(filename).parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}
