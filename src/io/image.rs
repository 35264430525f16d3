//! Grayscale image loading and scoped, atomic raster export with pixel density

use crate::io::configuration::METRES_PER_INCH;
use crate::io::error::{PanelError, Result};
use crate::raster::intensity::IntensityImage;
use image::codecs::jpeg::{JpegEncoder, PixelDensity};
use image::error::EncodingError;
use image::{ImageError, ImageFormat, ImageResult, RgbImage};
use std::fs;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Load any decodable image as an intensity image
///
/// # Errors
///
/// Returns an error if:
/// - The file at the given path cannot be opened or decoded
/// - The decoded image has zero width or height
pub fn load_intensity_image<P: AsRef<Path>>(path: P) -> Result<IntensityImage> {
    let path_buf = path.as_ref().to_path_buf();
    let img = image::open(&path_buf).map_err(|e| PanelError::ImageLoad {
        path: path_buf.clone(),
        source: e,
    })?;
    IntensityImage::from_gray8(&path_buf.display().to_string(), &img.to_luma8())
}

/// Physical density for `dpi`, in pixels per metre, as PNG stores it
pub fn pixels_per_metre(dpi: u32) -> u32 {
    (f64::from(dpi) / METRES_PER_INCH).round() as u32
}

/// Encode `canvas` in the format implied by the extension and move it over `output_path`
///
/// The image is staged in a temporary file next to the destination, so a failed
/// write leaves no partial output behind and an existing file is only replaced
/// once encoding has succeeded. PNG and JPEG output record `dpi` as the
/// physical pixel density.
///
/// # Errors
///
/// Returns an error if:
/// - The extension does not name a supported format
/// - The parent directory or the staging file cannot be created
/// - Encoding, flushing or the final rename fails
pub fn write_rgb_image(canvas: &RgbImage, output_path: &Path, dpi: u32) -> Result<()> {
    let format = ImageFormat::from_path(output_path).map_err(|e| PanelError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    let parent = output_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent).map_err(|e| PanelError::FileSystem {
        path: parent.to_path_buf(),
        operation: "create directory",
        source: e,
    })?;

    let mut staging = NamedTempFile::new_in(parent).map_err(|e| PanelError::FileSystem {
        path: parent.to_path_buf(),
        operation: "create temporary file",
        source: e,
    })?;

    {
        let mut writer = BufWriter::new(staging.as_file_mut());
        encode(canvas, format, dpi, &mut writer).map_err(|e| PanelError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;
        writer.flush().map_err(|e| PanelError::ImageExport {
            path: output_path.to_path_buf(),
            source: ImageError::IoError(e),
        })?;
    }

    staging
        .persist(output_path)
        .map_err(|e| PanelError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "replace output",
            source: e.error,
        })?;

    Ok(())
}

fn encode<W: Write + Seek>(
    canvas: &RgbImage,
    format: ImageFormat,
    dpi: u32,
    writer: &mut W,
) -> ImageResult<()> {
    match format {
        ImageFormat::Png => encode_png(canvas, dpi, writer).map_err(|e| {
            ImageError::Encoding(EncodingError::new(ImageFormat::Png.into(), e))
        }),
        ImageFormat::Jpeg => {
            let density = u16::try_from(dpi).unwrap_or(u16::MAX);
            let mut encoder = JpegEncoder::new(writer);
            encoder.set_pixel_density(PixelDensity::dpi(density));
            encoder.encode_image(canvas)
        }
        // Other formats have no density field the encoders can set
        _ => canvas.write_to(writer, format),
    }
}

fn encode_png<W: Write>(
    canvas: &RgbImage,
    dpi: u32,
    writer: W,
) -> std::result::Result<(), png::EncodingError> {
    let density = pixels_per_metre(dpi);
    let mut encoder = png::Encoder::new(writer, canvas.width(), canvas.height());
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_pixel_dims(Some(png::PixelDimensions {
        xppu: density,
        yppu: density,
        unit: png::Unit::Meter,
    }));
    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(canvas.as_raw())?;
    png_writer.finish()
}
