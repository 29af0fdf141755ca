//! I/O helpers for binarized images, debug renderings and JSON.
//!
//! - `load_binary_image`: read a two-level PNG/JPEG into a [`BinaryImage`].
//! - `save_binary_image`: write a [`BinaryImage`] back as an 8-bit PNG.
//! - `render_histogram`: draw the row projection histogram as bars.
//! - `render_path_overlay`: draw stable paths over a light-gray canvas.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::binary::{BinaryImage, Polarity};
use super::u8::ImageU8;
use crate::error::{Result, StaffError};
use crate::histogram::ProjectionHistogram;
use crate::trace::Path as TracePath;
use image::{GrayImage, Luma, Rgb, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Distinct overlay colours, cycled per path.
const PALETTE: [[u8; 3]; 8] = [
    [230, 25, 75],
    [60, 180, 75],
    [0, 130, 200],
    [245, 130, 48],
    [145, 30, 180],
    [70, 240, 240],
    [240, 50, 230],
    [128, 128, 0],
];
const CANVAS: [u8; 3] = [204, 204, 204];

/// Load an already-binarized image; any level other than 0/255 is rejected.
pub fn load_binary_image(path: &Path, polarity: Polarity) -> Result<BinaryImage> {
    let img = image::open(path)?.into_luma8();
    let (w, h) = (img.width() as usize, img.height() as usize);
    let data = img.into_raw();
    BinaryImage::from_gray(
        ImageU8 {
            w,
            h,
            stride: w,
            data: &data,
        },
        polarity,
    )
}

/// Save a binary image as an 8-bit PNG using `polarity` for the ink level.
pub fn save_binary_image(image: &BinaryImage, path: &Path, polarity: Polarity) -> Result<()> {
    ensure_parent_dir(path)?;
    let out = GrayImage::from_raw(image.w as u32, image.h as u32, image.to_gray(polarity))
        .ok_or_else(|| StaffError::BufferSizeMismatch {
            expected: image.w * image.h,
            actual: image.samples().len(),
        })?;
    out.save(path)?;
    Ok(())
}

/// Bar rendering of the histogram: row `y` is black for `x <= count(y)`.
pub fn render_histogram(hist: &ProjectionHistogram, width: usize) -> GrayImage {
    let mut out = GrayImage::new(width as u32, hist.len() as u32);
    for (y, &count) in hist.counts().iter().enumerate() {
        for x in 0..width {
            let v = if count >= x { 0u8 } else { 255u8 };
            out.put_pixel(x as u32, y as u32, Luma([v]));
        }
    }
    out
}

/// Draw each path in its own palette colour on a light-gray canvas.
pub fn render_path_overlay<'a>(
    width: usize,
    height: usize,
    paths: impl IntoIterator<Item = &'a TracePath>,
) -> RgbImage {
    let mut out = RgbImage::from_pixel(width as u32, height as u32, Rgb(CANVAS));
    for (i, path) in paths.into_iter().enumerate() {
        let color = Rgb(PALETTE[i % PALETTE.len()]);
        for (x, y) in path.columns() {
            if x < width && y < height {
                out.put_pixel(x as u32, y as u32, color);
            }
        }
    }
    out
}

/// Save a gray rendering (e.g. the histogram bars) as PNG.
pub fn save_gray_rendering(image: &GrayImage, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    image.save(path)?;
    Ok(())
}

/// Save a colour rendering (e.g. the path overlay) as PNG.
pub fn save_rgb_rendering(image: &RgbImage, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    image.save(path)?;
    Ok(())
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Sample;

    #[test]
    fn histogram_bars_match_counts() {
        let mut img = BinaryImage::blank(6, 2).unwrap();
        for x in 0..3 {
            img.set(x, 1, Sample::Foreground);
        }
        let hist = ProjectionHistogram::from_image(&img);
        let bars = render_histogram(&hist, 6);
        assert_eq!(bars.get_pixel(0, 0).0, [0]);
        assert_eq!(bars.get_pixel(1, 0).0, [255]);
        assert_eq!(bars.get_pixel(3, 1).0, [0]);
        assert_eq!(bars.get_pixel(4, 1).0, [255]);
    }

    #[test]
    fn overlay_is_deterministic() {
        let paths = vec![
            TracePath {
                x_start: 0,
                ys: vec![1, 1, 2],
            },
            TracePath {
                x_start: 1,
                ys: vec![3, 3],
            },
        ];
        let a = render_path_overlay(4, 5, &paths);
        let b = render_path_overlay(4, 5, &paths);
        assert_eq!(a, b);
        assert_eq!(a.get_pixel(2, 2).0, PALETTE[0]);
        assert_eq!(a.get_pixel(2, 3).0, PALETTE[1]);
        assert_eq!(a.get_pixel(0, 0).0, CANVAS);
    }
}
