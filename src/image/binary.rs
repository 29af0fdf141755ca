//! Owned binarized raster in row-major layout (stride == width).
//!
//! Every sample is one of exactly two values, encoded as [`Sample`]. The
//! numeric convention of the upstream binarizer (`-1` foreground, `0`
//! background) is kept behind [`Sample::value`] so the tracer never does
//! sign arithmetic on raw bytes.
use super::traits::ImageView;
use super::u8::ImageU8;
use crate::error::{Result, StaffError};
use serde::Deserialize;

/// One binarized pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Sample {
    #[default]
    Background = 0,
    Foreground = -1,
}

impl Sample {
    /// Numeric value of the sample: `-1` for ink, `0` for paper.
    #[inline]
    pub fn value(self) -> i32 {
        self as i8 as i32
    }

    #[inline]
    pub fn is_foreground(self) -> bool {
        self == Sample::Foreground
    }

    /// Shortest-path weight `k * (value + 1)`: zero on ink, `k` on paper.
    #[inline]
    pub fn path_weight(self, k: f32) -> f32 {
        k * (self.value() + 1) as f32
    }

    pub fn from_value(value: i32) -> Option<Self> {
        match value {
            0 => Some(Sample::Background),
            -1 => Some(Sample::Foreground),
            _ => None,
        }
    }
}

/// Which gray level of a binarized 8-bit image carries the ink.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Polarity {
    /// 255 is foreground (an inverted threshold, white lines on black).
    #[default]
    LightInk,
    /// 0 is foreground (black ink on white paper).
    DarkInk,
}

impl Polarity {
    fn classify(self, level: u8) -> Option<Sample> {
        match (self, level) {
            (Polarity::LightInk, 255) | (Polarity::DarkInk, 0) => Some(Sample::Foreground),
            (Polarity::LightInk, 0) | (Polarity::DarkInk, 255) => Some(Sample::Background),
            _ => None,
        }
    }

    fn level(self, sample: Sample) -> u8 {
        match (self, sample) {
            (Polarity::LightInk, Sample::Foreground) | (Polarity::DarkInk, Sample::Background) => {
                255
            }
            _ => 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryImage {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    data: Vec<Sample>,
}

impl BinaryImage {
    /// Construct from owned samples, validating the geometry.
    pub fn new(w: usize, h: usize, data: Vec<Sample>) -> Result<Self> {
        check_geometry(w, h, data.len())?;
        Ok(Self { w, h, data })
    }

    /// All-background image of size `w × h`.
    pub fn blank(w: usize, h: usize) -> Result<Self> {
        Self::new(w, h, vec![Sample::Background; w.saturating_mul(h)])
    }

    /// Construct from raw `{-1, 0}` values; anything else is rejected.
    pub fn from_values(w: usize, h: usize, values: &[i8]) -> Result<Self> {
        check_geometry(w, h, values.len())?;
        let data = values
            .iter()
            .enumerate()
            .map(|(index, &v)| {
                Sample::from_value(v as i32).ok_or(StaffError::InvalidSample {
                    index,
                    value: v as i32,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { w, h, data })
    }

    /// Construct from a binarized gray view holding only levels 0 and 255.
    pub fn from_gray(gray: ImageU8<'_>, polarity: Polarity) -> Result<Self> {
        let invalid = || StaffError::InvalidGeometry {
            width: gray.w,
            height: gray.h,
        };
        let len = gray.w.checked_mul(gray.h).ok_or_else(invalid)?;
        check_geometry(gray.w, gray.h, len)?;
        let required = gray.required_len().ok_or_else(invalid)?;
        if gray.stride < gray.w || gray.data.len() < required {
            return Err(StaffError::BufferSizeMismatch {
                expected: required,
                actual: gray.data.len(),
            });
        }
        let mut data = Vec::with_capacity(len);
        for y in 0..gray.h {
            for (x, &level) in gray.row(y).iter().enumerate() {
                let sample = polarity
                    .classify(level)
                    .ok_or(StaffError::InvalidSample {
                        index: y * gray.w + x,
                        value: level as i32,
                    })?;
                data.push(sample);
            }
        }
        Ok(Self {
            w: gray.w,
            h: gray.h,
            data,
        })
    }

    /// Convert back to 8-bit levels using `polarity`.
    pub fn to_gray(&self, polarity: Polarity) -> Vec<u8> {
        self.data.iter().map(|&s| polarity.level(s)).collect()
    }

    #[inline]
    /// Convert (x, y) to a linear index into the sample buffer.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Sample {
        self.data[self.idx(x, y)]
    }
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, s: Sample) {
        let i = self.idx(x, y);
        self.data[i] = s;
    }
    #[inline]
    pub fn is_foreground(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_foreground()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.data
    }

    pub fn foreground_count(&self) -> usize {
        self.data.iter().filter(|s| s.is_foreground()).count()
    }
}

fn check_geometry(w: usize, h: usize, len: usize) -> Result<()> {
    if w == 0 || h == 0 {
        return Err(StaffError::InvalidGeometry {
            width: w,
            height: h,
        });
    }
    let expected = w
        .checked_mul(h)
        .ok_or(StaffError::InvalidGeometry {
            width: w,
            height: h,
        })?;
    if len != expected {
        return Err(StaffError::BufferSizeMismatch {
            expected,
            actual: len,
        });
    }
    Ok(())
}

impl ImageView for BinaryImage {
    type Pixel = Sample;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[Sample] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
}
