use crate::image::{BinaryImage, ImageView};
use serde::Serialize;

/// Per-row count of foreground samples.
///
/// Derived from a [`BinaryImage`]; recompute it whenever the image changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProjectionHistogram {
    counts: Vec<usize>,
}

impl ProjectionHistogram {
    pub fn from_image(image: &BinaryImage) -> Self {
        let counts = image
            .rows()
            .map(|row| row.iter().filter(|s| s.is_foreground()).count())
            .collect();
        Self { counts }
    }

    #[inline]
    pub fn count(&self, y: usize) -> usize {
        self.counts[y]
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Number of rows (image height).
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn max(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}
