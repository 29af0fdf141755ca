use serde::Deserialize;

/// Knobs for the stable-path tracer.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TraceOptions {
    /// Extra cost `k` for stepping onto a background pixel.
    pub pixel_weight: f32,
    /// Fraction of the width skipped on each side when tracing.
    /// `0.0` traces the full width.
    pub band_margin: f32,
    /// Fraction of the height skipped at the top and bottom when choosing
    /// candidate start rows.
    pub row_margin_fraction: f32,
    /// Minimum share of a stable path's columns that must lie on ink.
    pub min_ink_fraction: f32,
}

impl Default for TraceOptions {
    fn default() -> Self {
        Self {
            pixel_weight: 5.0,
            band_margin: 0.0,
            row_margin_fraction: 0.05,
            min_ink_fraction: 0.3,
        }
    }
}

impl TraceOptions {
    /// Traced columns `[x0, x1)` for an image of width `w`.
    pub fn band(&self, w: usize) -> (usize, usize) {
        let margin = ((self.band_margin.clamp(0.0, 0.5) * w as f32) as usize).min(w / 2);
        (margin, w - margin)
    }

    /// Columns where forward and backward traces must agree: one column in
    /// from each end of the band, i.e. `x0 + 1` and `x1 - 2`.
    pub fn stability_columns(&self, w: usize) -> Option<(usize, usize)> {
        let (x0, x1) = self.band(w);
        (x1 >= x0 + 3).then(|| (x0 + 1, x1 - 2))
    }

    /// Candidate start rows `[y0, y1)` for an image of height `h`.
    pub fn candidate_rows(&self, h: usize) -> (usize, usize) {
        let margin = ((self.row_margin_fraction.max(0.0) * h as f32) as usize).max(1);
        (margin, h.saturating_sub(margin).max(margin))
    }
}
