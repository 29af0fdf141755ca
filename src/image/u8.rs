/// Borrowed 8-bit grayscale view, typically the output of an external
/// binarization step (levels 0 and 255 only).
#[derive(Clone, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    /// Smallest buffer length holding `h` rows of `w` pixels at this stride,
    /// or `None` when it does not fit in `usize`.
    pub fn required_len(&self) -> Option<usize> {
        match self.h {
            0 => Some(0),
            h => self.stride.checked_mul(h - 1)?.checked_add(self.w),
        }
    }
}

impl<'a> crate::image::traits::ImageView for ImageU8<'a> {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}
