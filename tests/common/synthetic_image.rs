use staff_detector::{BinaryImage, Sample};

/// Horizontal full-width lines of `thickness` px starting at each row.
pub fn staff_lines(width: usize, height: usize, rows: &[usize], thickness: usize) -> BinaryImage {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut img = BinaryImage::blank(width, height).expect("valid geometry");
    for &r in rows {
        for y in r..r + thickness {
            draw_row(&mut img, y, 0, width);
        }
    }
    img
}

/// One-pixel lines descending one row every `run` columns.
pub fn skewed_staff(width: usize, height: usize, rows: &[usize], run: usize) -> BinaryImage {
    assert!(run > 0, "run must be positive");
    let mut img = BinaryImage::blank(width, height).expect("valid geometry");
    for &r in rows {
        for x in 0..width {
            img.set(x, skewed_row(r, x, run), Sample::Foreground);
        }
    }
    img
}

pub fn skewed_row(base: usize, x: usize, run: usize) -> usize {
    base + x / run
}

/// Fill rows `y` in columns `[x0, x1)`.
pub fn draw_row(img: &mut BinaryImage, y: usize, x0: usize, x1: usize) {
    for x in x0..x1 {
        img.set(x, y, Sample::Foreground);
    }
}

/// Fill the inclusive rectangle `[x0, x1] × [y0, y1]`.
pub fn fill_rect(img: &mut BinaryImage, x0: usize, y0: usize, x1: usize, y1: usize) {
    for y in y0..=y1 {
        for x in x0..=x1 {
            img.set(x, y, Sample::Foreground);
        }
    }
}

pub fn clear(img: &mut BinaryImage, x: usize, y: usize) {
    img.set(x, y, Sample::Background);
}
