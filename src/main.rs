use staff_detector::prelude::*;

fn main() -> staff_detector::Result<()> {
    env_logger::init();

    // Demo: a single five-line staff with a slight skew and a note stem
    let (w, h) = (400usize, 120usize);
    let mut img = BinaryImage::blank(w, h)?;
    for line in 0..5 {
        let base = 30 + line * 12;
        for x in 0..w {
            img.set(x, base + x / 80, Sample::Foreground);
        }
    }
    for y in 40..75 {
        img.set(200, y, Sample::Foreground);
    }

    let detector = StaffDetector::new(StaffParams::default());
    let removal = detector.remove_staff_lines(&mut img);
    let m = removal.report.metrics;
    println!(
        "lines={} staffs={} thickness={} spacing={} paths={} erased={} latency_ms={:.3}",
        m.total_lines,
        m.staff_count,
        m.line_thickness,
        m.line_spacing,
        removal.report.paths.len(),
        removal.outcome.is_erased(),
        removal.report.trace.timings.total_ms
    );
    Ok(())
}
