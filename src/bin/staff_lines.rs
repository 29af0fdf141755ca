use log::info;
use staff_detector::config::load_config;
use staff_detector::histogram::ProjectionHistogram;
use staff_detector::image::io::{
    load_binary_image, render_histogram, render_path_overlay, save_binary_image,
    save_gray_rendering, save_rgb_rendering, write_json_file,
};
use staff_detector::{StaffDetector, StaffError};
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), StaffError> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let mut page = load_binary_image(&config.input, config.polarity)?;
    info!(
        "loaded {} ({}x{})",
        config.input.display(),
        page.w,
        page.h
    );

    if let Some(path) = &config.output.histogram_image {
        let hist = ProjectionHistogram::from_image(&page);
        save_gray_rendering(&render_histogram(&hist, page.w), path)?;
        println!("Saved projection histogram to {}", path.display());
    }

    let detector = StaffDetector::new(config.params.clone());
    let removal = detector.remove_staff_lines(&mut page);
    let report = &removal.report;

    let m = report.metrics;
    println!(
        "lines={} staffs={} thickness={} spacing={} stable_paths={}",
        m.total_lines,
        m.staff_count,
        m.line_thickness,
        m.line_spacing,
        report.paths.len()
    );
    for finding in &report.findings {
        println!("low confidence: {finding}");
    }

    if let Some(path) = &config.output.overlay_image {
        save_rgb_rendering(&render_path_overlay(page.w, page.h, &report.paths), path)?;
        println!("Saved path overlay to {}", path.display());
    }
    if let Some(path) = &config.output.cleaned_image {
        if removal.outcome.is_erased() {
            save_binary_image(&page, path, config.polarity)?;
            println!("Saved cleaned image to {}", path.display());
        } else {
            println!("Staff line removal refused; {} not written", path.display());
        }
    }
    if let Some(path) = &config.output.json_out {
        write_json_file(path, &removal)?;
        println!("Saved report to {}", path.display());
    }

    Ok(())
}

fn usage() -> StaffError {
    StaffError::Config("Usage: staff_lines <config.json>".to_string())
}
