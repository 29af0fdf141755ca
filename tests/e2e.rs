mod common;

use common::synthetic_image::{clear, draw_row, fill_rect, skewed_row, skewed_staff, staff_lines};
use staff_detector::erase::{erase_along_paths, EraseStrategy};
use staff_detector::{
    BinaryImage, EraseOutcome, LowConfidence, StaffDetector, StaffError, StaffParams,
};

const STAFF: [usize; 5] = [30, 40, 50, 60, 70];

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn five_thin_lines_give_five_constant_paths() {
    init_logging();
    let img = staff_lines(200, 120, &STAFF, 1);
    let report = StaffDetector::new(StaffParams::default()).process(&img);

    assert_eq!(report.paths.len(), 5);
    for (path, row) in report.paths.iter().zip(STAFF) {
        assert_eq!(path.len(), 200, "path must cover every column");
        assert!(
            path.ys.iter().all(|&y| y == row),
            "expected constant path at row {row}, got {:?}",
            path.ys
        );
    }
    let m = report.metrics;
    assert_eq!(m.line_thickness, 1);
    assert_eq!(m.line_spacing, 10);
    assert_eq!(m.total_lines, 5);
    assert_eq!(m.staff_count, 1);
    assert!(report.is_confident(), "findings: {:?}", report.findings);
}

#[test]
fn skewed_lines_are_tracked_within_one_pixel() {
    init_logging();
    let run = 20;
    let bases = [30, 42, 54, 66, 78];
    let img = skewed_staff(200, 120, &bases, run);
    let report = StaffDetector::new(StaffParams::default()).process(&img);

    assert_eq!(report.paths.len(), 5);
    for (path, base) in report.paths.iter().zip(bases) {
        for (x, y) in path.columns() {
            let expected = skewed_row(base, x, run);
            assert!(
                y.abs_diff(expected) <= 1,
                "column {x}: traced {y}, line at {expected}"
            );
        }
    }
}

#[test]
fn single_column_gap_does_not_break_the_trace() {
    let mut img = staff_lines(200, 120, &STAFF, 1);
    clear(&mut img, 100, 50);
    let report = StaffDetector::new(StaffParams::default()).process(&img);

    assert_eq!(report.paths.len(), 5);
    let middle = &report.paths.as_slice()[2];
    assert!(middle.ys.iter().all(|&y| y == 50));
}

#[test]
fn erasing_twice_matches_erasing_once() {
    let mut img = staff_lines(200, 120, &STAFF, 1);
    fill_rect(&mut img, 120, 38, 126, 42);
    let detector = StaffDetector::new(StaffParams::default());
    let report = detector.process(&img);

    let first = detector.erase(&mut img, &report);
    assert!(first.is_erased());
    let once = img.clone();

    let second = erase_along_paths(
        &mut img,
        &report.paths,
        report.metrics.line_thickness,
        detector.params().erase.thickness_tolerance,
    );
    assert_eq!(img, once);
    assert_eq!(second.erased_pixels, 0);
}

#[test]
fn removal_keeps_symbols_crossing_the_staff() {
    let mut img = staff_lines(200, 120, &STAFF, 1);
    // notehead on the second line with a stem rising through the first
    fill_rect(&mut img, 120, 38, 126, 42);
    fill_rect(&mut img, 126, 10, 126, 40);

    let removal = StaffDetector::new(StaffParams::default()).remove_staff_lines(&mut img);
    let EraseOutcome::Erased { stats, .. } = removal.outcome else {
        panic!("removal refused: {:?}", removal.outcome);
    };
    assert!(stats.preserved_runs > 0);

    for &row in &STAFF {
        assert!(!img.is_foreground(10, row), "line {row} still present");
        assert!(!img.is_foreground(190, row), "line {row} still present");
    }
    assert!(img.is_foreground(121, 40), "notehead erased");
    assert!(img.is_foreground(126, 30), "stem erased where it crosses a line");
    assert!(img.is_foreground(126, 12));
}

#[test]
fn repeated_runs_are_identical() {
    let mut base = staff_lines(200, 120, &STAFF, 1);
    fill_rect(&mut base, 60, 48, 64, 52);
    clear(&mut base, 150, 70);
    let detector = StaffDetector::new(StaffParams::default());

    let mut a = base.clone();
    let mut b = base.clone();
    let ra = detector.remove_staff_lines(&mut a);
    let rb = detector.remove_staff_lines(&mut b);

    assert_eq!(ra.report.paths, rb.report.paths);
    assert_eq!(ra.report.line_map, rb.report.line_map);
    assert_eq!(ra.report.metrics, rb.report.metrics);
    assert_eq!(ra.outcome, rb.outcome);
    assert_eq!(a, b);
}

#[test]
fn blank_page_is_low_confidence_not_an_error() {
    let mut img = BinaryImage::blank(120, 80).unwrap();
    let removal = StaffDetector::new(StaffParams::default()).remove_staff_lines(&mut img);
    let report = &removal.report;

    assert!(report.line_map.is_empty());
    assert_eq!(report.metrics.total_lines, 0);
    assert_eq!(report.metrics.staff_count, 0);
    assert!(report.paths.is_empty());
    assert!(report
        .findings
        .contains(&LowConfidence::TooFewLines { found: 0 }));
    assert_eq!(
        removal.outcome,
        EraseOutcome::Refused {
            reason: LowConfidence::TooFewStablePaths {
                found: 0,
                required: 5
            }
        }
    );
    assert_eq!(img.foreground_count(), 0);
}

#[test]
fn two_staffs_are_counted() {
    let rows = [20, 30, 40, 50, 60, 120, 130, 140, 150, 160];
    let img = staff_lines(200, 200, &rows, 1);
    let report = StaffDetector::new(StaffParams::default()).process(&img);

    assert_eq!(report.metrics.total_lines, 10);
    assert_eq!(report.metrics.staff_count, 2);
    // eight in-staff gaps of 10 px spread over nine intervals
    assert_eq!(report.metrics.line_spacing, 80 / 9);
    assert_eq!(report.paths.len(), 10);
}

#[test]
fn thick_lines_are_erased_with_their_full_run() {
    let mut img = staff_lines(200, 140, &[30, 44, 58, 72, 86], 3);
    let removal = StaffDetector::new(StaffParams::default()).remove_staff_lines(&mut img);
    assert_eq!(removal.report.metrics.line_thickness, 3);
    assert_eq!(removal.report.paths.len(), 5);
    assert!(removal.outcome.is_erased());
    assert_eq!(img.foreground_count(), 0);
}

#[test]
fn coarse_and_traced_counts_are_reconciled() {
    let mut img = staff_lines(200, 250, &STAFF, 1);
    // a partial rule too short for the histogram slice but traceable, too far
    // below the staff for its trace to drift onto the last line
    draw_row(&mut img, 200, 0, 80);
    let report = StaffDetector::new(StaffParams::default()).process(&img);

    assert_eq!(report.metrics.total_lines, 5);
    assert_eq!(report.paths.len(), 6);
    assert!(report.findings.contains(&LowConfidence::LineCountMismatch {
        coarse: 5,
        stable: 6
    }));
}

#[test]
fn line_map_strategy_erases_isolated_bands() {
    let mut img = staff_lines(200, 120, &STAFF, 1);
    fill_rect(&mut img, 120, 38, 126, 42);
    let mut params = StaffParams::default();
    params.erase.strategy = EraseStrategy::LineMap;

    let removal = StaffDetector::new(params).remove_staff_lines(&mut img);
    assert!(matches!(
        removal.outcome,
        EraseOutcome::Erased {
            strategy: EraseStrategy::LineMap,
            ..
        }
    ));
    assert!(!img.is_foreground(10, 30));
    assert!(img.is_foreground(121, 40));
}

#[test]
fn invalid_buffers_are_rejected_at_the_boundary() {
    assert!(matches!(
        BinaryImage::from_values(0, 10, &[]),
        Err(StaffError::InvalidGeometry { .. })
    ));
    assert!(matches!(
        BinaryImage::from_values(2, 2, &[0, -1, 1, 0]),
        Err(StaffError::InvalidSample { index: 2, value: 1 })
    ));
}
