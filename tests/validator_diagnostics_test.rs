use turning_grille::api;
use turning_grille::core::validator::{coverage, validate, SAMPLE_LIMIT};
use turning_grille::{GrilleError, HoleBase, Position, RotationDirection};

fn positions(pairs: &[(usize, usize)]) -> Vec<Position> {
    pairs.iter().map(|&(r, c)| Position::new(r, c)).collect()
}

fn coverage_error(result: turning_grille::Result<()>) -> turning_grille::CoverageReport {
    match result {
        Err(GrilleError::InvalidGrilleCoverage(report)) => report,
        other => panic!("expected a coverage failure, got {:?}", other),
    }
}

#[test]
fn test_overlap_names_a_duplicate() {
    // (0,0) and (3,3) lie on the same orbit of a 4x4 grid.
    let holes = positions(&[(0, 0), (3, 3), (0, 1), (1, 1)]);
    let report = coverage_error(validate(&holes, 4, RotationDirection::Clockwise));
    assert!(report.has_overlap());
    assert!(report.duplicates.contains(&Position::new(0, 0)));
}

#[test]
fn test_gap_names_a_missing_cell() {
    let holes = positions(&[(0, 0), (0, 1), (1, 0)]);
    let report = coverage_error(validate(&holes, 4, RotationDirection::CounterClockwise));
    assert!(report.count_mismatch());
    assert!(!report.has_overlap());
    assert_eq!(report.missing_count, 4);
    assert!(report.missing.contains(&Position::new(1, 1)));
}

#[test]
fn test_two_by_two_boundaries() {
    assert!(api::validate_grille(2, 1, &[(0, 0)], HoleBase::ZeroBased).is_ok());

    let report = coverage_error(api::validate_grille(
        2,
        1,
        &[(0, 0), (1, 1)],
        HoleBase::ZeroBased,
    ));
    assert_eq!(report.duplicates.len(), 4);
    assert_eq!(report.missing_count, 0);
}

#[test]
fn test_empty_holes_still_run_generations() {
    let report = coverage_error(validate(&[], 8, RotationDirection::Clockwise));
    assert_eq!(report.visited_count, 0);
    assert_eq!(report.expected_cells, 64);
    assert_eq!(report.missing_count, 64);
    assert_eq!(report.missing.len(), SAMPLE_LIMIT);
}

#[test]
fn test_report_serializes_as_structured_data() {
    let report = coverage(&positions(&[(0, 0), (1, 1)]), 2, RotationDirection::Clockwise).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["visited_count"], 8);
    assert_eq!(json["duplicates"][0]["row"], 0);
    assert_eq!(json["duplicates"][0]["col"], 0);
    assert!(json["missing"].as_array().unwrap().is_empty());
}

#[test]
fn test_report_message_lists_both_reasons() {
    let report = coverage(&positions(&[(0, 0), (0, 3), (1, 1)]), 4, RotationDirection::Clockwise)
        .unwrap();
    let text = report.to_string();
    assert!(text.contains("12 != 16"));
    assert!(text.contains("visited more than once"));
    assert!(text.contains("never visited"));
}

#[test]
fn test_oversized_grid_is_rejected_before_allocation() {
    assert!(matches!(
        api::validate_grille(1usize << 32, 1, &[], HoleBase::ZeroBased),
        Err(GrilleError::InvalidGrilleSize { size }) if size == 1usize << 32
    ));
    assert!(matches!(
        validate(&[], usize::MAX, RotationDirection::CounterClockwise),
        Err(GrilleError::InvalidGrilleSize { .. })
    ));
}

#[test]
fn test_size_bound_is_inclusive() {
    let limit = turning_grille::utils::validation::MAX_GRILLE_SIZE;
    let report = coverage(&[], limit, RotationDirection::Clockwise).unwrap();
    assert_eq!(report.expected_cells, limit * limit);
    assert!(matches!(
        coverage(&[], limit + 1, RotationDirection::Clockwise),
        Err(GrilleError::InvalidGrilleSize { .. })
    ));
}
