use opensweep::error::OpenSweepError;
use opensweep::grid::ThresholdGrid;

fn assert_close(a: f32, b: f32) {
    assert!((a - b).abs() < 1e-5, "expected {} ~ {}", b, a);
}

#[test]
fn test_fixed_domain_half_steps() {
    let grid = ThresholdGrid::fixed_domain(0.5).unwrap();
    assert_eq!(grid.len(), 3);
    assert_close(grid.points()[0], 0.0);
    assert_close(grid.points()[1], 0.5);
    assert_close(grid.points()[2], 1.0);
}

#[test]
fn test_fixed_domain_non_dividing_step_stays_below_one() {
    let grid = ThresholdGrid::fixed_domain(0.3).unwrap();
    assert_eq!(grid.len(), 4); // 0.0, 0.3, 0.6, 0.9
    assert_close(grid.points()[3], 0.9);
    assert!(grid.points().iter().all(|&t| t <= 1.0));
}

#[test]
fn test_fixed_domain_includes_boundary_despite_float_drift() {
    // 20 increments of 0.05 must land on 1.0, not stop at 0.95.
    let grid = ThresholdGrid::fixed_domain(0.05).unwrap();
    assert_eq!(grid.len(), 21);
    assert_close(*grid.points().last().unwrap(), 1.0);
}

#[test]
fn test_data_driven_step_count_and_endpoints() {
    // floor(2.0 / 0.5) + 1 = 5 points, linearly spaced.
    let grid = ThresholdGrid::data_driven(2.0, 0.5).unwrap();
    assert_eq!(grid.len(), 5);
    assert_close(grid.points()[0], 0.0);
    assert_close(grid.points()[2], 1.0);
    assert_eq!(*grid.points().last().unwrap(), 2.0);
}

#[test]
fn test_data_driven_endpoint_is_exact_max() {
    let max = 7.3;
    let grid = ThresholdGrid::data_driven(max, 0.5).unwrap();
    assert_eq!(*grid.points().last().unwrap(), max);
}

#[test]
fn test_data_driven_zero_max_degenerates_to_single_point() {
    let grid = ThresholdGrid::data_driven(0.0, 0.5).unwrap();
    assert_eq!(grid.points(), &[0.0]);
}

#[test]
fn test_grid_is_strictly_increasing() {
    for grid in [
        ThresholdGrid::fixed_domain(0.07).unwrap(),
        ThresholdGrid::data_driven(13.7, 0.25).unwrap(),
    ] {
        for pair in grid.points().windows(2) {
            assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
        }
    }
}

#[test]
fn test_rejects_non_positive_step() {
    assert!(matches!(
        ThresholdGrid::fixed_domain(0.0),
        Err(OpenSweepError::InvalidGrid(_))
    ));
    assert!(matches!(
        ThresholdGrid::data_driven(5.0, -0.5),
        Err(OpenSweepError::InvalidGrid(_))
    ));
}

#[test]
fn test_rejects_inverted_or_non_finite_bounds() {
    assert!(matches!(
        ThresholdGrid::data_driven(-1.0, 0.5),
        Err(OpenSweepError::InvalidGrid(_))
    ));
    assert!(matches!(
        ThresholdGrid::data_driven(f32::NAN, 0.5),
        Err(OpenSweepError::InvalidGrid(_))
    ));
    assert!(matches!(
        ThresholdGrid::data_driven(f32::INFINITY, 0.5),
        Err(OpenSweepError::InvalidGrid(_))
    ));
    assert!(matches!(
        ThresholdGrid::stepped(2.0, 1.0, 0.5),
        Err(OpenSweepError::InvalidGrid(_))
    ));
}
