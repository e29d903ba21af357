use std::path::Path;

use glam::Vec2;

use occgrid::load_environment;
use occgrid::types::OCCUPIED;

#[test]
fn loads_environment_fixture() {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let yaml_path = manifest_dir.join("tests/fixtures/warehouse.yaml");

    let environment = load_environment(&yaml_path).expect("environment should load");

    assert_eq!(environment.boundary.min, Vec2::new(0.0, 0.0));
    assert_eq!(environment.boundary.max, Vec2::new(10.0, 10.0));
    assert_eq!(environment.obstacles.len(), 2);
    assert_eq!(environment.resolution, 1.0);
}

#[test]
fn fixture_builds_the_expected_grid() {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let yaml_path = manifest_dir.join("tests/fixtures/warehouse.yaml");

    let grid = load_environment(&yaml_path)
        .expect("environment should load")
        .build_grid()
        .expect("grid should build");

    assert_eq!((grid.width(), grid.height()), (10, 10));
    // First block covers rows 2..=4 x cols 2..=4, the second rows 1..=9 x
    // cols 6..=7.
    assert_eq!(grid.get(3, 3), Some(OCCUPIED));
    assert_eq!(grid.get(6, 5), Some(OCCUPIED));
    let occupied = grid.data().iter().filter(|&&cell| cell == OCCUPIED).count();
    assert_eq!(occupied, 9 + 18);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_environment("does/not/exist.yaml").unwrap_err();
    assert!(matches!(err, occgrid::GridError::Io(_)));
}
