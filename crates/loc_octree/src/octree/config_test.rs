use super::*;

// =========================================================================
// Batch 3: TreeConfig Tests - Coordinate Math
// =========================================================================

/// Default is the unit cube with 10 levels.
#[test]
fn test_default_config() {
  let config = TreeConfig::default();
  assert_eq!(config.num_levels, 10);
  assert_eq!(config.root_level(), 9);
  assert_eq!(config.world_bounds(), DAabb3::new(DVec3::ZERO, DVec3::ONE));
  assert!(config.validate().is_ok());
}

#[test]
fn test_validate_rejects_bad_levels() {
  assert!(TreeConfig::with_levels(0).validate().is_err());
  assert!(TreeConfig::with_levels(MAX_LEVELS + 1).validate().is_err());
  assert!(TreeConfig::with_levels(1).validate().is_ok());
  assert!(TreeConfig::with_levels(MAX_LEVELS).validate().is_ok());
}

#[test]
fn test_validate_rejects_bad_world_size() {
  for world_size in [0.0, -1.0, f64::NAN, f64::INFINITY] {
    let config = TreeConfig {
      world_size,
      ..Default::default()
    };
    assert!(config.validate().is_err(), "world_size {} accepted", world_size);
  }
}

/// World size scales every cell; origin offsets every anchor.
#[test]
fn test_cell_bounds_with_world_origin() {
  let config = TreeConfig {
    num_levels: 4,
    world_origin: DVec3::new(100.0, 200.0, 300.0),
    world_size: 80.0,
  };

  // Root level 3, extent 8 code units of 10 world units each.
  assert_eq!(config.cell_world_size(3), 80.0);
  assert_eq!(config.cell_world_size(0), 10.0);

  let bounds = config.cell_bounds(&LocationCode::new(4, 0, 2), 1);
  assert_eq!(bounds.min, DVec3::new(140.0, 200.0, 320.0));
  assert_eq!(bounds.max, DVec3::new(160.0, 220.0, 340.0));
}

#[test]
fn test_world_to_code() {
  let config = TreeConfig::default();

  assert_eq!(
    config.world_to_code(DVec3::new(0.1, 0.1, 0.1)),
    Some(LocationCode::new(51, 51, 51))
  );
  assert_eq!(
    config.world_to_code(DVec3::ZERO),
    Some(LocationCode::ZERO)
  );
  // Max faces are inside the closed domain.
  assert_eq!(
    config.world_to_code(DVec3::ONE),
    Some(LocationCode::new(511, 511, 511))
  );
}

#[test]
fn test_world_to_code_outside_domain() {
  let config = TreeConfig::default();
  assert!(config.world_to_code(DVec3::new(-0.01, 0.5, 0.5)).is_none());
  assert!(config.world_to_code(DVec3::new(0.5, 1.01, 0.5)).is_none());
  assert!(config.world_to_code(DVec3::new(0.5, 0.5, f64::NAN)).is_none());
}

/// TOML-style partial configs fall back to defaults.
#[test]
fn test_deserialize_partial_config() {
  let config: TreeConfig = serde_json::from_str(r#"{ "num_levels": 6 }"#).unwrap();
  assert_eq!(config.num_levels, 6);
  assert_eq!(config.world_size, 1.0);
  assert_eq!(config.world_origin, DVec3::ZERO);
}
