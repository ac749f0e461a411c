use seeker_core::{ConfigError, SeekerConfig};

#[test]
fn default_config_is_valid() {
    SeekerConfig::default().validate().expect("defaults validate");
}

#[test]
fn default_half_fov_is_thirty_degrees() {
    let config = SeekerConfig::default();
    assert!((config.perception.half_fov() - 30f32.to_radians()).abs() < 1e-6);
    assert!((config.doors.half_open_fov() - 55f32.to_radians()).abs() < 1e-6);
}

#[test]
fn rejects_zero_view_distance() {
    let mut config = SeekerConfig::default();
    config.perception.view_distance = 0.0;
    assert_eq!(
        config.validate(),
        Err(ConfigError::NotPositive {
            field: "perception.view_distance",
            value: 0.0
        })
    );
}

#[test]
fn rejects_fov_outside_full_turn() {
    let mut config = SeekerConfig::default();
    config.perception.fov_degrees = 400.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::AngleOutOfRange { field: "perception.fov_degrees", .. })
    ));
}

#[test]
fn rejects_empty_search_ring() {
    let mut config = SeekerConfig::default();
    config.behavior.search_point_count = 0;
    assert_eq!(config.validate(), Err(ConfigError::NoSearchPoints));
}

#[test]
fn rejects_nan_speed() {
    let mut config = SeekerConfig::default();
    config.movement.move_speed = f32::NAN;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::Negative { field: "movement.move_speed", .. })
    ));
}

#[test]
fn error_messages_name_the_field() {
    let err = ConfigError::NotPositive {
        field: "movement.radius",
        value: -1.0,
    };
    assert_eq!(
        err.to_string(),
        "movement.radius must be finite and greater than zero (got -1)"
    );
}
