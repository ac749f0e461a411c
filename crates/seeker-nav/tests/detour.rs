use seeker_core::{Aabb, Collider, MovementConfig, Vec3};
use seeker_nav::{evaluate_position, pick_detour, score_candidates, Detour};

const BAND: f32 = 1.5;

fn crate_box(min: Vec3, max: Vec3) -> Collider {
    Collider::new("COL_CRATE", Aabb::new(min, max))
}

#[test]
fn open_ground_at_goal_scores_baseline_plus_full_bonus() {
    let score = evaluate_position(Vec3::ZERO, Vec3::ZERO, &[], BAND);
    assert!((score - 130.0).abs() < 1e-4);
}

#[test]
fn goal_bonus_falls_off_and_never_goes_negative() {
    let near = evaluate_position(Vec3::ZERO, Vec3::new(5.0, 0.0, 0.0), &[], BAND);
    assert!((near - 120.0).abs() < 1e-4);

    let far = evaluate_position(Vec3::ZERO, Vec3::new(50.0, 0.0, 0.0), &[], BAND);
    assert!((far - 100.0).abs() < 1e-4);
}

#[test]
fn candidate_inside_box_loses_fifty() {
    let boxes = [crate_box(Vec3::new(-1.0, 0.0, -1.0), Vec3::new(1.0, 1.0, 1.0))];
    let score = evaluate_position(Vec3::ZERO, Vec3::new(50.0, 0.0, 0.0), &boxes, BAND);
    assert!((score - 50.0).abs() < 1e-4);

    // Inside the 0.1 margin still counts as inside.
    let edge = evaluate_position(Vec3::new(1.05, 0.0, 0.0), Vec3::new(50.0, 0.0, 0.0), &boxes, BAND);
    assert!((edge - 50.0).abs() < 1e-4);
}

#[test]
fn candidate_near_box_loses_proportionally() {
    let boxes = [crate_box(Vec3::new(-1.0, 0.0, -1.0), Vec3::new(1.0, 1.0, 1.0))];
    let score = evaluate_position(Vec3::new(1.5, 0.0, 0.0), Vec3::new(50.0, 0.0, 0.0), &boxes, BAND);
    assert!((score - 90.0).abs() < 1e-4);
}

#[test]
fn ceilings_and_out_of_band_boxes_do_not_count() {
    let boxes = [
        Collider::ceiling("COL_CEILING", Aabb::new(Vec3::new(-5.0, 0.0, -5.0), Vec3::new(5.0, 1.0, 5.0))),
        crate_box(Vec3::new(-1.0, 4.0, -1.0), Vec3::new(1.0, 5.0, 1.0)),
    ];
    let score = evaluate_position(Vec3::ZERO, Vec3::new(50.0, 0.0, 0.0), &boxes, BAND);
    assert!((score - 100.0).abs() < 1e-4);
}

#[test]
fn candidates_follow_configured_angle_order() {
    let config = MovementConfig::default();
    let candidates = score_candidates(Vec3::ZERO, Vec3::new(6.0, 0.0, 0.0), &[], &config);

    let angles: Vec<f32> = candidates.iter().map(|c| c.angle_degrees).collect();
    assert_eq!(angles, config.detour_angles_degrees);
    for c in &candidates {
        let len = Vec3::new(c.position.x, 0.0, c.position.z).length();
        assert!((len - config.detour_length).abs() < 1e-4);
        assert_eq!(c.position.y, 0.0);
    }
}

#[test]
fn ties_go_to_the_earlier_angle() {
    let config = MovementConfig::default();
    let (detour, best) = pick_detour(Vec3::ZERO, Vec3::new(6.0, 0.0, 0.0), &[], &config).expect("detour");

    // +30 and -30 score the same on open ground; +30 comes first.
    assert_eq!(best.angle_degrees, 30.0);
    assert!(best.position.z > 0.0);
    assert_eq!(detour.target(), best.position);
    assert!((detour.remaining() - config.detour_lifetime).abs() < 1e-6);
}

#[test]
fn blocked_side_loses_to_open_side() {
    let config = MovementConfig::default();
    // Box covering the +Z side of the seeker.
    let boxes = [crate_box(Vec3::new(-3.0, 0.0, 0.5), Vec3::new(3.0, 2.0, 3.0))];
    let (_, best) = pick_detour(Vec3::ZERO, Vec3::new(6.0, 0.0, 0.0), &boxes, &config).expect("detour");

    assert!(best.position.z < 0.0);
    assert_eq!(best.angle_degrees, -30.0);
}

#[test]
fn nothing_committed_at_or_below_floor() {
    let config = MovementConfig {
        detour_floor: 500.0,
        ..MovementConfig::default()
    };
    assert!(pick_detour(Vec3::ZERO, Vec3::new(6.0, 0.0, 0.0), &[], &config).is_none());
}

#[test]
fn degenerate_goal_direction_yields_no_detour() {
    let config = MovementConfig::default();
    let here = Vec3::new(3.0, 0.0, 3.0);
    assert!(score_candidates(here, here + Vec3::Y, &[], &config).is_empty());
    assert!(pick_detour(here, here, &[], &config).is_none());
}

#[test]
fn detour_lifetime_counts_down_and_expires() {
    assert!(Detour::new(Vec3::ZERO, 0.0).is_none());
    assert!(Detour::new(Vec3::ZERO, f32::NAN).is_none());

    let mut detour = Detour::new(Vec3::ONE, 0.5).expect("positive lifetime");
    assert!(detour.tick(0.2));
    assert!((detour.remaining() - 0.3).abs() < 1e-6);
    assert!(!detour.tick(0.3));
}
