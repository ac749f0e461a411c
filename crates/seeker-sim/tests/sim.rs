use std::io::Write;
use std::path::PathBuf;

use glam::Vec3;
use seeker_core::{Aabb, SeekerState, SeekerWorldMut, SeekerWorldView};
use seeker_sim::{
    load_config, load_document, load_level, DoorSpec, JsonLinesSink, LevelError, LevelFile, ScriptedTarget,
    Simulation, SimWorld, TargetScript, DOOR_OPEN_ANGLE,
};
use seeker_tools::{TraceEvent, TraceKind, TraceSink};

fn house_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("levels/house.yaml")
}

fn one_door_level() -> LevelFile {
    LevelFile {
        doors: vec![DoorSpec {
            name: "Door_000".into(),
            position: Vec3::new(0.0, 1.0, 0.0),
            is_open: false,
            blocker: Some(Aabb::new(Vec3::new(-0.8, 0.0, -0.05), Vec3::new(0.8, 2.4, 0.05))),
        }],
        ..LevelFile::default()
    }
}

#[test]
fn house_level_parses() {
    let level = load_level(&house_path()).expect("house.yaml loads");
    assert_eq!(level.name, "house");
    assert_eq!(level.doors.len(), 1);
    assert!(level.colliders.iter().any(|c| c.is_ceiling));
    assert!(level.doors[0].blocker.is_some());
    assert_eq!(level.target.waypoints.len(), 4);
}

#[test]
fn door_swings_open_and_drops_its_blocker() {
    let mut world = SimWorld::from_level(&one_door_level());
    assert_eq!(world.colliders().len(), 1);

    world.open_door(0);
    world.step(0.1);
    assert!((world.doors()[0].angle - -0.25).abs() < 1e-6);
    assert_eq!(world.colliders().len(), 1);

    for _ in 0..20 {
        world.step(0.1);
    }
    assert_eq!(world.doors()[0].angle, DOOR_OPEN_ANGLE);
    assert!(world.colliders().is_empty());
    assert_eq!(world.doors_opened(), 1);
}

#[test]
fn blocker_is_not_line_of_sight_geometry() {
    let mut world = SimWorld::from_level(&one_door_level());
    assert_eq!(world.level_geometry().map(<[_]>::len), Some(0));

    world.set_loaded(false);
    assert!(world.level_geometry().is_none());
}

#[test]
fn scripted_target_appears_then_walks_and_loops() {
    let mut target = ScriptedTarget::new(TargetScript {
        waypoints: vec![Vec3::new(0.0, 1.6, 0.0), Vec3::new(2.0, 1.6, 0.0)],
        speed: 1.0,
        looping: true,
        appear_after: 1,
    });

    target.advance(0.5);
    assert_eq!(target.position(), None);
    target.advance(0.5);
    assert_eq!(target.position(), Some(Vec3::new(0.0, 1.6, 0.0)));
    target.advance(0.5);
    target.advance(1.0);
    assert!((target.position().unwrap().x - 1.5).abs() < 1e-5);
    target.advance(1.0);
    assert!((target.position().unwrap().x - 1.5).abs() < 1e-5, "bounced back after the loop");
}

#[test]
fn non_looping_target_stops_at_the_end() {
    let mut target = ScriptedTarget::new(TargetScript {
        waypoints: vec![Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0)],
        speed: 10.0,
        looping: false,
        appear_after: 0,
    });
    for _ in 0..5 {
        target.advance(1.0);
    }
    assert_eq!(target.position(), Some(Vec3::new(0.0, 0.0, 1.0)));
}

#[test]
fn unknown_extension_is_rejected() {
    let err = load_document::<LevelFile>(&PathBuf::from("level.toml")).unwrap_err();
    assert!(matches!(err, LevelError::UnknownFormat { .. }));
}

#[test]
fn missing_file_reports_io_error() {
    let err = load_level(&PathBuf::from("does/not/exist.yaml")).unwrap_err();
    assert!(matches!(err, LevelError::Io { .. }));
}

#[test]
fn partial_json_config_keeps_defaults() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().expect("tempfile");
    write!(file, r#"{{ "perception": {{ "view_distance": 20.0 }} }}"#).expect("write");

    let config = load_config(file.path()).expect("config loads");
    assert_eq!(config.perception.view_distance, 20.0);
    assert_eq!(config.perception.fov_degrees, 60.0);
    assert_eq!(config.behavior.search_point_count, 10);
}

#[test]
fn invalid_yaml_config_is_rejected() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().expect("tempfile");
    writeln!(file, "movement:\n  radius: -1.0").expect("write");

    let err = load_config(file.path()).unwrap_err();
    assert!(matches!(err, LevelError::Config(_)));
}

#[test]
fn house_run_stays_on_ground_and_finite() {
    let level = load_level(&house_path()).expect("house.yaml loads");
    let mut sim = Simulation::new(&level, Default::default()).expect("sim");

    assert_eq!(sim.agent().position(), Vec3::new(0.0, 0.0, -5.0));
    assert_eq!(sim.agent().route().len(), 4);

    let reports = sim.run(1_200, 1.0 / 60.0);
    assert_eq!(reports.len(), 1_200);
    assert_eq!(sim.tick(), 1_200);
    for r in &reports {
        assert!(r.position.is_finite());
        assert_eq!(r.position.y, 0.0);
    }
    assert_eq!(reports[0].state, SeekerState::Patrol);
}

#[test]
fn house_runs_are_deterministic() {
    let level = load_level(&house_path()).expect("house.yaml loads");
    let run = || {
        let mut sim = Simulation::new(&level, Default::default()).expect("sim");
        sim.run(900, 1.0 / 60.0)
    };
    assert_eq!(run(), run());
}

#[test]
fn json_sink_writes_one_object_per_line() {
    let mut sink = JsonLinesSink::new(Vec::new());
    sink.emit(TraceEvent::new(
        3,
        Default::default(),
        TraceKind::StateChanged {
            from: SeekerState::Patrol,
            to: SeekerState::Chase,
        },
    ));
    sink.emit(TraceEvent::new(4, Default::default(), TraceKind::DoorOpened { index: 0 }));

    let text = String::from_utf8(sink.into_inner()).expect("utf8");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);

    let first: serde_json::Value = serde_json::from_str(lines[0]).expect("json");
    assert_eq!(first["kind"], "state_changed");
    assert_eq!(first["to"], "CHASE");
    let second: TraceEvent = serde_json::from_str(lines[1]).expect("event");
    assert_eq!(second.kind, TraceKind::DoorOpened { index: 0 });
}
