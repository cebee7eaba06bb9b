mod support;

use chainmail::{
    Chainmail, Config, ConfigError,
    float_types::{INCH, Real},
};

use crate::support::init_tracing;

#[test]
fn defaults_validate() {
    init_tracing();
    let cfg = Config::default();
    assert_eq!(cfg.validate(), Ok(()));
    assert_eq!((cfg.cols, cfg.rows, cfg.stacks), (3, 3, 3));
    assert_eq!(cfg.ring_id, 10.0);
    assert_eq!(cfg.wire_d, 2.0);
    assert!(cfg.add_base_plate_and_supports && cfg.add_side_walls && cfg.add_support_joiners);
}

#[test]
fn non_finite_values_are_rejected_first() {
    let cfg = Config { ring_id: Real::NAN, wire_d: -1.0, ..Config::default() };
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::NonFinite { field: "ring_id", .. })
    ));

    let cfg = Config { margin: Real::INFINITY, ..Config::default() };
    assert_eq!(
        cfg.validate(),
        Err(ConfigError::NonFinite { field: "margin", value: Real::INFINITY })
    );
}

#[test]
fn ring_and_beam_sizes_must_be_positive() {
    for (cfg, field) in [
        (Config { ring_id: 0.0, ..Config::default() }, "ring_id"),
        (Config { wire_d: -2.0, ..Config::default() }, "wire_d"),
        (Config { pillar_diameter: 0.0, ..Config::default() }, "pillar_diameter"),
        (Config { brace_diameter: 0.0, ..Config::default() }, "brace_diameter"),
    ] {
        match cfg.validate() {
            Err(ConfigError::NonPositive { field: got, .. }) => assert_eq!(got, field),
            other => panic!("expected NonPositive for {field}, got {other:?}"),
        }
    }
}

#[test]
fn gaps_and_thicknesses_may_be_zero_but_not_negative() {
    let zero = Config {
        plate_gap: 0.0,
        margin: 0.0,
        wall_thickness: 0.0,
        joiner_height: 0.0,
        ..Config::default()
    };
    assert_eq!(zero.validate(), Ok(()));

    let cfg = Config { plate_gap: -0.1, ..Config::default() };
    assert_eq!(
        cfg.validate(),
        Err(ConfigError::Negative { field: "plate_gap", value: -0.1 })
    );
}

#[test]
fn error_messages_name_the_field() {
    let err = Config { wire_d: 0.0, ..Config::default() }.validate().unwrap_err();
    assert_eq!(err.to_string(), "(NonPositive) `wire_d` must be greater than zero, got 0");

    let err = Config { wall_extension: -1.5, ..Config::default() }
        .validate()
        .unwrap_err();
    assert_eq!(err.to_string(), "(Negative) `wall_extension` must not be negative, got -1.5");
}

#[test]
fn grid_counts_are_not_validated() {
    let cfg = Config::default().with_grid(-1, 0, 5);
    assert_eq!(cfg.validate(), Ok(()));
    assert!(Chainmail::new(cfg).layout().is_empty());
}

#[test]
fn thick_walls_still_validate() {
    init_tracing();
    let cfg = Config { wall_thickness: 5.0, margin: 1.0, ..Config::default() };
    assert_eq!(cfg.validate(), Ok(()));
}

#[test]
fn partial_json_falls_back_to_defaults() {
    let json = r#"{ "cols": 5, "add_side_walls": false, "plate_gap": 0.25 }"#;
    let cfg: Config = serde_json::from_str(json).expect("valid config json");

    assert_eq!(cfg.cols, 5);
    assert!(!cfg.add_side_walls);
    assert_eq!(cfg.plate_gap, 0.25);
    assert_eq!(
        cfg,
        Config { cols: 5, add_side_walls: false, plate_gap: 0.25, ..Config::default() }
    );
}

#[test]
fn json_round_trip_preserves_every_field() {
    let cfg = Config {
        ring_id: 0.25 * INCH,
        wire_d: 0.0625 * INCH,
        add_support_joiners: false,
        ..Config::lattice_only().with_grid(4, 2, 6)
    };
    let text = serde_json::to_string(&cfg).expect("serializable");
    let back: Config = serde_json::from_str(&text).expect("deserializable");
    assert_eq!(back, cfg);
}

#[test]
fn lattice_only_switches_off_every_family() {
    let cfg = Config::lattice_only();
    assert!(!cfg.add_base_plate_and_supports);
    assert!(!cfg.add_side_walls);
    assert!(!cfg.add_support_joiners);
    assert_eq!(cfg.ring_id, Config::default().ring_id);
}
