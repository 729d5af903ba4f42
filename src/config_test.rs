use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn from_lookup_defaults_to_hard_white_eraser() {
    let cfg = EraserConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, EraserConfig::default());
    assert_eq!(cfg.block_size, 20);
    assert!(cfg.is_hard());
    assert_eq!(cfg.color, Rgba([255, 255, 255, 255]));
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = EraserConfig::from_lookup(lookup_from(&[
        ("ERASER_SIZE", " 32 "),
        ("ERASER_SOFTNESS", "0.25"),
        ("ERASER_COLOR", "#ff0000"),
    ]))
    .unwrap();
    assert_eq!(cfg.block_size, 32);
    assert_eq!(cfg.softness, 0.25);
    assert!(!cfg.is_hard());
    assert_eq!(cfg.color, Rgba([255, 0, 0, 255]));
}

#[test]
fn from_lookup_rejects_unparsable_size() {
    let err = EraserConfig::from_lookup(lookup_from(&[("ERASER_SIZE", "-5")])).unwrap_err();
    assert_eq!(err, ConfigError::Parse { var: "ERASER_SIZE", value: "-5".into() });
}

#[test]
fn from_lookup_rejects_unknown_color() {
    let err = EraserConfig::from_lookup(lookup_from(&[("ERASER_COLOR", "not-a-color")])).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { var: "ERASER_COLOR", .. }));
}

#[test]
fn from_lookup_rejects_zero_size_and_bad_softness() {
    let err = EraserConfig::from_lookup(lookup_from(&[("ERASER_SIZE", "0")])).unwrap_err();
    assert_eq!(err, ConfigError::ZeroBlockSize);

    let err = EraserConfig::from_lookup(lookup_from(&[("ERASER_SOFTNESS", "1.5")])).unwrap_err();
    assert_eq!(err, ConfigError::SoftnessOutOfRange(1.5));
}

#[test]
fn validate_rejects_block_larger_than_surface() {
    let cfg = EraserConfig { block_size: 64, ..EraserConfig::default() };
    assert_eq!(
        cfg.validate(100, 50),
        Err(ConfigError::BlockExceedsSurface { size: 64, width: 100, height: 50 })
    );
    assert!(cfg.validate(64, 64).is_ok());
}

#[test]
fn validate_rejects_nan_softness() {
    let cfg = EraserConfig { softness: f32::NAN, ..EraserConfig::default() };
    assert!(matches!(cfg.validate(100, 100), Err(ConfigError::SoftnessOutOfRange(_))));
}
