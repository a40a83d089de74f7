//! 응력 단위 레지스트리/정규화 회귀 테스트.
use sigmap_toolbox::conversion::{self, ConversionError};
use sigmap_toolbox::units::{convert_stress, from_kpa, to_kpa, StressUnit};

#[test]
fn round_trip_all_units() {
    let values = [0.001, 0.75, 1.0, 42.0, 1234.5, 9.87e6];
    for unit in StressUnit::ALL {
        for &v in &values {
            let back = from_kpa(to_kpa(v, unit), unit);
            assert!(
                ((back - v) / v).abs() < 1e-9,
                "round trip failed: {v} {:?} -> {back}",
                unit
            );
        }
    }
}

#[test]
fn canonical_identity() {
    for &v in &[0.0, 1.0, -3.5, 1e8] {
        assert_eq!(to_kpa(v, StressUnit::CANONICAL), v);
        assert_eq!(from_kpa(v, StressUnit::CANONICAL), v);
    }
}

#[test]
fn zero_maps_to_zero_in_every_unit() {
    for unit in StressUnit::ALL {
        assert_eq!(to_kpa(0.0, unit), 0.0);
        assert_eq!(from_kpa(0.0, unit), 0.0);
    }
}

#[test]
fn psi_factor_matches_reference() {
    // 1 psi = 6.894757293168361 kPa
    assert!((to_kpa(1.0, StressUnit::Psi) - 6.894757293168361).abs() < 1e-12);
    // 1 tsf = 2000 psf
    let tsf = to_kpa(1.0, StressUnit::Tsf);
    let psf = to_kpa(1.0, StressUnit::Psf);
    assert!((tsf / psf - 2000.0).abs() < 1e-6);
}

#[test]
fn convert_between_units() {
    // 1 MPa = 10 bar
    let bar = convert_stress(1.0, StressUnit::MegaPascal, StressUnit::Bar);
    assert!((bar - 10.0).abs() < 1e-9);
}

#[test]
fn unknown_unit_string_is_rejected() {
    match conversion::parse_stress_unit("furlong") {
        Err(ConversionError::UnknownUnit(s)) => assert_eq!(s, "furlong"),
        other => panic!("expected UnknownUnit, got {other:?}"),
    }
    assert!(conversion::convert(1.0, "kPa", "psi").is_ok());
    assert!(conversion::convert(1.0, "kPa", "mmHg").is_err());
}

#[test]
fn normalize_series_converts_only_with_factor() {
    let raw = [1.0, 2.5, 10.886];
    let out = conversion::normalize_series(&raw, StressUnit::Psi).expect("normalize");
    assert_eq!(out.len(), raw.len());
    for (r, o) in raw.iter().zip(&out) {
        assert!((o - r * 6.894757293168361).abs() < 1e-9);
    }
}

#[test]
fn normalize_series_reports_non_finite_index() {
    let raw = [1.0, f64::NAN, 3.0];
    match conversion::normalize_series(&raw, StressUnit::KiloPascal) {
        Err(ConversionError::NonFinite { index }) => assert_eq!(index, 1),
        other => panic!("expected NonFinite, got {other:?}"),
    }
    assert!(conversion::normalize_scalar(f64::INFINITY, StressUnit::Bar).is_err());
}
