//! 산정법 회귀 테스트. 항복응력 80 kPa 부근에서 꺾이는 합성 시료를 쓴다.
use sigmap_toolbox::data::OedometerData;
use sigmap_toolbox::dispatch::{self, AnalysisMethod};
use sigmap_toolbox::methods::{Bilog, Boone, MethodError, SigmaPModel};

/// e-log σ'v 평면에서 σ'p = 80 kPa를 기준으로 기울기가 0.05 → 0.45로
/// 꺾이는 이상적인 압밀곡선.
fn synthetic_data(sigma_v_kpa: f64) -> OedometerData {
    let stress: Vec<f64> = vec![10.0, 20.0, 40.0, 80.0, 160.0, 320.0, 640.0, 1280.0];
    let e0 = 1.10;
    let yield_x = 80f64.log10();
    let void_ratio: Vec<f64> = stress
        .iter()
        .map(|s| {
            let x = s.log10();
            if x <= yield_x {
                e0 - 0.05 * (x - 1.0)
            } else {
                (e0 - 0.05 * (yield_x - 1.0)) - 0.45 * (x - yield_x)
            }
        })
        .collect();
    let strain: Vec<f64> = void_ratio.iter().map(|e| (e0 - e) / (1.0 + e0)).collect();
    OedometerData::new(stress, strain, void_ratio, sigma_v_kpa)
}

fn run_expecting(method: AnalysisMethod, lo: f64, hi: f64) {
    let data = synthetic_data(40.0);
    let outcome = dispatch::run(method, &data).expect("method run");
    let sigma_p = outcome.sigma_p_kpa.expect("scalar result");
    assert!(
        sigma_p > lo && sigma_p < hi,
        "{:?}: sigma_p = {sigma_p} out of [{lo}, {hi}]",
        method
    );
    let axes = &outcome.figure.axes[0];
    assert!(!axes.traces.is_empty());
    let legend = axes.legend.as_ref().expect("legend");
    assert!(!legend.entries.is_empty());
}

#[test]
fn casagrande_finds_yield_region() {
    run_expecting(AnalysisMethod::Casagrande, 10.0, 1000.0);
}

#[test]
fn pacheco_silva_close_to_yield() {
    run_expecting(AnalysisMethod::PachecoSilva, 60.0, 100.0);
}

#[test]
fn boone_close_to_yield() {
    run_expecting(AnalysisMethod::Boone, 50.0, 90.0);
}

#[test]
fn bilog_family_close_to_yield() {
    run_expecting(AnalysisMethod::Butterfield, 50.0, 130.0);
    run_expecting(AnalysisMethod::Oikawa, 50.0, 130.0);
    run_expecting(AnalysisMethod::Onitsuka, 50.0, 130.0);
}

#[test]
fn energy_family_close_to_yield() {
    run_expecting(AnalysisMethod::WangAndFrost, 50.0, 120.0);
    run_expecting(AnalysisMethod::BeckerEtAl, 60.0, 100.0);
}

#[test]
fn boone_requires_in_situ_stress() {
    let data = synthetic_data(0.0);
    let mut model = Boone::new();
    match model.get_sigma_p(&data) {
        Err(MethodError::MissingInSitu) => {}
        other => panic!("expected MissingInSitu, got {other:?}"),
    }
}

#[test]
fn bilog_rejects_invalid_option() {
    let data = synthetic_data(40.0);
    let mut model = Bilog::new(4);
    match model.get_sigma_p(&data) {
        Err(MethodError::InvalidOption(4)) => {}
        other => panic!("expected InvalidOption, got {other:?}"),
    }
}

#[test]
fn non_positive_stress_is_rejected_on_log_methods() {
    let data = OedometerData::new(
        vec![0.0, 10.0, 20.0, 40.0, 80.0],
        vec![0.0, 0.01, 0.02, 0.03, 0.04],
        vec![1.1, 1.09, 1.08, 1.0, 0.9],
        0.0,
    );
    match dispatch::run(AnalysisMethod::PachecoSilva, &data) {
        Err(MethodError::NonPositiveStress { row: 0 }) => {}
        other => panic!("expected NonPositiveStress, got {other:?}"),
    }
}

#[test]
fn repeated_dispatch_recomputes_identically() {
    let data = synthetic_data(40.0);
    let a = dispatch::run(AnalysisMethod::BeckerEtAl, &data).expect("first run");
    let b = dispatch::run(AnalysisMethod::BeckerEtAl, &data).expect("second run");
    assert_eq!(a, b);
}

#[test]
fn too_few_points_is_reported() {
    let data = OedometerData::new(
        vec![10.0, 20.0],
        vec![0.0, 0.01],
        vec![1.1, 1.0],
        0.0,
    );
    match dispatch::run(AnalysisMethod::Casagrande, &data) {
        Err(MethodError::TooFewPoints { .. }) => {}
        other => panic!("expected TooFewPoints, got {other:?}"),
    }
}
